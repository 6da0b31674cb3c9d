use booking_forecast::io::{demand, inventory, reporting};
use booking_forecast::model::price::Price;
use booking_forecast::{BookingsReport, ForecastConfig, Sale};
use std::error::Error;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    // 1. SETUP CONFIGURATION
    let config = ForecastConfig::from_env();
    info!("sale ordering: {:?}", config.sale_ordering);

    // 2. LOAD INVENTORY AND DEMAND
    let inventory = match &config.inventory_csv {
        Some(path) => inventory::load_inventory_csv(path)?,
        None => inventory::worked_example_inventory()?,
    };
    let prices: Vec<Price> = inventory.prices().collect();

    let demand_source = (
        &config.demand_csv,
        config.constant_demand,
        config.synthetic_demand,
    );
    let demand_table = match demand_source {
        (Some(path), _, _) => demand::load_demand_csv(path)?,
        (None, Some(value), _) => {
            info!("generating constant demand of {value} per tier");
            demand::generate_constant_demand(-7..=0, &prices, value)?
        }
        (None, None, Some((mean, std_dev))) => {
            info!("generating demand with mean {mean} and std dev {std_dev}");
            let mut rng = rand::thread_rng();
            demand::generate_normal_demand(-7..=0, &prices, mean, std_dev, &mut rng)?
        }
        (None, None, None) => demand::worked_example_demand()?,
    };
    info!(
        "{} price tiers, {} seats, {} days of demand ({} requests)",
        inventory.len(),
        inventory.total_seats(),
        demand_table.len(),
        demand_table.total_demand()
    );

    // 3. SALES OF THE OD (ply -> lpd of service 7601)
    let sales = vec![
        Sale::new(-30, 20.0)?,
        Sale::new(-25, 30.0)?,
        Sale::new(-20, 40.0)?,
        Sale::new(-20, 40.0)?,
    ];

    // 4. RUN
    let report = BookingsReport::build(&sales, inventory, demand_table, &config)?;

    for point in &report.history {
        info!(
            "history  D{}: {} bookings, {:.2} revenue",
            point.day_x, point.bookings, point.revenue
        );
    }
    for point in &report.forecast.timeline {
        info!(
            "forecast D{}: {} bookings, {:.2} revenue",
            point.day_x, point.bookings, point.revenue
        );
    }
    info!(
        "forecast sells {} seats for {:.2} (load factor {:.1}%)",
        report.forecast.seats_sold(),
        report.forecast.forecast_revenue(),
        report.forecast.load_factor() * 100.0
    );

    // 5. EXPORT RESULTS
    reporting::save_report(&config.report_path, &report)?;
    if let Some(path) = &config.allocation_log_path {
        reporting::save_allocation_log(path, &report.forecast.allocation_log())?;
    }

    Ok(())
}
