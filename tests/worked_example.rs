use booking_forecast::io::demand::worked_example_demand;
use booking_forecast::io::inventory::worked_example_inventory;
use booking_forecast::{
    aggregate_history, BookingsReport, ForecastConfig, ForecastSimulation, Sale, SaleOrdering,
    Timeline,
};

fn ply_lpd_sales() -> Vec<Sale> {
    [(-30, 20.0), (-25, 30.0), (-20, 40.0), (-20, 40.0)]
        .into_iter()
        .map(|(day_x, price)| Sale::new(day_x, price).unwrap())
        .collect()
}

#[test]
fn history_of_ply_lpd() {
    let history = aggregate_history(&ply_lpd_sales(), SaleOrdering::Strict).unwrap();
    assert_eq!(
        history.to_triples(),
        vec![(-30, 1, 20.0), (-25, 2, 50.0), (-20, 4, 130.0)]
    );
}

#[test]
fn forecast_of_ply_lpd() {
    let report = BookingsReport::build(
        &ply_lpd_sales(),
        worked_example_inventory().unwrap(),
        worked_example_demand().unwrap(),
        &ForecastConfig::default(),
    )
    .unwrap();

    assert_eq!(
        report.forecast.timeline.to_triples(),
        vec![
            (-7, 5, 150.0),
            (-6, 6, 170.0),
            (-5, 9, 260.0),
            (-4, 12, 360.0),
            (-3, 15, 480.0),
            (-2, 18, 620.0),
            (-1, 21, 770.0),
            (0, 21, 770.0),
        ]
    );
    assert!(report.history.is_monotonic());
    assert!(report.forecast.timeline.is_monotonic());
    assert_eq!(report.forecast.seats_sold(), 17);
    assert_eq!(report.forecast.remaining_inventory.total_seats(), 0);
}

#[test]
fn forecast_without_history_starts_at_zero() {
    let run = ForecastSimulation::with_spillover(
        worked_example_inventory().unwrap(),
        worked_example_demand().unwrap(),
    )
    .unwrap()
    .run(&Timeline::new())
    .unwrap();

    let first = run.timeline.points()[0];
    assert_eq!((first.day_x, first.bookings, first.revenue), (-7, 1, 20.0));
    assert_eq!(run.timeline.last().unwrap().bookings, 17);
    assert_eq!(run.timeline.last().unwrap().revenue, 640.0);
}

#[test]
fn final_forecast_never_below_history() {
    let report = BookingsReport::build(
        &ply_lpd_sales(),
        worked_example_inventory().unwrap(),
        worked_example_demand().unwrap(),
        &ForecastConfig::default(),
    )
    .unwrap();
    let history_last = report.history.last().unwrap();
    let forecast_last = report.forecast.timeline.last().unwrap();
    assert!(forecast_last.bookings >= history_last.bookings);
    assert!(forecast_last.revenue >= history_last.revenue);
}
