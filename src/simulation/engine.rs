// src/simulation/engine.rs

use crate::error::ForecastError;
use crate::model::demand::DemandTable;
use crate::model::inventory::Inventory;
use crate::model::sale::Sale;
use crate::model::timeline::{Timeline, TimelinePoint};
use crate::simulation::config::ForecastConfig;
use crate::simulation::history::aggregate_history;
use crate::strategy::spillover::SpilloverPolicy;
use crate::strategy::traits::{AllocationPolicy, DayAllocation};
use serde::Serialize;
use tracing::info;

// Serialize so the allocation log can go straight to CSV
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationRecord {
    pub day_x: i32,
    pub price: f64,
    pub requested: u32,
    pub sold: u32,
    pub remaining: u32,
}

/// Replays a demand table against an inventory, one day at a time, and
/// continues a historical timeline with the cumulative result.
pub struct ForecastSimulation {
    inventory: Inventory,
    demand: DemandTable,
    policy: Box<dyn AllocationPolicy>,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRun {
    pub timeline: Timeline,
    pub days: Vec<DayAllocation>,
    pub initial_inventory: Inventory,
    pub remaining_inventory: Inventory,
}

impl ForecastSimulation {
    /// Fails fast when the demand table asks for a tier the inventory lacks,
    /// before any seat is sold.
    pub fn new(
        inventory: Inventory,
        demand: DemandTable,
        policy: Box<dyn AllocationPolicy>,
    ) -> Result<Self, ForecastError> {
        demand.validate_against(&inventory)?;
        Ok(Self {
            inventory,
            demand,
            policy,
        })
    }

    pub fn with_spillover(
        inventory: Inventory,
        demand: DemandTable,
    ) -> Result<Self, ForecastError> {
        Self::new(inventory, demand, Box::new(SpilloverPolicy::new()))
    }

    /// Runs every day of the demand table, furthest day first.
    ///
    /// The first point starts from the last point of `history` (or zero when
    /// there is none); each later point adds its day's sales to the previous
    /// point. The simulation is consumed: inventory is spent by the run.
    pub fn run(mut self, history: &Timeline) -> Result<ForecastRun, ForecastError> {
        let initial_inventory = self.inventory.clone();
        let (mut bookings, mut revenue) = history
            .last()
            .map_or((0, 0.0), |point| (point.bookings, point.revenue));

        let mut timeline = Timeline::with_capacity(self.demand.len());
        let mut days = Vec::with_capacity(self.demand.len());

        for (day_x, row) in self.demand.iter() {
            let day = self.policy.allocate(day_x, row, &mut self.inventory)?;
            bookings += day.bookings;
            revenue += day.revenue;
            timeline.push(TimelinePoint::new(day_x, bookings, revenue));
            days.push(day);
        }

        if let Some(last) = timeline.last() {
            info!(
                days = timeline.len(),
                bookings = last.bookings,
                revenue = last.revenue,
                "forecast complete"
            );
        }

        Ok(ForecastRun {
            timeline,
            days,
            initial_inventory,
            remaining_inventory: self.inventory,
        })
    }
}

impl ForecastRun {
    /// Seats the forecast sold across all days.
    pub fn seats_sold(&self) -> u64 {
        self.days.iter().map(|day| day.bookings).sum()
    }

    /// Revenue the forecast added on top of the history.
    pub fn forecast_revenue(&self) -> f64 {
        self.days.iter().map(|day| day.revenue).sum()
    }

    /// Share of the starting seats sold by the forecast; zero for an empty
    /// inventory.
    pub fn load_factor(&self) -> f64 {
        let total = self.initial_inventory.total_seats();
        if total == 0 {
            return 0.0;
        }
        self.seats_sold() as f64 / total as f64
    }

    /// One record per tier visited per day, in allocation order.
    pub fn allocation_log(&self) -> Vec<AllocationRecord> {
        self.days
            .iter()
            .flat_map(|day| {
                day.fills.iter().map(move |fill| AllocationRecord {
                    day_x: day.day_x,
                    price: fill.price.value(),
                    requested: fill.requested,
                    sold: fill.sold,
                    remaining: fill.remaining,
                })
            })
            .collect()
    }
}

/// Historical and forecast timelines of one OD, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingsReport {
    pub history: Timeline,
    pub forecast: ForecastRun,
}

impl BookingsReport {
    /// Aggregates the sales, then continues them with a spillover forecast.
    pub fn build(
        sales: &[Sale],
        inventory: Inventory,
        demand: DemandTable,
        config: &ForecastConfig,
    ) -> Result<Self, ForecastError> {
        let history = aggregate_history(sales, config.sale_ordering)?;
        let forecast = ForecastSimulation::with_spillover(inventory, demand)?.run(&history)?;
        Ok(Self { history, forecast })
    }
}
