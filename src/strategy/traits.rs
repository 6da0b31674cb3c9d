// src/strategy/traits.rs

use crate::error::ForecastError;
use crate::model::demand::DemandRow;
use crate::model::inventory::{Inventory, TierFill};
use std::fmt::Debug;

/// What one day of allocation sold, tier by tier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayAllocation {
    pub day_x: i32,
    pub bookings: u64,
    pub revenue: f64,
    /// Tiers visited this day, cheapest first. Tiers after the one that
    /// ended the day are not listed.
    pub fills: Vec<TierFill>,
}

impl DayAllocation {
    pub fn new(day_x: i32) -> Self {
        Self {
            day_x,
            ..Self::default()
        }
    }

    pub fn record(&mut self, fill: TierFill) {
        self.bookings += u64::from(fill.sold);
        self.revenue += fill.revenue();
        self.fills.push(fill);
    }
}

/// Decides how one day's unconstrained demand turns into sales against the
/// remaining inventory.
///
/// Implementations mutate `inventory` in place; the row itself is read-only
/// so other days never see this day's adjustments.
pub trait AllocationPolicy: Debug {
    fn allocate(
        &mut self,
        day_x: i32,
        demand: &DemandRow,
        inventory: &mut Inventory,
    ) -> Result<DayAllocation, ForecastError>;
}
