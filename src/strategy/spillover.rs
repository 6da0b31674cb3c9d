// src/strategy/spillover.rs

use crate::error::ForecastError;
use crate::model::demand::DemandRow;
use crate::model::inventory::Inventory;
use crate::strategy::traits::{AllocationPolicy, DayAllocation};
use tracing::debug;

/// Greedy cheapest-first allocation with spillover.
///
/// Tiers are served from the cheapest up. A tier that can cover its demand
/// sells it and closes the day. A tier that runs dry sells what it has, and
/// that quantity is taken off the demand of every costlier tier of the same
/// day before moving on.
///
/// A tier with no demand and no seats still counts as covered, so it closes
/// the day even when costlier tiers have demand left.
#[derive(Debug, Clone, Default)]
pub struct SpilloverPolicy;

impl SpilloverPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl AllocationPolicy for SpilloverPolicy {
    fn allocate(
        &mut self,
        day_x: i32,
        demand: &DemandRow,
        inventory: &mut Inventory,
    ) -> Result<DayAllocation, ForecastError> {
        let prices: Vec<_> = demand.keys().copied().collect();
        let mut requested: Vec<u32> = demand.values().copied().collect();
        let mut day = DayAllocation::new(day_x);

        for (index, &price) in prices.iter().enumerate() {
            let fill = inventory
                .fill(price, requested[index])
                .map_err(|err| match err {
                    ForecastError::ConfigurationMismatch { price, .. } => {
                        ForecastError::ConfigurationMismatch {
                            day_x: Some(day_x),
                            price,
                        }
                    }
                    other => other,
                })?;
            day.record(fill);

            if fill.fulfilled() {
                break;
            }

            let clamped = spill_over(&mut requested, index, fill.sold);
            if clamped > 0 {
                debug!(
                    day_x,
                    price = price.value(),
                    clamped,
                    "spillover exceeded demand of costlier tiers, clamped to zero"
                );
            }
        }

        debug!(
            day_x,
            bookings = day.bookings,
            revenue = day.revenue,
            tiers = day.fills.len(),
            "allocated day"
        );
        Ok(day)
    }
}

/// Takes `sold` units off the demand of every tier after `index`, stopping
/// at zero. Returns how many tiers had to be clamped.
pub(crate) fn spill_over(requested: &mut [u32], index: usize, sold: u32) -> usize {
    let mut clamped = 0;
    for demand in requested.iter_mut().skip(index + 1) {
        if *demand < sold {
            clamped += 1;
        }
        *demand = demand.saturating_sub(sold);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::price::Price;

    fn p(value: f64) -> Price {
        Price::new(value).unwrap()
    }

    fn row(cells: &[(f64, u32)]) -> DemandRow {
        cells.iter().map(|&(price, d)| (p(price), d)).collect()
    }

    fn worked_inventory() -> Inventory {
        Inventory::from_pairs([(10.0, 0), (20.0, 2), (30.0, 5), (40.0, 5), (50.0, 5)]).unwrap()
    }

    #[test]
    fn spill_over_reduces_every_later_tier_by_sold() {
        let mut requested = vec![5, 4, 3, 7];
        let clamped = spill_over(&mut requested, 1, 2);
        assert_eq!(requested, vec![5, 4, 1, 5]);
        assert_eq!(clamped, 0);
    }

    #[test]
    fn spill_over_clamps_at_zero() {
        let mut requested = vec![4, 3, 1];
        let clamped = spill_over(&mut requested, 0, 2);
        assert_eq!(requested, vec![4, 1, 0]);
        assert_eq!(clamped, 1);
    }

    #[test]
    fn fulfilled_cheapest_tier_stops_the_day() {
        let mut inventory = worked_inventory();
        let mut policy = SpilloverPolicy::new();
        let day = policy
            .allocate(-5, &row(&[(30.0, 3), (40.0, 2), (50.0, 1)]), &mut inventory)
            .unwrap();
        assert_eq!(day.bookings, 3);
        assert_eq!(day.revenue, 90.0);
        assert_eq!(day.fills.len(), 1);
        assert_eq!(inventory.remaining(p(30.0)), Some(2));
        assert_eq!(inventory.remaining(p(40.0)), Some(5));
        assert_eq!(inventory.remaining(p(50.0)), Some(5));
    }

    #[test]
    fn sold_out_tier_spills_into_every_costlier_tier() {
        // 20 sells its last seat; 30, 40 and 50 each lose one unit of demand.
        let mut inventory =
            Inventory::from_pairs([(20.0, 1), (30.0, 5), (40.0, 5), (50.0, 5)]).unwrap();
        let mut policy = SpilloverPolicy::new();
        let day = policy
            .allocate(-6, &row(&[(20.0, 2), (30.0, 3), (40.0, 2), (50.0, 2)]), &mut inventory)
            .unwrap();
        let requested: Vec<u32> = day.fills.iter().map(|f| f.requested).collect();
        assert_eq!(requested, vec![2, 2]);
        assert_eq!(day.bookings, 3);
        assert_eq!(day.revenue, 20.0 + 60.0);
        assert_eq!(inventory.remaining(p(40.0)), Some(5));
    }

    #[test]
    fn spillover_reaching_zero_closes_the_day() {
        let mut inventory = worked_inventory();
        inventory.set(p(20.0), 1);
        let mut policy = SpilloverPolicy::new();
        let day = policy
            .allocate(
                -6,
                &row(&[(10.0, 5), (20.0, 2), (30.0, 1), (40.0, 1), (50.0, 1)]),
                &mut inventory,
            )
            .unwrap();
        assert_eq!(day.bookings, 1);
        assert_eq!(day.revenue, 20.0);
        assert_eq!(day.fills.len(), 3);
        assert_eq!(inventory.remaining(p(20.0)), Some(0));
        assert_eq!(inventory.remaining(p(30.0)), Some(5));
    }

    #[test]
    fn empty_tier_with_no_demand_halts_before_costlier_demand() {
        let mut inventory = Inventory::from_pairs([(10.0, 0), (20.0, 5)]).unwrap();
        let mut policy = SpilloverPolicy::new();
        let day = policy
            .allocate(-1, &row(&[(10.0, 0), (20.0, 4)]), &mut inventory)
            .unwrap();
        assert_eq!(day.bookings, 0);
        assert_eq!(day.revenue, 0.0);
        assert_eq!(day.fills.len(), 1);
        assert_eq!(inventory.remaining(p(20.0)), Some(5));
    }

    #[test]
    fn negative_spillover_is_clamped_not_sold() {
        // 30 sells 2; 50 would drop to -1 and is clamped to 0.
        let mut inventory = Inventory::from_pairs([(30.0, 2), (40.0, 0), (50.0, 5)]).unwrap();
        let mut policy = SpilloverPolicy::new();
        let day = policy
            .allocate(-4, &row(&[(30.0, 4), (40.0, 3), (50.0, 1)]), &mut inventory)
            .unwrap();
        let requested: Vec<u32> = day.fills.iter().map(|f| f.requested).collect();
        assert_eq!(requested, vec![4, 1, 0]);
        assert_eq!(day.bookings, 2);
        assert_eq!(day.revenue, 60.0);
        assert_eq!(inventory.remaining(p(50.0)), Some(5));
    }

    #[test]
    fn demand_row_is_left_untouched() {
        let mut inventory = worked_inventory();
        let demand = row(&[(10.0, 5), (20.0, 4), (30.0, 3)]);
        let before = demand.clone();
        SpilloverPolicy::new()
            .allocate(-5, &demand, &mut inventory)
            .unwrap();
        assert_eq!(demand, before);
    }

    #[test]
    fn unknown_tier_reports_the_day() {
        let mut inventory = worked_inventory();
        let err = SpilloverPolicy::new()
            .allocate(-2, &row(&[(10.0, 1), (60.0, 1)]), &mut inventory)
            .unwrap_err();
        assert_eq!(
            err,
            ForecastError::ConfigurationMismatch {
                day_x: Some(-2),
                price: p(60.0),
            }
        );
    }
}
