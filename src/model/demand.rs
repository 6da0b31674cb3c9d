// src/model/demand.rs

use crate::error::ForecastError;
use crate::model::inventory::Inventory;
use crate::model::price::Price;
use std::collections::BTreeMap;

/// Unconstrained demand per price tier for one day, cheapest tier first.
pub type DemandRow = BTreeMap<Price, u32>;

/// Unconstrained demand per day before departure.
///
/// Days iterate furthest-from-departure first (ascending day_x, ending at 0),
/// and each row iterates cheapest tier first. Both orders come from the
/// underlying `BTreeMap`s, so callers cannot hand the engine an out-of-order
/// table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemandTable {
    days: BTreeMap<i32, DemandRow>,
}

impl DemandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the demand for one `(day_x, price)` cell, replacing any
    /// previous value.
    pub fn set(&mut self, day_x: i32, price: Price, demand: u32) -> Result<(), ForecastError> {
        if day_x > 0 {
            return Err(ForecastError::InvalidDayX(day_x));
        }
        self.days.entry(day_x).or_default().insert(price, demand);
        Ok(())
    }

    /// Replaces the whole row of a day.
    pub fn insert_row<I>(&mut self, day_x: i32, row: I) -> Result<(), ForecastError>
    where
        I: IntoIterator<Item = (f64, u32)>,
    {
        if day_x > 0 {
            return Err(ForecastError::InvalidDayX(day_x));
        }
        let mut parsed = DemandRow::new();
        for (price, demand) in row {
            parsed.insert(Price::new(price)?, demand);
        }
        self.days.insert(day_x, parsed);
        Ok(())
    }

    pub fn row(&self, day_x: i32) -> Option<&DemandRow> {
        self.days.get(&day_x)
    }

    pub fn days(&self) -> impl Iterator<Item = i32> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &DemandRow)> + '_ {
        self.days.iter().map(|(day_x, row)| (*day_x, row))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total unconstrained demand over every day and tier.
    pub fn total_demand(&self) -> u64 {
        self.days
            .values()
            .flat_map(|row| row.values())
            .map(|&d| d as u64)
            .sum()
    }

    /// Checks that every price the table asks for has an inventory entry.
    /// Reports the first offending cell, furthest day first.
    pub fn validate_against(&self, inventory: &Inventory) -> Result<(), ForecastError> {
        for (day_x, row) in self.iter() {
            if let Some(price) = row.keys().find(|price| !inventory.contains(**price)) {
                return Err(ForecastError::ConfigurationMismatch {
                    day_x: Some(day_x),
                    price: *price,
                });
            }
        }
        Ok(())
    }
}
