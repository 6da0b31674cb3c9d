// src/model/inventory.rs

use crate::error::ForecastError;
use crate::model::price::Price;
use std::collections::BTreeMap;

/// Outcome of serving one tier's demand from its seat allotment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierFill {
    pub price: Price,
    pub requested: u32,
    pub sold: u32,
    pub remaining: u32,
}

impl TierFill {
    /// Whether the whole request was served at this tier.
    pub fn fulfilled(&self) -> bool {
        self.sold == self.requested
    }

    pub fn revenue(&self) -> f64 {
        self.price.revenue(self.sold)
    }
}

/// Remaining seats per price tier. Iterates cheapest tier first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    seats: BTreeMap<Price, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory from raw `(price, seats)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ForecastError>
    where
        I: IntoIterator<Item = (f64, u32)>,
    {
        let mut inventory = Self::new();
        for (price, seats) in pairs {
            inventory.set(Price::new(price)?, seats);
        }
        Ok(inventory)
    }

    /// Sets the allotment of a tier, replacing any previous value.
    pub fn set(&mut self, price: Price, seats: u32) {
        self.seats.insert(price, seats);
    }

    pub fn remaining(&self, price: Price) -> Option<u32> {
        self.seats.get(&price).copied()
    }

    pub fn contains(&self, price: Price) -> bool {
        self.seats.contains_key(&price)
    }

    pub fn prices(&self) -> impl Iterator<Item = Price> + '_ {
        self.seats.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Price, u32)> + '_ {
        self.seats.iter().map(|(price, seats)| (*price, *seats))
    }

    pub fn total_seats(&self) -> u64 {
        self.seats.values().map(|&s| s as u64).sum()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Removes `quantity` seats from a tier.
    pub fn sell(&mut self, price: Price, quantity: u32) -> Result<(), ForecastError> {
        let remaining = self
            .seats
            .get_mut(&price)
            .ok_or(ForecastError::ConfigurationMismatch { day_x: None, price })?;
        if *remaining < quantity {
            return Err(ForecastError::Oversell {
                price,
                requested: quantity,
                remaining: *remaining,
            });
        }
        *remaining -= quantity;
        Ok(())
    }

    /// Serves `requested` units at `price`: everything if the tier can cover
    /// it, otherwise whatever is left, which empties the tier.
    pub fn fill(&mut self, price: Price, requested: u32) -> Result<TierFill, ForecastError> {
        let available = self
            .remaining(price)
            .ok_or(ForecastError::ConfigurationMismatch { day_x: None, price })?;

        let sold = if available >= requested {
            requested
        } else {
            available
        };
        self.sell(price, sold)?;

        Ok(TierFill {
            price,
            requested,
            sold,
            remaining: available - sold,
        })
    }
}
