// src/model/price.rs

use crate::error::ForecastError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A price point. Always finite and strictly positive, which makes a total
/// order safe and lets prices key the inventory and demand maps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, ForecastError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ForecastError::InvalidPrice(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Revenue of selling `seats` units at this price.
    pub fn revenue(self, seats: u32) -> f64 {
        seats as f64 * self.0
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Price {}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = ForecastError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_and_non_finite() {
        assert_eq!(Price::new(0.0), Err(ForecastError::InvalidPrice(0.0)));
        assert!(Price::new(-5.0).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }

    #[test]
    fn orders_numerically() {
        let mut prices: Vec<Price> = [50.0, 10.0, 30.0, 20.5]
            .into_iter()
            .map(|p| Price::new(p).unwrap())
            .collect();
        prices.sort();
        let values: Vec<f64> = prices.into_iter().map(Price::value).collect();
        assert_eq!(values, vec![10.0, 20.5, 30.0, 50.0]);
    }

    #[test]
    fn revenue_multiplies_seats() {
        assert_eq!(Price::new(40.0).unwrap().revenue(3), 120.0);
        assert_eq!(Price::new(40.0).unwrap().revenue(0), 0.0);
    }
}
