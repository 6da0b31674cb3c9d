// src/error.rs

use crate::model::price::Price;

#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// A demand row asks for a price tier the inventory does not carry.
    ConfigurationMismatch { day_x: Option<i32>, price: Price },
    /// Sales were not handed over in ascending day_x order.
    OrderingViolation { index: usize, previous: i32, found: i32 },
    InvalidPrice(f64),
    InvalidDayX(i32),
    Oversell {
        price: Price,
        requested: u32,
        remaining: u32,
    },
}

impl std::fmt::Display for ForecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::ConfigurationMismatch {
                day_x: Some(day_x),
                price,
            } => write!(
                f,
                "demand for D{day_x} references price {price} which has no inventory entry"
            ),
            ForecastError::ConfigurationMismatch { day_x: None, price } => {
                write!(f, "price {price} has no inventory entry")
            }
            ForecastError::OrderingViolation {
                index,
                previous,
                found,
            } => write!(
                f,
                "sales not ordered by day_x: sale #{index} at D{found} follows D{previous}"
            ),
            ForecastError::InvalidPrice(value) => {
                write!(f, "price must be finite and strictly positive, got {value}")
            }
            ForecastError::InvalidDayX(day_x) => {
                write!(f, "day_x must be zero or negative, got {day_x}")
            }
            ForecastError::Oversell {
                price,
                requested,
                remaining,
            } => write!(
                f,
                "cannot sell {requested} seats at {price}: only {remaining} remaining"
            ),
        }
    }
}

impl std::error::Error for ForecastError {}
