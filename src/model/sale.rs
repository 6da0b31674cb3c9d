// src/model/sale.rs

use crate::error::ForecastError;
use crate::model::price::Price;
use serde::{Deserialize, Serialize};

/// One observed booking on an OD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub day_x: i32,
    pub price: Price,
}

impl Sale {
    pub fn new(day_x: i32, price: f64) -> Result<Self, ForecastError> {
        if day_x > 0 {
            return Err(ForecastError::InvalidDayX(day_x));
        }
        Ok(Self {
            day_x,
            price: Price::new(price)?,
        })
    }
}
