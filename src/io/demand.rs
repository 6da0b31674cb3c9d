// src/io/demand.rs

use crate::model::demand::DemandTable;
use crate::model::price::Price;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::Deserialize;
use std::error::Error;
use std::io::Read;
use std::ops::RangeInclusive;
use std::path::Path;

/// One `day_x,price,demand` line of a demand CSV.
#[derive(Debug, Deserialize)]
struct DemandCell {
    day_x: i32,
    price: f64,
    demand: u32,
}

/// The eight-day demand curve used by the bundled example run.
pub fn worked_example_demand() -> Result<DemandTable, Box<dyn Error>> {
    let rows: [(i32, [u32; 5]); 8] = [
        (-7, [5, 1, 0, 0, 0]),
        (-6, [5, 2, 1, 1, 1]),
        (-5, [5, 4, 3, 2, 1]),
        (-4, [5, 5, 4, 3, 1]),
        (-3, [5, 5, 5, 3, 2]),
        (-2, [5, 5, 5, 4, 3]),
        (-1, [5, 5, 5, 5, 4]),
        (0, [5, 5, 5, 5, 5]),
    ];
    let prices = [10.0, 20.0, 30.0, 40.0, 50.0];

    let mut table = DemandTable::new();
    for (day_x, demand) in rows {
        table.insert_row(day_x, prices.into_iter().zip(demand))?;
    }
    Ok(table)
}

/// Generates a table where every day asks for the same amount at every tier.
/// Useful for checking how fast a fare structure sells out.
pub fn generate_constant_demand(
    days: RangeInclusive<i32>,
    prices: &[Price],
    value: u32,
) -> Result<DemandTable, Box<dyn Error>> {
    let mut table = DemandTable::new();
    for day_x in days {
        for price in prices {
            table.set(day_x, *price, value)?;
        }
    }
    Ok(table)
}

/// Generates a table whose cells are drawn from a Normal distribution.
///
/// # Arguments
/// * `days` - day_x horizon, e.g. `-14..=0`.
/// * `prices` - tiers to fill for every day.
/// * `mean` - average demand per cell.
/// * `std_dev` - volatility of the demand per cell.
/// * `rng` - source of randomness, seed it for reproducible runs.
pub fn generate_normal_demand<R: Rng + ?Sized>(
    days: RangeInclusive<i32>,
    prices: &[Price],
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> Result<DemandTable, Box<dyn Error>> {
    let normal = Normal::new(mean, std_dev)?;

    let mut table = DemandTable::new();
    for day_x in days {
        for price in prices {
            // Round, and clamp negatives to 0: demand cannot be negative.
            let sample = normal.sample(rng).round();
            let cell = if sample < 0.0 { 0 } else { sample as u32 };
            table.set(day_x, *price, cell)?;
        }
    }
    Ok(table)
}

/// Reads `day_x,price,demand` rows, with a header line.
pub fn read_demand_csv<R: Read>(reader: R) -> Result<DemandTable, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut table = DemandTable::new();
    for cell in rdr.deserialize() {
        let cell: DemandCell = cell?;
        table.set(cell.day_x, Price::new(cell.price)?, cell.demand)?;
    }
    Ok(table)
}

pub fn load_demand_csv(file_path: &str) -> Result<DemandTable, Box<dyn Error>> {
    let file = std::fs::File::open(Path::new(file_path))?;
    read_demand_csv(file)
}
