// src/io/inventory.rs

use crate::model::inventory::Inventory;
use crate::model::price::Price;
use serde::Deserialize;
use std::error::Error;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SeatAllotment {
    price: Price,
    seats: u32,
}

/// The fare structure used by the bundled example run.
pub fn worked_example_inventory() -> Result<Inventory, Box<dyn Error>> {
    Ok(Inventory::from_pairs([
        (10.0, 0),
        (20.0, 2),
        (30.0, 5),
        (40.0, 5),
        (50.0, 5),
    ])?)
}

/// Reads `price,seats` rows, with a header line. A repeated price keeps its
/// last allotment.
pub fn read_inventory_csv<R: Read>(reader: R) -> Result<Inventory, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut inventory = Inventory::new();
    for row in rdr.deserialize() {
        let row: SeatAllotment = row?;
        inventory.set(row.price, row.seats);
    }
    Ok(inventory)
}

pub fn load_inventory_csv(file_path: &str) -> Result<Inventory, Box<dyn Error>> {
    let file = std::fs::File::open(Path::new(file_path))?;
    read_inventory_csv(file)
}
