// src/io/reporting.rs

use crate::model::timeline::Timeline;
use crate::simulation::engine::{AllocationRecord, BookingsReport};
use serde::Serialize;
use std::error::Error;
use std::io::Write;
use tracing::info;

#[derive(Debug, Serialize)]
struct ReportRow {
    series: &'static str,
    day_x: i32,
    bookings: u64,
    revenue: f64,
}

fn timeline_rows<'a>(
    series: &'static str,
    timeline: &'a Timeline,
) -> impl Iterator<Item = ReportRow> + 'a {
    timeline.iter().map(move |point| ReportRow {
        series,
        day_x: point.day_x,
        bookings: point.bookings,
        revenue: point.revenue,
    })
}

/// Writes history then forecast as `series,day_x,bookings,revenue` rows.
/// Returns the number of rows written.
pub fn write_report<W: Write>(writer: W, report: &BookingsReport) -> Result<usize, Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut rows = 0;
    for row in timeline_rows("history", &report.history)
        .chain(timeline_rows("forecast", &report.forecast.timeline))
    {
        wtr.serialize(row)?;
        rows += 1;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;
    Ok(rows)
}

/// Writes the per-tier allocation records of a forecast run.
pub fn write_allocation_log<W: Write>(
    writer: W,
    data: &[AllocationRecord],
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the bookings report to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/ply_lpd.csv").
/// * `report` - History and forecast of one OD.
pub fn save_report(file_path: &str, report: &BookingsReport) -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::create(file_path)?;
    let rows = write_report(file, report)?;
    info!("exported {rows} report rows to '{file_path}'");
    Ok(())
}

pub fn save_allocation_log(
    file_path: &str,
    data: &[AllocationRecord],
) -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::create(file_path)?;
    write_allocation_log(file, data)?;
    info!("exported {} allocation records to '{file_path}'", data.len());
    Ok(())
}
