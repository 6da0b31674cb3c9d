//! Day-by-day bookings report for one origin/destination of a transport
//! service: cumulative sales history, continued by a forecast that replays an
//! unconstrained demand table against price-tiered seat inventory.

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::ForecastError;
pub use model::demand::{DemandRow, DemandTable};
pub use model::inventory::Inventory;
pub use model::price::Price;
pub use model::sale::Sale;
pub use model::timeline::{Timeline, TimelinePoint};
pub use simulation::config::{ForecastConfig, SaleOrdering};
pub use simulation::engine::{BookingsReport, ForecastRun, ForecastSimulation};
pub use simulation::history::aggregate_history;
