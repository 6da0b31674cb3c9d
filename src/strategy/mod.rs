pub mod spillover;
pub mod traits;
