// src/simulation/config.rs

use std::str::FromStr;

/// How the history aggregator treats a sales list that is not ascending by
/// day_x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaleOrdering {
    /// Reject the list with an ordering violation.
    #[default]
    Strict,
    /// Sort a copy (stable) before aggregating.
    Sort,
}

impl FromStr for SaleOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(SaleOrdering::Strict),
            "sort" => Ok(SaleOrdering::Sort),
            other => Err(format!("unknown sale ordering '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    pub sale_ordering: SaleOrdering,
    pub report_path: String,
    pub allocation_log_path: Option<String>,
    pub demand_csv: Option<String>,
    pub inventory_csv: Option<String>,
    /// Same demand at every tier and day, used instead of the built-in table
    /// when no demand CSV is given.
    pub constant_demand: Option<u32>,
    /// Mean and standard deviation of a generated demand table, used when
    /// neither a demand CSV nor a constant demand is given.
    pub synthetic_demand: Option<(f64, f64)>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            sale_ordering: SaleOrdering::Strict,
            report_path: "bookings_report.csv".to_string(),
            allocation_log_path: Some("allocation_log.csv".to_string()),
            demand_csv: None,
            inventory_csv: None,
            constant_demand: None,
            synthetic_demand: None,
        }
    }
}

impl ForecastConfig {
    /// Defaults overlaid with `FORECAST_*` environment variables.
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ordering) = lookup("FORECAST_SALE_ORDERING").and_then(|s| s.parse().ok()) {
            config.sale_ordering = ordering;
        }
        if let Some(path) = lookup("FORECAST_REPORT_PATH") {
            config.report_path = path;
        }
        if let Some(path) = lookup("FORECAST_ALLOCATION_LOG") {
            config.allocation_log_path = if path.is_empty() { None } else { Some(path) };
        }
        config.demand_csv = lookup("FORECAST_DEMAND_CSV");
        config.inventory_csv = lookup("FORECAST_INVENTORY_CSV");
        config.constant_demand =
            lookup("FORECAST_DEMAND_CONSTANT").and_then(|s| s.trim().parse::<u32>().ok());

        let mean = lookup("FORECAST_DEMAND_MEAN").and_then(|s| s.parse::<f64>().ok());
        let std_dev = lookup("FORECAST_DEMAND_STD_DEV").and_then(|s| s.parse::<f64>().ok());
        if let Some(mean) = mean {
            config.synthetic_demand = Some((mean, std_dev.unwrap_or(0.0)));
        }

        config
    }
}
