// src/simulation/history.rs

use crate::error::ForecastError;
use crate::model::sale::Sale;
use crate::model::timeline::{Timeline, TimelinePoint};
use crate::simulation::config::SaleOrdering;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::warn;

/// Turns the sales of one OD into a cumulative timeline with one point per
/// distinct day_x.
///
/// Points come out in the order their day_x is first seen, which is only
/// chronological when the sales are. `SaleOrdering::Strict` rejects an
/// unordered list; `SaleOrdering::Sort` sorts a copy first.
pub fn aggregate_history(
    sales: &[Sale],
    ordering: SaleOrdering,
) -> Result<Timeline, ForecastError> {
    let sales = ensure_chronological(sales, ordering)?;

    // (day_x, bookings, revenue) per distinct day, first-seen order.
    let mut days: Vec<(i32, u64, f64)> = Vec::new();
    let mut index_of: HashMap<i32, usize> = HashMap::new();
    for sale in sales.iter() {
        let slot = *index_of.entry(sale.day_x).or_insert_with(|| {
            days.push((sale.day_x, 0, 0.0));
            days.len() - 1
        });
        days[slot].1 += 1;
        days[slot].2 += sale.price.value();
    }

    let mut timeline = Timeline::with_capacity(days.len());
    let (mut bookings, mut revenue) = (0u64, 0.0f64);
    for (day_x, day_bookings, day_revenue) in days {
        bookings += day_bookings;
        revenue += day_revenue;
        timeline.push(TimelinePoint::new(day_x, bookings, revenue));
    }
    Ok(timeline)
}

fn ensure_chronological(
    sales: &[Sale],
    ordering: SaleOrdering,
) -> Result<Cow<'_, [Sale]>, ForecastError> {
    let violation = sales
        .windows(2)
        .position(|w| w[1].day_x < w[0].day_x)
        .map(|i| ForecastError::OrderingViolation {
            index: i + 1,
            previous: sales[i].day_x,
            found: sales[i + 1].day_x,
        });

    match (violation, ordering) {
        (None, _) => Ok(Cow::Borrowed(sales)),
        (Some(err), SaleOrdering::Strict) => Err(err),
        (Some(err), SaleOrdering::Sort) => {
            warn!("{err}; sorting sales before aggregation");
            let mut sorted = sales.to_vec();
            sorted.sort_by_key(|sale| sale.day_x);
            Ok(Cow::Owned(sorted))
        }
    }
}
