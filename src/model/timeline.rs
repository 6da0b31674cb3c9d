// src/model/timeline.rs

use serde::Serialize;

/// Cumulative bookings and revenue as of one day before departure.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TimelinePoint {
    pub day_x: i32,
    pub bookings: u64,
    pub revenue: f64,
}

impl TimelinePoint {
    pub fn new(day_x: i32, bookings: u64, revenue: f64) -> Self {
        Self {
            day_x,
            bookings,
            revenue,
        }
    }

    /// `[day_x, bookings, revenue]` as reported downstream.
    pub fn as_triple(&self) -> (i32, u64, f64) {
        (self.day_x, self.bookings, self.revenue)
    }
}

/// An append-only series of cumulative points, ascending by day_x.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    points: Vec<TimelinePoint>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: TimelinePoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[TimelinePoint] {
        &self.points
    }

    pub fn last(&self) -> Option<&TimelinePoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelinePoint> {
        self.points.iter()
    }

    pub fn to_triples(&self) -> Vec<(i32, u64, f64)> {
        self.points.iter().map(TimelinePoint::as_triple).collect()
    }

    /// Bookings and revenue never decrease from one point to the next.
    pub fn is_monotonic(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| w[1].bookings >= w[0].bookings && w[1].revenue >= w[0].revenue)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelinePoint;
    type IntoIter = std::slice::Iter<'a, TimelinePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<TimelinePoint> for Timeline {
    fn from_iter<I: IntoIterator<Item = TimelinePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
