//! Marker sizing and colouring for the map overlay.

use crate::{repository::Traffic, traffic::TimeFilter};

/// Marker radius range in pixels when every trip is shown.
pub const ALL_TRIPS_RADIUS: (f64, f64) = (0.0, 25.0);
/// Marker radius range in pixels when a time window is selected.
pub const WINDOW_RADIUS: (f64, f64) = (3.0, 50.0);

/// Square root scale from total traffic to marker radius, so marker area
/// grows linearly with traffic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    max_traffic: u32,
    range: (f64, f64),
}

impl RadiusScale {
    pub fn new(max_traffic: u32, range: (f64, f64)) -> Self {
        Self { max_traffic, range }
    }

    /// Scale for `filter` over a domain of `[0, max_traffic]`. Keep
    /// `max_traffic` fixed across filters so markers stay comparable.
    pub fn for_filter(filter: TimeFilter, max_traffic: u32) -> Self {
        let range = match filter {
            TimeFilter::All => ALL_TRIPS_RADIUS,
            TimeFilter::At(_) => WINDOW_RADIUS,
        };
        Self::new(max_traffic, range)
    }

    pub fn radius(&self, total_traffic: u32) -> f64 {
        let (min, max) = self.range;
        // An empty domain maps everything onto the middle of the range
        if self.max_traffic == 0 {
            return (min + max) / 2.0;
        }
        let t = (total_traffic as f64).sqrt() / (self.max_traffic as f64).sqrt();
        min + (max - min) * t
    }
}

/// Departure ratio snapped to 0, 0.5 or 1. Stations that mostly receive
/// bikes land on 0, balanced ones on 0.5 and mostly emptied ones on 1.
pub fn flow_bucket(traffic: &Traffic) -> f64 {
    const BUCKETS: [f64; 3] = [0.0, 0.5, 1.0];
    let ratio = traffic.departure_ratio();
    let index = ((ratio * BUCKETS.len() as f64).floor() as usize).min(BUCKETS.len() - 1);
    BUCKETS[index]
}
