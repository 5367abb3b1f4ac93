use std::{fmt::Display, iter::Sum};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

/// Averages the coordinates. An empty iterator yields NaN components,
/// callers should check for emptiness first.
impl Sum for Coordinate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut count: usize = 0;
        let mut lat: f64 = 0.0;
        let mut lon: f64 = 0.0;
        iter.for_each(|coordinate| {
            count += 1;
            lat += coordinate.latitude;
            lon += coordinate.longitude;
        });
        let count = count as f64;
        Self {
            latitude: lat / count,
            longitude: lon / count,
        }
    }
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[test]
fn centroid_test() {
    let coordinates = [Coordinate::new(42.0, -71.0), Coordinate::new(43.0, -72.0)];
    let center: Coordinate = coordinates.into_iter().sum();
    assert_eq!(center, Coordinate::new(42.5, -71.5));
}

#[test]
fn display_test() {
    assert_eq!(Coordinate::new(42.5, -71.25).to_string(), "42.5, -71.25");
}
