use std::{fmt::Display, sync::Arc};

use chrono::NaiveDateTime;

use crate::{
    shared::{geo::Coordinate, time::MinuteOfDay},
    source::StationRecord,
};

/// Departure and arrival counts for one station over a time window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Traffic {
    pub departures: u32,
    pub arrivals: u32,
    pub total_traffic: u32,
}

impl Traffic {
    pub const fn new(departures: u32, arrivals: u32) -> Self {
        Self {
            departures,
            arrivals,
            total_traffic: departures + arrivals,
        }
    }

    /// Share of the traffic that leaves the station, 0 when there is none.
    pub fn departure_ratio(&self) -> f64 {
        if self.total_traffic == 0 {
            0.0
        } else {
            self.departures as f64 / self.total_traffic as f64
        }
    }
}

impl Display for Traffic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} trips ({} departures, {} arrivals)",
            self.total_traffic, self.departures, self.arrivals
        )
    }
}

/// A bike-share dock.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Station {
    /// Position in the registry.
    pub index: u32,
    /// The identifier trips refer to.
    pub short_name: Arc<str>,
    pub name: Option<Arc<str>>,
    pub coordinate: Coordinate,
    pub capacity: Option<u32>,
    /// Counts for the most recent aggregation, zero until aggregated.
    pub traffic: Traffic,
}

impl Station {
    pub fn new(short_name: &str, coordinate: Coordinate) -> Self {
        Self {
            short_name: short_name.into(),
            coordinate,
            ..Default::default()
        }
    }
}

impl From<StationRecord> for Station {
    fn from(value: StationRecord) -> Self {
        Self {
            index: u32::MAX,
            short_name: value.short_name.into(),
            name: value.name.map(|val| val.into()),
            coordinate: Coordinate::new(value.lat, value.lon),
            capacity: value.capacity,
            traffic: Traffic::default(),
        }
    }
}

/// A single rental from one station to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub index: u32,
    pub start_station_id: Arc<str>,
    pub end_station_id: Arc<str>,
    // Local wall-clock, no ordering between the two is guaranteed
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
}

impl Trip {
    pub fn new(
        start_station_id: &str,
        end_station_id: &str,
        started_at: NaiveDateTime,
        ended_at: NaiveDateTime,
    ) -> Self {
        Self {
            index: u32::MAX,
            start_station_id: start_station_id.into(),
            end_station_id: end_station_id.into(),
            started_at,
            ended_at,
        }
    }

    pub fn start_station_id(&self) -> &str {
        &self.start_station_id
    }

    pub fn end_station_id(&self) -> &str {
        &self.end_station_id
    }

    pub fn start_minute(&self) -> MinuteOfDay {
        MinuteOfDay::from(&self.started_at)
    }

    pub fn end_minute(&self) -> MinuteOfDay {
        MinuteOfDay::from(&self.ended_at)
    }
}
