use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    time::Instant,
};

mod models;
pub use models::*;
use tracing::{debug, warn};

use crate::{
    shared::{geo::Coordinate, time::parse_timestamp},
    source::{self, Source, StationRecord, TripRecord},
    traffic::{self, RadiusScale, TimeFilter},
};

/// Owns the station registry and the trip store. Immutable once loaded,
/// every traffic query returns a freshly annotated copy of the stations.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    stations: Box<[Station]>,
    trips: Box<[Trip]>,

    station_lookup: HashMap<Arc<str>, u32>,
    // Busiest station over all trips, fixes the marker scale domain
    max_traffic: u32,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Pulls both datasets out of `source`. Either everything loads or
    /// nothing does.
    pub fn load<S: Source>(mut self, source: &mut S) -> Result<Self, source::Error> {
        let now = Instant::now();
        let data = source.load()?;
        debug!("Fetching source data took {:?}", now.elapsed());
        self.load_stations(data.stations);
        self.load_trips(data.trips)?;
        self.index_max_traffic();
        Ok(self)
    }

    /// Builds a repository from already parsed entities.
    pub fn from_parts(stations: Vec<Station>, trips: Vec<Trip>) -> Self {
        let mut repository = Self::new();
        repository.index_stations(stations);
        repository.trips = trips
            .into_iter()
            .enumerate()
            .map(|(i, mut trip)| {
                trip.index = i as u32;
                trip
            })
            .collect();
        repository.index_max_traffic();
        repository
    }

    fn load_stations(&mut self, records: Vec<StationRecord>) {
        debug!("Loading stations...");
        let now = Instant::now();
        let stations = records.into_iter().map(Station::from).collect();
        self.index_stations(stations);
        debug!("Loading stations took {:?}", now.elapsed());
    }

    fn index_stations(&mut self, mut stations: Vec<Station>) {
        let mut station_lookup: HashMap<Arc<str>, u32> = HashMap::new();
        stations.iter_mut().enumerate().for_each(|(i, station)| {
            station.index = i as u32;
            if station_lookup.contains_key(&station.short_name) {
                warn!(
                    "Duplicate station short name {}, keeping the first one for lookups",
                    station.short_name
                );
            } else {
                station_lookup.insert(station.short_name.clone(), i as u32);
            }
        });
        self.stations = stations.into();
        self.station_lookup = station_lookup;
    }

    fn load_trips(&mut self, records: Vec<TripRecord>) -> Result<(), source::Error> {
        debug!("Loading trips...");
        let now = Instant::now();
        // Station ids repeat across millions of rows, share one allocation per id
        let mut owner_lookup: HashSet<Arc<str>> = self.station_lookup.keys().cloned().collect();
        let mut intern = |id: String| -> Arc<str> {
            if let Some(id) = owner_lookup.get(id.as_str()) {
                id.clone()
            } else {
                let id: Arc<str> = id.into();
                owner_lookup.insert(id.clone());
                id
            }
        };

        let mut trips: Vec<Trip> = Vec::with_capacity(records.len());
        for (i, record) in records.into_iter().enumerate() {
            let started_at = parse_timestamp(&record.started_at).ok_or_else(|| {
                source::Error::InvalidTimestamp {
                    row: i,
                    value: record.started_at.clone(),
                }
            })?;
            let ended_at = parse_timestamp(&record.ended_at).ok_or_else(|| {
                source::Error::InvalidTimestamp {
                    row: i,
                    value: record.ended_at.clone(),
                }
            })?;
            trips.push(Trip {
                index: i as u32,
                start_station_id: intern(record.start_station_id),
                end_station_id: intern(record.end_station_id),
                started_at,
                ended_at,
            });
        }

        self.trips = trips.into();
        debug!("Loading trips took {:?}", now.elapsed());
        Ok(())
    }

    fn index_max_traffic(&mut self) {
        self.max_traffic = traffic::aggregate(&self.stations, &self.trips)
            .iter()
            .map(|station| station.traffic.total_traffic)
            .max()
            .unwrap_or(0);
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn station_by_short_name(&self, short_name: &str) -> Option<&Station> {
        self.station_lookup
            .get(short_name)
            .map(|index| &self.stations[*index as usize])
    }

    /// Highest total traffic of any station with every trip counted.
    pub fn max_traffic(&self) -> u32 {
        self.max_traffic
    }

    /// Marker scale for `filter`. The domain always comes from the all-day
    /// traffic, only the radius range depends on the filter.
    pub fn radius_scale(&self, filter: TimeFilter) -> RadiusScale {
        RadiusScale::for_filter(filter, self.max_traffic)
    }

    /// Centroid of all stations, useful for centring a map.
    pub fn center(&self) -> Option<Coordinate> {
        if self.stations.is_empty() {
            None
        } else {
            Some(self.stations.iter().map(|station| station.coordinate).sum())
        }
    }

    /// Stations annotated with the traffic of the trips that pass `filter`.
    pub fn traffic(&self, filter: TimeFilter) -> Vec<Station> {
        let now = Instant::now();
        let trips = traffic::filter_by_time(&self.trips, filter);
        let stations = traffic::aggregate(&self.stations, &trips);
        debug!(
            "Aggregating {} trips for {:?} took {:?}",
            trips.len(),
            filter,
            now.elapsed()
        );
        stations
    }
}
