use std::collections::HashMap;

use rayon::prelude::*;

use crate::repository::{Station, Traffic, Trip};

/// Annotates every station with the departures and arrivals found in `trips`.
///
/// The result has the same length and order as `stations`. Traffic is always
/// recomputed from scratch, whatever the input stations carried before.
/// Trips that reference an unknown station id are counted towards nothing.
pub fn aggregate(stations: &[Station], trips: &[Trip]) -> Vec<Station> {
    let departures = count_by(trips, Trip::start_station_id);
    let arrivals = count_by(trips, Trip::end_station_id);

    stations
        .iter()
        .map(|station| {
            let id: &str = &station.short_name;
            let departures = departures.get(id).copied().unwrap_or(0);
            let arrivals = arrivals.get(id).copied().unwrap_or(0);
            Station {
                traffic: Traffic::new(departures, arrivals),
                ..station.clone()
            }
        })
        .collect()
}

/// Number of trips per station id, picked out by `key`.
pub fn count_by<'a, F>(trips: &'a [Trip], key: F) -> HashMap<&'a str, u32>
where
    F: Fn(&'a Trip) -> &'a str + Send + Sync,
{
    trips
        .par_iter()
        .fold(HashMap::new, |mut counts: HashMap<&'a str, u32>, trip| {
            *counts.entry(key(trip)).or_default() += 1;
            counts
        })
        .reduce(HashMap::new, |mut a, b| {
            b.into_iter()
                .for_each(|(id, count)| *a.entry(id).or_default() += count);
            a
        })
}
