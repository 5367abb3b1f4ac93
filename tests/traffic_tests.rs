use chrono::{NaiveDate, NaiveDateTime};
use dockflow::prelude::*;

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn stations(ids: &[&str]) -> Vec<Station> {
    ids.iter()
        .map(|id| Station::new(id, Coordinate::new(42.36, -71.09)))
        .collect()
}

fn trip(start: &str, end: &str) -> Trip {
    Trip::new(start, end, at(8, 0), at(8, 15))
}

#[test]
fn two_station_scenario() {
    let stations = stations(&["A", "B"]);
    let trips = vec![trip("A", "B"), trip("A", "A")];
    let result = aggregate(&stations, &trips);

    assert_eq!(result[0].short_name.as_ref(), "A");
    assert_eq!(result[0].traffic, Traffic::new(2, 1));
    assert_eq!(result[0].traffic.total_traffic, 3);
    assert_eq!(result[1].short_name.as_ref(), "B");
    assert_eq!(result[1].traffic, Traffic::new(0, 1));
    assert_eq!(result[1].traffic.total_traffic, 1);
}

#[test]
fn no_trips_means_zero_traffic() {
    let stations = stations(&["A", "B", "C"]);
    let result = aggregate(&stations, &[]);
    assert_eq!(result.len(), 3);
    for station in result.iter() {
        assert_eq!(station.traffic, Traffic::default());
        assert_eq!(station.traffic.total_traffic, 0);
    }
}

#[test]
fn unknown_stations_count_nowhere() {
    let stations = stations(&["A", "B"]);
    let trips = vec![trip("A", "Z"), trip("Y", "B"), trip("Y", "Z"), trip("B", "A")];
    let result = aggregate(&stations, &trips);

    let departures: u32 = result.iter().map(|s| s.traffic.departures).sum();
    let arrivals: u32 = result.iter().map(|s| s.traffic.arrivals).sum();
    let known = |id: &str| stations.iter().any(|s| s.short_name.as_ref() == id);
    let expected_departures = trips.iter().filter(|t| known(t.start_station_id())).count();
    let expected_arrivals = trips.iter().filter(|t| known(t.end_station_id())).count();

    assert_eq!(departures as usize, expected_departures);
    assert_eq!(arrivals as usize, expected_arrivals);
}

#[test]
fn keeps_order_and_length() {
    let stations = stations(&["C", "A", "B"]);
    let trips = vec![trip("B", "C")];
    let result = aggregate(&stations, &trips);
    let ids: Vec<&str> = result.iter().map(|s| s.short_name.as_ref()).collect();
    assert_eq!(ids, ["C", "A", "B"]);
}

#[test]
fn aggregation_is_idempotent() {
    let stations = stations(&["A", "B"]);
    let trips = vec![trip("A", "B"), trip("B", "A"), trip("A", "A")];
    let first = aggregate(&stations, &trips);
    let second = aggregate(&stations, &trips);
    assert_eq!(first, second);
}

#[test]
fn previous_traffic_is_overwritten() {
    let stations = stations(&["A", "B"]);
    let busy = aggregate(&stations, &[trip("A", "B"), trip("A", "B")]);
    let quiet = aggregate(&busy, &[trip("B", "A")]);
    assert_eq!(quiet[0].traffic, Traffic::new(0, 1));
    assert_eq!(quiet[1].traffic, Traffic::new(1, 0));
    // Input stations are left untouched
    assert_eq!(busy[0].traffic, Traffic::new(2, 0));
    assert_eq!(stations[0].traffic, Traffic::default());
}

#[test]
fn duplicate_short_names_share_counts() {
    let stations = stations(&["A", "A"]);
    let result = aggregate(&stations, &[trip("A", "B")]);
    assert_eq!(result[0].traffic, Traffic::new(1, 0));
    assert_eq!(result[1].traffic, Traffic::new(1, 0));
}

#[test]
fn traffic_display() {
    assert_eq!(
        Traffic::new(4, 3).to_string(),
        "7 trips (4 departures, 3 arrivals)"
    );
}
