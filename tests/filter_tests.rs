use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime};
use dockflow::prelude::*;

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn minute(value: i64) -> TimeFilter {
    TimeFilter::At(MinuteOfDay::new(value).unwrap())
}

fn sample_trips() -> Vec<Trip> {
    vec![
        Trip::new("A", "B", at(8, 5), at(8, 20)),
        Trip::new("B", "C", at(12, 0), at(12, 45)),
        Trip::new("C", "A", at(6, 0), at(9, 31)),
        Trip::new("A", "A", at(23, 50), at(23, 59)),
        Trip::new("B", "A", at(9, 30), at(9, 40)),
    ]
}

#[test]
fn all_returns_the_same_trips() {
    let trips = sample_trips();
    let filtered = filter_by_time(&trips, TimeFilter::All);
    assert!(matches!(filtered, Cow::Borrowed(_)));
    assert!(std::ptr::eq(filtered.as_ref(), trips.as_slice()));
    assert_eq!(filtered.as_ref(), trips.as_slice());
}

#[test]
fn start_within_window_is_kept() {
    // 08:05 is minute 485, 25 minutes before 08:30
    let trips = vec![Trip::new("A", "B", at(8, 5), at(8, 6))];
    let filtered = filter_by_time(&trips, minute(510));
    assert_eq!(filtered.len(), 1);
}

#[test]
fn end_within_window_is_kept() {
    // Both start well before the window, only the second ends inside it
    let trips = vec![
        Trip::new("A", "B", at(6, 0), at(9, 31)),
        Trip::new("A", "B", at(6, 0), at(9, 30)),
    ];
    let filtered = filter_by_time(&trips, minute(510));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].ended_at, at(9, 30));
}

#[test]
fn window_bounds_are_inclusive() {
    let trips = vec![
        Trip::new("A", "B", at(7, 30), at(7, 30)),
        Trip::new("A", "B", at(9, 30), at(9, 30)),
        Trip::new("A", "B", at(7, 29), at(7, 29)),
        Trip::new("A", "B", at(9, 31), at(9, 31)),
    ];
    let filtered = filter_by_time(&trips, minute(510));
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].started_at, at(7, 30));
    assert_eq!(filtered[1].started_at, at(9, 30));
}

#[test]
fn no_wraparound_at_midnight() {
    // 23:50 and 00:05 are 15 minutes apart on a clock, but the window
    // works on plain minutes since midnight and does not wrap.
    let trips = vec![Trip::new("A", "B", at(23, 50), at(23, 55))];
    let filtered = filter_by_time(&trips, minute(5));
    assert!(filtered.is_empty());
}

#[test]
fn filtered_is_ordered_subsequence() {
    let trips = sample_trips();
    let filtered = filter_by_time(&trips, minute(510));
    let starts: Vec<NaiveDateTime> = filtered.iter().map(|t| t.started_at).collect();
    assert_eq!(starts, [at(8, 5), at(9, 30)]);
    for trip in filtered.iter() {
        assert!(trips.contains(trip));
    }
}

#[test]
fn filtering_leaves_input_untouched() {
    let trips = sample_trips();
    let before = trips.clone();
    let _ = filter_by_time(&trips, minute(720));
    let again = filter_by_time(&trips, TimeFilter::All);
    assert_eq!(again.as_ref(), before.as_slice());
}

#[test]
fn ignores_the_date() {
    let later = NaiveDate::from_ymd_opt(2024, 3, 17)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    let trips = vec![Trip::new("A", "B", later, later)];
    assert_eq!(filter_by_time(&trips, minute(510)).len(), 1);
}

#[test]
fn filter_then_aggregate() {
    let stations = vec![
        Station::new("A", Coordinate::new(42.36, -71.09)),
        Station::new("B", Coordinate::new(42.37, -71.10)),
    ];
    let trips = sample_trips();
    let filtered = filter_by_time(&trips, minute(510));
    let result = aggregate(&stations, &filtered);
    assert_eq!(result[0].traffic, Traffic::new(1, 1));
    assert_eq!(result[1].traffic, Traffic::new(1, 1));
}

#[test]
fn slider_values() {
    assert_eq!(TimeFilter::from_slider(-1), TimeFilter::All);
    assert_eq!(TimeFilter::from_slider(0), minute(0));
    assert_eq!(TimeFilter::from_slider(510), minute(510));
    assert_eq!(TimeFilter::from_slider(2000), minute(1439));
}

#[test]
fn parse_filter() {
    assert_eq!("all".parse::<TimeFilter>(), Ok(TimeFilter::All));
    assert_eq!("ALL".parse::<TimeFilter>(), Ok(TimeFilter::All));
    assert_eq!("-1".parse::<TimeFilter>(), Ok(TimeFilter::All));
    assert_eq!(" 510 ".parse::<TimeFilter>(), Ok(minute(510)));
    assert!("1440".parse::<TimeFilter>().is_err());
    assert!("-2".parse::<TimeFilter>().is_err());
    assert!("noon".parse::<TimeFilter>().is_err());
}

#[test]
fn display_filter() {
    assert_eq!(TimeFilter::All.to_string(), "any time");
    assert_eq!(minute(510).to_string(), "8:30 AM");
}
