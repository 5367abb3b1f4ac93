use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const OFFSET_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Minute of day {0} is outside 0..=1439")]
    OutOfRange(i64),
    #[error("Could not parse time filter: {0}")]
    InvalidFilter(String),
}

/// Minutes since midnight, always within `0..MINUTES_PER_DAY`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfDay(u16);

impl TryFrom<i64> for MinuteOfDay {
    type Error = self::Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..MINUTES_PER_DAY as i64).contains(&value) {
            Ok(Self(value as u16))
        } else {
            Err(Error::OutOfRange(value))
        }
    }
}

impl From<&NaiveDateTime> for MinuteOfDay {
    fn from(value: &NaiveDateTime) -> Self {
        Self((value.hour() * 60 + value.minute()) as u16)
    }
}

impl Display for MinuteOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_clock_string())
    }
}

impl MinuteOfDay {
    pub const MIDNIGHT: Self = Self(0);
    pub const LAST: Self = Self(MINUTES_PER_DAY - 1);

    pub fn new(minutes: i64) -> Result<Self, self::Error> {
        Self::try_from(minutes)
    }

    /// Clamps any value into the valid range instead of failing.
    pub fn saturating(minutes: i64) -> Self {
        Self(minutes.clamp(0, (MINUTES_PER_DAY - 1) as i64) as u16)
    }

    pub const fn from_hm(hours: u16, minutes: u16) -> Option<Self> {
        if hours < 24 && minutes < MINUTES_PER_HOUR {
            Some(Self(hours * MINUTES_PER_HOUR + minutes))
        } else {
            None
        }
    }

    pub const fn as_minutes(&self) -> u16 {
        self.0
    }

    pub const fn hours(&self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    pub const fn minutes(&self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Minutes between the two, in either direction. Does not wrap around
    /// midnight, so 23:50 and 00:05 are 1425 minutes apart.
    pub const fn distance(&self, other: &Self) -> u16 {
        self.0.abs_diff(other.0)
    }

    /// 12-hour clock in the en-US style, e.g. `2:30 AM`.
    pub fn to_clock_string(&self) -> String {
        NaiveTime::from_hms_opt(self.hours() as u32, self.minutes() as u32, 0)
            .map(|time| time.format("%-I:%M %p").to_string())
            .unwrap_or_default()
    }
}

/// Formats minutes since midnight as a 12-hour clock string.
pub fn format_minutes(minutes: i64) -> Result<String, self::Error> {
    Ok(MinuteOfDay::new(minutes)?.to_clock_string())
}

/// Parses a wall-clock timestamp as found in trip exports.
/// A trailing UTC offset (`Z`, `-05:00`, `+0100`) is accepted and dropped,
/// the date and time are kept as written.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|datetime| datetime.naive_local())
        })
        .or_else(|| {
            OFFSET_TIMESTAMP_FORMATS.iter().find_map(|format| {
                DateTime::parse_from_str(value, format)
                    .ok()
                    .map(|datetime| datetime.naive_local())
            })
        })
}

#[test]
fn clock_string_midnight() {
    assert_eq!(MinuteOfDay::MIDNIGHT.to_clock_string(), "12:00 AM");
}

#[test]
fn clock_string_noon() {
    assert_eq!(MinuteOfDay::new(720).unwrap().to_clock_string(), "12:00 PM");
}

#[test]
fn clock_string_last_minute() {
    assert_eq!(MinuteOfDay::LAST.to_clock_string(), "11:59 PM");
}

#[test]
fn from_hm_rejects_invalid() {
    assert!(MinuteOfDay::from_hm(24, 0).is_none());
    assert!(MinuteOfDay::from_hm(3, 60).is_none());
}

#[test]
fn saturating_clamps() {
    assert_eq!(MinuteOfDay::saturating(-30), MinuteOfDay::MIDNIGHT);
    assert_eq!(MinuteOfDay::saturating(5000), MinuteOfDay::LAST);
}

#[test]
fn distance_has_no_wraparound() {
    let a = MinuteOfDay::new(5).unwrap();
    let b = MinuteOfDay::new(1430).unwrap();
    assert_eq!(a.distance(&b), 1425);
    assert_eq!(b.distance(&a), 1425);
}

#[test]
fn offset_is_dropped() {
    let utc = parse_timestamp("2024-03-01T08:05:00Z").unwrap();
    let eastern = parse_timestamp("2024-03-01 08:05:00-05:00").unwrap();
    assert_eq!(utc, eastern);
    assert_eq!(MinuteOfDay::from(&utc).as_minutes(), 485);
}
