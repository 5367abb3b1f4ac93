use std::{borrow::Cow, fmt::Display, str::FromStr};

use rayon::prelude::*;

use crate::{
    repository::Trip,
    shared::time::{self, MinuteOfDay},
};

/// Half width of the window around the selected minute.
pub const WINDOW_MINUTES: u16 = 60;

/// Which trips count towards traffic. The slider in the map overlay sends
/// `-1` for [`TimeFilter::All`] and a minute of the day otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeFilter {
    #[default]
    All,
    At(MinuteOfDay),
}

impl TimeFilter {
    /// Reads a raw slider value. `-1` (or anything negative) means no filter,
    /// values past the end of the day are clamped.
    pub fn from_slider(value: i64) -> Self {
        if value < 0 {
            Self::All
        } else {
            Self::At(MinuteOfDay::saturating(value))
        }
    }

    pub fn minute(&self) -> Option<MinuteOfDay> {
        match self {
            Self::All => None,
            Self::At(minute) => Some(*minute),
        }
    }

    /// True when either end of the trip lies within the window.
    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            Self::All => true,
            Self::At(target) => {
                trip.start_minute().distance(target) <= WINDOW_MINUTES
                    || trip.end_minute().distance(target) <= WINDOW_MINUTES
            }
        }
    }
}

impl From<MinuteOfDay> for TimeFilter {
    fn from(value: MinuteOfDay) -> Self {
        Self::At(value)
    }
}

impl FromStr for TimeFilter {
    type Err = time::Error;

    /// Accepts `all`, `-1` or a minute of the day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") || s == "-1" {
            return Ok(Self::All);
        }
        let minutes: i64 = s
            .parse()
            .map_err(|_| time::Error::InvalidFilter(s.to_string()))?;
        Ok(Self::At(MinuteOfDay::new(minutes)?))
    }
}

impl Display for TimeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("any time"),
            Self::At(minute) => write!(f, "{minute}"),
        }
    }
}

/// Keeps the trips that start or end within [`WINDOW_MINUTES`] of the filter.
///
/// [`TimeFilter::All`] hands back the very same slice. Otherwise the result
/// is a subsequence of `trips` in the original order. The window does not
/// wrap around midnight: a trip at 23:50 is not near 00:05.
pub fn filter_by_time(trips: &[Trip], filter: TimeFilter) -> Cow<'_, [Trip]> {
    match filter {
        TimeFilter::All => Cow::Borrowed(trips),
        TimeFilter::At(_) => Cow::Owned(
            trips
                .par_iter()
                .filter(|trip| filter.matches(trip))
                .cloned()
                .collect(),
        ),
    }
}
