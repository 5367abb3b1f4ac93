pub mod geo;
pub mod time;

pub use geo::*;
pub use time::{MINUTES_PER_DAY, MinuteOfDay, format_minutes, parse_timestamp};
