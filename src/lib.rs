//! Bike-share station traffic.
//!
//! Load a station feed and a trip export through a [`source::Source`], then
//! ask the [`repository::Repository`] for the stations annotated with their
//! departures and arrivals, optionally restricted to a time of day.
//!
//! ```no_run
//! use dockflow::prelude::*;
//!
//! let mut source = FileSource::new(Config::default()).from_dir("data");
//! let repository = Repository::new().load(&mut source)?;
//! let morning = repository.traffic(TimeFilter::from_slider(510));
//! println!("{} stations", morning.len());
//! # Ok::<(), dockflow::source::Error>(())
//! ```

pub mod repository;
pub mod shared;
pub mod source;
pub mod traffic;

pub mod prelude {
    pub use crate::repository::{Repository, Station, Traffic, Trip};
    pub use crate::shared::{Coordinate, MinuteOfDay, format_minutes};
    pub use crate::source::{Config, FileSource, ReaderSource, Source, SourceData, TripFormat};
    pub use crate::traffic::{RadiusScale, TimeFilter, aggregate, filter_by_time, flow_bucket};
}
