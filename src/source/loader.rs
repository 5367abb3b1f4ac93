use crate::source::{self, Config, Source, SourceData, StationDocument, StationRecord, TripRecord};
use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::debug;
use zip::ZipArchive;

/// How the trip table is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TripFormat {
    #[default]
    Csv,
    Zip {
        entry: Option<String>,
    },
}

impl TripFormat {
    /// Picks the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P, entry: Option<String>) -> Self {
        let is_zip = path
            .as_ref()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
        if is_zip {
            Self::Zip { entry }
        } else {
            Self::Csv
        }
    }
}

/// Reads both datasets from in-memory or already opened readers.
pub struct ReaderSource<S, T> {
    stations: S,
    trips: T,
    trip_format: TripFormat,
}

impl<S, T> ReaderSource<S, T>
where
    S: Read,
    T: Read + Seek,
{
    pub fn new(stations: S, trips: T) -> Self {
        Self {
            stations,
            trips,
            trip_format: TripFormat::Csv,
        }
    }

    pub fn with_trip_format(mut self, format: TripFormat) -> Self {
        self.trip_format = format;
        self
    }
}

impl<S, T> Source for ReaderSource<S, T>
where
    S: Read,
    T: Read + Seek,
{
    fn load(&mut self) -> Result<SourceData, source::Error> {
        let stations = read_stations(&mut self.stations)?;
        let trips = match &self.trip_format {
            TripFormat::Csv => read_trips(&mut self.trips)?,
            TripFormat::Zip { entry } => read_trips_from_zip(&mut self.trips, entry.as_deref())?,
        };
        Ok(SourceData { stations, trips })
    }
}

/// Reads both datasets from the local file system.
#[derive(Default)]
pub struct FileSource {
    config: Config,
    stations_path: Option<PathBuf>,
    trips_path: Option<PathBuf>,
}

impl FileSource {
    pub fn new(config: source::Config) -> Self {
        Self {
            config,
            stations_path: None,
            trips_path: None,
        }
    }

    /// Looks for the configured file names inside `dir`.
    pub fn from_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        let dir = dir.as_ref();
        self.stations_path = Some(dir.join(&self.config.stations_file_name));
        self.trips_path = Some(dir.join(&self.config.trips_file_name));
        self
    }

    pub fn with_stations<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.stations_path = Some(path.into());
        self
    }

    pub fn with_trips<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.trips_path = Some(path.into());
        self
    }
}

impl Source for FileSource {
    fn load(&mut self) -> Result<SourceData, source::Error> {
        let stations_path = self
            .stations_path
            .as_ref()
            .ok_or(source::Error::FileNotFound(
                self.config.stations_file_name.clone(),
            ))?;
        let trips_path = self
            .trips_path
            .as_ref()
            .ok_or(source::Error::FileNotFound(
                self.config.trips_file_name.clone(),
            ))?;

        let stations = BufReader::new(open(stations_path)?);
        let trips = BufReader::new(open(trips_path)?);
        let format = TripFormat::from_path(trips_path, self.config.trips_entry_name.clone());
        ReaderSource::new(stations, trips)
            .with_trip_format(format)
            .load()
    }
}

fn open(path: &Path) -> Result<File, source::Error> {
    if !path.exists() {
        return Err(source::Error::FileNotFound(path.display().to_string()));
    }
    Ok(File::open(path)?)
}

pub fn read_stations<R: Read>(reader: R) -> Result<Vec<StationRecord>, source::Error> {
    let now = Instant::now();
    let document: StationDocument = serde_json::from_reader(reader)?;
    let stations: Vec<StationRecord> = document.into();
    debug!("Reading {} stations took {:?}", stations.len(), now.elapsed());
    Ok(stations)
}

pub fn read_trips<R: Read>(reader: R) -> Result<Vec<TripRecord>, source::Error> {
    let now = Instant::now();
    let mut reader = csv::Reader::from_reader(reader);
    let trips = reader
        .deserialize()
        .collect::<Result<Vec<TripRecord>, csv::Error>>()?;
    debug!("Reading {} trips took {:?}", trips.len(), now.elapsed());
    Ok(trips)
}

/// Reads the trip table out of a zip archive, either the named entry or
/// the first `.csv` file found.
pub fn read_trips_from_zip<R: Read + Seek>(
    reader: R,
    entry: Option<&str>,
) -> Result<Vec<TripRecord>, source::Error> {
    let mut archive = ZipArchive::new(reader)?;
    let index = match entry {
        Some(name) => archive.index_for_name(name),
        None => archive
            .file_names()
            .find(|name| name.to_ascii_lowercase().ends_with(".csv"))
            .and_then(|name| archive.index_for_name(name)),
    }
    .ok_or(source::Error::FileNotFound(
        entry.unwrap_or("*.csv").to_string(),
    ))?;
    let file = archive.by_index(index)?;
    read_trips(file)
}
