use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIONS: &str = "https://dsc106.com/labs/lab07/data/bluebikes-stations.json";
const DEFAULT_TRIPS: &str = "https://dsc106.com/labs/lab07/data/bluebikes-traffic-2024-03.csv";

/// Where a dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Remote(String),
    Local(PathBuf),
}

impl Location {
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Remote(value.to_string())
        } else {
            Self::Local(PathBuf::from(value))
        }
    }

    pub fn is_zip(&self) -> bool {
        let name = match self {
            Self::Remote(url) => url.split(['?', '#']).next().unwrap_or(url.as_str()),
            Self::Local(path) => path.to_str().unwrap_or_default(),
        };
        name.to_ascii_lowercase().ends_with(".zip")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub stations: Location,
    pub trips: Location,
}

impl Config {
    /// Positional arguments win over the environment:
    /// `dockflow-server [stations] [trips]`, with `DOCKFLOW_STATIONS`,
    /// `DOCKFLOW_TRIPS` and `DOCKFLOW_PORT` as fallbacks.
    pub fn from_env() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::from_parts(
            &args,
            env::var("DOCKFLOW_STATIONS").ok(),
            env::var("DOCKFLOW_TRIPS").ok(),
            env::var("DOCKFLOW_PORT").ok(),
        )
    }

    fn from_parts(
        args: &[String],
        stations: Option<String>,
        trips: Option<String>,
        port: Option<String>,
    ) -> Self {
        let stations = args
            .first()
            .cloned()
            .or(stations)
            .unwrap_or_else(|| DEFAULT_STATIONS.to_string());
        let trips = args
            .get(1)
            .cloned()
            .or(trips)
            .unwrap_or_else(|| DEFAULT_TRIPS.to_string());
        let port = port
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            port,
            stations: Location::parse(&stations),
            trips: Location::parse(&trips),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_parse() {
        assert_eq!(
            Location::parse("https://example.com/trips.csv"),
            Location::Remote("https://example.com/trips.csv".into())
        );
        assert_eq!(
            Location::parse("data/trips.csv"),
            Location::Local("data/trips.csv".into())
        );
    }

    #[test]
    fn location_is_zip() {
        assert!(Location::parse("https://example.com/202403-tripdata.zip?dl=1").is_zip());
        assert!(Location::parse("data/TRIPS.ZIP").is_zip());
        assert!(!Location::parse("data/trips.csv").is_zip());
    }

    #[test]
    fn args_override_env() {
        let args = vec!["stations.json".to_string()];
        let config = Config::from_parts(
            &args,
            Some("ignored.json".into()),
            Some("trips.csv".into()),
            Some("8080".into()),
        );
        assert_eq!(config.stations, Location::Local("stations.json".into()));
        assert_eq!(config.trips, Location::Local("trips.csv".into()));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn defaults() {
        let config = Config::from_parts(&[], None, None, Some("not a port".into()));
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(matches!(config.stations, Location::Remote(_)));
    }
}
