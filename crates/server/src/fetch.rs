use std::io::Cursor;

use dockflow::{
    repository::Repository,
    source::{self, ReaderSource, TripFormat},
};
use thiserror::Error;
use tracing::info;

use crate::config::{Config, Location};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Request to {url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not read dataset: {0}")]
    Source(#[from] source::Error),
    #[error("Loading task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

async fn fetch(client: &reqwest::Client, location: &Location) -> Result<Vec<u8>, LoadError> {
    match location {
        Location::Remote(url) => {
            info!("Downloading {url}");
            let response = client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    url: url.clone(),
                    status,
                });
            }
            Ok(response.bytes().await?.to_vec())
        }
        Location::Local(path) => {
            info!("Reading {}", path.display());
            Ok(tokio::fs::read(path).await?)
        }
    }
}

/// Fetches both datasets and parses them off the async runtime.
pub async fn load_repository(config: &Config) -> Result<Repository, LoadError> {
    let client = reqwest::Client::new();
    let (stations, trips) = tokio::try_join!(
        fetch(&client, &config.stations),
        fetch(&client, &config.trips)
    )?;
    let format = if config.trips.is_zip() {
        TripFormat::Zip { entry: None }
    } else {
        TripFormat::Csv
    };

    let repository = tokio::task::spawn_blocking(move || {
        let mut source =
            ReaderSource::new(Cursor::new(stations), Cursor::new(trips)).with_trip_format(format);
        Repository::new().load(&mut source)
    })
    .await??;
    Ok(repository)
}
