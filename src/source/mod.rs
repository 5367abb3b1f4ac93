use std::io;
use thiserror::Error;

mod config;
mod data;
mod loader;
pub mod models;
pub use config::*;
pub use data::*;
pub use loader::*;
pub use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Invalid timestamp {value:?} on trip row {row}")]
    InvalidTimestamp { row: usize, value: String },
}

/// Anything able to hand over the station and trip datasets in one go.
pub trait Source {
    fn load(&mut self) -> Result<SourceData, self::Error>;
}

impl Source for SourceData {
    fn load(&mut self) -> Result<SourceData, self::Error> {
        Ok(std::mem::take(self))
    }
}
