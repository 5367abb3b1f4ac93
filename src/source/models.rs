use serde::{Deserialize, Serialize};

/// A station as published in a GBFS `station_information` feed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StationRecord {
    pub short_name: String,
    pub lat: f64,
    pub lon: f64,
    pub station_id: Option<String>,
    pub name: Option<String>,
    pub capacity: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StationFeed {
    pub data: StationFeedData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StationFeedData {
    pub stations: Vec<StationRecord>,
}

/// Either a full feed document or a bare list of stations.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum StationDocument {
    Feed(StationFeed),
    List(Vec<StationRecord>),
}

impl From<StationDocument> for Vec<StationRecord> {
    fn from(value: StationDocument) -> Self {
        match value {
            StationDocument::Feed(feed) => feed.data.stations,
            StationDocument::List(stations) => stations,
        }
    }
}

/// One row of a trip export. Timestamps are kept as text until the
/// repository parses them.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TripRecord {
    pub ride_id: Option<String>,
    pub start_station_id: String,
    pub end_station_id: String,
    pub started_at: String,
    pub ended_at: String,
}
