use dockflow::{
    repository::Station,
    shared::Coordinate,
    traffic::{RadiusScale, flow_bucket},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationDto {
    pub short_name: String,
    pub name: Option<String>,
    pub coordinate: Coordinate,
    pub departures: u32,
    pub arrivals: u32,
    pub total_traffic: u32,
    /// Marker radius in pixels.
    pub radius: f64,
    /// Quantized departure ratio, one of 0, 0.5 and 1.
    pub flow: f64,
    pub title: String,
}

impl StationDto {
    pub fn from(station: &Station, scale: &RadiusScale) -> Self {
        let traffic = station.traffic;
        Self {
            short_name: station.short_name.to_string(),
            name: station.name.as_ref().map(|name| name.to_string()),
            coordinate: station.coordinate,
            departures: traffic.departures,
            arrivals: traffic.arrivals,
            total_traffic: traffic.total_traffic,
            radius: scale.radius(traffic.total_traffic),
            flow: flow_bucket(&traffic),
            title: traffic.to_string(),
        }
    }
}
