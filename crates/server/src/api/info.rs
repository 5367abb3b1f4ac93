use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dockflow::shared::Coordinate;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Info {
    pub stations: usize,
    pub trips: usize,
    pub center: Option<Coordinate>,
}

pub async fn info(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let guard = state.repository.read().await;
    let repository = guard.as_ref().ok_or(StatusCode::SERVICE_UNAVAILABLE)?;
    Ok(Json(Info {
        stations: repository.stations().len(),
        trips: repository.trips().len(),
        center: repository.center(),
    })
    .into_response())
}
