use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dockflow::traffic::TimeFilter;
use tracing::warn;

use crate::{dto::StationDto, state::AppState};

pub async fn stations(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let filter: TimeFilter = match params.get("time") {
        Some(value) => value.parse().map_err(|err| {
            warn!("Rejected time filter: {err}");
            StatusCode::BAD_REQUEST
        })?,
        None => TimeFilter::All,
    };

    let guard = state.repository.read().await;
    let repository = guard.as_ref().ok_or(StatusCode::SERVICE_UNAVAILABLE)?;
    let stations = repository.traffic(filter);
    let scale = repository.radius_scale(filter);
    let result: Vec<_> = stations
        .iter()
        .map(|station| StationDto::from(station, &scale))
        .collect();
    Ok(Json(result).into_response())
}
