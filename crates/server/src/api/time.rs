use std::collections::HashMap;

use axum::{
    Json,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dockflow::shared::format_minutes;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TimeLabel {
    pub minutes: i64,
    pub label: String,
}

pub async fn time(Query(params): Query<HashMap<String, String>>) -> Result<Response, StatusCode> {
    let minutes: i64 = params
        .get("minutes")
        .ok_or(StatusCode::BAD_REQUEST)?
        .parse()
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    let label = format_minutes(minutes).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(Json(TimeLabel { minutes, label }).into_response())
}
