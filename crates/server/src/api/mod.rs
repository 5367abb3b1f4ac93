mod info;
mod stations;
mod time;

pub use info::*;
pub use stations::*;
pub use time::*;

use std::sync::Arc;

use axum::routing::get;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/stations", get(stations))
        .route("/time", get(time))
        .route("/info", get(info))
        .with_state(state)
}
