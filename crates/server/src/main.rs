mod api;
mod config;
mod dto;
mod fetch;
mod state;

use crate::{config::Config, state::AppState};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting server...");
    let config = Config::from_env();
    let state = Arc::new(AppState::new(None));

    // Serve right away, data endpoints answer 503 until the load finishes
    let loader_state = state.clone();
    let loader_config = config.clone();
    tokio::spawn(async move {
        info!("Loading data...");
        let now = Instant::now();
        match fetch::load_repository(&loader_config).await {
            Ok(repository) => {
                info!(
                    "Loaded {} stations and {} trips in {:?}",
                    repository.stations().len(),
                    repository.trips().len(),
                    now.elapsed()
                );
                *loader_state.repository.write().await = Some(repository);
            }
            Err(err) => error!("Error loading or processing data: {err}"),
        }
    });

    let app = api::router(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
