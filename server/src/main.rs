//! # server
//!
//! Axum host for the probe console: server-renders the Leptos app, serves the
//! WASM bundle from `/pkg`, and injects the backend-under-test config into the
//! page so the hydrated client never relies on a compile-time URL.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(ServerError::Dotenv(e.to_string()));
        }
    }
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        environment = config.api.environment.as_str(),
        base_url = %config.api.base_url,
        "probing backend"
    );

    let app = routes::app(config.api.clone())?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, "probe console listening");
    axum::serve(listener, app).await?;
    Ok(())
}
