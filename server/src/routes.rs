//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console host has no API of its own beyond a liveness check and the
//! config it hands to the browser. Every page is server-rendered by Leptos
//! with the [`ApiConfig`] provided as context, which the shell serializes
//! into a `<meta>` tag for hydration.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, extract::State};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use probes::ApiConfig;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Host-level routes that do not render the app.
fn console_routes(api: ApiConfig) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/console/config", get(console_config))
        .with_state(api)
}

/// Full app: console routes, Leptos SSR, and the `/pkg` bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` / `LEPTOS_*` environment).
pub fn app(api: ApiConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let api = api.clone();
                move || provide_context(api.clone())
            },
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options);

    Ok(console_routes(api)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn console_config(State(api): State<ApiConfig>) -> Json<ApiConfig> {
    Json(api)
}
