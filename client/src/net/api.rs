//! REST calls against the backend under test.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error, since probes only
//! run from a click in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<T, ProbeError>`. Non-2xx responses read the
//! body so server-supplied `message`/`error` text reaches the user; transport
//! failures keep the `gloo-net` description.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use probes::{Action, ApiConfig, ApiMessage, AuthTestReport, HealthReport, HttpMethod, ProbeError};
use serde::de::DeserializeOwned;

#[cfg(any(test, not(feature = "hydrate")))]
const NOT_AVAILABLE: &str = "probe requests are only available in the browser";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token.trim())
}

#[cfg(any(test, feature = "hydrate"))]
fn needs_json_content_type(method: HttpMethod) -> bool {
    !matches!(method, HttpMethod::Get)
}

/// Check backend and database health via `GET /api/health/`.
///
/// # Errors
///
/// Returns a [`ProbeError`] for transport failures, non-2xx statuses, or an
/// unparseable body.
pub async fn fetch_health(config: &ApiConfig) -> Result<HealthReport, ProbeError> {
    request_json(config, Action::Health, None).await
}

/// Request a service-role JWT via `POST /api/auth/jwt/test/`.
///
/// # Errors
///
/// See [`fetch_health`].
pub async fn issue_jwt(config: &ApiConfig) -> Result<AuthTestReport, ProbeError> {
    request_json(config, Action::Jwt, None).await
}

/// Run the server-side signup -> signin -> delete sequence via
/// `POST /api/auth/test/`, authenticated with `bearer`.
///
/// # Errors
///
/// See [`fetch_health`].
pub async fn run_user_lifecycle(config: &ApiConfig, bearer: &str) -> Result<AuthTestReport, ProbeError> {
    request_json(config, Action::UserLifecycle, Some(bearer)).await
}

/// Fetch the API greeting via `GET /api/test/`.
///
/// # Errors
///
/// See [`fetch_health`].
pub async fn fetch_message(config: &ApiConfig) -> Result<ApiMessage, ProbeError> {
    request_json(config, Action::Message, None).await
}

async fn request_json<T: DeserializeOwned>(
    config: &ApiConfig,
    action: Action,
    bearer: Option<&str>,
) -> Result<T, ProbeError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::{Method, RequestBuilder};

        let method = action.method();
        let url = config.url(action);
        let mut builder = RequestBuilder::new(&url).method(match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        });
        if needs_json_content_type(method) {
            builder = builder.header("Content-Type", "application/json");
        }
        if let Some(token) = bearer {
            builder = builder.header("Authorization", &bearer_header(token));
        }

        let resp = builder.send().await.map_err(|e| ProbeError::transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ProbeError::transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ProbeError::from_status(status, &body));
        }
        serde_json::from_str(&body).map_err(|e| ProbeError::decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, action, bearer);
        Err(ProbeError::transport(NOT_AVAILABLE))
    }
}
