//! Failure taxonomy for probe requests.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends up as a short human-readable message shown inline next
//! to the trigger. Server-supplied text wins over generic per-status text,
//! which wins over the transport fallback. A 2xx body that reports a partial
//! failure is not an error at all; it is handled as a degraded success by the
//! tone mapping.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Message used when the transport gives no usable description.
pub const TRANSPORT_FALLBACK: &str = "Failed to reach API";

/// Why a probe request did not produce a payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// The request never got a response (unreachable, aborted, timed out).
    #[error("{0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The backend answered 2xx but the body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ProbeError {
    /// Transport failure, falling back to [`TRANSPORT_FALLBACK`] for blank detail.
    #[must_use]
    pub fn transport(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if detail.trim().is_empty() {
            Self::Transport(TRANSPORT_FALLBACK.to_owned())
        } else {
            Self::Transport(detail)
        }
    }

    /// Non-2xx response. `body` is the raw response text, JSON or not.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| status_fallback_message(status));
        Self::Status { status, message }
    }

    #[must_use]
    pub fn decode(detail: impl Into<String>) -> Self {
        Self::Decode(detail.into())
    }

    /// HTTP status for [`ProbeError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Generic text for a status the server did not explain.
#[must_use]
pub fn status_fallback_message(status: u16) -> String {
    match status {
        401 => "Unauthorized".to_owned(),
        404 => "API endpoint not found".to_owned(),
        500 => "Internal server error".to_owned(),
        other => format!("Request failed with status {other}"),
    }
}

/// Pull a `message` (string or list of strings) or `error` field out of a
/// JSON error body.
fn server_message(body: &str) -> Option<String> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return None,
    };
    field_text(value.get("message")).or_else(|| field_text(value.get("error")))
}

fn field_text(field: Option<&Value>) -> Option<String> {
    let text = match field? {
        Value::String(text) => text.trim().to_owned(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}
