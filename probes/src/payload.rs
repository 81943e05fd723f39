//! Wire payloads returned by the backend under test.
//!
//! Field names follow the backend's JSON exactly; where the backend mixes
//! naming styles (`supabase_connected` next to `userLifecycle`) the serde
//! renames keep the Rust side in snake case.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Health verdict reported by `GET /api/health/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    Degraded,
    /// Any value the backend sends that this build does not recognize.
    #[serde(other)]
    Unknown,
}

impl HealthStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
            Self::Degraded => "degraded",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `GET /api/health/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default)]
    pub supabase_connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supabase_url_configured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supabase_key_configured: Option<bool>,
}

impl HealthReport {
    /// Fully healthy: backend says so and the database link is up.
    #[must_use]
    pub fn is_fully_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy && self.supabase_connected
    }
}

/// Sub-events of the server-side signup -> signin -> delete sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLifecycle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, rename = "signedIn", skip_serializing_if = "Option::is_none")]
    pub signed_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UserLifecycle {
    /// All three steps reported and no embedded error.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.created.is_some() && self.signed_in.is_some() && self.deleted.is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.created.is_none() && self.signed_in.is_none() && self.deleted.is_none() && self.error.is_none()
    }
}

/// Per-step outcome summary some backend builds return instead of
/// [`UserLifecycle`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
}

impl LifecycleDetails {
    /// Every step present and reported as `success`.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        [&self.signup, &self.signin, &self.delete]
            .iter()
            .all(|step| step.as_deref() == Some("success"))
    }
}

/// Body of the JWT test and user-lifecycle endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTestReport {
    /// Progress messages. The backend sends either a list or a single string.
    #[serde(default, deserialize_with = "one_or_many")]
    pub message: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub jwt: String,
    #[serde(default, rename = "userLifecycle", skip_serializing_if = "Option::is_none")]
    pub user_lifecycle: Option<UserLifecycle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<LifecycleDetails>,
}

impl AuthTestReport {
    #[must_use]
    pub fn has_user(&self) -> bool {
        !self.user.trim().is_empty()
    }

    /// The issued token, if the backend returned a non-empty one.
    #[must_use]
    pub fn issued_jwt(&self) -> Option<&str> {
        let jwt = self.jwt.trim();
        if jwt.is_empty() { None } else { Some(jwt) }
    }
}

/// Body of `GET /api/test/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// User summary embedded in account responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUser {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body of the signup, signin, and delete endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request body for signup and signin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Throwaway credentials derived from a random lowercase token.
    #[must_use]
    pub fn throwaway(token: &str) -> Self {
        let token: String = token.chars().filter(char::is_ascii_alphanumeric).collect::<String>().to_ascii_lowercase();
        let (name_part, pass_part) = token.split_at(token.len().min(8));
        Self {
            username: format!("Random_{name_part}"),
            password: format!("Pw{pass_part}!9"),
        }
    }
}

/// Request body for account deletion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub username: String,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(text)) if text.is_empty() => Vec::new(),
        Some(OneOrMany::One(text)) => vec![text],
        Some(OneOrMany::Many(items)) => items,
    })
}

/// Explicit `null` reads the same as an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
