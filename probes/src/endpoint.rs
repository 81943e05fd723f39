//! Endpoint catalog and API target configuration.
//!
//! Every action has exactly one canonical method and default path. Paths and
//! the base URL are configuration injected at startup (server env, CLI flags)
//! rather than constants keyed off a build flag.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DEVELOPMENT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PRODUCTION_BASE_URL: &str = "https://antelope-api-isolate-8beb50b26a2a.herokuapp.com";
pub const DEFAULT_DEV_BEARER: &str = "test-token";

/// Error returned when building an [`ApiConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown environment '{0}' (expected 'development' or 'production')")]
    UnknownEnvironment(String),
    #[error("invalid base URL '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),
    #[error("invalid path '{path}' for {action}: must start with '/'")]
    InvalidPath { action: &'static str, path: String },
    #[error("unknown action '{0}'")]
    UnknownAction(String),
}

/// HTTP verb used by an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// One backend endpoint exercised by a probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Health,
    Jwt,
    UserLifecycle,
    Message,
    Signup,
    Signin,
    Delete,
}

impl Action {
    pub const ALL: [Self; 7] = [
        Self::Health,
        Self::Jwt,
        Self::UserLifecycle,
        Self::Message,
        Self::Signup,
        Self::Signin,
        Self::Delete,
    ];

    /// Short identifier used for CLI arguments and env overrides.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Jwt => "jwt",
            Self::UserLifecycle => "lifecycle",
            Self::Message => "message",
            Self::Signup => "signup",
            Self::Signin => "signin",
            Self::Delete => "delete",
        }
    }

    #[must_use]
    pub fn method(self) -> HttpMethod {
        match self {
            Self::Health | Self::Message => HttpMethod::Get,
            Self::Jwt | Self::UserLifecycle | Self::Signup | Self::Signin => HttpMethod::Post,
            Self::Delete => HttpMethod::Delete,
        }
    }

    #[must_use]
    pub fn default_path(self) -> &'static str {
        match self {
            Self::Health => "/api/health/",
            Self::Jwt => "/api/auth/jwt/test/",
            Self::UserLifecycle => "/api/auth/test/",
            Self::Message => "/api/test/",
            Self::Signup => "/api/auth/signup/",
            Self::Signin => "/api/auth/signin/",
            Self::Delete => "/api/auth/delete/",
        }
    }

    /// Prefix for the `data-testid` hooks of this action's UI.
    #[must_use]
    pub fn test_id(self) -> &'static str {
        match self {
            Self::Health => "api-health",
            Self::Jwt => "jwt-test",
            Self::UserLifecycle => "user-lifecycle",
            Self::Message => "api-message",
            Self::Signup => "signup",
            Self::Signin => "signin",
            Self::Delete => "delete",
        }
    }

    /// Env var overriding this action's path, e.g. `PROBE_PATH_HEALTH`.
    #[must_use]
    pub fn path_env_var(self) -> String {
        format!("PROBE_PATH_{}", self.key().to_ascii_uppercase())
    }

    /// Look up an action by its [`Action::key`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownAction`] for unrecognized keys.
    pub fn from_key(key: &str) -> Result<Self, ConfigError> {
        let wanted = key.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|action| action.key() == wanted)
            .ok_or_else(|| ConfigError::UnknownAction(key.to_owned()))
    }
}

/// Deployment target of the backend under test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parse `development`/`dev` or `production`/`prod`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnvironment`] for anything else.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::UnknownEnvironment(raw.to_owned())),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    #[must_use]
    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::Development => DEFAULT_DEVELOPMENT_BASE_URL,
            Self::Production => DEFAULT_PRODUCTION_BASE_URL,
        }
    }
}

/// Path of every action, relative to the base URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub health: String,
    pub jwt: String,
    pub lifecycle: String,
    pub message: String,
    pub signup: String,
    pub signin: String,
    pub delete: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            health: Action::Health.default_path().to_owned(),
            jwt: Action::Jwt.default_path().to_owned(),
            lifecycle: Action::UserLifecycle.default_path().to_owned(),
            message: Action::Message.default_path().to_owned(),
            signup: Action::Signup.default_path().to_owned(),
            signin: Action::Signin.default_path().to_owned(),
            delete: Action::Delete.default_path().to_owned(),
        }
    }
}

impl Endpoints {
    #[must_use]
    pub fn path(&self, action: Action) -> &str {
        match action {
            Action::Health => &self.health,
            Action::Jwt => &self.jwt,
            Action::UserLifecycle => &self.lifecycle,
            Action::Message => &self.message,
            Action::Signup => &self.signup,
            Action::Signin => &self.signin,
            Action::Delete => &self.delete,
        }
    }

    /// Override one action's path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPath`] unless `path` starts with `/`.
    pub fn set(&mut self, action: Action, path: &str) -> Result<(), ConfigError> {
        let path = path.trim();
        if !path.starts_with('/') {
            return Err(ConfigError::InvalidPath { action: action.key(), path: path.to_owned() });
        }
        let slot = match action {
            Action::Health => &mut self.health,
            Action::Jwt => &mut self.jwt,
            Action::UserLifecycle => &mut self.lifecycle,
            Action::Message => &mut self.message,
            Action::Signup => &mut self.signup,
            Action::Signin => &mut self.signin,
            Action::Delete => &mut self.delete,
        };
        path.clone_into(slot);
        Ok(())
    }
}

/// Where and how probes reach the backend under test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub environment: Environment,
    /// Base URL without trailing slash. Empty means same-origin relative URLs.
    pub base_url: String,
    pub endpoints: Endpoints,
    /// Bearer sent to the lifecycle endpoint when no JWT has been issued yet.
    pub dev_bearer: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl ApiConfig {
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            base_url: environment.default_base_url().to_owned(),
            endpoints: Endpoints::default(),
            dev_bearer: DEFAULT_DEV_BEARER.to_owned(),
        }
    }

    /// Replace the base URL, validating the scheme and dropping trailing `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for a non-empty URL without an
    /// `http://` or `https://` scheme.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PROBE_ENV`: `development` (default) or `production`
    /// - `PROBE_API_BASE_URL`: overrides the environment's default base URL
    /// - `PROBE_DEV_BEARER`: default `test-token`
    /// - `PROBE_PATH_<ACTION>`: per-action path, e.g. `PROBE_PATH_HEALTH`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when any provided value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup; blank values count as unset.
    ///
    /// # Errors
    ///
    /// Same as [`ApiConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = match get("PROBE_ENV") {
            Some(raw) => Environment::parse(&raw)?,
            None => Environment::default(),
        };
        let mut config = Self::for_environment(environment);
        if let Some(base_url) = get("PROBE_API_BASE_URL") {
            config = config.with_base_url(&base_url)?;
        }
        if let Some(bearer) = get("PROBE_DEV_BEARER") {
            config.dev_bearer = bearer.trim().to_owned();
        }
        for action in Action::ALL {
            if let Some(path) = get(&action.path_env_var()) {
                config.endpoints.set(action, &path)?;
            }
        }
        Ok(config)
    }

    /// Absolute (or same-origin) URL for an action.
    #[must_use]
    pub fn url(&self, action: Action) -> String {
        format!("{}{}", self.base_url, self.endpoints.path(action))
    }

    /// Bearer for the lifecycle endpoint: the issued token when present,
    /// otherwise the configured development bearer.
    #[must_use]
    pub fn bearer<'a>(&'a self, issued: Option<&'a str>) -> &'a str {
        match issued.map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => &self.dev_bearer,
        }
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw.to_owned()))
    }
}
