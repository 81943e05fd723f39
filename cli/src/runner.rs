//! Headless probe execution.
//!
//! DESIGN
//! ======
//! Each probe drives the same [`ActionState`] machine the browser components
//! use: `begin`, one request, `settle`. The report layer then applies the same
//! tone functions, so a probe run from a terminal classifies exactly like a
//! click in the console.
//!
//! ERROR HANDLING
//! ==============
//! Request failures never escape as `Err`; they settle the state into its
//! error phase. Only building the HTTP client can fail.

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;

use std::time::Duration;

use probes::{
    AccountResponse, Action, ActionState, ApiConfig, ApiMessage, AuthTestReport, Credentials, DeleteRequest,
    HealthReport, HttpMethod, ProbeError,
};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const TIMEOUT_MESSAGE: &str = "Request timed out";

/// Outcome of one step of the client-side account chain.
#[derive(Debug)]
pub struct ChainStep {
    pub action: Action,
    pub state: ActionState<AccountResponse>,
}

pub struct ProbeRunner {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ProbeRunner {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: ApiConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn health(&self) -> ActionState<HealthReport> {
        self.execute(Action::Health, None, None::<&()>).await
    }

    pub async fn jwt(&self) -> ActionState<AuthTestReport> {
        self.execute(Action::Jwt, None, None::<&()>).await
    }

    /// Server-side lifecycle, authenticated with `token` or the dev bearer.
    pub async fn lifecycle(&self, token: Option<&str>) -> ActionState<AuthTestReport> {
        let bearer = self.config.bearer(token).to_owned();
        self.execute(Action::UserLifecycle, Some(&bearer), None::<&()>).await
    }

    pub async fn message(&self) -> ActionState<ApiMessage> {
        self.execute(Action::Message, None, None::<&()>).await
    }

    pub async fn signup(&self, credentials: &Credentials) -> ActionState<AccountResponse> {
        self.execute(Action::Signup, None, Some(credentials)).await
    }

    pub async fn signin(&self, credentials: &Credentials) -> ActionState<AccountResponse> {
        self.execute(Action::Signin, None, Some(credentials)).await
    }

    pub async fn delete(&self, username: &str) -> ActionState<AccountResponse> {
        let body = DeleteRequest { username: username.to_owned() };
        self.execute(Action::Delete, None, Some(&body)).await
    }

    /// Signup, signin, delete in order, stopping after the first failed step.
    pub async fn chain(&self, credentials: &Credentials) -> Vec<ChainStep> {
        let mut steps = Vec::with_capacity(3);
        for action in [Action::Signup, Action::Signin, Action::Delete] {
            let state = match action {
                Action::Signup => self.signup(credentials).await,
                Action::Signin => self.signin(credentials).await,
                _ => self.delete(&credentials.username).await,
            };
            let failed = state.error_message().is_some();
            steps.push(ChainStep { action, state });
            if failed {
                break;
            }
        }
        steps
    }

    async fn execute<T, B>(&self, action: Action, bearer: Option<&str>, body: Option<&B>) -> ActionState<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut state = ActionState::new();
        state.begin();
        state.settle(self.send(action, bearer, body).await);
        state
    }

    async fn send<T, B>(&self, action: Action, bearer: Option<&str>, body: Option<&B>) -> Result<T, ProbeError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let method = reqwest_method(action.method());
        let mut request = self.client.request(method, self.config.url(action));
        if let Some(token) = bearer {
            request = request.bearer_auth(token.trim());
        }
        request = match body {
            Some(body) => request.json(body),
            None if action.method() != HttpMethod::Get => request.header(CONTENT_TYPE, "application/json"),
            None => request,
        };

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            return Err(ProbeError::from_status(status.as_u16(), &text));
        }
        serde_json::from_str(&text).map_err(|e| ProbeError::decode(e.to_string()))
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn transport_error(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() { ProbeError::transport(TIMEOUT_MESSAGE) } else { ProbeError::transport(err.to_string()) }
}
