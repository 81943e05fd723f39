//! Visual tone of each action, derived purely from its state.
//!
//! One function per action, applied identically by the browser UI and the CLI.
//! Degraded successes (2xx bodies reporting partial failure) get
//! [`Tone::Warning`], which is distinct from both success and error.

#[cfg(test)]
#[path = "tone_test.rs"]
mod tone_test;

use crate::action::{ActionState, Phase};
use crate::endpoint::Action;
use crate::payload::{AccountResponse, ApiMessage, AuthTestReport, HealthReport};

/// Display classification of an action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Neutral,
    Pending,
    Success,
    Warning,
    Error,
}

impl Tone {
    /// CSS modifier class applied to the probe container.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "probe--idle",
            Self::Pending => "probe--pending",
            Self::Success => "probe--success",
            Self::Warning => "probe--warning",
            Self::Error => "probe--error",
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Neutral => "•",
            Self::Pending => "…",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }

    /// Fixed-width tag used in CLI reports.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Neutral => "[ -- ]",
            Self::Pending => "[ .. ]",
            Self::Success => "[ OK ]",
            Self::Warning => "[WARN]",
            Self::Error => "[FAIL]",
        }
    }
}

fn tone_with<T>(state: &ActionState<T>, on_success: impl Fn(&T) -> Tone) -> Tone {
    match state.phase() {
        Phase::Idle => Tone::Neutral,
        Phase::Pending => Tone::Pending,
        Phase::Error => Tone::Error,
        Phase::Success => state.result().map_or(Tone::Warning, on_success),
    }
}

/// Healthy and connected is success; any other verdict is a warning.
#[must_use]
pub fn health_tone(state: &ActionState<HealthReport>) -> Tone {
    tone_with(state, |report| if report.is_fully_healthy() { Tone::Success } else { Tone::Warning })
}

/// A verified `user` is success; a token without a user is a warning.
/// Lifecycle data is not required for this action.
#[must_use]
pub fn jwt_tone(state: &ActionState<AuthTestReport>) -> Tone {
    tone_with(state, |report| if report.has_user() { Tone::Success } else { Tone::Warning })
}

/// Success only when the whole sequence completed; missing steps or an
/// embedded error are a degraded success.
#[must_use]
pub fn lifecycle_tone(state: &ActionState<AuthTestReport>) -> Tone {
    tone_with(state, |report| {
        let lifecycle_ok = report.user_lifecycle.as_ref().is_some_and(|lc| lc.error.is_none() && lc.deleted.is_some());
        let details_ok = report.details.as_ref().is_some_and(|d| d.all_succeeded());
        if lifecycle_ok || (report.user_lifecycle.is_none() && details_ok) {
            Tone::Success
        } else {
            Tone::Warning
        }
    })
}

#[must_use]
pub fn message_tone(state: &ActionState<ApiMessage>) -> Tone {
    tone_with(state, |_| Tone::Success)
}

/// Account endpoints answer 2xx with an `error` field on partial failure.
#[must_use]
pub fn account_tone(state: &ActionState<AccountResponse>) -> Tone {
    tone_with(state, |response| if response.error.is_none() { Tone::Success } else { Tone::Warning })
}

/// Trigger label, swapped while the request is in flight.
#[must_use]
pub fn trigger_label(action: Action, pending: bool) -> &'static str {
    match (action, pending) {
        (Action::Health, false) => "Check API Health",
        (Action::Health, true) => "Checking...",
        (Action::Jwt, false) => "Test JWT",
        (Action::Jwt, true) => "Requesting token...",
        (Action::UserLifecycle, false) => "Test User Lifecycle",
        (Action::UserLifecycle, true) => "Testing...",
        (Action::Message, false) => "Get API Message",
        (Action::Message, true) => "Getting message...",
        (Action::Signup, false) => "Sign Up",
        (Action::Signin, false) => "Sign In",
        (Action::Delete, false) => "Delete User",
        (Action::Signup | Action::Signin | Action::Delete, true) => "Working...",
    }
}

/// Heading shown above a settled result.
#[must_use]
pub fn result_title(action: Action) -> &'static str {
    match action {
        Action::Health => "API Health Status:",
        Action::Jwt => "JWT Test Result:",
        Action::UserLifecycle => "User Lifecycle Test Result:",
        Action::Message => "API Message:",
        Action::Signup => "Signup Result:",
        Action::Signin => "Sign In Result:",
        Action::Delete => "Delete Result:",
    }
}
