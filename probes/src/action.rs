//! Request/status/error state machine behind every probe action.
//!
//! DESIGN
//! ======
//! `idle --begin--> pending --succeed--> success` and `pending --fail--> error`;
//! `success` and `error` re-enter `pending` on the next `begin`. There is no
//! terminal state. Fields are private so the result/error exclusivity cannot
//! be broken from outside: every transition writes all three together.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Discrete status of one async action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The last request settled with a parsed payload.
    Success,
    /// The last request failed.
    Error,
}

impl Phase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient per-component state of one action.
///
/// `result` is present only in [`Phase::Success`] and `error_message` only in
/// [`Phase::Error`].
#[derive(Clone, Debug, PartialEq)]
pub struct ActionState<T> {
    phase: Phase,
    result: Option<T>,
    error_message: Option<String>,
}

impl<T> Default for ActionState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ActionState<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { phase: Phase::Idle, result: None, error_message: None }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    /// Start a new invocation.
    ///
    /// Clears any previous result or error and moves to [`Phase::Pending`].
    /// Returns `false` and leaves the state untouched when a request is
    /// already in flight, so callers must not issue another one.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        self.phase = Phase::Pending;
        self.result = None;
        self.error_message = None;
        true
    }

    /// Settle with a successful payload. The last settlement wins.
    pub fn succeed(&mut self, value: T) {
        self.phase = Phase::Success;
        self.result = Some(value);
        self.error_message = None;
    }

    /// Settle with a failure message. The last settlement wins.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = Phase::Error;
        self.result = None;
        self.error_message = Some(message.into());
    }

    /// Settle from a request outcome, rendering the error with `Display`.
    pub fn settle<E: Display>(&mut self, outcome: Result<T, E>) {
        match outcome {
            Ok(value) => self.succeed(value),
            Err(err) => self.fail(err.to_string()),
        }
    }
}
