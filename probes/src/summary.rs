//! Structured child output for settled results.
//!
//! Each builder turns a payload into display lines. Absent fields produce no
//! line at all, never an empty placeholder.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use crate::payload::{AccountResponse, ApiMessage, AuthTestReport, HealthReport, LifecycleDetails, UserLifecycle};
use crate::tone::Tone;

/// One rendered line of a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// Sub-section heading.
    Heading(String),
    /// Status line prefixed with the tone's symbol.
    Item { tone: Tone, text: String },
    /// Verbatim block (tokens, raw server messages).
    Code(String),
}

impl Line {
    fn item(tone: Tone, text: impl Into<String>) -> Self {
        Self::Item { tone, text: text.into() }
    }

    /// Plain-text rendering used by the CLI.
    #[must_use]
    pub fn to_plain(&self) -> String {
        match self {
            Self::Heading(text) => text.clone(),
            Self::Item { tone, text } => format!("{} {text}", tone.symbol()),
            Self::Code(text) => format!("    {text}"),
        }
    }
}

#[must_use]
pub fn health_lines(report: &HealthReport) -> Vec<Line> {
    let status_tone = if report.status == crate::payload::HealthStatus::Healthy { Tone::Success } else { Tone::Warning };
    let (db_tone, db_label) = if report.supabase_connected { (Tone::Success, "Yes") } else { (Tone::Error, "No") };

    let mut lines = vec![
        Line::item(status_tone, format!("Status: {}", report.status)),
        Line::item(db_tone, format!("Supabase Connected: {db_label}")),
    ];
    if !report.message.trim().is_empty() {
        lines.push(Line::Code(report.message.clone()));
    }
    lines
}

/// JWT issuance block followed by the user verification block.
#[must_use]
pub fn jwt_lines(report: &AuthTestReport) -> Vec<Line> {
    let mut lines = vec![Line::Heading("JWT Generation:".to_owned())];
    lines.extend(report.message.iter().map(|msg| Line::item(Tone::Success, msg.clone())));
    if let Some(jwt) = report.issued_jwt() {
        lines.push(Line::Code(jwt.to_owned()));
    }

    lines.push(Line::Heading("User Lifecycle:".to_owned()));
    if report.has_user() {
        lines.push(Line::item(Tone::Success, "Status: Verified"));
    } else {
        lines.push(Line::item(Tone::Warning, "Status: Not Verified"));
    }
    if let Some(lifecycle) = &report.user_lifecycle {
        lines.extend(lifecycle_events(lifecycle));
    }
    lines
}

/// Lifecycle sub-events, falling back to the step summary when the backend
/// sent `details` instead of `userLifecycle`.
#[must_use]
pub fn lifecycle_lines(report: &AuthTestReport) -> Vec<Line> {
    let mut events = match (&report.user_lifecycle, &report.details) {
        (Some(lifecycle), _) => lifecycle_events(lifecycle),
        (None, Some(details)) => detail_events(details),
        (None, None) => Vec::new(),
    };
    if events.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![Line::Heading("User Lifecycle:".to_owned())];
    lines.append(&mut events);
    lines
}

/// Present sub-events in execution order, then the embedded error if any.
#[must_use]
pub fn lifecycle_events(lifecycle: &UserLifecycle) -> Vec<Line> {
    let mut lines = Vec::new();
    if let Some(user) = &lifecycle.created {
        lines.push(Line::item(Tone::Success, format!("signed up with user [{user}]")));
    }
    if let Some(user) = &lifecycle.signed_in {
        lines.push(Line::item(Tone::Success, format!("now signed in with user [{user}]")));
    }
    if let Some(user) = &lifecycle.deleted {
        lines.push(Line::item(Tone::Success, format!("deleted user [{user}]")));
    }
    if let Some(error) = &lifecycle.error {
        lines.push(Line::item(Tone::Error, format!("Error: {error}")));
    }
    lines
}

fn detail_events(details: &LifecycleDetails) -> Vec<Line> {
    [("Signup", &details.signup), ("Sign In", &details.signin), ("Delete", &details.delete)]
        .into_iter()
        .filter_map(|(label, outcome)| {
            outcome.as_ref().map(|outcome| {
                let tone = if outcome == "success" { Tone::Success } else { Tone::Error };
                Line::item(tone, format!("{label}: {outcome}"))
            })
        })
        .collect()
}

#[must_use]
pub fn message_lines(message: &ApiMessage) -> Vec<Line> {
    vec![Line::item(Tone::Success, message.message.clone())]
}

#[must_use]
pub fn account_lines(response: &AccountResponse) -> Vec<Line> {
    let mut lines = Vec::new();
    if let Some(message) = &response.message {
        lines.push(Line::item(Tone::Success, message.clone()));
    }
    if let Some(user) = &response.user {
        lines.push(Line::item(Tone::Neutral, format!("Username: {}", user.username)));
        if let Some(email) = &user.email {
            lines.push(Line::item(Tone::Neutral, format!("Email: {email}")));
        }
    }
    if let Some(error) = &response.error {
        lines.push(Line::item(Tone::Error, format!("Error: {error}")));
    }
    lines
}
