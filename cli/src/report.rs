//! Plain-text rendering of settled probes.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use probes::tone::result_title;
use probes::{Action, ActionState, Line, Tone};

/// Running count of probe outcomes by tone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub ok: usize,
    pub warned: usize,
    pub failed: usize,
}

impl Tally {
    pub fn record(&mut self, tone: Tone) {
        match tone {
            Tone::Success => self.ok += 1,
            Tone::Warning => self.warned += 1,
            Tone::Error => self.failed += 1,
            Tone::Neutral | Tone::Pending => {}
        }
    }

    pub fn summary(&self) -> String {
        format!("{} ok, {} warning, {} failed", self.ok, self.warned, self.failed)
    }
}

/// Header line with the tone tag, then the indented result summary or the
/// error message.
pub fn render<T>(action: Action, state: &ActionState<T>, tone: Tone, summarize: impl Fn(&T) -> Vec<Line>) -> Vec<String> {
    let mut out = vec![format!("{} {}", tone.tag(), result_title(action))];
    if let Some(result) = state.result() {
        out.extend(summarize(result).iter().map(|line| format!("  {}", line.to_plain())));
    }
    if let Some(message) = state.error_message() {
        out.push(format!("  {} Error: {message}", Tone::Error.symbol()));
    }
    out
}
