//! Click-handler core shared by every probe component.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use std::future::Future;

use leptos::prelude::*;
use probes::{ActionState, ProbeError};

/// Start one probe invocation against `state`.
///
/// Does nothing while a request is already in flight, so `request` is only
/// called when the state machine accepted the new invocation. On settlement
/// the matching callback runs with the parsed payload or the error message.
/// A component unmounted before settlement drops the outcome silently.
pub fn dispatch<T, F, Fut>(
    state: RwSignal<ActionState<T>>,
    request: F,
    on_success: Option<Callback<T>>,
    on_error: Option<Callback<String>>,
) where
    T: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ProbeError>> + 'static,
{
    if !begin(state) {
        return;
    }

    let pending = request();
    leptos::task::spawn_local(async move {
        settle(state, pending.await, on_success, on_error);
    });
}

/// Move `state` to pending. `false` while a request is in flight or after
/// the signal was disposed.
fn begin<T>(state: RwSignal<ActionState<T>>) -> bool
where
    T: Send + Sync + 'static,
{
    state.try_update(ActionState::begin).unwrap_or(false)
}

/// Record the outcome and notify the matching callback.
fn settle<T>(
    state: RwSignal<ActionState<T>>,
    outcome: Result<T, ProbeError>,
    on_success: Option<Callback<T>>,
    on_error: Option<Callback<String>>,
) where
    T: Clone + Send + Sync + 'static,
{
    match outcome {
        Ok(value) => {
            if state.try_update(|s| s.succeed(value.clone())).is_none() {
                return;
            }
            if let Some(callback) = on_success {
                callback.run(value);
            }
        }
        Err(err) => {
            let message = err.to_string();
            leptos::logging::warn!("probe request failed: {message}");
            if state.try_update(|s| s.fail(message.clone())).is_none() {
                return;
            }
            if let Some(callback) = on_error {
                callback.run(message);
            }
        }
    }
}
