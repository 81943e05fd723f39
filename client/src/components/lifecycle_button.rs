//! User-lifecycle probe.
//!
//! One click, one request: the backend runs signup -> signin -> delete and
//! reports each step in a single `userLifecycle` object. Only the steps it
//! reports are rendered. An embedded `error` is a degraded success, not a
//! failed request.

use leptos::prelude::*;
use probes::summary::lifecycle_lines;
use probes::tone::lifecycle_tone;
use probes::{Action, ActionState, ApiConfig, AuthTestReport};

use crate::components::probe_panel::ProbePanel;
use crate::net::api;
use crate::state::action::dispatch;

/// `POST /api/auth/test/`, authenticated with `token` when one was issued
/// and with the configured development bearer otherwise.
#[component]
pub fn LifecycleButton(
    #[prop(into)] token: Signal<Option<String>>,
    #[prop(optional, into)] on_success: Option<Callback<AuthTestReport>>,
    #[prop(optional, into)] on_error: Option<Callback<String>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let state = RwSignal::new(ActionState::<AuthTestReport>::new());

    let on_trigger = Callback::new(move |()| {
        let config = config.clone();
        let issued = token.get_untracked();
        let bearer = config.bearer(issued.as_deref()).to_owned();
        dispatch(
            state,
            move || async move { api::run_user_lifecycle(&config, &bearer).await },
            on_success,
            on_error,
        );
    });

    view! {
        <ProbePanel
            action=Action::UserLifecycle
            tone=Signal::derive(move || state.with(lifecycle_tone))
            pending=Signal::derive(move || state.with(ActionState::is_pending))
            error_message=Signal::derive(move || state.with(|s| s.error_message().map(str::to_owned)))
            lines=Signal::derive(move || state.with(|s| s.result().map(lifecycle_lines)))
            on_trigger=on_trigger
            class=class
        />
    }
}
