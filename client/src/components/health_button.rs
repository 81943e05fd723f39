//! API health probe: backend verdict plus database connectivity.

use leptos::prelude::*;
use probes::summary::health_lines;
use probes::tone::health_tone;
use probes::{Action, ActionState, ApiConfig, HealthReport};

use crate::components::probe_panel::ProbePanel;
use crate::net::api;
use crate::state::action::dispatch;

/// `GET /api/health/`. Degraded or disconnected reports render as a warning.
#[component]
pub fn HealthButton(
    #[prop(optional, into)] on_success: Option<Callback<HealthReport>>,
    #[prop(optional, into)] on_error: Option<Callback<String>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let state = RwSignal::new(ActionState::<HealthReport>::new());

    let on_trigger = Callback::new(move |()| {
        let config = config.clone();
        dispatch(state, move || async move { api::fetch_health(&config).await }, on_success, on_error);
    });

    view! {
        <ProbePanel
            action=Action::Health
            tone=Signal::derive(move || state.with(health_tone))
            pending=Signal::derive(move || state.with(ActionState::is_pending))
            error_message=Signal::derive(move || state.with(|s| s.error_message().map(str::to_owned)))
            lines=Signal::derive(move || state.with(|s| s.result().map(health_lines)))
            on_trigger=on_trigger
            class=class
        />
    }
}
