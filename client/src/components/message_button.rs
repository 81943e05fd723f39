//! API message probe: the simplest reachability check.

use leptos::prelude::*;
use probes::summary::message_lines;
use probes::tone::message_tone;
use probes::{Action, ActionState, ApiConfig, ApiMessage};

use crate::components::probe_panel::ProbePanel;
use crate::net::api;
use crate::state::action::dispatch;

/// `GET /api/test/`.
#[component]
pub fn MessageButton(
    #[prop(optional, into)] on_success: Option<Callback<ApiMessage>>,
    #[prop(optional, into)] on_error: Option<Callback<String>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let state = RwSignal::new(ActionState::<ApiMessage>::new());

    let on_trigger = Callback::new(move |()| {
        let config = config.clone();
        dispatch(state, move || async move { api::fetch_message(&config).await }, on_success, on_error);
    });

    view! {
        <ProbePanel
            action=Action::Message
            tone=Signal::derive(move || state.with(message_tone))
            pending=Signal::derive(move || state.with(ActionState::is_pending))
            error_message=Signal::derive(move || state.with(|s| s.error_message().map(str::to_owned)))
            lines=Signal::derive(move || state.with(|s| s.result().map(message_lines)))
            on_trigger=on_trigger
            class=class
        />
    }
}
