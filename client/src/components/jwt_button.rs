//! JWT issuance probe.

use leptos::prelude::*;
use probes::summary::jwt_lines;
use probes::tone::jwt_tone;
use probes::{Action, ActionState, ApiConfig, AuthTestReport};

use crate::components::probe_panel::ProbePanel;
use crate::net::api;
use crate::state::action::dispatch;

/// `POST /api/auth/jwt/test/`. The parent usually listens on `on_success`
/// to hand the issued token to the lifecycle probe.
#[component]
pub fn JwtButton(
    #[prop(optional, into)] on_success: Option<Callback<AuthTestReport>>,
    #[prop(optional, into)] on_error: Option<Callback<String>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let state = RwSignal::new(ActionState::<AuthTestReport>::new());

    let on_trigger = Callback::new(move |()| {
        let config = config.clone();
        dispatch(state, move || async move { api::issue_jwt(&config).await }, on_success, on_error);
    });

    view! {
        <ProbePanel
            action=Action::Jwt
            tone=Signal::derive(move || state.with(jwt_tone))
            pending=Signal::derive(move || state.with(ActionState::is_pending))
            error_message=Signal::derive(move || state.with(|s| s.error_message().map(str::to_owned)))
            lines=Signal::derive(move || state.with(|s| s.result().map(jwt_lines)))
            on_trigger=on_trigger
            class=class
        />
    }
}
