//! Probe console page: one panel per backend action.
//!
//! The probes run independently. The only shared state is the token issued
//! by the JWT probe, which the lifecycle probe sends as its bearer when
//! present.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use probes::{ApiConfig, AuthTestReport};

use crate::components::health_button::HealthButton;
use crate::components::jwt_button::JwtButton;
use crate::components::lifecycle_button::LifecycleButton;
use crate::components::message_button::MessageButton;

/// Token the lifecycle probe should reuse, if the report carried one.
fn token_from_report(report: &AuthTestReport) -> Option<String> {
    report.issued_jwt().map(str::to_owned)
}

fn target_label(config: &ApiConfig) -> String {
    if config.base_url.is_empty() {
        format!("{} (same origin)", config.environment.as_str())
    } else {
        format!("{} ({})", config.environment.as_str(), config.base_url)
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let target = target_label(&config);
    let issued_jwt = RwSignal::new(None::<String>);

    let on_jwt = Callback::new(move |report: AuthTestReport| {
        if let Some(token) = token_from_report(&report) {
            issued_jwt.set(Some(token));
        }
    });

    view! {
        <main class="probe-console">
            <header class="probe-console__header">
                <h1>"API Probe Console"</h1>
                <p class="probe-console__target" data-testid="probe-target">
                    "Target: "
                    {target}
                </p>
            </header>
            <section class="probe-grid">
                <HealthButton class="probe-grid__item"/>
                <JwtButton class="probe-grid__item" on_success=on_jwt/>
                <LifecycleButton class="probe-grid__item" token=issued_jwt/>
                <MessageButton class="probe-grid__item"/>
            </section>
        </main>
    }
}
