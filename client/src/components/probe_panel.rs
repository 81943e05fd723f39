//! Shared chrome of an async action: trigger, result region, error region.
//!
//! The trigger is disabled while the action is pending. The result region is
//! only mounted when the state holds a result, and the error region only when
//! it holds an error message.

#[cfg(test)]
#[path = "probe_panel_test.rs"]
mod probe_panel_test;

use leptos::prelude::*;
use probes::tone::{result_title, trigger_label};
use probes::{Action, Line, Tone};

use crate::components::summary_list::SummaryList;

fn test_id(action: Action, part: &str) -> String {
    format!("{}-{part}", action.test_id())
}

fn container_class(tone: Tone, extra: &str) -> String {
    let base = format!("probe {}", tone.css_class());
    if extra.trim().is_empty() { base } else { format!("{base} {}", extra.trim()) }
}

fn button_class(tone: Tone) -> String {
    format!("probe__button {}", tone.css_class())
}

/// Presentational frame for one probe action.
#[component]
pub fn ProbePanel(
    action: Action,
    #[prop(into)] tone: Signal<Tone>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error_message: Signal<Option<String>>,
    /// Summary of the current result; `None` until the action succeeds.
    #[prop(into)]
    lines: Signal<Option<Vec<Line>>>,
    on_trigger: Callback<()>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let container_id = test_id(action, "container");
    let button_id = test_id(action, "button");
    let status_id = test_id(action, "status");
    let title = result_title(action);

    view! {
        <div class=move || container_class(tone.get(), &class) data-testid=container_id>
            <button
                class=move || button_class(tone.get())
                data-testid=button_id
                disabled=move || pending.get()
                aria-busy=move || if pending.get() { "true" } else { "false" }
                on:click=move |_| on_trigger.run(())
            >
                {move || trigger_label(action, pending.get())}
            </button>
            <Show when=move || lines.with(Option::is_some)>
                <div class="probe__status" data-testid=status_id.clone()>
                    <h3 class="probe__title">{title}</h3>
                    <SummaryList lines=Signal::derive(move || lines.get().unwrap_or_default())/>
                </div>
            </Show>
            <Show when=move || error_message.with(Option::is_some)>
                <div class="probe__error" data-testid="error-message">
                    <span class="probe__symbol">"✗"</span>
                    " Error: "
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
