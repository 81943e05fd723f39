//! Renders result summary lines built by `probes::summary`.

#[cfg(test)]
#[path = "summary_list_test.rs"]
mod summary_list_test;

use leptos::prelude::*;
use probes::{Line, Tone};

fn item_class(tone: Tone) -> String {
    format!("probe__item {}", tone.css_class())
}

fn render_line(line: Line) -> AnyView {
    match line {
        Line::Heading(text) => view! { <h4 class="probe__heading">{text}</h4> }.into_any(),
        Line::Item { tone, text } => view! {
            <div class=item_class(tone)>
                <span class="probe__symbol">{tone.symbol()}</span>
                " "
                <span>{text}</span>
            </div>
        }
        .into_any(),
        Line::Code(text) => view! {
            <pre class="probe__code">
                <code>{text}</code>
            </pre>
        }
        .into_any(),
    }
}

#[component]
pub fn SummaryList(#[prop(into)] lines: Signal<Vec<Line>>) -> impl IntoView {
    view! {
        <div class="probe__lines">
            {move || lines.get().into_iter().map(render_line).collect_view()}
        </div>
    }
}
