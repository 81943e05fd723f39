//! Root application component, HTML shell, and config context.
//!
//! The server provides an [`ApiConfig`] context before rendering; the shell
//! serializes it into a `<meta>` tag so the hydrated app targets the same
//! backend without any compile-time constant.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use probes::ApiConfig;

use crate::pages::home::HomePage;
use crate::util::config;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let meta_name = config::META_NAME;
    let injected = use_context::<ApiConfig>()
        .map(|api| config::encode_for_meta(&api))
        .unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=meta_name content=injected/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Resolves the API config (server context, else the injected meta tag) and
/// provides it to every probe component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = use_context::<ApiConfig>().unwrap_or_else(config::read_injected);
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/probe-console.css"/>
        <Title text="API Probe Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
