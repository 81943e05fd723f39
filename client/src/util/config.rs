//! Startup configuration handed from the server to the hydrated app.
//!
//! The server renders the active [`ApiConfig`] as JSON into
//! `<meta name="probe-config">`. In the browser, [`read_injected`] parses it
//! back. A missing or malformed tag falls back to the development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use probes::ApiConfig;

pub const META_NAME: &str = "probe-config";

/// Serialize config for the shell's meta tag.
pub fn encode_for_meta(config: &ApiConfig) -> String {
    serde_json::to_string(config).unwrap_or_default()
}

/// Parse the meta tag content. `None` for blank or malformed content.
pub fn decode_from_meta(raw: &str) -> Option<ApiConfig> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    serde_json::from_str(raw).ok()
}

/// Read the config the server injected into the page.
pub fn read_injected() -> ApiConfig {
    #[cfg(feature = "hydrate")]
    {
        let selector = format!("meta[name=\"{META_NAME}\"]");
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        if let Some(config) = content.as_deref().and_then(decode_from_meta) {
            return config;
        }
        leptos::logging::warn!("probe config meta tag missing or malformed; using defaults");
        ApiConfig::default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ApiConfig::default()
    }
}
