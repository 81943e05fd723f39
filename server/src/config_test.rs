use std::collections::HashMap;

use super::*;
use probes::Environment;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// Port
// =============================================================

#[test]
fn port_defaults_to_3000() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn blank_port_uses_default() {
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn explicit_port_is_used() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn garbage_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ServerConfigError::InvalidPort(ref raw) if raw == "eighty"));
}

// =============================================================
// Embedded API config
// =============================================================

#[test]
fn api_config_follows_probe_env() {
    let config = ServerConfig::from_lookup(lookup(&[("PROBE_ENV", "production")])).unwrap();
    assert_eq!(config.api.environment, Environment::Production);
}

#[test]
fn api_base_url_override_is_applied() {
    let config =
        ServerConfig::from_lookup(lookup(&[("PROBE_API_BASE_URL", "http://127.0.0.1:9000/")])).unwrap();
    assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
}

#[test]
fn invalid_api_config_surfaces_as_api_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PROBE_ENV", "staging")])).unwrap_err();
    assert!(matches!(err, ServerConfigError::Api(ConfigError::UnknownEnvironment(_))));
}

// =============================================================
// Process environment
// =============================================================

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("PORT", "4100");
        std::env::set_var("PROBE_PATH_HEALTH", "/status/");
    }
    let config = ServerConfig::from_env();
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("PROBE_PATH_HEALTH");
    }
    let config = config.unwrap();
    assert_eq!(config.port, 4100);
    assert_eq!(config.api.url(probes::Action::Health), format!("{}/status/", config.api.base_url));
}
