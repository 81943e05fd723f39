use super::*;
use probes::Environment;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["probe-cli"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn timeout_defaults_to_fifteen_seconds() {
    let cli = parse(&["--env", "development", "health"]);
    assert_eq!(cli.timeout_secs, 15);
    assert!(matches!(cli.command, Command::Health));
}

#[test]
fn lifecycle_accepts_token() {
    let cli = parse(&["lifecycle", "--token", "abc"]);
    assert!(matches!(cli.command, Command::Lifecycle { token: Some(ref t) } if t == "abc"));
}

#[test]
fn delete_requires_username() {
    assert!(Cli::try_parse_from(["probe-cli", "delete"]).is_err());
}

#[test]
fn signin_requires_username_and_password() {
    assert!(Cli::try_parse_from(["probe-cli", "signin"]).is_err());
    assert!(Cli::try_parse_from(["probe-cli", "signin", "--username", "alice"]).is_err());
    let cli = parse(&["signin", "--username", "alice", "--password", "pw"]);
    assert!(matches!(
        cli.command,
        Command::Signin { ref username, ref password } if username == "alice" && password == "pw"
    ));
}

#[test]
fn signup_without_flags_parses() {
    let cli = parse(&["signup"]);
    assert!(matches!(cli.command, Command::Signup(AccountArgs { username: None, password: None })));
}

// =============================================================
// Config layering
// =============================================================

#[test]
fn flags_select_environment_and_base_url() {
    let cli = parse(&["--env", "production", "--base-url", "http://127.0.0.1:9/", "message"]);
    let config = build_config(&cli).unwrap();
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.base_url, "http://127.0.0.1:9");
}

#[test]
fn production_flag_without_base_url_uses_production_default() {
    let cli = parse(&["--env", "prod", "--base-url", "", "health"]);
    let config = build_config(&cli).unwrap();
    assert_eq!(config.base_url, Environment::Production.default_base_url());
}

#[test]
fn bad_environment_is_a_config_error() {
    let cli = parse(&["--env", "staging", "health"]);
    assert!(matches!(build_config(&cli), Err(ConfigError::UnknownEnvironment(_))));
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn explicit_credentials_are_used() {
    let args = AccountArgs { username: Some("alice".to_owned()), password: Some("pw".to_owned()) };
    let credentials = resolve_credentials(args).unwrap();
    assert_eq!(credentials.username, "alice");
    assert_eq!(credentials.password, "pw");
}

#[test]
fn missing_credentials_are_generated() {
    let credentials = resolve_credentials(AccountArgs { username: None, password: None }).unwrap();
    assert!(credentials.username.starts_with("Random_"));
    assert_ne!(credentials.username, throwaway_credentials().username);
}

#[test]
fn half_credentials_are_rejected() {
    let args = AccountArgs { username: Some("alice".to_owned()), password: None };
    assert!(matches!(resolve_credentials(args), Err(CliError::PartialCredentials)));
}
