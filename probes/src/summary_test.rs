use super::*;
use crate::payload::{AccountUser, HealthStatus};

fn texts(lines: &[Line]) -> Vec<String> {
    lines.iter().map(Line::to_plain).collect()
}

// =============================================================
// Health
// =============================================================

#[test]
fn healthy_report_shows_status_and_connection() {
    let report = HealthReport {
        status: HealthStatus::Healthy,
        message: "ok".to_owned(),
        supabase_connected: true,
        supabase_url_configured: None,
        supabase_key_configured: None,
    };
    let lines = health_lines(&report);
    assert_eq!(lines[0], Line::Item { tone: Tone::Success, text: "Status: healthy".to_owned() });
    assert_eq!(lines[1], Line::Item { tone: Tone::Success, text: "Supabase Connected: Yes".to_owned() });
    assert_eq!(lines[2], Line::Code("ok".to_owned()));
}

#[test]
fn disconnected_report_says_no_and_skips_blank_message() {
    let report = HealthReport {
        status: HealthStatus::Unhealthy,
        message: String::new(),
        supabase_connected: false,
        supabase_url_configured: Some(false),
        supabase_key_configured: Some(false),
    };
    let lines = health_lines(&report);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], Line::Item { tone: Tone::Error, text: "Supabase Connected: No".to_owned() });
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn only_present_lifecycle_events_render() {
    let lifecycle = UserLifecycle {
        created: Some("Random_abc".to_owned()),
        signed_in: Some("Random_abc".to_owned()),
        deleted: None,
        error: None,
    };
    assert_eq!(
        texts(&lifecycle_events(&lifecycle)),
        vec!["✓ signed up with user [Random_abc]", "✓ now signed in with user [Random_abc]"]
    );
}

#[test]
fn lifecycle_error_renders_last() {
    let lifecycle = UserLifecycle {
        created: Some("u".to_owned()),
        error: Some("signin failed".to_owned()),
        ..UserLifecycle::default()
    };
    let lines = lifecycle_events(&lifecycle);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], Line::Item { tone: Tone::Error, text: "Error: signin failed".to_owned() });
}

#[test]
fn lifecycle_lines_empty_when_nothing_reported() {
    assert!(lifecycle_lines(&AuthTestReport::default()).is_empty());
    let report = AuthTestReport { user_lifecycle: Some(UserLifecycle::default()), ..AuthTestReport::default() };
    assert!(lifecycle_lines(&report).is_empty());
}

#[test]
fn lifecycle_lines_fall_back_to_details() {
    let report = AuthTestReport {
        details: Some(LifecycleDetails {
            signup: Some("success".to_owned()),
            signin: Some("failed".to_owned()),
            delete: None,
        }),
        ..AuthTestReport::default()
    };
    assert_eq!(texts(&lifecycle_lines(&report)), vec!["User Lifecycle:", "✓ Signup: success", "✗ Sign In: failed"]);
}

// =============================================================
// JWT, message, account
// =============================================================

#[test]
fn jwt_lines_include_messages_token_and_verification() {
    let report = AuthTestReport {
        message: vec!["Success: generated JWT token".to_owned()],
        user: "service_role".to_owned(),
        jwt: "a.b.c".to_owned(),
        ..AuthTestReport::default()
    };
    assert_eq!(
        texts(&jwt_lines(&report)),
        vec![
            "JWT Generation:",
            "✓ Success: generated JWT token",
            "    a.b.c",
            "User Lifecycle:",
            "✓ Status: Verified"
        ]
    );
}

#[test]
fn jwt_lines_flag_missing_user() {
    let lines = jwt_lines(&AuthTestReport::default());
    assert!(lines.contains(&Line::Item { tone: Tone::Warning, text: "Status: Not Verified".to_owned() }));
    assert!(!lines.iter().any(|line| matches!(line, Line::Code(_))));
}

#[test]
fn message_lines_show_message() {
    let lines = message_lines(&ApiMessage { message: "API is working!".to_owned() });
    assert_eq!(texts(&lines), vec!["✓ API is working!"]);
}

#[test]
fn account_lines_render_user_fields() {
    let response = AccountResponse {
        message: Some("User created successfully".to_owned()),
        user: Some(AccountUser { username: "Random_abc".to_owned(), email: Some("a@b.co".to_owned()) }),
        error: None,
    };
    assert_eq!(
        texts(&account_lines(&response)),
        vec!["✓ User created successfully", "• Username: Random_abc", "• Email: a@b.co"]
    );
}
