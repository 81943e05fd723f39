use super::*;

#[test]
fn test_ids_use_action_prefix() {
    assert_eq!(test_id(Action::Health, "container"), "api-health-container");
    assert_eq!(test_id(Action::Jwt, "button"), "jwt-test-button");
    assert_eq!(test_id(Action::UserLifecycle, "status"), "user-lifecycle-status");
    assert_eq!(test_id(Action::Message, "status"), "api-message-status");
}

#[test]
fn container_class_combines_tone_and_extra() {
    assert_eq!(container_class(Tone::Success, ""), "probe probe--success");
    assert_eq!(container_class(Tone::Warning, " probe-grid__item "), "probe probe--warning probe-grid__item");
}

#[test]
fn container_class_differs_per_tone() {
    assert_ne!(container_class(Tone::Success, ""), container_class(Tone::Warning, ""));
    assert_ne!(container_class(Tone::Warning, ""), container_class(Tone::Error, ""));
}

#[test]
fn button_class_tracks_tone() {
    assert_eq!(button_class(Tone::Pending), "probe__button probe--pending");
    assert_eq!(button_class(Tone::Neutral), "probe__button probe--idle");
}
