use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
    assert_eq!(bearer_header("  test-token "), "Bearer test-token");
}

#[test]
fn only_bodied_methods_send_json_content_type() {
    assert!(!needs_json_content_type(HttpMethod::Get));
    assert!(needs_json_content_type(HttpMethod::Post));
    assert!(needs_json_content_type(HttpMethod::Delete));
}

#[test]
fn not_available_message_is_user_readable() {
    assert_eq!(ProbeError::transport(NOT_AVAILABLE).to_string(), NOT_AVAILABLE);
}
