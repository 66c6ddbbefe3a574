use super::*;

#[test]
fn both_fields_are_required() {
    assert!(credentials_ready("admin", "secret"));
    assert!(!credentials_ready("  ", "secret"));
    assert!(!credentials_ready("admin", ""));
}

#[test]
fn password_whitespace_is_significant() {
    assert!(credentials_ready("admin", " "));
}
