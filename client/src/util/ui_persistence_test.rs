#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn templates_are_empty_without_storage() {
    assert_eq!(load_templates(), MessageTemplates::default());
    assert_eq!(load_raw(TEMPLATE_STORAGE_KEY), None);
}

#[test]
fn saving_without_storage_reports_failure() {
    let templates = MessageTemplates { status_update: "Hi".to_owned(), custom: String::new() };
    assert!(!save_templates(&templates));
}
