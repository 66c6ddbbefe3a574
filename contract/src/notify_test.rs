use super::*;

#[test]
fn editable_types_carry_trimmed_message() {
    let body = serde_json::to_value(NotifyRequest::new(NotificationType::Custom, "  Call us back  ")).unwrap();
    assert_eq!(body, serde_json::json!({ "notificationType": "custom", "customMessage": "Call us back" }));
}

#[test]
fn fixed_types_drop_message() {
    let body = serde_json::to_value(NotifyRequest::new(NotificationType::Approval, "ignored")).unwrap();
    assert_eq!(body, serde_json::json!({ "notificationType": "approval" }));
}

#[test]
fn blank_custom_message_cannot_be_sent() {
    assert!(!NotifyRequest::can_send(NotificationType::Custom, "   "));
    assert!(NotifyRequest::can_send(NotificationType::StatusUpdate, ""));
    assert!(NotifyRequest::can_send(NotificationType::Received, ""));
}

#[test]
fn initial_message_comes_from_templates() {
    let templates = MessageTemplates { status_update: "Hi {{name}}".into(), custom: "Reminder".into() };
    assert_eq!(templates.initial_message(NotificationType::StatusUpdate), "Hi {{name}}");
    assert_eq!(templates.initial_message(NotificationType::Custom), "Reminder");
    assert_eq!(templates.initial_message(NotificationType::DocumentReminder), "");
}

#[test]
fn stored_templates_tolerate_partial_and_corrupt_json() {
    assert_eq!(
        MessageTemplates::from_stored(Some(r#"{"custom":"x"}"#)),
        MessageTemplates { status_update: String::new(), custom: "x".into() }
    );
    assert_eq!(MessageTemplates::from_stored(Some("{oops")), MessageTemplates::default());
    assert_eq!(MessageTemplates::from_stored(None), MessageTemplates::default());
}

#[test]
fn picker_and_history_labels_differ_only_for_approval() {
    assert_eq!(NotificationType::Approval.picker_label(), "Approval Notification");
    assert_eq!(NotificationType::Approval.history_label(), "Approval");
    assert_eq!(NotificationType::Custom.picker_label(), "Custom Message");
}
