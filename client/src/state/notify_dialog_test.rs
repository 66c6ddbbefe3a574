use super::*;

use crate::state::flash::FlashKind;

fn templates() -> MessageTemplates {
    MessageTemplates { status_update: "Your application is moving".to_owned(), custom: "Hi".to_owned() }
}

#[test]
fn opening_prefills_status_update_template() {
    let mut dialog = NotifyDialog { result: Some(Flash::error("old")), ..Default::default() };
    dialog.open(&templates());
    assert!(dialog.open);
    assert_eq!(dialog.kind, NotificationType::StatusUpdate);
    assert_eq!(dialog.message, "Your application is moving");
    assert_eq!(dialog.result, None);
}

#[test]
fn picking_fixed_type_clears_message() {
    let mut dialog = NotifyDialog::default();
    dialog.open(&templates());
    dialog.pick(NotificationType::Approval, &templates());
    assert_eq!(dialog.message, "");
    let request = dialog.begin_send().unwrap();
    assert_eq!(request.custom_message, None);
    assert!(dialog.sending);
}

#[test]
fn blank_custom_message_cannot_be_sent() {
    let mut dialog = NotifyDialog::default();
    dialog.open(&MessageTemplates::default());
    dialog.pick(NotificationType::Custom, &MessageTemplates::default());
    assert!(!dialog.can_send());
    assert_eq!(dialog.begin_send(), None);
    dialog.message = "  hello ".to_owned();
    assert_eq!(dialog.begin_send().unwrap().custom_message.as_deref(), Some("hello"));
}

#[test]
fn outcomes_map_to_banners() {
    let mut dialog = NotifyDialog::default();
    assert!(dialog.finish(&Ok(())));
    assert_eq!(dialog.result.as_ref().unwrap().text, NOTIFY_SUCCESS_MESSAGE);

    assert!(!dialog.finish(&Err(ApiError::Rejected("No phone number".to_owned()))));
    let result = dialog.result.clone().unwrap();
    assert_eq!(result.kind, FlashKind::Error);
    assert_eq!(result.text, "No phone number");

    dialog.finish(&Err(ApiError::Network));
    assert_eq!(dialog.result.as_ref().unwrap().text, NOTIFY_RETRY_MESSAGE);
}
