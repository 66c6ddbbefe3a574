use super::*;
use contract::notify::NotificationType;
use contract::types::{NotificationChannel, StaffRef};

fn actions(status: ApplicationStatus) -> DetailActions {
    DetailActions { status, notes: "called twice".to_owned(), ..DetailActions::default() }
}

#[test]
fn final_statuses_lock_buttons() {
    assert!(!actions(ApplicationStatus::Pending).status_locked());
    assert!(actions(ApplicationStatus::Approved).status_locked());
    assert!(actions(ApplicationStatus::Rejected).status_locked());
    let mut busy = actions(ApplicationStatus::Processing);
    busy.updating = true;
    assert!(busy.status_locked());
}

#[test]
fn approve_sends_status_with_notes() {
    let mut state = actions(ApplicationStatus::Pending);
    let intent = state.request_status(ApplicationStatus::Approved);
    assert_eq!(intent, StatusIntent::Send(ApplicationUpdate::status(ApplicationStatus::Approved, "called twice")));
    assert!(state.updating);

    state.status_finished(ApplicationStatus::Approved, true);
    assert_eq!(state.status, ApplicationStatus::Approved);
    assert_eq!(state.message, Some(Flash::success(STATUS_UPDATED)));
}

#[test]
fn failed_status_update_keeps_previous_status() {
    let mut state = actions(ApplicationStatus::Pending);
    let _ = state.request_status(ApplicationStatus::Processing);
    state.status_finished(ApplicationStatus::Processing, false);
    assert_eq!(state.status, ApplicationStatus::Pending);
    assert_eq!(state.message, Some(Flash::error(STATUS_UPDATE_FAILED)));
    assert!(!state.updating);
}

#[test]
fn reject_requires_reason() {
    let mut state = actions(ApplicationStatus::Processing);
    assert_eq!(state.request_status(ApplicationStatus::Rejected), StatusIntent::AskReason);
    assert!(state.show_reject_dialog);
    assert!(!state.can_confirm_reject());
    assert_eq!(state.begin_reject(), None);

    state.rejection_reason = " Income too low ".to_owned();
    let update = state.begin_reject().unwrap();
    assert_eq!(update.rejection_reason.as_deref(), Some("Income too low"));
    assert_eq!(update.status, Some(ApplicationStatus::Rejected));

    state.reject_finished(true);
    assert_eq!(state.status, ApplicationStatus::Rejected);
    assert!(!state.show_reject_dialog);
    assert_eq!(state.message, Some(Flash::success(REJECTED)));
}

#[test]
fn notes_save_feedback() {
    let mut state = actions(ApplicationStatus::Pending);
    assert_eq!(state.begin_save_notes(), ApplicationUpdate::notes("called twice"));
    state.notes_finished(false);
    assert_eq!(state.message, Some(Flash::error(NOTES_SAVE_FAILED)));
}

#[test]
fn template_feedback_expires_only_on_success() {
    let mut editor = TemplateEditor::default();
    editor.saved(true);
    assert_eq!(editor.feedback.as_deref(), Some(TEMPLATES_SAVED));
    editor.expire_feedback();
    assert_eq!(editor.feedback, None);

    editor.saved(false);
    editor.expire_feedback();
    assert_eq!(editor.feedback.as_deref(), Some(TEMPLATES_SAVE_FAILED));
}

#[test]
fn notification_line_mentions_sender_when_known() {
    let mut notification = ApplicationNotification {
        id: None,
        kind: NotificationType::Approval,
        channel: NotificationChannel::Whatsapp,
        sent_at: "2026-01-05T08:30:00Z".to_owned(),
        sent_by: None,
        meta: None,
    };
    assert_eq!(notification_channel_line(&notification), "Channel: WHATSAPP");
    notification.sent_by = Some(StaffRef { id: None, name: Some("Aisyah".to_owned()), email: None });
    assert_eq!(notification_channel_line(&notification), "Channel: WHATSAPP \u{2022} Sent by Aisyah");
}

#[test]
fn years_employed_label() {
    assert_eq!(years_label(Some(3.5)), "3.5 years");
    assert_eq!(years_label(None), "-");
}
