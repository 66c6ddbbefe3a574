use super::*;

#[test]
fn final_application_statuses_are_green_and_red() {
    assert_eq!(application_status_class(ApplicationStatus::Approved), "badge badge--green");
    assert_eq!(application_status_class(ApplicationStatus::Rejected), "badge badge--red");
}

#[test]
fn every_application_status_has_a_color() {
    for status in ApplicationStatus::ALL {
        assert!(application_status_class(status).starts_with("badge badge--"));
    }
}

#[test]
fn new_contacts_stand_out() {
    assert_eq!(contact_status_class(ContactStatus::New), "badge badge--blue");
    assert_eq!(contact_status_class(ContactStatus::Archived), "badge badge--gray");
}

#[test]
fn draft_posts_are_yellow() {
    assert_eq!(blog_status_class(BlogStatus::Draft), "badge badge--yellow");
    assert_eq!(active_class(false), "badge badge--gray");
}

#[test]
fn approval_notifications_are_purple() {
    assert_eq!(notification_class(NotificationType::Approval), "badge badge--purple");
}
