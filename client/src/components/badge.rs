//! Colored status pills.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use contract::notify::NotificationType;
use contract::types::{ApplicationStatus, BlogStatus, ContactStatus};
use leptos::prelude::*;

#[must_use]
pub fn application_status_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "badge badge--yellow",
        ApplicationStatus::Processing => "badge badge--blue",
        ApplicationStatus::Approved => "badge badge--green",
        ApplicationStatus::Rejected => "badge badge--red",
        ApplicationStatus::Cancelled => "badge badge--gray",
        ApplicationStatus::Contacted => "badge badge--purple",
    }
}

#[must_use]
pub fn contact_status_class(status: ContactStatus) -> &'static str {
    match status {
        ContactStatus::New => "badge badge--blue",
        ContactStatus::Read => "badge badge--yellow",
        ContactStatus::Replied => "badge badge--green",
        ContactStatus::Archived => "badge badge--gray",
    }
}

#[must_use]
pub fn blog_status_class(status: BlogStatus) -> &'static str {
    match status {
        BlogStatus::Published => "badge badge--green",
        BlogStatus::Draft => "badge badge--yellow",
        BlogStatus::Archived => "badge badge--gray",
    }
}

#[must_use]
pub fn notification_class(kind: NotificationType) -> &'static str {
    match kind {
        NotificationType::Received => "badge badge--blue",
        NotificationType::StatusUpdate => "badge badge--green",
        NotificationType::DocumentReminder => "badge badge--yellow",
        NotificationType::Approval => "badge badge--purple",
        NotificationType::Custom => "badge badge--gray",
    }
}

/// Active/inactive pill used by the content screens.
#[must_use]
pub fn active_class(active: bool) -> &'static str {
    if active { "badge badge--green" } else { "badge badge--gray" }
}

#[component]
pub fn Badge(class: &'static str, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=class>{label}</span> }
}
