//! Action panel state for a single application.
//!
//! DESIGN
//! ======
//! The page keeps the fetched `Application` read-only and tracks the
//! editable bits (status, notes, rejection reason, templates) here so the
//! transitions can be tested without a browser.

#[cfg(test)]
#[path = "application_detail_test.rs"]
mod application_detail_test;

use contract::format::EMPTY;
use contract::notify::MessageTemplates;
use contract::types::{Application, ApplicationNotification, ApplicationStatus, ApplicationUpdate};

use super::flash::Flash;

pub const STATUS_UPDATED: &str = "Status updated successfully";
pub const STATUS_UPDATE_FAILED: &str = "Failed to update status";
pub const REJECTED: &str = "Application rejected";
pub const REJECT_FAILED: &str = "Failed to reject application";
pub const NOTES_SAVED: &str = "Notes saved";
pub const NOTES_SAVE_FAILED: &str = "Failed to save notes";
pub const TEMPLATES_SAVED: &str = "Templates saved locally";
pub const TEMPLATES_SAVE_FAILED: &str = "Failed to save templates";
pub const NOT_FOUND: &str = "Application not found";

/// How long the template feedback stays visible.
pub const TEMPLATE_FEEDBACK_MS: u32 = 3000;

/// Non-reject status buttons, in display order.
pub const STATUS_ACTIONS: [(ApplicationStatus, &str); 2] =
    [(ApplicationStatus::Processing, "Processing"), (ApplicationStatus::Approved, "Approve")];

/// What a status button press should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusIntent {
    /// Send this PATCH body.
    Send(ApplicationUpdate),
    /// Rejection needs a reason first.
    AskReason,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailActions {
    pub status: ApplicationStatus,
    pub notes: String,
    pub rejection_reason: String,
    pub show_reject_dialog: bool,
    pub updating: bool,
    pub message: Option<Flash>,
}

impl DetailActions {
    #[must_use]
    pub fn from_application(app: &Application) -> Self {
        Self { status: app.status, notes: app.notes.clone().unwrap_or_default(), ..Self::default() }
    }

    /// Status buttons are disabled while a request runs and once the
    /// application reached a final status.
    #[must_use]
    pub fn status_locked(&self) -> bool {
        self.updating || self.status.is_final()
    }

    pub fn request_status(&mut self, status: ApplicationStatus) -> StatusIntent {
        if status == ApplicationStatus::Rejected {
            self.show_reject_dialog = true;
            return StatusIntent::AskReason;
        }
        self.updating = true;
        StatusIntent::Send(ApplicationUpdate::status(status, self.notes.clone()))
    }

    pub fn status_finished(&mut self, status: ApplicationStatus, ok: bool) {
        self.updating = false;
        if ok {
            self.status = status;
            self.message = Some(Flash::success(STATUS_UPDATED));
        } else {
            self.message = Some(Flash::error(STATUS_UPDATE_FAILED));
        }
    }

    #[must_use]
    pub fn can_confirm_reject(&self) -> bool {
        !self.rejection_reason.trim().is_empty() && !self.updating
    }

    pub fn begin_reject(&mut self) -> Option<ApplicationUpdate> {
        if !self.can_confirm_reject() {
            return None;
        }
        self.updating = true;
        Some(ApplicationUpdate::reject(self.notes.clone(), self.rejection_reason.trim()))
    }

    pub fn reject_finished(&mut self, ok: bool) {
        self.updating = false;
        if ok {
            self.status = ApplicationStatus::Rejected;
            self.show_reject_dialog = false;
            self.message = Some(Flash::success(REJECTED));
        } else {
            self.message = Some(Flash::error(REJECT_FAILED));
        }
    }

    pub fn begin_save_notes(&mut self) -> ApplicationUpdate {
        self.updating = true;
        ApplicationUpdate::notes(self.notes.clone())
    }

    pub fn notes_finished(&mut self, ok: bool) {
        self.updating = false;
        self.message = Some(if ok { Flash::success(NOTES_SAVED) } else { Flash::error(NOTES_SAVE_FAILED) });
    }
}

/// Locally stored WhatsApp templates and the transient save feedback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateEditor {
    pub templates: MessageTemplates,
    pub feedback: Option<String>,
}

impl TemplateEditor {
    #[must_use]
    pub fn new(templates: MessageTemplates) -> Self {
        Self { templates, feedback: None }
    }

    pub fn saved(&mut self, ok: bool) {
        self.feedback = Some(if ok { TEMPLATES_SAVED } else { TEMPLATES_SAVE_FAILED }.to_owned());
    }

    /// Timer expiry: only the success copy auto-clears.
    pub fn expire_feedback(&mut self) {
        if self.feedback.as_deref() == Some(TEMPLATES_SAVED) {
            self.feedback = None;
        }
    }
}

#[must_use]
pub fn years_label(years: Option<f64>) -> String {
    years.map_or_else(|| EMPTY.to_owned(), |y| format!("{} years", contract::format::format_number(y)))
}

/// "Channel: WHATSAPP • Sent by Aisyah".
#[must_use]
pub fn notification_channel_line(notification: &ApplicationNotification) -> String {
    let channel = notification.channel.as_str().to_uppercase();
    match notification.sender_name() {
        Some(name) => format!("Channel: {channel} \u{2022} Sent by {name}"),
        None => format!("Channel: {channel}"),
    }
}
