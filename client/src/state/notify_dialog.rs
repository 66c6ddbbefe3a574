//! WhatsApp notify dialog state.

#[cfg(test)]
#[path = "notify_dialog_test.rs"]
mod notify_dialog_test;

use contract::ApiError;
use contract::notify::{
    MessageTemplates, NOTIFY_RETRY_MESSAGE, NOTIFY_SUCCESS_MESSAGE, NotificationType, NotifyRequest,
};

use super::flash::Flash;

/// Delay before a successful dialog closes itself.
pub const CLOSE_AFTER_MS: u32 = 2000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotifyDialog {
    pub open: bool,
    pub sending: bool,
    pub kind: NotificationType,
    pub message: String,
    pub result: Option<Flash>,
}

impl NotifyDialog {
    /// Open on "status update" prefilled from the stored template.
    pub fn open(&mut self, templates: &MessageTemplates) {
        *self = Self { open: true, ..Self::default() };
        self.message = templates.initial_message(self.kind);
    }

    pub fn pick(&mut self, kind: NotificationType, templates: &MessageTemplates) {
        self.kind = kind;
        self.message = templates.initial_message(kind);
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.sending && NotifyRequest::can_send(self.kind, &self.message)
    }

    pub fn begin_send(&mut self) -> Option<NotifyRequest> {
        if !self.can_send() {
            return None;
        }
        self.sending = true;
        self.result = None;
        Some(NotifyRequest::new(self.kind, &self.message))
    }

    /// Record the outcome; returns true when the dialog should auto-close.
    pub fn finish(&mut self, outcome: &Result<(), ApiError>) -> bool {
        self.sending = false;
        match outcome {
            Ok(()) => {
                self.result = Some(Flash::success(NOTIFY_SUCCESS_MESSAGE));
                true
            }
            Err(ApiError::Rejected(message) | ApiError::Server { message, .. }) => {
                self.result = Some(Flash::error(message.clone()));
                false
            }
            Err(_) => {
                self.result = Some(Flash::error(NOTIFY_RETRY_MESSAGE));
                false
            }
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.result = None;
    }
}
