//! WhatsApp notification requests and locally stored message templates.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use serde::{Deserialize, Serialize};

/// Local storage key holding [`MessageTemplates`] as JSON.
pub const TEMPLATE_STORAGE_KEY: &str = "smc_whatsapp_templates";

pub const NOTIFY_SUCCESS_MESSAGE: &str = "WhatsApp notification sent successfully!";
pub const NOTIFY_FAILURE_MESSAGE: &str = "Failed to send notification";
pub const NOTIFY_RETRY_MESSAGE: &str = "Failed to send notification. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Received,
    #[default]
    StatusUpdate,
    DocumentReminder,
    Approval,
    Custom,
}

impl NotificationType {
    pub const ALL: [Self; 5] = [
        Self::Received,
        Self::StatusUpdate,
        Self::DocumentReminder,
        Self::Approval,
        Self::Custom,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::StatusUpdate => "status_update",
            Self::DocumentReminder => "document_reminder",
            Self::Approval => "approval",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw.trim())
    }

    /// Label in the notification history.
    #[must_use]
    pub fn history_label(self) -> &'static str {
        match self {
            Self::Received => "Application Received",
            Self::StatusUpdate => "Status Update",
            Self::DocumentReminder => "Document Reminder",
            Self::Approval => "Approval",
            Self::Custom => "Custom Message",
        }
    }

    /// Label in the send dialog's type picker.
    #[must_use]
    pub fn picker_label(self) -> &'static str {
        match self {
            Self::Approval => "Approval Notification",
            other => other.history_label(),
        }
    }

    /// Types whose message text staff can edit before sending.
    #[must_use]
    pub fn is_editable(self) -> bool {
        matches!(self, Self::StatusUpdate | Self::Custom)
    }

    /// Custom messages cannot be sent blank.
    #[must_use]
    pub fn requires_message(self) -> bool {
        matches!(self, Self::Custom)
    }

    /// Label above the message editor.
    #[must_use]
    pub fn editor_label(self) -> &'static str {
        match self {
            Self::Custom => "Custom Message",
            _ => "Status Update Template",
        }
    }
}

/// POST body for `/admin/whatsapp/notify-application/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyRequest {
    pub notification_type: NotificationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

impl NotifyRequest {
    /// The trimmed message travels only for editable types.
    #[must_use]
    pub fn new(notification_type: NotificationType, message: &str) -> Self {
        let custom_message = notification_type.is_editable().then(|| message.trim().to_owned());
        Self { notification_type, custom_message }
    }

    /// Whether the send button should be enabled for this draft.
    #[must_use]
    pub fn can_send(notification_type: NotificationType, message: &str) -> bool {
        !notification_type.requires_message() || !message.trim().is_empty()
    }
}

/// Reusable message copy, stored per browser.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplates {
    pub status_update: String,
    pub custom: String,
}

impl MessageTemplates {
    /// Editor contents after picking `kind`: the template for editable
    /// types, empty otherwise.
    #[must_use]
    pub fn initial_message(&self, kind: NotificationType) -> String {
        match kind {
            NotificationType::StatusUpdate => self.status_update.clone(),
            NotificationType::Custom => self.custom.clone(),
            _ => String::new(),
        }
    }

    /// Parse stored JSON, treating corrupt data as empty templates.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|json| serde_json::from_str(json).ok()).unwrap_or_default()
    }
}
