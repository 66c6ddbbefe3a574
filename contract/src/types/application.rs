use serde::{Deserialize, Serialize};

use crate::notify::NotificationType;

/// Lifecycle: `pending → processing → approved | rejected | cancelled | contacted`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Processing,
    Approved,
    Rejected,
    Cancelled,
    Contacted,
}

impl ApplicationStatus {
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Processing,
        Self::Approved,
        Self::Rejected,
        Self::Cancelled,
        Self::Contacted,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
            Self::Contacted => "contacted",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Cancelled => "Cancelled",
            Self::Contacted => "Contacted",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw.trim())
    }

    /// Approved and rejected applications accept no further status actions.
    #[must_use]
    pub fn is_final(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationAddress {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationDocument {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
    pub uploaded_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffRef {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    #[default]
    Whatsapp,
    Email,
    Sms,
}

impl NotificationChannel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Whatsapp => "whatsapp",
            Self::Email => "email",
            Self::Sms => "sms",
        }
    }
}

/// One entry of an application's outgoing message history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationNotification {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(default)]
    pub channel: NotificationChannel,
    pub sent_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_by: Option<StaffRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ApplicationNotification {
    /// Message body recorded in `meta.message`, when non-empty.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.get("message"))
            .and_then(serde_json::Value::as_str)
            .filter(|message| !message.is_empty())
    }

    #[must_use]
    pub fn sender_name(&self) -> Option<&str> {
        self.sent_by.as_ref().and_then(|sender| sender.name.as_deref()).filter(|name| !name.is_empty())
    }
}

/// A submitted loan request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub application_id: String,
    #[serde(default)]
    pub loan_type: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ic_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ic_number_masked: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<ApplicationAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_term: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_amount_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_employed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_phone: Option<String>,
    #[serde(default)]
    pub terms_accepted: bool,
    #[serde(default)]
    pub privacy_accepted: bool,
    #[serde(default)]
    pub marketing_consent: bool,
    #[serde(default)]
    pub ctos_consent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub documents: Vec<ApplicationDocument>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_by: Option<StaffRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub notifications: Vec<ApplicationNotification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_link: Option<String>,
}

impl Application {
    /// Masked IC number, never the raw value.
    #[must_use]
    pub fn ic_display(&self) -> &str {
        self.ic_number_masked.as_deref().filter(|value| !value.is_empty()).unwrap_or("******")
    }

    /// `(label, granted)` rows for the consent section.
    #[must_use]
    pub fn consents(&self) -> [(&'static str, bool); 4] {
        [
            ("Terms & Conditions", self.terms_accepted),
            ("Privacy Policy", self.privacy_accepted),
            ("CTOS Consent", self.ctos_consent),
            ("Marketing Updates", self.marketing_consent),
        ]
    }
}

/// PATCH body for `/admin/applications/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl ApplicationUpdate {
    /// Move to `status` and persist the current notes alongside.
    #[must_use]
    pub fn status(status: ApplicationStatus, notes: impl Into<String>) -> Self {
        Self { status: Some(status), notes: Some(notes.into()), rejection_reason: None }
    }

    #[must_use]
    pub fn reject(notes: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            status: Some(ApplicationStatus::Rejected),
            notes: Some(notes.into()),
            rejection_reason: Some(reason.into()),
        }
    }

    #[must_use]
    pub fn notes(notes: impl Into<String>) -> Self {
        Self { notes: Some(notes.into()), ..Self::default() }
    }
}
