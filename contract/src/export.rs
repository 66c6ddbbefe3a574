//! Spreadsheet export requests.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::{Deserialize, Serialize};

/// Shown when an export download fails for any reason.
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to export data. Please try again.";

/// `(value, label)` choices in the export filter dialog; empty means all.
pub const EXPORT_STATUS_OPTIONS: [(&str, &str); 6] = [
    ("", "All"),
    ("pending", "Pending"),
    ("reviewing", "Reviewing"),
    ("approved", "Approved"),
    ("rejected", "Rejected"),
    ("disbursed", "Disbursed"),
];

pub const EXPORT_LOAN_TYPE_OPTIONS: [(&str, &str); 5] = [
    ("", "All"),
    ("personal-loan", "Personal Loan"),
    ("business-loan", "Business Loan"),
    ("car-loan", "Car Loan"),
    ("education-loan", "Education Loan"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Applications,
    Contacts,
    Analytics,
}

impl ExportKind {
    pub const ALL: [Self; 3] = [Self::Applications, Self::Contacts, Self::Analytics];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applications => "applications",
            Self::Contacts => "contacts",
            Self::Analytics => "analytics",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Applications => "Export Applications",
            Self::Contacts => "Export Contacts",
            Self::Analytics => "Export Analytics",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw.trim())
    }

    /// Analytics exports are always unfiltered.
    #[must_use]
    pub fn supports_filters(self) -> bool {
        !matches!(self, Self::Analytics)
    }

    /// Status and loan type filters only apply to applications.
    #[must_use]
    pub fn supports_application_filters(self) -> bool {
        matches!(self, Self::Applications)
    }

    #[must_use]
    pub fn default_filename(self) -> String {
        format!("{}_export.xlsx", self.as_str())
    }
}

/// Optional narrowing for "Export with Filters". Dates are `YYYY-MM-DD`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportFilters {
    pub status: String,
    pub loan_type: String,
    pub start_date: String,
    pub end_date: String,
}

impl ExportFilters {
    /// Query pairs for the non-empty filters, in a fixed order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("status", &self.status),
            ("loanType", &self.loan_type),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (key, value.trim().to_owned()))
        .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}

/// Pull `filename="..."` out of a `Content-Disposition` header, falling back
/// to `{kind}_export.xlsx`.
#[must_use]
pub fn filename_from_content_disposition(header: Option<&str>, kind: ExportKind) -> String {
    header
        .and_then(|value| {
            let start = value.find("filename=\"")? + "filename=\"".len();
            let rest = &value[start..];
            let end = rest.rfind('"')?;
            Some(rest[..end].to_owned())
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| kind.default_filename())
}
