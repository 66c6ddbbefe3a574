//! JSON envelope wrapping every admin API response.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Page window reported by list endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 20, total: 0, pages: 1 }
    }
}

impl Pagination {
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// `{ success, data, message, error, pagination, statusCounts }`.
///
/// Every member except `success` is optional on the wire; `data` is `None`
/// both when absent and when `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_counts: Option<BTreeMap<String, u64>>,
}

impl<T> ApiResponse<T> {
    /// Human-readable failure text, preferring `message` over `error`.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }

    /// Count for `status` from `statusCounts`, zero when missing.
    #[must_use]
    pub fn status_count(&self, status: &str) -> u64 {
        self.status_counts
            .as_ref()
            .and_then(|counts| counts.get(status))
            .copied()
            .unwrap_or(0)
    }

    /// Unwrap `data` from a successful envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false or `data` is
    /// missing, carrying the server message or `fallback`.
    pub fn into_data(self, fallback: &str) -> Result<T, ApiError> {
        let Self { success, data, message, error, .. } = self;
        match data {
            Some(data) if success => Ok(data),
            _ => Err(ApiError::Rejected(message.or(error).unwrap_or_else(|| fallback.to_owned()))),
        }
    }

    /// Keep the envelope only when the server reported success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false.
    pub fn ensure_success(self, fallback: &str) -> Result<Self, ApiError> {
        if self.success {
            return Ok(self);
        }
        let message = self.failure_message().unwrap_or(fallback).to_owned();
        Err(ApiError::Rejected(message))
    }
}
