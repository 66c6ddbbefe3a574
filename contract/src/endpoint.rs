//! Endpoint table for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Paths are relative to the API base URL (default
//! [`DEFAULT_API_URL`]). Transports join them with [`Endpoint::url`] and pick
//! headers from [`crate::csrf::request_headers`] using [`Endpoint::method`].

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::export::{ExportFilters, ExportKind};
use crate::types::{AnalyticsPeriod, ApplicationStatus, ContactStatus};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Page size used by the list screens.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Options,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Parse a method name, ignoring ASCII case.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "HEAD" => Some(Self::Head),
            "OPTIONS" => Some(Self::Options),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Methods that never change server state.
    #[must_use]
    pub fn is_safe(self) -> bool {
        matches!(self, Self::Get | Self::Head | Self::Options)
    }
}

/// A method plus a base-relative path (with query string, if any).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into() }
    }

    fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    fn with_query(mut self, pairs: &[(&str, String)]) -> Self {
        if pairs.is_empty() {
            return self;
        }
        let query = serde_urlencoded::to_string(pairs).unwrap_or_default();
        if !query.is_empty() {
            self.path.push('?');
            self.path.push_str(&query);
        }
        self
    }

    /// Absolute URL against `base` (trailing slashes on `base` are ignored).
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}

fn segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

/// Normalize a select value: `"all"` and blank mean "no filter".
#[must_use]
pub fn filter_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "all" {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filters for `GET /admin/applications`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub status: Option<ApplicationStatus>,
    pub loan_type: Option<String>,
    /// Collapse repeat submissions from the same applicant.
    pub dedupe: bool,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl Default for ApplicationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
            status: None,
            loan_type: None,
            dedupe: true,
            sort_by: None,
            sort_order: None,
        }
    }
}

impl ApplicationQuery {
    /// Newest `limit` applications, as shown on the dashboard.
    #[must_use]
    pub fn recent(limit: u32) -> Self {
        Self {
            limit,
            sort_by: Some("createdAt".to_owned()),
            sort_order: Some(SortOrder::Desc),
            ..Self::default()
        }
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("dedupe", self.dedupe.to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_owned()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        if let Some(loan_type) = self.loan_type.as_deref().and_then(filter_value) {
            pairs.push(("loanType", loan_type));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder", order.as_str().to_owned()));
        }
        pairs
    }
}

/// Filters for `GET /admin/contacts`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactQuery {
    pub page: u32,
    pub limit: u32,
    pub status: Option<ContactStatus>,
    pub search: String,
}

impl Default for ContactQuery {
    fn default() -> Self {
        Self { page: 1, limit: DEFAULT_PAGE_SIZE, status: None, search: String::new() }
    }
}

impl ContactQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_owned()));
        }
        pairs
    }
}

// =============================================================================
// AUTH
// =============================================================================

#[must_use]
pub fn login() -> Endpoint {
    Endpoint::new(Method::Post, "/admin/auth/login")
}

#[must_use]
pub fn logout() -> Endpoint {
    Endpoint::new(Method::Post, "/admin/auth/logout")
}

#[must_use]
pub fn me() -> Endpoint {
    Endpoint::get("/admin/auth/me")
}

// =============================================================================
// APPLICATIONS
// =============================================================================

#[must_use]
pub fn applications(query: &ApplicationQuery) -> Endpoint {
    Endpoint::get("/admin/applications").with_query(&query.pairs())
}

#[must_use]
pub fn application(id: &str) -> Endpoint {
    Endpoint::get(format!("/admin/applications/{}", segment(id)))
}

#[must_use]
pub fn update_application(id: &str) -> Endpoint {
    Endpoint::new(Method::Patch, format!("/admin/applications/{}", segment(id)))
}

#[must_use]
pub fn delete_application(id: &str) -> Endpoint {
    Endpoint::new(Method::Delete, format!("/admin/applications/{}", segment(id)))
}

#[must_use]
pub fn application_stats() -> Endpoint {
    Endpoint::get("/admin/applications/stats/overview")
}

#[must_use]
pub fn notify_application(id: &str) -> Endpoint {
    Endpoint::new(Method::Post, format!("/admin/whatsapp/notify-application/{}", segment(id)))
}

// =============================================================================
// CONTENT
// =============================================================================

#[must_use]
pub fn blogs() -> Endpoint {
    Endpoint::get("/admin/blogs")
}

#[must_use]
pub fn blog(id: &str) -> Endpoint {
    Endpoint::get(format!("/admin/blogs/{}", segment(id)))
}

#[must_use]
pub fn create_blog() -> Endpoint {
    Endpoint::new(Method::Post, "/admin/blogs")
}

#[must_use]
pub fn update_blog(id: &str) -> Endpoint {
    Endpoint::new(Method::Put, format!("/admin/blogs/{}", segment(id)))
}

#[must_use]
pub fn delete_blog(id: &str) -> Endpoint {
    Endpoint::new(Method::Delete, format!("/admin/blogs/{}", segment(id)))
}

#[must_use]
pub fn faqs() -> Endpoint {
    Endpoint::get("/admin/faqs")
}

#[must_use]
pub fn create_faq() -> Endpoint {
    Endpoint::new(Method::Post, "/admin/faqs")
}

#[must_use]
pub fn update_faq(id: &str) -> Endpoint {
    Endpoint::new(Method::Put, format!("/admin/faqs/{}", segment(id)))
}

#[must_use]
pub fn delete_faq(id: &str) -> Endpoint {
    Endpoint::new(Method::Delete, format!("/admin/faqs/{}", segment(id)))
}

#[must_use]
pub fn testimonials() -> Endpoint {
    Endpoint::get("/admin/testimonials")
}

#[must_use]
pub fn create_testimonial() -> Endpoint {
    Endpoint::new(Method::Post, "/admin/testimonials")
}

#[must_use]
pub fn update_testimonial(id: &str) -> Endpoint {
    Endpoint::new(Method::Put, format!("/admin/testimonials/{}", segment(id)))
}

#[must_use]
pub fn delete_testimonial(id: &str) -> Endpoint {
    Endpoint::new(Method::Delete, format!("/admin/testimonials/{}", segment(id)))
}

#[must_use]
pub fn products() -> Endpoint {
    Endpoint::get("/admin/products")
}

#[must_use]
pub fn update_product(id: &str) -> Endpoint {
    Endpoint::new(Method::Put, format!("/admin/products/{}", segment(id)))
}

// =============================================================================
// ANALYTICS + SETTINGS
// =============================================================================

#[must_use]
pub fn analytics_overview() -> Endpoint {
    Endpoint::get("/admin/analytics/overview")
}

#[must_use]
pub fn visitor_stats(period: Option<AnalyticsPeriod>) -> Endpoint {
    period_query(Endpoint::get("/admin/analytics/visitors"), period)
}

#[must_use]
pub fn conversion_stats(period: Option<AnalyticsPeriod>) -> Endpoint {
    period_query(Endpoint::get("/admin/analytics/conversions"), period)
}

fn period_query(endpoint: Endpoint, period: Option<AnalyticsPeriod>) -> Endpoint {
    match period {
        Some(period) => endpoint.with_query(&[("period", period.as_str().to_owned())]),
        None => endpoint,
    }
}

#[must_use]
pub fn settings() -> Endpoint {
    Endpoint::get("/admin/settings")
}

#[must_use]
pub fn update_settings() -> Endpoint {
    Endpoint::new(Method::Put, "/admin/settings")
}

// =============================================================================
// CONTACTS
// =============================================================================

#[must_use]
pub fn contacts(query: &ContactQuery) -> Endpoint {
    Endpoint::get("/admin/contacts").with_query(&query.pairs())
}

#[must_use]
pub fn contact(id: &str) -> Endpoint {
    Endpoint::get(format!("/admin/contacts/{}", segment(id)))
}

#[must_use]
pub fn update_contact(id: &str) -> Endpoint {
    Endpoint::new(Method::Patch, format!("/admin/contacts/{}", segment(id)))
}

#[must_use]
pub fn delete_contact(id: &str) -> Endpoint {
    Endpoint::new(Method::Delete, format!("/admin/contacts/{}", segment(id)))
}

// =============================================================================
// EXPORT
// =============================================================================

/// Spreadsheet export; `filters` is `None` for "Export All".
#[must_use]
pub fn export(kind: ExportKind, filters: Option<&ExportFilters>) -> Endpoint {
    let endpoint = Endpoint::get(format!("/admin/export/{}", kind.as_str()));
    match filters {
        Some(filters) => endpoint.with_query(&filters.pairs()),
        None => endpoint,
    }
}
