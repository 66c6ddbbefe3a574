//! Admin API client for the terminal.
//!
//! Mirrors the browser transport: same endpoint table, same CSRF header
//! rules, same response classification. The cookie jar is a [`Session`]
//! that is updated from every `Set-Cookie` the API returns.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contract::endpoint::{self, ApplicationQuery, ContactQuery};
use contract::export::{EXPORT_FAILED_MESSAGE, ExportFilters, ExportKind, filename_from_content_disposition};
use contract::notify::{NOTIFY_FAILURE_MESSAGE, NotifyRequest};
use contract::types::{
    Admin, AnalyticsOverview, AnalyticsPeriod, Application, ApplicationUpdate, Blog, Contact, ContactUpdate,
    ConversionStat, DashboardStats, Faq, LoginRequest, LoginResponse, Product, SiteSettings, Testimonial,
    VisitorStat,
};
use contract::error::LOGIN_FAILED_MESSAGE;
use contract::{ApiError, ApiResponse, Endpoint, Method};
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CliError;
use crate::session::Session;

pub type ApiResult<T> = Result<T, ApiError>;

/// A downloaded export workbook.
#[derive(Debug)]
pub struct Download {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    session: Session,
    changed: bool,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error when `base` is not an http(s) URL or the TLS stack
    /// cannot be initialised.
    pub fn new(base: &str, session: Session) -> Result<Self, CliError> {
        let base = base.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(CliError::InvalidApiUrl(base.to_owned()));
        }
        let http = reqwest::Client::builder().user_agent(concat!("smc-admin/", env!("CARGO_PKG_VERSION"))).build()?;
        Ok(Self { http, base: base.to_owned(), session, changed: false })
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether any response rotated or cleared a cookie.
    #[must_use]
    pub fn session_changed(&self) -> bool {
        self.changed
    }

    async fn send(&mut self, endpoint: &Endpoint, body: Option<String>) -> ApiResult<reqwest::Response> {
        let cookie = self.session.cookie_header();
        let mut request = self.http.request(reqwest_method(endpoint.method), endpoint.url(&self.base));
        if let Some(cookie) = &cookie {
            request = request.header(COOKIE, cookie);
        }
        for (name, value) in contract::csrf::request_headers(endpoint.method, cookie.as_deref()) {
            request = request.header(name, value);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::debug!(method = endpoint.method.as_str(), path = %endpoint.path, error = %e, "request failed");
            ApiError::Network
        })?;
        for value in resp.headers().get_all(SET_COOKIE) {
            if let Ok(raw) = value.to_str() {
                self.changed |= self.session.absorb(raw);
            }
        }
        tracing::debug!(method = endpoint.method.as_str(), path = %endpoint.path, status = resp.status().as_u16(), "response");
        Ok(resp)
    }

    /// Send `endpoint` with an optional JSON body and classify the reply.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] produced by the transport or by classification.
    pub async fn call<T: DeserializeOwned>(&mut self, endpoint: Endpoint, body: Option<String>) -> ApiResult<ApiResponse<T>> {
        let resp = self.send(&endpoint, body).await?;
        let status = resp.status().as_u16();
        let content_type = resp.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).map(ToOwned::to_owned);
        let bytes = resp.bytes().await.map_err(|_| ApiError::Network)?;
        contract::classify::<T>(status, content_type.as_deref(), &bytes)
    }

    async fn fetch<T: DeserializeOwned>(&mut self, endpoint: Endpoint, fallback: &str) -> ApiResult<T> {
        self.call::<T>(endpoint, None).await?.into_data(fallback)
    }

    async fn fetch_page<T: DeserializeOwned>(&mut self, endpoint: Endpoint, fallback: &str) -> ApiResult<ApiResponse<T>> {
        self.call::<T>(endpoint, None).await?.ensure_success(fallback)
    }

    async fn write<T: DeserializeOwned, B: Serialize>(
        &mut self,
        endpoint: Endpoint,
        body: &B,
        fallback: &str,
    ) -> ApiResult<Option<T>> {
        let resp = self.call::<T>(endpoint, Some(encode(body)?)).await?;
        Ok(resp.ensure_success(fallback)?.data)
    }

    async fn remove(&mut self, endpoint: Endpoint, fallback: &str) -> ApiResult<()> {
        self.call::<serde_json::Value>(endpoint, None).await?.ensure_success(fallback)?;
        Ok(())
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    pub async fn login(&mut self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = self
            .call::<LoginResponse>(endpoint::login(), Some(encode(&body)?))
            .await
            .map_err(ApiError::into_login_failure)?;
        Ok(resp.ensure_success(LOGIN_FAILED_MESSAGE)?.data.unwrap_or_default())
    }

    pub async fn logout(&mut self) -> ApiResult<()> {
        self.remove(endpoint::logout(), "Logout failed").await
    }

    pub async fn me(&mut self) -> ApiResult<Admin> {
        self.fetch(endpoint::me(), "Not authenticated").await
    }

    // =========================================================================
    // APPLICATIONS
    // =========================================================================

    pub async fn application_stats(&mut self) -> ApiResult<DashboardStats> {
        self.fetch(endpoint::application_stats(), "Failed to load statistics").await
    }

    pub async fn applications(&mut self, query: &ApplicationQuery) -> ApiResult<ApiResponse<Vec<Application>>> {
        self.fetch_page(endpoint::applications(query), "Failed to fetch applications").await
    }

    pub async fn application(&mut self, id: &str) -> ApiResult<Application> {
        self.fetch(endpoint::application(id), "Application not found").await
    }

    pub async fn update_application(&mut self, id: &str, update: &ApplicationUpdate) -> ApiResult<Option<Application>> {
        self.write(endpoint::update_application(id), update, "Failed to update application").await
    }

    pub async fn delete_application(&mut self, id: &str) -> ApiResult<()> {
        self.remove(endpoint::delete_application(id), "Failed to delete application").await
    }

    /// Failures carry the envelope `error` before `message`.
    pub async fn notify_application(&mut self, id: &str, request: &NotifyRequest) -> ApiResult<()> {
        let resp = self
            .call::<serde_json::Value>(endpoint::notify_application(id), Some(encode(request)?))
            .await?;
        if resp.success {
            return Ok(());
        }
        let message = resp.error.or(resp.message).unwrap_or_else(|| NOTIFY_FAILURE_MESSAGE.to_owned());
        Err(ApiError::Rejected(message))
    }

    // =========================================================================
    // CONTACTS
    // =========================================================================

    pub async fn contacts(&mut self, query: &ContactQuery) -> ApiResult<ApiResponse<Vec<Contact>>> {
        self.fetch_page(endpoint::contacts(query), "Failed to fetch contacts").await
    }

    pub async fn contact(&mut self, id: &str) -> ApiResult<Contact> {
        self.fetch(endpoint::contact(id), "Contact not found").await
    }

    pub async fn update_contact(&mut self, id: &str, update: &ContactUpdate) -> ApiResult<Option<Contact>> {
        self.write(endpoint::update_contact(id), update, "Failed to update contact").await
    }

    pub async fn delete_contact(&mut self, id: &str) -> ApiResult<()> {
        self.remove(endpoint::delete_contact(id), "Failed to delete contact").await
    }

    // =========================================================================
    // CONTENT
    // =========================================================================

    pub async fn blogs(&mut self) -> ApiResult<Vec<Blog>> {
        self.fetch(endpoint::blogs(), "Failed to load blog posts").await
    }

    pub async fn faqs(&mut self) -> ApiResult<Vec<Faq>> {
        self.fetch(endpoint::faqs(), "Failed to load FAQs").await
    }

    pub async fn testimonials(&mut self) -> ApiResult<Vec<Testimonial>> {
        self.fetch(endpoint::testimonials(), "Failed to load testimonials").await
    }

    pub async fn products(&mut self) -> ApiResult<Vec<Product>> {
        self.fetch(endpoint::products(), "Failed to load products").await
    }

    // =========================================================================
    // ANALYTICS + SETTINGS
    // =========================================================================

    pub async fn analytics_overview(&mut self) -> ApiResult<AnalyticsOverview> {
        self.fetch(endpoint::analytics_overview(), "Failed to load analytics").await
    }

    pub async fn visitor_stats(&mut self, period: AnalyticsPeriod) -> ApiResult<Vec<VisitorStat>> {
        self.fetch(endpoint::visitor_stats(Some(period)), "Failed to load visitor statistics").await
    }

    pub async fn conversion_stats(&mut self, period: AnalyticsPeriod) -> ApiResult<Vec<ConversionStat>> {
        self.fetch(endpoint::conversion_stats(Some(period)), "Failed to load conversion statistics")
            .await
    }

    /// An empty envelope yields default settings.
    pub async fn settings(&mut self) -> ApiResult<SiteSettings> {
        let resp = self.fetch_page::<SiteSettings>(endpoint::settings(), "Failed to load settings").await?;
        Ok(resp.data.unwrap_or_default())
    }

    // =========================================================================
    // EXPORT
    // =========================================================================

    /// Download a workbook. Any failure other than 401 carries the export
    /// failure copy.
    pub async fn export(&mut self, kind: ExportKind, filters: Option<&ExportFilters>) -> ApiResult<Download> {
        let failed = || ApiError::Rejected(EXPORT_FAILED_MESSAGE.to_owned());
        let resp = self.send(&endpoint::export(kind, filters), None).await?;
        let status = resp.status().as_u16();
        if status == 401 {
            return Err(ApiError::Unauthorized { message: None });
        }
        if !resp.status().is_success() {
            tracing::warn!(kind = kind.as_str(), status, "export failed");
            return Err(failed());
        }
        let disposition = resp.headers().get(CONTENT_DISPOSITION).and_then(|v| v.to_str().ok()).map(ToOwned::to_owned);
        let filename = filename_from_content_disposition(disposition.as_deref(), kind);
        let bytes = resp.bytes().await.map_err(|_| failed())?;
        Ok(Download { filename, bytes: bytes.to_vec() })
    }
}

fn encode<B: Serialize>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Head => reqwest::Method::HEAD,
        Method::Options => reqwest::Method::OPTIONS,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}
