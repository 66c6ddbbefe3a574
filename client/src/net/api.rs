//! REST client for the admin API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent with
//! `credentials: include` so the session cookie travels with every request.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`].
//!
//! REQUEST PIPELINE
//! ================
//! 1. `contract::endpoint` builds the method and path.
//! 2. `contract::csrf::request_headers` adds `Content-Type` and, for
//!    state-changing methods, the `x-csrf-token` echoed from `document.cookie`.
//! 3. `contract::classify` turns status, content type and body into an
//!    envelope or an [`ApiError`].
//! 4. A 401 sends the window to `/login` before the error is returned.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contract::endpoint::{self, ApplicationQuery, ContactQuery};
use contract::export::{ExportFilters, ExportKind};
use contract::notify::NotifyRequest;
use contract::types::{
    Admin, AnalyticsOverview, AnalyticsPeriod, Application, ApplicationUpdate, Blog, BlogPayload, Contact,
    ContactUpdate, ConversionStat, DashboardStats, Faq, FaqPayload, LoginRequest, LoginResponse, Product,
    ProductUpdate, SiteSettings, Testimonial, TestimonialPayload, VisitorStat,
};
use contract::error::LOGIN_FAILED_MESSAGE;
use contract::{ApiError, ApiResponse, Endpoint};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub type ApiResult<T> = Result<T, ApiError>;

/// Where to send the browser when the session is gone.
pub const LOGIN_PATH: &str = "/login";

/// API base URL, fixed at compile time through `ADMIN_API_URL`.
#[must_use]
pub fn api_base() -> &'static str {
    resolve_base(option_env!("ADMIN_API_URL"))
}

fn resolve_base(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(contract::DEFAULT_API_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn needs_login_redirect(err: &ApiError) -> bool {
    matches!(err, ApiError::Unauthorized { .. } | ApiError::Http { status: 401 })
}

/// The login screen's own session probe must not reload the login screen.
#[cfg(any(test, feature = "hydrate"))]
fn is_login_path(pathname: Option<&str>) -> bool {
    pathname.is_some_and(|path| path.trim_end_matches('/') == LOGIN_PATH)
}

#[cfg(feature = "hydrate")]
fn gloo_method(method: contract::Method) -> gloo_net::http::Method {
    use contract::Method;
    use gloo_net::http::Method as M;

    match method {
        Method::Get => M::GET,
        Method::Head => M::HEAD,
        Method::Options => M::OPTIONS,
        Method::Post => M::POST,
        Method::Put => M::PUT,
        Method::Patch => M::PATCH,
        Method::Delete => M::DELETE,
    }
}

#[cfg(feature = "hydrate")]
async fn send(endpoint: &Endpoint, body: Option<String>) -> ApiResult<gloo_net::http::Response> {
    let cookie = crate::util::browser::document_cookie();
    let mut builder = gloo_net::http::RequestBuilder::new(&endpoint.url(api_base()))
        .method(gloo_method(endpoint.method))
        .credentials(web_sys::RequestCredentials::Include);
    for (name, value) in contract::csrf::request_headers(endpoint.method, cookie.as_deref()) {
        builder = builder.header(name, &value);
    }
    let request = match body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| {
        log::warn!("{} {}: {e}", endpoint.method.as_str(), endpoint.path);
        ApiError::Network
    })?;
    request.send().await.map_err(|e| {
        log::warn!("{} {}: {e}", endpoint.method.as_str(), endpoint.path);
        ApiError::Network
    })
}

#[cfg(feature = "hydrate")]
fn redirect_if_unauthorized<T>(result: ApiResult<T>) -> ApiResult<T> {
    if let Err(err) = &result {
        let pathname = crate::util::browser::current_path();
        if needs_login_redirect(err) && !is_login_path(pathname.as_deref()) {
            crate::util::browser::redirect(LOGIN_PATH);
        }
    }
    result
}

/// Send `endpoint` with an optional JSON body and classify the reply.
///
/// # Errors
///
/// Any [`ApiError`] produced by the transport or by classification.
pub async fn call<T: DeserializeOwned>(endpoint: Endpoint, body: Option<String>) -> ApiResult<ApiResponse<T>> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = send(&endpoint, body).await?;
            let status = resp.status();
            let content_type = resp.headers().get("content-type");
            let bytes = resp.binary().await.map_err(|_| ApiError::Network)?;
            contract::classify::<T>(status, content_type.as_deref(), &bytes)
        }
        .await;
        if let Err(err) = &result {
            log::debug!("{} {} -> {err}", endpoint.method.as_str(), endpoint.path);
        }
        redirect_if_unauthorized(result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(ApiError::Unavailable)
    }
}

fn encode<B: Serialize>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

async fn fetch<T: DeserializeOwned>(endpoint: Endpoint, fallback: &str) -> ApiResult<T> {
    call::<T>(endpoint, None).await?.into_data(fallback)
}

async fn fetch_page<T: DeserializeOwned>(endpoint: Endpoint, fallback: &str) -> ApiResult<ApiResponse<T>> {
    call::<T>(endpoint, None).await?.ensure_success(fallback)
}

async fn write<T: DeserializeOwned, B: Serialize>(endpoint: Endpoint, body: &B, fallback: &str) -> ApiResult<Option<T>> {
    let resp = call::<T>(endpoint, Some(encode(body)?)).await?;
    Ok(resp.ensure_success(fallback)?.data)
}

async fn remove(endpoint: Endpoint, fallback: &str) -> ApiResult<()> {
    call::<serde_json::Value>(endpoint, None).await?.ensure_success(fallback)?;
    Ok(())
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /admin/auth/login`.
///
/// # Errors
///
/// Rejected credentials surface the server message, else "Login failed".
pub async fn login(username: &str, password: &str) -> ApiResult<LoginResponse> {
    let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
    let resp = call::<LoginResponse>(endpoint::login(), Some(encode(&body)?))
        .await
        .map_err(ApiError::into_login_failure)?;
    Ok(resp.ensure_success(LOGIN_FAILED_MESSAGE)?.data.unwrap_or_default())
}

/// `POST /admin/auth/logout`.
///
/// # Errors
///
/// Transport or server failure.
pub async fn logout() -> ApiResult<()> {
    remove(endpoint::logout(), "Logout failed").await
}

/// The admin behind the current session cookie.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] when no session is active.
pub async fn fetch_me() -> ApiResult<Admin> {
    fetch(endpoint::me(), "Not authenticated").await
}

// =============================================================================
// APPLICATIONS
// =============================================================================

/// One page of applications with pagination and status counts.
///
/// # Errors
///
/// Transport or server failure.
pub async fn fetch_applications(query: &ApplicationQuery) -> ApiResult<ApiResponse<Vec<Application>>> {
    fetch_page(endpoint::applications(query), "Failed to fetch applications").await
}

/// # Errors
///
/// "Application not found" when the envelope carries no record.
pub async fn fetch_application(id: &str) -> ApiResult<Application> {
    fetch(endpoint::application(id), "Application not found").await
}

/// `PATCH /admin/applications/{id}`; returns the updated record when sent.
///
/// # Errors
///
/// Transport or server failure.
pub async fn update_application(id: &str, update: &ApplicationUpdate) -> ApiResult<Option<Application>> {
    write(endpoint::update_application(id), update, "Failed to update application").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn delete_application(id: &str) -> ApiResult<()> {
    remove(endpoint::delete_application(id), "Failed to delete application").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn fetch_application_stats() -> ApiResult<DashboardStats> {
    fetch(endpoint::application_stats(), "Failed to load statistics").await
}

/// Ask the API to send a WhatsApp message for `id`.
///
/// # Errors
///
/// Failures carry the envelope `error`, else "Failed to send notification".
pub async fn notify_application(id: &str, request: &NotifyRequest) -> ApiResult<()> {
    let resp = call::<serde_json::Value>(endpoint::notify_application(id), Some(encode(request)?)).await?;
    if resp.success {
        return Ok(());
    }
    let message = resp
        .error
        .or(resp.message)
        .unwrap_or_else(|| contract::notify::NOTIFY_FAILURE_MESSAGE.to_owned());
    Err(ApiError::Rejected(message))
}

// =============================================================================
// CONTACTS
// =============================================================================

/// # Errors
///
/// Transport or server failure.
pub async fn fetch_contacts(query: &ContactQuery) -> ApiResult<ApiResponse<Vec<Contact>>> {
    fetch_page(endpoint::contacts(query), "Failed to fetch contacts").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn fetch_contact(id: &str) -> ApiResult<Contact> {
    fetch(endpoint::contact(id), "Contact not found").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn update_contact(id: &str, update: &ContactUpdate) -> ApiResult<Option<Contact>> {
    write(endpoint::update_contact(id), update, "Failed to update contact").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn delete_contact(id: &str) -> ApiResult<()> {
    remove(endpoint::delete_contact(id), "Failed to delete contact").await
}

// =============================================================================
// CONTENT
// =============================================================================

/// # Errors
///
/// Transport or server failure.
pub async fn fetch_blogs() -> ApiResult<Vec<Blog>> {
    fetch(endpoint::blogs(), "Failed to load blog posts").await
}

/// # Errors
///
/// "Blog post not found." when the envelope carries no record.
pub async fn fetch_blog(id: &str) -> ApiResult<Blog> {
    fetch(endpoint::blog(id), "Blog post not found.").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn create_blog(payload: &BlogPayload) -> ApiResult<Option<Blog>> {
    write(endpoint::create_blog(), payload, "Failed to save blog post").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn update_blog(id: &str, payload: &BlogPayload) -> ApiResult<Option<Blog>> {
    write(endpoint::update_blog(id), payload, "Failed to save blog post").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn delete_blog(id: &str) -> ApiResult<()> {
    remove(endpoint::delete_blog(id), "Failed to delete blog post").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn fetch_faqs() -> ApiResult<Vec<Faq>> {
    fetch(endpoint::faqs(), "Failed to load FAQs").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn create_faq(payload: &FaqPayload) -> ApiResult<Option<Faq>> {
    write(endpoint::create_faq(), payload, "Failed to save FAQ").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn update_faq(id: &str, payload: &FaqPayload) -> ApiResult<Option<Faq>> {
    write(endpoint::update_faq(id), payload, "Failed to save FAQ").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn delete_faq(id: &str) -> ApiResult<()> {
    remove(endpoint::delete_faq(id), "Failed to delete FAQ").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn fetch_testimonials() -> ApiResult<Vec<Testimonial>> {
    fetch(endpoint::testimonials(), "Failed to load testimonials").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn create_testimonial(payload: &TestimonialPayload) -> ApiResult<Option<Testimonial>> {
    write(endpoint::create_testimonial(), payload, "Failed to save testimonial").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn update_testimonial(id: &str, payload: &TestimonialPayload) -> ApiResult<Option<Testimonial>> {
    write(endpoint::update_testimonial(id), payload, "Failed to save testimonial").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn delete_testimonial(id: &str) -> ApiResult<()> {
    remove(endpoint::delete_testimonial(id), "Failed to delete testimonial").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn fetch_products() -> ApiResult<Vec<Product>> {
    fetch(endpoint::products(), "Failed to load products").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn update_product(id: &str, update: &ProductUpdate) -> ApiResult<Option<Product>> {
    write(endpoint::update_product(id), update, "Failed to update product").await
}

// =============================================================================
// ANALYTICS + SETTINGS
// =============================================================================

/// # Errors
///
/// Transport or server failure.
pub async fn fetch_analytics_overview() -> ApiResult<AnalyticsOverview> {
    fetch(endpoint::analytics_overview(), "Failed to load analytics").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn fetch_visitor_stats(period: AnalyticsPeriod) -> ApiResult<Vec<VisitorStat>> {
    fetch(endpoint::visitor_stats(Some(period)), "Failed to load visitor statistics").await
}

/// # Errors
///
/// Transport or server failure.
pub async fn fetch_conversion_stats(period: AnalyticsPeriod) -> ApiResult<Vec<ConversionStat>> {
    fetch(endpoint::conversion_stats(Some(period)), "Failed to load conversion statistics").await
}

/// Site settings; an empty envelope yields defaults.
///
/// # Errors
///
/// Transport or server failure.
pub async fn fetch_settings() -> ApiResult<SiteSettings> {
    let resp = fetch_page::<SiteSettings>(endpoint::settings(), "Failed to load settings").await?;
    Ok(resp.data.unwrap_or_default())
}

/// `PUT /admin/settings` with the full document.
///
/// # Errors
///
/// Transport or server failure.
pub async fn update_settings(settings: &SiteSettings) -> ApiResult<Option<SiteSettings>> {
    write(endpoint::update_settings(), settings, "Failed to save settings").await
}

// =============================================================================
// EXPORT
// =============================================================================

/// Download an export workbook; returns the saved filename.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] on 401, otherwise a rejection carrying the
/// export failure copy.
pub async fn export(kind: ExportKind, filters: Option<&ExportFilters>) -> ApiResult<String> {
    #[cfg(feature = "hydrate")]
    {
        use contract::export::{EXPORT_FAILED_MESSAGE, filename_from_content_disposition};

        let failed = || ApiError::Rejected(EXPORT_FAILED_MESSAGE.to_owned());
        let resp = send(&endpoint::export(kind, filters), None).await?;
        let status = resp.status();
        if status == 401 {
            return redirect_if_unauthorized(Err(ApiError::Unauthorized { message: None }));
        }
        if !(200..300).contains(&status) {
            log::warn!("export {} failed with status {status}", kind.as_str());
            return Err(failed());
        }
        let filename = filename_from_content_disposition(resp.headers().get("content-disposition").as_deref(), kind);
        let bytes = resp.binary().await.map_err(|_| failed())?;
        crate::util::browser::download_bytes(&filename, &bytes).map_err(|e| {
            log::warn!("export download failed: {e}");
            failed()
        })?;
        Ok(filename)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, filters);
        Err(ApiError::Unavailable)
    }
}
