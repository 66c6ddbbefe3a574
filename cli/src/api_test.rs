use axum::Router;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::routing::{get, patch, post};
use serde_json::{Value, json};

use super::*;

const ADMIN: &str = r#"{"_id":"a1","username":"admin","name":"Aina Rahman","role":"super-admin"}"#;

fn has_cookie(headers: &HeaderMap, pair: &str) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|cookie| cookie.split("; ").any(|entry| entry == pair))
}

fn json_response(status: StatusCode, body: Value) -> Response {
    (status, axum::Json(body)).into_response()
}

async fn login(axum::Json(body): axum::Json<Value>) -> Response {
    if body["password"] == "locked" {
        return json_response(StatusCode::UNAUTHORIZED, json!({ "success": false }));
    }
    if body["password"] != "secret" {
        return json_response(StatusCode::UNAUTHORIZED, json!({ "success": false, "message": "Invalid credentials" }));
    }
    let admin: Value = serde_json::from_str(ADMIN).unwrap();
    (
        AppendHeaders([
            (header::SET_COOKIE, "smc_admin_session=s3ss; Path=/; HttpOnly"),
            (header::SET_COOKIE, "smc_admin_csrf=tok123; Path=/"),
        ]),
        axum::Json(json!({ "success": true, "data": { "admin": admin } })),
    )
        .into_response()
}

async fn logout() -> Response {
    (
        AppendHeaders([(header::SET_COOKIE, "smc_admin_session=; Path=/; Max-Age=0")]),
        axum::Json(json!({ "success": true })),
    )
        .into_response()
}

async fn me(headers: HeaderMap) -> Response {
    if !has_cookie(&headers, "smc_admin_session=s3ss") {
        return json_response(StatusCode::UNAUTHORIZED, json!({ "success": false, "message": "Not authenticated" }));
    }
    let admin: Value = serde_json::from_str(ADMIN).unwrap();
    json_response(StatusCode::OK, json!({ "success": true, "data": admin }))
}

async fn update_application(headers: HeaderMap, Path(_id): Path<String>) -> Response {
    let token = headers.get("x-csrf-token").and_then(|v| v.to_str().ok());
    if token != Some("tok123") {
        return json_response(StatusCode::FORBIDDEN, json!({ "success": false, "message": "Invalid CSRF token" }));
    }
    json_response(StatusCode::OK, json!({ "success": true }))
}

async fn export(Path(kind): Path<String>) -> Response {
    if kind != "applications" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    (
        [
            (header::CONTENT_TYPE, "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"applications_2026-10-17.xlsx\""),
        ],
        b"PK\x03\x04".to_vec(),
    )
        .into_response()
}

async fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, [(header::CONTENT_TYPE, "text/html")], "<html>bad gateway</html>").into_response()
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/api/admin/auth/login", post(login))
        .route("/api/admin/auth/logout", post(logout))
        .route("/api/admin/auth/me", get(me))
        .route("/api/admin/applications/{id}", patch(update_application))
        .route("/api/admin/export/{kind}", get(export))
        .route("/api/admin/blogs", get(bad_gateway));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/")
}

async fn signed_in(base: &str) -> ApiClient {
    let mut client = ApiClient::new(base, Session::default()).unwrap();
    client.login("admin", "secret").await.unwrap();
    client
}

#[test]
fn base_url_must_be_http() {
    let err = ApiClient::new("localhost:5000/api", Session::default()).err().unwrap();
    assert!(matches!(err, CliError::InvalidApiUrl(_)));
}

#[tokio::test]
async fn login_captures_cookies_and_replays_them() {
    let base = spawn_stub().await;
    let mut client = ApiClient::new(&base, Session::default()).unwrap();

    let resp = client.login("admin", "secret").await.unwrap();
    assert_eq!(resp.admin.unwrap().display_name(), "Aina Rahman");
    assert!(client.session_changed());
    assert_eq!(client.session().get("smc_admin_session"), Some("s3ss"));
    assert_eq!(client.session().get("smc_admin_csrf"), Some("tok123"));

    let admin = client.me().await.unwrap();
    assert_eq!(admin.username, "admin");
}

#[tokio::test]
async fn rejected_login_surfaces_server_message() {
    let base = spawn_stub().await;
    let mut client = ApiClient::new(&base, Session::default()).unwrap();

    let err = client.login("admin", "wrong").await.unwrap_err();
    assert_eq!(err, ApiError::Rejected("Invalid credentials".to_owned()));
    assert!(client.session().is_empty());
    assert_eq!(CliError::from(err).to_string(), "Invalid credentials");

    let err = client.login("admin", "locked").await.unwrap_err();
    assert_eq!(err.to_string(), LOGIN_FAILED_MESSAGE);
}

#[tokio::test]
async fn missing_session_is_reported_as_expired() {
    let base = spawn_stub().await;
    let mut client = ApiClient::new(&base, Session::default()).unwrap();

    let err = client.me().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized { message: Some("Not authenticated".to_owned()) });
    assert_eq!(CliError::from(err).to_string(), "session expired; run `smc-admin login`");
}

#[tokio::test]
async fn state_changing_requests_echo_csrf_cookie() {
    let base = spawn_stub().await;
    let mut client = signed_in(&base).await;
    let updated = client.update_application("a1", &ApplicationUpdate::notes("called back")).await.unwrap();
    assert_eq!(updated, None);

    let mut session = Session::default();
    session.absorb("smc_admin_session=s3ss");
    let mut without_csrf = ApiClient::new(&base, session).unwrap();
    let err = without_csrf.update_application("a1", &ApplicationUpdate::notes("x")).await.unwrap_err();
    assert_eq!(err, ApiError::Server { status: 403, message: "Invalid CSRF token".to_owned() });
}

#[tokio::test]
async fn logout_clears_the_session_cookie() {
    let base = spawn_stub().await;
    let mut client = signed_in(&base).await;
    client.logout().await.unwrap();
    assert_eq!(client.session().get("smc_admin_session"), None);
    assert_eq!(client.session().get("smc_admin_csrf"), Some("tok123"));
}

#[tokio::test]
async fn export_names_file_from_content_disposition() {
    let base = spawn_stub().await;
    let mut client = signed_in(&base).await;

    let download = client.export(ExportKind::Applications, None).await.unwrap();
    assert_eq!(download.filename, "applications_2026-10-17.xlsx");
    assert_eq!(download.bytes, b"PK\x03\x04");

    let err = client.export(ExportKind::Contacts, None).await.unwrap_err();
    assert_eq!(err.to_string(), EXPORT_FAILED_MESSAGE);
}

#[tokio::test]
async fn non_json_failure_reports_http_status() {
    let base = spawn_stub().await;
    let mut client = signed_in(&base).await;
    let err = client.blogs().await.unwrap_err();
    assert_eq!(err, ApiError::Http { status: 502 });
}

#[tokio::test]
async fn unreachable_api_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let mut client = ApiClient::new(&format!("http://{addr}/api"), Session::default()).unwrap();
    assert_eq!(client.me().await.unwrap_err(), ApiError::Network);
}
