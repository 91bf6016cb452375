#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use std::path::Path;
use tailor_gallery::config::AppConfig;
use tailor_gallery::{AppState, create_app};
use tempfile::TempDir;
use tower::ServiceExt;

pub const BOUNDARY: &str = "---------------------------123456789012345678901234567";

/// App wired to a temporary upload root. The TempDir handle keeps the
/// directory alive for the duration of the test.
pub struct TestApp {
    pub app: Router,
    pub upload_root: TempDir,
}

pub fn test_app() -> TestApp {
    let upload_root = tempfile::tempdir().unwrap();
    let config = AppConfig {
        upload_root: upload_root.path().to_path_buf(),
        ..AppConfig::default()
    };
    TestApp {
        app: create_app(AppState::new(config)),
        upload_root,
    }
}

/// Collapses every Set-Cookie header of a response into a Cookie header
/// value for the next request.
pub fn cookies_from(response: &Response<Body>) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn location_of(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Logs in with the default admin credentials and returns the session
/// cookie header value.
pub async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(Body::from("username=admin&password=sewsecure123"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&response), "/upload");
    cookies_from(&response)
}

/// Builds a multipart/form-data body with category, file, and description
/// fields, matching the upload form.
pub fn multipart_body(
    category: &str,
    filename: &str,
    content: &[u8],
    description: &str,
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"category\"\r\n\r\n\
             {category}\r\n\
             --{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(
        format!(
            "\r\n--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"description\"\r\n\r\n\
             {description}\r\n\
             --{BOUNDARY}--\r\n"
        )
        .as_bytes(),
    );
    body
}

pub fn upload_request(session: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header("Cookie", session)
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Uploads one image and asserts the redirect to the category gallery.
pub async fn upload_image(
    app: &Router,
    session: &str,
    category: &str,
    filename: &str,
    description: &str,
) {
    let body = multipart_body(category, filename, b"fake image bytes", description);
    let response = app
        .clone()
        .oneshot(upload_request(session, body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&response), format!("/{category}"));
}

/// Reads the sidecar metadata file of a category straight from disk.
pub fn read_descriptions(upload_root: &Path, category: &str) -> serde_json::Value {
    let path = upload_root.join(category).join("descriptions.json");
    if !path.exists() {
        return serde_json::json!({});
    }
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}
