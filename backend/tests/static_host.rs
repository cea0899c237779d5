use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use backend::config::ServerConfig;
use backend::server::build_router;

const INDEX: &str = "<!DOCTYPE html><html><body>waypost home</body></html>";
const STYLESHEET: &str = "body{margin:0}";

fn site_fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp site dir");
    std::fs::write(dir.path().join("index.html"), INDEX).expect("write index");
    std::fs::create_dir(dir.path().join("css")).expect("create css dir");
    std::fs::write(dir.path().join("css").join("site.css"), STYLESHEET)
        .expect("write stylesheet");
    dir
}

fn config_for(dir: &TempDir, environment: &str) -> ServerConfig {
    ServerConfig {
        environment: environment.to_string(),
        static_dir: dir.path().to_string_lossy().into_owned(),
        bind_address: "127.0.0.1:0".to_string(),
    }
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn serves_existing_asset() {
    let dir = site_fixture();
    let app = build_router(&config_for(&dir, "development"));

    let response = app
        .oneshot(Request::builder().uri("/css/site.css").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, STYLESHEET);
}

#[tokio::test]
async fn unmatched_path_returns_entry_document_with_200() {
    let dir = site_fixture();
    let app = build_router(&config_for(&dir, "development"));

    let response = app
        .oneshot(Request::builder().uri("/no/such/page").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, INDEX);
}

#[tokio::test]
async fn development_mode_skips_hsts_and_https_redirect() {
    let dir = site_fixture();
    let app = build_router(&config_for(&dir, "development"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::HOST, "localhost:3000")
                .header("x-forwarded-proto", "http")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::STRICT_TRANSPORT_SECURITY)
        .is_none());
}

#[tokio::test]
async fn production_mode_sets_hsts_header() {
    let dir = site_fixture();
    let app = build_router(&config_for(&dir, "production"));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::STRICT_TRANSPORT_SECURITY)
            .and_then(|value| value.to_str().ok()),
        Some("max-age=2592000")
    );
}

#[tokio::test]
async fn production_mode_redirects_plain_http_to_https() {
    let dir = site_fixture();
    let app = build_router(&config_for(&dir, "production"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/about")
                .header(header::HOST, "example.com")
                .header("x-forwarded-proto", "http")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("https://example.com/about")
    );
}

#[tokio::test]
async fn error_route_returns_generic_page() {
    let dir = site_fixture();
    let app = build_router(&config_for(&dir, "production"));

    let response = app
        .oneshot(Request::builder().uri("/error").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Something went wrong"));
    assert!(!body.contains("panic"));
}
