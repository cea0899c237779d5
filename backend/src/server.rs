use std::any::Any;
use std::path::PathBuf;

use axum::{
    extract::Request,
    http::{header, HeaderValue, Uri},
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;

// Matches the default max-age the site previously shipped with.
const HSTS_VALUE: &str = "max-age=2592000";

const ERROR_PAGE: &str = "<!DOCTYPE html>\
<html lang=\"en\">\
<head><meta charset=\"utf-8\"><title>Something went wrong</title></head>\
<body><h1>Something went wrong</h1>\
<p>An unexpected error occurred. Please try again later.</p></body>\
</html>";

/// Builds the full static-host router. Every path that does not match a
/// file under the static directory falls back to the entry document so
/// client-side routing keeps working on hard refreshes.
pub fn build_router(config: &ServerConfig) -> Router {
    let static_dir = PathBuf::from(&config.static_dir);
    let entry_document = ServeFile::new(static_dir.join("index.html"));
    let site = ServeDir::new(&static_dir).fallback(entry_document);

    let mut router = Router::new()
        .route("/error", get(error_page))
        .fallback_service(site);

    if !config.is_development() {
        router = router
            .layer(CatchPanicLayer::custom(panic_to_error_redirect))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::STRICT_TRANSPORT_SECURITY,
                HeaderValue::from_static(HSTS_VALUE),
            ))
            .layer(middleware::from_fn(https_redirect));
    }

    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

async fn error_page() -> Html<&'static str> {
    Html(ERROR_PAGE)
}

// The proxy in front of the server terminates TLS and reports the
// original scheme in x-forwarded-proto.
async fn https_redirect(request: Request, next: Next) -> Response {
    let forwarded_proto = request
        .headers()
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok());

    if forwarded_proto == Some("http") {
        let host = request
            .headers()
            .get(header::HOST)
            .and_then(|value| value.to_str().ok());
        if let Some(location) = https_location(request.uri(), host) {
            return Redirect::temporary(&location).into_response();
        }
    }

    next.run(request).await
}

fn https_location(uri: &Uri, host: Option<&str>) -> Option<String> {
    let authority = host.or_else(|| uri.authority().map(|a| a.as_str()))?;
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    Some(format!("https://{}{}", authority, path))
}

fn panic_to_error_redirect(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("unhandled panic while serving request");
    Redirect::to("/error").into_response()
}
