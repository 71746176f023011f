//! Security header middleware.
//! Stamps a fixed header set onto every outgoing response.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// Decoy framework fingerprint sent in place of any real identifying
/// header.
pub const POWERED_BY_DECOY: &str = "PHP 7.4.3";

/// Set the fixed security header set on the response.
///
/// Runs after the inner handler so the values win regardless of what the
/// handler wrote. Header mutation only; no error conditions.
pub async fn security_headers(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    headers.insert("surrogate-control", HeaderValue::from_static("no-store"));

    // Last write wins; any earlier X-Powered-By is replaced by the decoy.
    headers.insert("x-powered-by", HeaderValue::from_static(POWERED_BY_DECOY));

    response
}
