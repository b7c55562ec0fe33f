//! Font `Content-Type` correction
//!
//! Static file servers commonly guess `application/octet-stream` (or an
//! obsolete `application/x-font-*` type) for web fonts. Browsers enforcing
//! `nosniff` then refuse them, so the type is rewritten from the request
//! path's extension.

use axum::{
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Font type for a request path, if it names a web font
#[must_use]
pub fn font_mime_type(path: &str) -> Option<&'static str> {
    let (_, extension) = path.rsplit_once('.')?;
    match extension {
        "ttf" => Some("font/ttf"),
        "woff" => Some("font/woff"),
        "woff2" => Some("font/woff2"),
        _ => None,
    }
}

/// Middleware for [`axum::middleware::from_fn`]
///
/// Applies whatever the inner service answered, including 404s for missing
/// font files.
pub async fn correct_font_mime(request: Request, next: Next) -> Response {
    let font_type = font_mime_type(request.uri().path());
    let mut response = next.run(request).await;

    if let Some(mime) = font_type {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(mime));
    }

    response
}
