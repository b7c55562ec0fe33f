//! Integration tests for the response header post-processors

mod common;

use std::sync::Arc;

use axum::http::{header, HeaderMap, StatusCode};
use axum_test::TestServer;
use himex_web::state::AppState;
use tempfile::TempDir;

use common::{site_config, test_server, RecordingSender};

fn server_with_assets() -> (TempDir, TestServer) {
    let dir = tempfile::tempdir().unwrap();
    let fonts = dir.path().join("fonts");
    std::fs::create_dir_all(&fonts).unwrap();
    for file in ["brand.ttf", "brand.woff", "brand.woff2"] {
        std::fs::write(fonts.join(file), [0_u8, 1, 0, 0]).unwrap();
    }
    std::fs::write(dir.path().join("site.css"), "body{}").unwrap();

    let state = AppState::with_mailer(site_config(dir.path()), Arc::new(RecordingSender::default()));
    let server = test_server(state);
    (dir, server)
}

fn assert_security_headers(headers: &HeaderMap) {
    assert_eq!(headers.get("x-xss-protection").unwrap(), "1; mode=block");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
}

#[tokio::test]
async fn security_headers_on_every_status() {
    let (_dir, server) = server_with_assets();

    let ok = server.get("/").await;
    ok.assert_status(StatusCode::OK);
    assert_security_headers(ok.headers());

    let redirect = server
        .post("/sendmail")
        .form(&[
            ("fname", "Jane"),
            ("lname", "Doe"),
            ("email", "jane@example.com"),
            ("message", "Hello"),
        ])
        .await;
    redirect.assert_status(StatusCode::FOUND);
    assert_security_headers(redirect.headers());

    let missing = server.get("/missing").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_security_headers(missing.headers());

    let invalid = server
        .post("/sendmail")
        .form(&[
            ("fname", "Jane"),
            ("lname", "Doe"),
            ("email", "nope"),
            ("message", "Hello"),
        ])
        .await;
    invalid.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_security_headers(invalid.headers());
}

#[tokio::test]
async fn cache_control_only_on_ok() {
    let (_dir, server) = server_with_assets();

    for path in ["/", "/contact", "/static/site.css"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=1200",
            "{path}"
        );
    }

    let missing = server.get("/static/nope.css").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert!(missing.headers().get(header::CACHE_CONTROL).is_none());

    let redirect = server
        .post("/sendmail")
        .form(&[
            ("fname", "Jane"),
            ("lname", "Doe"),
            ("email", "jane@example.com"),
            ("message", "Hello"),
        ])
        .await;
    redirect.assert_status(StatusCode::FOUND);
    assert!(redirect.headers().get(header::CACHE_CONTROL).is_none());
}

#[tokio::test]
async fn fonts_get_exact_content_type() {
    let (_dir, server) = server_with_assets();

    for (path, expected) in [
        ("/static/fonts/brand.ttf", "font/ttf"),
        ("/static/fonts/brand.woff", "font/woff"),
        ("/static/fonts/brand.woff2", "font/woff2"),
    ] {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), expected);
    }
}

#[tokio::test]
async fn other_assets_keep_their_content_type() {
    let (_dir, server) = server_with_assets();

    let response = server.get("/static/site.css").await;

    response.assert_status_ok();
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "text/css");
}
