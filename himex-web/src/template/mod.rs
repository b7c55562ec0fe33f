//! Askama page rendering
//!
//! Every page template carries a [`PageContext`] named `ctx`. The shared
//! layout (`templates/base.html`) uses it to build asset URLs and to mark the
//! active navigation entry. Asset URLs are emitted with `|safe`; the HTML
//! escaper would otherwise entity-encode their slashes.
//!
//! # Example
//!
//! ```rust
//! use askama::Template;
//! use himex_web::template::{PageContext, PageTemplate};
//!
//! #[derive(Template)]
//! #[template(source = r#"<link href="{{ ctx.asset("css/site.css")|safe }}">"#, ext = "html")]
//! struct Demo {
//!     ctx: PageContext,
//! }
//!
//! let html = Demo { ctx: PageContext::new("/") }.render_page().unwrap();
//! assert!(html.0.contains("/static/css/site.css"));
//! ```

use std::convert::Infallible;

use askama::Template;
use axum::{extract::FromRequestParts, http::request::Parts, response::Html};

use crate::error::SiteError;

/// URL prefix under which static assets are mounted
pub const STATIC_PREFIX: &str = "/static";

/// Request data templates need for URL generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    path: String,
}

impl PageContext {
    /// Context for a request to `path`
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the current request
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// URL of a file under the static mount
    #[must_use]
    pub fn asset(&self, file: &str) -> String {
        format!("{STATIC_PREFIX}/{}", file.trim_start_matches('/'))
    }

    /// Whether `href` is the page being rendered
    #[must_use]
    pub fn is_current(&self, href: &str) -> bool {
        self.path == href
    }
}

impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::new(parts.uri.path()))
    }
}

/// Render an Askama template as a full HTML page
///
/// Rendering errors become [`SiteError::Template`], which responds 500.
pub trait PageTemplate: Template {
    /// Render into an `Html` response body
    fn render_page(&self) -> Result<Html<String>, SiteError> {
        Ok(Html(self.render()?))
    }
}

impl<T> PageTemplate for T where T: Template {}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, response::IntoResponse};

    #[derive(Template)]
    #[template(
        source = r#"<a class="{% if ctx.is_current("/about") %}active{% endif %}" href="/about">{{ title }}</a>"#,
        ext = "html"
    )]
    struct NavTemplate {
        ctx: PageContext,
        title: String,
    }

    #[test]
    fn test_asset_urls() {
        let ctx = PageContext::new("/");
        assert_eq!(ctx.asset("css/site.css"), "/static/css/site.css");
        assert_eq!(ctx.asset("/img/logo.svg"), "/static/img/logo.svg");
    }

    #[test]
    fn test_active_navigation() {
        let html = NavTemplate {
            ctx: PageContext::new("/about"),
            title: "About".to_string(),
        }
        .render_page()
        .unwrap();
        assert!(html.0.contains(r#"class="active""#));

        let html = NavTemplate {
            ctx: PageContext::new("/"),
            title: "About".to_string(),
        }
        .render_page()
        .unwrap();
        assert!(!html.0.contains(r#"class="active""#));
    }

    #[test]
    fn test_render_page_is_ok_html() {
        let response = NavTemplate {
            ctx: PageContext::new("/"),
            title: "About".to_string(),
        }
        .render_page()
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_context_from_request_parts() {
        let (mut parts, _) = Request::builder()
            .uri("/rail-transport?x=1")
            .body(Body::empty())
            .unwrap()
            .into_parts();

        let ctx = PageContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ctx.path(), "/rail-transport");
    }
}
