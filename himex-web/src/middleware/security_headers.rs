//! Fixed security headers on every response
//!
//! The layer inserts a precomputed set of headers after the inner service has
//! answered, whatever the status: pages, redirects, validation failures and
//! the 404 fallback all get them. Existing values with the same name are
//! replaced.
//!
//! ```rust,no_run
//! # use himex_web::middleware::SecurityHeadersLayer;
//! # use axum::{routing::get, Router};
//! let app: Router = Router::new()
//!     .route("/", get(|| async { "home" }))
//!     .layer(SecurityHeadersLayer::standard());
//! ```

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::http::{HeaderName, HeaderValue, Request, Response};

/// `X-XSS-Protection`
pub const X_XSS_PROTECTION: HeaderName = HeaderName::from_static("x-xss-protection");

/// `X-Content-Type-Options`
pub const X_CONTENT_TYPE_OPTIONS: HeaderName = HeaderName::from_static("x-content-type-options");

/// Ordered list of headers to stamp onto responses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderSet {
    /// `X-XSS-Protection: 1; mode=block` and `X-Content-Type-Options: nosniff`
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
            .with(X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"))
            .with(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"))
    }

    /// Add or replace one header
    #[must_use]
    pub fn with(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.entries.retain(|(existing, _)| *existing != name);
        self.entries.push((name, value));
        self
    }

    fn apply<B>(&self, response: &mut Response<B>) {
        let headers = response.headers_mut();
        for (name, value) in &self.entries {
            headers.insert(name.clone(), value.clone());
        }
    }
}

/// Tower layer stamping a [`HeaderSet`] onto every response
#[derive(Debug, Clone)]
pub struct SecurityHeadersLayer {
    headers: Arc<HeaderSet>,
}

impl SecurityHeadersLayer {
    /// Layer for an arbitrary header set
    #[must_use]
    pub fn new(headers: HeaderSet) -> Self {
        Self {
            headers: Arc::new(headers),
        }
    }

    /// Layer for [`HeaderSet::standard`]
    #[must_use]
    pub fn standard() -> Self {
        Self::new(HeaderSet::standard())
    }
}

impl<S> tower::Layer<S> for SecurityHeadersLayer {
    type Service = SecurityHeaders<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecurityHeaders {
            inner,
            headers: Arc::clone(&self.headers),
        }
    }
}

/// Service produced by [`SecurityHeadersLayer`]
#[derive(Debug, Clone)]
pub struct SecurityHeaders<S> {
    inner: S,
    headers: Arc<HeaderSet>,
}

type BoxFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

impl<S, ReqBody, ResBody> tower::Service<Request<ReqBody>> for SecurityHeaders<S>
where
    S: tower::Service<Request<ReqBody>, Response = Response<ResBody>> + 'static,
    S::Future: Send + 'static,
    S::Error: 'static,
    ResBody: Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let headers = Arc::clone(&self.headers);
        let pending = self.inner.call(request);

        Box::pin(async move {
            let mut response = pending.await?;
            headers.apply(&mut response);
            Ok(response)
        })
    }
}
