//! `Cache-Control` for successful responses
//!
//! Only responses whose status is exactly `200 OK` are marked cacheable.
//! Redirects, client errors and server errors pass through unchanged.
//!
//! ```rust,no_run
//! # use himex_web::middleware::{apply_cache_policy, CachePolicy};
//! # use axum::{middleware::map_response_with_state, Router};
//! # fn build() -> Result<Router, himex_web::error::SiteError> {
//! let policy = CachePolicy::new(1200)?;
//! let app: Router = Router::new().layer(map_response_with_state(policy, apply_cache_policy));
//! # Ok(app)
//! # }
//! ```

use axum::{
    extract::State,
    http::{header::CACHE_CONTROL, HeaderValue, StatusCode},
    response::Response,
};

use crate::error::SiteError;

/// Cache directive attached to 200 responses
#[derive(Debug, Clone)]
pub struct CachePolicy {
    value: HeaderValue,
}

impl CachePolicy {
    /// `public, max-age=<max_age>`
    pub fn new(max_age: u64) -> Result<Self, SiteError> {
        let value = HeaderValue::try_from(format!("public, max-age={max_age}"))
            .map_err(|e| SiteError::config(format!("invalid Cache-Control value: {e}")))?;
        Ok(Self { value })
    }
}

/// Response mapper for [`axum::middleware::map_response_with_state`]
pub async fn apply_cache_policy(State(policy): State<CachePolicy>, mut response: Response) -> Response {
    if response.status() == StatusCode::OK {
        response
            .headers_mut()
            .insert(CACHE_CONTROL, policy.value);
    }
    response
}
