//! Response header post-processors
//!
//! Three independent passes, each wrapping the whole router (pages, the
//! contact form, static files and the 404 fallback):
//! - Font MIME correction (`.ttf`, `.woff`, `.woff2`)
//! - Security headers (`X-XSS-Protection`, `X-Content-Type-Options`)
//! - Cache headers (`Cache-Control` on 200 responses only)
//!
//! None of them touches the status code or the body, so they can be layered
//! in any order.

pub mod cache_control;
pub mod font_mime;
pub mod security_headers;

pub use cache_control::{apply_cache_policy, CachePolicy};
pub use font_mime::{correct_font_mime, font_mime_type};
pub use security_headers::{HeaderSet, SecurityHeaders, SecurityHeadersLayer};
