//! Page handlers
//!
//! Each page is a plain GET that renders one template from `templates/`.
//! The only per-request data is the [`PageContext`].

use askama::Template;
use axum::response::Html;

use crate::error::SiteError;
use crate::template::{PageContext, PageTemplate};

/// Home page
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    /// Request context
    pub ctx: PageContext,
}

/// Company background
#[derive(Debug, Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    /// Request context
    pub ctx: PageContext,
}

/// Service overview
#[derive(Debug, Template)]
#[template(path = "services.html")]
pub struct ServicesPage {
    /// Request context
    pub ctx: PageContext,
}

/// Contact details and the contact form
#[derive(Debug, Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    /// Request context
    pub ctx: PageContext,
}

/// Warehousing
#[derive(Debug, Template)]
#[template(path = "storage.html")]
pub struct StoragePage {
    /// Request context
    pub ctx: PageContext,
}

/// Rail transport
#[derive(Debug, Template)]
#[template(path = "railway.html")]
pub struct RailwayPage {
    /// Request context
    pub ctx: PageContext,
}

/// `GET /`
pub async fn index(ctx: PageContext) -> Result<Html<String>, SiteError> {
    IndexPage { ctx }.render_page()
}

/// `GET /about`
pub async fn about(ctx: PageContext) -> Result<Html<String>, SiteError> {
    AboutPage { ctx }.render_page()
}

/// `GET /services`
pub async fn services(ctx: PageContext) -> Result<Html<String>, SiteError> {
    ServicesPage { ctx }.render_page()
}

/// `GET /contact`
pub async fn contact(ctx: PageContext) -> Result<Html<String>, SiteError> {
    ContactPage { ctx }.render_page()
}

/// `GET /storage`
pub async fn storage(ctx: PageContext) -> Result<Html<String>, SiteError> {
    StoragePage { ctx }.render_page()
}

/// `GET /rail-transport`
pub async fn rail_transport(ctx: PageContext) -> Result<Html<String>, SiteError> {
    RailwayPage { ctx }.render_page()
}
