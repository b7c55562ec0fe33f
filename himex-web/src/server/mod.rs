//! Router assembly and the HTTP listener

use axum::{
    middleware::{from_fn, map_response_with_state},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::config::{MailTransport, SiteConfig};
use crate::error::SiteError;
use crate::handlers::{pages, send_mail};
use crate::middleware::{apply_cache_policy, correct_font_mime, CachePolicy, SecurityHeadersLayer};
use crate::state::AppState;
use crate::template::STATIC_PREFIX;

/// Build the full application
///
/// The header post-processors wrap everything registered here, including
/// static files and the 404 fallback.
pub fn router(state: AppState) -> Result<Router, SiteError> {
    let assets = &state.config().assets;
    let cache_policy = CachePolicy::new(assets.cache_max_age_secs)?;
    let static_files = ServeDir::new(&assets.static_dir);

    let app = Router::new()
        .route("/", get(pages::index))
        .route("/about", get(pages::about))
        .route("/services", get(pages::services))
        .route("/contact", get(pages::contact))
        .route("/storage", get(pages::storage))
        .route("/rail-transport", get(pages::rail_transport))
        .route("/sendmail", post(send_mail))
        .nest_service(STATIC_PREFIX, static_files)
        .layer(from_fn(correct_font_mime))
        .layer(SecurityHeadersLayer::standard())
        .layer(map_response_with_state(cache_policy, apply_cache_policy))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Bind the configured address and serve until Ctrl-C
///
/// Jobs still running at shutdown are abandoned.
pub async fn serve(config: SiteConfig) -> Result<(), SiteError> {
    match config.mail.transport {
        MailTransport::Smtp if !config.mail.has_credentials() => {
            warn!("HOST_EMAIL or HOST_PASSWORD is not set; contact form mail will fail");
        }
        MailTransport::Console => info!("Contact form mail is logged, not sent"),
        MailTransport::Smtp => {}
    }

    let address = config.server.address();
    let app = router(AppState::new(config))?;

    let listener = TcpListener::bind(&address).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl-C handler");
        return;
    }
    info!("Shutdown requested");
}
