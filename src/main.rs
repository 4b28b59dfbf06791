//! Notes board - a personal board of colored Markdown notes.
//!
//! This is the main entry point for the web server. The application is
//! organized into the following modules:
//!
//! - `config`: Environment configuration
//! - `store`: sled-backed notes, share index and profile
//! - `ui`: Headless page model (views, gallery, modal, share, name editing)
//! - `templates`: HTML rendering of the page model
//! - `auth`: Optional password login with signed session cookies
//! - `handlers`: HTTP route handlers

use std::sync::Arc;

use notes_board::{config::Config, router, AppState};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    let state = match AppState::open(config.clone()) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!(error = %e, db = %config.db_path.display(), "failed to open database");
            std::process::exit(1);
        }
    };

    let app = router(state);

    let listener = match tokio::net::TcpListener::bind(&config.bind).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, bind = %config.bind, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Notes server running at http://{} (database {}, uploads {})",
        config.bind,
        config.db_path.display(),
        config.upload_dir.display()
    );
    if config.auth_enabled() {
        tracing::info!("Authentication: ENABLED (NOTES_PASSWORD set)");
    } else {
        tracing::info!("Authentication: DISABLED (set NOTES_PASSWORD to require a login)");
    }

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
