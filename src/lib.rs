//! Notes board library - re-exports for testing and external use.
//!
//! A small personal notes board: colored cards with Markdown, tags and an
//! optional image, three layouts (grid, bento, gallery), a detail modal and
//! public share links. The server renders the board by driving the headless
//! `ui` model; the same model runs in tests against fake I/O.

use axum::{
    routing::{get, post},
    Router,
};
use sled::Db;
use std::fs;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notes;
pub mod store;
pub mod templates;
pub mod ui;

use config::{Config, UPLOAD_URL_PREFIX};
use error::StoreError;
use store::NoteStore;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: Db,
    pub store: NoteStore,
}

impl AppState {
    /// Open the database at `config.db_path` and make sure the upload
    /// directory exists.
    pub fn open(config: Config) -> Result<Self, StoreError> {
        fs::create_dir_all(&config.upload_dir)?;
        let db = sled::open(&config.db_path)?;
        Self::with_db(config, db)
    }

    /// State backed by an in-memory database that disappears on drop.
    pub fn temporary(config: Config) -> Result<Self, StoreError> {
        fs::create_dir_all(&config.upload_dir)?;
        let db = sled::Config::new().temporary(true).open()?;
        Self::with_db(config, db)
    }

    fn with_db(config: Config, db: Db) -> Result<Self, StoreError> {
        let store = NoteStore::open(&db)?;
        Ok(Self { config, db, store })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: Arc<AppState>) -> Router {
    let uploads = ServeDir::new(&state.config.upload_dir);

    Router::new()
        .route("/", get(handlers::index))
        .route("/notes", get(handlers::notes_page))
        .route("/notes/add", post(handlers::add_note))
        .route("/notes/update/{id}", post(handlers::update_note))
        .route("/notes/delete/{id}", post(handlers::delete_note))
        .route("/note/share/{id}", post(handlers::toggle_share))
        .route("/shared/{public_id}", get(handlers::shared_note))
        .route("/update_name", post(handlers::update_name))
        .route("/search", get(handlers::search))
        .route("/export_data", get(handlers::export_data))
        .route("/login", get(handlers::login_page).post(handlers::login_submit))
        .route("/logout", get(handlers::logout))
        .nest_service(UPLOAD_URL_PREFIX, uploads)
        .with_state(state)
}

// Re-export commonly used types
pub use client::{ClientError, HttpBackend, NotesBackend};
pub use models::{Note, NoteDraft, NoteEdit, NoteId, NoteSummary, ShareResponse};
pub use notes::{html_escape, note_matches, parse_tags, render_markdown, sanitize_filename};
pub use ui::{NotesApp, NotesPage, UiEvent, ViewMode};
