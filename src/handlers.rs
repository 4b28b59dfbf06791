//! HTTP route handlers for the notes board.
//!
//! The board page is rendered by driving the `ui` model: query parameters on
//! `/notes` stand in for the events a browser would dispatch (view button,
//! card click, opening a note). Mutations are plain form posts that redirect
//! back to the board, except the share toggle and name update which also
//! answer script calls with JSON.

use crate::auth::{can_edit, create_session, password_matches, SESSION_COOKIE, SESSION_TTL_HOURS};
use crate::client::{REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE};
use crate::config::{Config, UPLOAD_URL_PREFIX};
use crate::models::{
    ExportData, ExportedNote, NoteDraft, NoteEdit, NoteId, ShareResponse, SuccessResponse,
    UpdateNameRequest,
};
use crate::notes::{known_color, parse_tags, sanitize_filename};
use crate::templates::{render_board, render_login, render_search, render_shared, AuthLink};
use crate::ui::{NotesApp, NotesPage};
use crate::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE, HOST, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

fn auth_link(jar: &CookieJar, config: &Config) -> AuthLink {
    AuthLink::new(config.auth_enabled(), can_edit(jar, config))
}

/// Scheme and host share links are built from.
fn request_origin(headers: &HeaderMap, config: &Config) -> String {
    if let Some(ref origin) = config.public_origin {
        return origin.clone();
    }
    match headers.get(HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{}", host),
        None => format!("http://{}", config.bind),
    }
}

fn is_script_request(headers: &HeaderMap) -> bool {
    headers
        .get(REQUESTED_WITH_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case(REQUESTED_WITH_VALUE))
}

// ============================================================================
// Board
// ============================================================================

pub async fn index() -> Redirect {
    Redirect::to("/notes")
}

#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    pub view: Option<String>,
    /// Gallery card that was expanded when the link was rendered.
    pub active: Option<NoteId>,
    pub click: Option<NoteId>,
    pub open: Option<NoteId>,
}

/// Gallery selection carried through a form post so the redirect lands on
/// the same expanded card.
#[derive(Debug, Default, Deserialize)]
pub struct ReturnQuery {
    pub active: Option<NoteId>,
}

impl ReturnQuery {
    fn board_url(&self, open: Option<NoteId>) -> String {
        match (open, self.active) {
            (Some(open), Some(active)) => format!("/notes?open={}&active={}", open, active),
            (Some(open), None) => format!("/notes?open={}", open),
            (None, Some(active)) => format!("/notes?active={}", active),
            (None, None) => "/notes".to_string(),
        }
    }
}

pub async fn notes_page(
    Query(query): Query<BoardQuery>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Response {
    if !can_edit(&jar, &state.config) {
        return Redirect::to("/login").into_response();
    }

    let notes = match state.store.list() {
        Ok(n) => n,
        Err(e) => return e.into_response(),
    };
    let name = match state.store.profile_name() {
        Ok(n) => n.unwrap_or_default(),
        Err(e) => return e.into_response(),
    };
    let prefs = match state.store.preferences() {
        Ok(p) => p,
        Err(e) => return e.into_response(),
    };

    let summaries = notes.iter().map(|n| n.summary(UPLOAD_URL_PREFIX)).collect();
    let page = NotesPage::new(&request_origin(&headers, &state.config), summaries, &name);
    let mut app = NotesApp::new(page, prefs);

    app.on_ready();
    if let Some(ref view) = query.view {
        app.select_view(view);
    }
    if let Some(id) = query.active {
        app.restore_active(id);
    }
    if let Some(id) = query.click {
        app.click_card(id);
    }
    if let Some(id) = query.open {
        app.open_note(id);
    }

    Html(render_board(&app.page, auth_link(&jar, &state.config))).into_response()
}

// ============================================================================
// Note Mutations
// ============================================================================

pub async fn add_note(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Response {
    if !can_edit(&jar, &state.config) {
        return Redirect::to("/login").into_response();
    }

    let mut draft = NoteDraft::default();
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            let filename = field.file_name().unwrap_or("").to_string();
            match field.bytes().await {
                Ok(bytes) if !bytes.is_empty() && !filename.is_empty() => {
                    upload = Some((filename, bytes.to_vec()));
                }
                Ok(_) => {}
                Err(e) => {
                    return (StatusCode::BAD_REQUEST, format!("Failed to read file: {}", e))
                        .into_response()
                }
            }
            continue;
        }

        let value = match field.text().await {
            Ok(v) => v,
            Err(e) => {
                return (StatusCode::BAD_REQUEST, format!("Failed to read form: {}", e))
                    .into_response()
            }
        };
        match name.as_str() {
            "title" => draft.title = value.trim().to_string(),
            "content" => draft.content = value,
            "color" => draft.color = known_color(&value),
            "tags" => draft.tags = parse_tags(&value),
            _ => {}
        }
    }

    if let Some((original, bytes)) = upload {
        let filename = format!("{}_{}", Uuid::new_v4().simple(), sanitize_filename(&original));
        let path = state.config.upload_dir.join(&filename);
        if let Err(e) = tokio::fs::write(&path, &bytes).await {
            tracing::error!(error = %e, path = %path.display(), "failed to save upload");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save image").into_response();
        }
        draft.image_filename = Some(filename);
    }

    if draft.is_empty() {
        tracing::debug!("empty note ignored");
        return Redirect::to("/notes").into_response();
    }

    match state.store.insert(draft) {
        Ok(_) => Redirect::to("/notes").into_response(),
        Err(e) => e.into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub color: Option<String>,
    pub tags: Option<String>,
}

pub async fn update_note(
    Path(id): Path<NoteId>,
    Query(ret): Query<ReturnQuery>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<NoteForm>,
) -> Response {
    if !can_edit(&jar, &state.config) {
        return Redirect::to("/login").into_response();
    }

    let edit = NoteEdit {
        title: form.title.trim().to_string(),
        content: form.content,
        color: form.color.as_deref().and_then(known_color),
        tags: form.tags.as_deref().map(parse_tags),
    };

    match state.store.update(id, edit) {
        Ok(Some(_)) => Redirect::to(&ret.board_url(Some(id))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_note(
    Path(id): Path<NoteId>,
    Query(mut ret): Query<ReturnQuery>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Response {
    if !can_edit(&jar, &state.config) {
        return Redirect::to("/login").into_response();
    }

    let note = match state.store.delete(id) {
        Ok(Some(n)) => n,
        Ok(None) => return (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => return e.into_response(),
    };

    if let Some(ref filename) = note.image_filename {
        let path = state.config.upload_dir.join(filename);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!(error = %e, path = %path.display(), "could not remove image");
        }
    }

    // the deleted card cannot stay expanded
    if ret.active == Some(id) {
        ret.active = None;
    }
    Redirect::to(&ret.board_url(None)).into_response()
}

// ============================================================================
// Sharing
// ============================================================================

pub async fn toggle_share(
    Path(id): Path<NoteId>,
    Query(ret): Query<ReturnQuery>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Response {
    if !can_edit(&jar, &state.config) {
        return (StatusCode::FORBIDDEN, "Unauthorized").into_response();
    }

    let note = match state.store.toggle_share(id) {
        Ok(Some(n)) => n,
        Ok(None) => return (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => return e.into_response(),
    };

    if is_script_request(&headers) {
        Json(ShareResponse {
            success: true,
            is_public: note.is_public,
            public_id: if note.is_public { note.public_id } else { None },
        })
        .into_response()
    } else {
        Redirect::to(&ret.board_url(Some(id))).into_response()
    }
}

pub async fn shared_note(
    Path(public_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.store.find_public(&public_id) {
        Ok(Some(note)) => {
            let image_url = note
                .image_filename
                .as_ref()
                .map(|f| format!("{}/{}", UPLOAD_URL_PREFIX, f));
            Html(render_shared(&note, image_url.as_deref())).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => e.into_response(),
    }
}

// ============================================================================
// Profile
// ============================================================================

pub async fn update_name(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(body): Json<UpdateNameRequest>,
) -> Response {
    if !can_edit(&jar, &state.config) {
        return (StatusCode::UNAUTHORIZED, Json(SuccessResponse { success: false })).into_response();
    }

    let Some(name) = body
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
    else {
        return (StatusCode::BAD_REQUEST, Json(SuccessResponse { success: false })).into_response();
    };

    match state.store.set_profile_name(name) {
        Ok(()) => {
            tracing::info!(display_name = name, "display name updated");
            Json(SuccessResponse { success: true }).into_response()
        }
        Err(e) => e.into_response(),
    }
}

// ============================================================================
// Search & Export
// ============================================================================

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub async fn search(
    Query(query): Query<SearchQuery>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Response {
    if !can_edit(&jar, &state.config) {
        return Redirect::to("/login").into_response();
    }

    let q = query.q.unwrap_or_default();
    match state.store.search(&q) {
        Ok(results) => Html(render_search(&q, &results, auth_link(&jar, &state.config))).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn export_data(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if !can_edit(&jar, &state.config) {
        return Redirect::to("/login").into_response();
    }

    let notes = match state.store.list() {
        Ok(n) => n,
        Err(e) => return e.into_response(),
    };
    let data = ExportData {
        notes: notes.iter().map(ExportedNote::from).collect(),
    };

    match serde_json::to_string_pretty(&data) {
        Ok(body) => (
            [
                (CONTENT_TYPE, "application/json"),
                (CONTENT_DISPOSITION, "attachment; filename=\"backup.json\""),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "export failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Export failed").into_response()
        }
    }
}

// ============================================================================
// Authentication Handlers
// ============================================================================

pub async fn login_page(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if !state.config.auth_enabled() || can_edit(&jar, &state.config) {
        return Redirect::to("/notes").into_response();
    }
    Html(render_login(None)).into_response()
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
}

pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Response {
    let Some(secret) = state.config.secret() else {
        return Redirect::to("/notes").into_response();
    };

    if !password_matches(&form.password, &state.config) {
        tracing::warn!("failed login attempt");
        return (StatusCode::UNAUTHORIZED, Html(render_login(Some("Invalid password."))))
            .into_response();
    }

    let Some(token) = create_session(secret) else {
        return (StatusCode::INTERNAL_SERVER_ERROR, Html(render_login(Some("Failed to create session."))))
            .into_response();
    };

    let cookie = format!(
        "{}={}; Path=/; HttpOnly; Secure; SameSite=Strict; Max-Age={}",
        SESSION_COOKIE,
        token,
        SESSION_TTL_HOURS * 3600
    );
    let Ok(value) = HeaderValue::from_str(&cookie) else {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to set session").into_response();
    };

    tracing::info!("owner logged in");
    ([(SET_COOKIE, value)], Redirect::to("/notes")).into_response()
}

pub async fn logout() -> Response {
    let cookie = format!("{}=; Path=/; HttpOnly; Secure; Max-Age=0", SESSION_COOKIE);
    match HeaderValue::from_str(&cookie) {
        Ok(value) => ([(SET_COOKIE, value)], Redirect::to("/notes")).into_response(),
        Err(_) => Redirect::to("/notes").into_response(),
    }
}
