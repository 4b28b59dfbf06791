//! Public/private toggle for the note shown in the modal.
//!
//! The flow is split so other events can run while the request is out:
//! [`begin_share`] marks the note in flight and shows the spinner,
//! [`finish_share`] applies the server's answer, [`confirm_copy`] reports the
//! clipboard result and [`revert_feedback`] is the timer that settles the
//! "Copied!" label. [`submit_share`] strings them together.
//!
//! At most one request per note is in flight; the button is disabled until it
//! settles and further submits for that note are ignored.

use super::page::NotesPage;
use crate::client::{ClientError, NotesBackend};
use crate::models::{NoteId, ShareResponse};
use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// How long "Copied!" stays on the button.
pub const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

pub const SHARE_ERROR_MESSAGE: &str = "An error occurred while sharing.";

pub fn share_url(origin: &str, public_id: &str) -> String {
    format!("{}/shared/{}", origin.trim_end_matches('/'), public_id)
}

// ============================================================================
// Controls
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareLabel {
    Share,
    Unshare,
    Loading,
    Copied,
}

impl fmt::Display for ShareLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShareLabel::Share => "Share",
            ShareLabel::Unshare => "Unshare",
            ShareLabel::Loading => "...",
            ShareLabel::Copied => "Copied!",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareButton {
    pub label: ShareLabel,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicLink {
    pub visible: bool,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareControls {
    /// Note the form currently targets.
    pub note_id: Option<NoteId>,
    pub action: String,
    pub button: ShareButton,
    pub link: Option<PublicLink>,
    in_flight: BTreeSet<NoteId>,
}

impl ShareControls {
    pub fn new() -> Self {
        Self {
            note_id: None,
            action: String::new(),
            button: ShareButton {
                label: ShareLabel::Share,
                disabled: false,
            },
            link: Some(PublicLink::default()),
            in_flight: BTreeSet::new(),
        }
    }

    /// Point the form at `note_id`.
    pub fn bind(&mut self, note_id: NoteId) {
        self.note_id = Some(note_id);
        self.action = format!("/note/share/{}", note_id);
        self.button.disabled = self.in_flight.contains(&note_id);
    }

    /// Detach the form from any note. Requests already in flight keep running
    /// and only update their card when they settle.
    pub fn unbind(&mut self) {
        self.note_id = None;
        self.action.clear();
        self.button = ShareButton {
            label: ShareLabel::Share,
            disabled: false,
        };
        if let Some(link) = self.link.as_mut() {
            *link = PublicLink::default();
        }
    }

    pub fn is_in_flight(&self, note_id: NoteId) -> bool {
        self.in_flight.contains(&note_id)
    }

    fn shows(&self, note_id: NoteId) -> bool {
        self.note_id == Some(note_id)
    }
}

impl Default for ShareControls {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Clipboard
// ============================================================================

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable")]
    Unavailable,

    #[error("Clipboard write denied: {0}")]
    Denied(String),
}

#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard that keeps the last written text.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

// ============================================================================
// Flow
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingShare {
    pub note_id: NoteId,
    previous_label: ShareLabel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareResolution {
    Public { url: String },
    Private,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Nothing to submit, or a request for this note is already running.
    Ignored,
    Shared {
        url: String,
        copied: bool,
        /// Schedule [`revert_feedback`] after this long.
        revert_after: Duration,
    },
    Unshared,
    Failed,
}

/// Start a submission for the note the form targets.
pub fn begin_share(page: &mut NotesPage) -> Option<PendingShare> {
    let share = page.share.as_mut()?;
    let note_id = share.note_id?;
    if share.in_flight.contains(&note_id) {
        tracing::debug!(note_id, "share already in flight");
        return None;
    }
    share.in_flight.insert(note_id);

    let pending = PendingShare {
        note_id,
        previous_label: share.button.label,
    };
    share.button.label = ShareLabel::Loading;
    share.button.disabled = true;
    Some(pending)
}

/// Apply the backend's answer. The originating card is always brought in line
/// with the server; the button and link only if the form still targets it.
pub fn finish_share(
    page: &mut NotesPage,
    pending: &PendingShare,
    result: Result<ShareResponse, ClientError>,
) -> ShareResolution {
    if let Some(share) = page.share.as_mut() {
        share.in_flight.remove(&pending.note_id);
    }

    let response = match result {
        Ok(r) if r.success => r,
        Ok(_) => {
            tracing::warn!(note_id = pending.note_id, "share toggle rejected");
            return fail(page, pending);
        }
        Err(e) => {
            tracing::error!(note_id = pending.note_id, error = %e, "share toggle failed");
            return fail(page, pending);
        }
    };

    let public_id = if response.is_public {
        match response.public_id.filter(|p| !p.is_empty()) {
            Some(p) => Some(p),
            None => {
                tracing::error!(note_id = pending.note_id, "public note without public id");
                return fail(page, pending);
            }
        }
    } else {
        None
    };

    if let Some(card) = page.card_mut(pending.note_id) {
        card.summary.is_public = response.is_public;
        card.summary.public_id = public_id.clone();
    }

    let origin = page.origin.clone();
    let share = page.share.as_mut().filter(|s| s.shows(pending.note_id));

    match public_id {
        Some(public_id) => {
            let url = share_url(&origin, &public_id);
            if let Some(share) = share {
                share.button.disabled = false;
                if let Some(link) = share.link.as_mut() {
                    link.visible = true;
                    link.href = url.clone();
                }
            }
            ShareResolution::Public { url }
        }
        None => {
            if let Some(share) = share {
                share.button.label = ShareLabel::Share;
                share.button.disabled = false;
                if let Some(link) = share.link.as_mut() {
                    link.visible = false;
                }
            }
            ShareResolution::Private
        }
    }
}

fn fail(page: &mut NotesPage, pending: &PendingShare) -> ShareResolution {
    if let Some(share) = page.share.as_mut().filter(|s| s.shows(pending.note_id)) {
        share.button.label = pending.previous_label;
        share.button.disabled = false;
    }
    page.notify(SHARE_ERROR_MESSAGE);
    ShareResolution::Failed
}

/// Reflect the clipboard write on the button.
pub fn confirm_copy(page: &mut NotesPage, note_id: NoteId, copied: bool) {
    if let Some(share) = page.share.as_mut().filter(|s| s.shows(note_id)) {
        share.button.label = if copied {
            ShareLabel::Copied
        } else {
            ShareLabel::Unshare
        };
    }
}

/// Timer expiry: settle "Copied!" back to "Unshare". Returns true if the label changed.
pub fn revert_feedback(page: &mut NotesPage, note_id: NoteId) -> bool {
    match page.share.as_mut().filter(|s| s.shows(note_id)) {
        Some(share) if share.button.label == ShareLabel::Copied => {
            share.button.label = ShareLabel::Unshare;
            true
        }
        _ => false,
    }
}

/// Run a whole submission against `backend`.
pub async fn submit_share<B, C>(page: &mut NotesPage, backend: &B, clipboard: &mut C) -> ShareOutcome
where
    B: NotesBackend,
    C: Clipboard,
{
    let Some(pending) = begin_share(page) else {
        return ShareOutcome::Ignored;
    };

    let result = backend.toggle_share(pending.note_id).await;

    match finish_share(page, &pending, result) {
        ShareResolution::Public { url } => {
            let copied = match clipboard.write_text(&url).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard write failed");
                    false
                }
            };
            confirm_copy(page, pending.note_id, copied);
            ShareOutcome::Shared {
                url,
                copied,
                revert_after: COPIED_FEEDBACK,
            }
        }
        ShareResolution::Private => ShareOutcome::Unshared,
        ShareResolution::Failed => ShareOutcome::Failed,
    }
}
