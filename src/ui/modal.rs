//! The note detail overlay.
//!
//! Opening binds the overlay to one card: title, body, theme, image, tag chips,
//! and the share/delete form targets. Every open rebuilds all of it, so nothing
//! from the previously shown note survives. Closing is the same operation
//! whichever trigger asked for it.

use super::dom::ClassList;
use super::page::NotesPage;
use super::share::{share_url, ShareLabel};
use crate::models::{NoteId, NoteSummary};
use crate::notes::render_markdown;

pub const BACKDROP_CLASS: &str = "note-modal-backdrop";
pub const MODAL_CLASS: &str = "note-modal";
pub const OPEN_CLASS: &str = "open";
pub const ESCAPE_KEY: &str = "Escape";

// ============================================================================
// Markdown Renderer
// ============================================================================

pub trait MarkdownRenderer {
    /// Produce sanitized HTML for `source`.
    fn render(&self, source: &str) -> String;
}

/// pulldown-cmark output cleaned by ammonia.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmarkRenderer;

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, source: &str) -> String {
        render_markdown(source)
    }
}

// ============================================================================
// Modal
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalBody {
    /// Sanitized HTML from a renderer.
    Html(String),
    /// Raw source, to be shown as text and never interpreted as markup.
    Text(String),
}

impl Default for ModalBody {
    fn default() -> Self {
        ModalBody::Text(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub backdrop: ClassList,
    /// `note-modal` plus at most one color theme.
    pub classes: ClassList,
    pub note_id: Option<NoteId>,
    pub title: String,
    /// Markdown source, kept for the edit form.
    pub raw_content: String,
    pub body: ModalBody,
    /// `None` hides the image region.
    pub image: Option<String>,
    /// One chip per tag.
    pub tags: Vec<String>,
    pub color: String,
}

impl Modal {
    pub fn new() -> Self {
        Self {
            backdrop: ClassList::from_names(&[BACKDROP_CLASS]),
            classes: ClassList::from_names(&[MODAL_CLASS]),
            note_id: None,
            title: String::new(),
            raw_content: String::new(),
            body: ModalBody::default(),
            image: None,
            tags: Vec::new(),
            color: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.backdrop.contains(OPEN_CLASS)
    }
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}

/// What asked the modal to close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    /// A click that landed on the backdrop element or inside it. Only clicks
    /// whose target is the backdrop itself close the modal.
    BackdropClick { on_backdrop: bool },
    Key(String),
}

impl CloseTrigger {
    fn closes(&self) -> bool {
        match self {
            CloseTrigger::CloseButton => true,
            CloseTrigger::BackdropClick { on_backdrop } => *on_backdrop,
            CloseTrigger::Key(key) => key == ESCAPE_KEY,
        }
    }
}

// ============================================================================
// Open / Close
// ============================================================================

/// Bind the modal to `note` and open it. Returns false when the page has no modal.
pub fn open_modal(
    page: &mut NotesPage,
    note: &NoteSummary,
    renderer: Option<&dyn MarkdownRenderer>,
) -> bool {
    let Some(modal) = page.modal.as_mut() else {
        return false;
    };

    modal.note_id = Some(note.id);
    modal.title = note.title.clone();
    modal.raw_content = note.content.clone();
    modal.body = match renderer {
        Some(r) => ModalBody::Html(r.render(&note.content)),
        None => ModalBody::Text(note.content.clone()),
    };

    modal.classes = ClassList::from_names(&[MODAL_CLASS, &note.color]);
    modal.color = note.color.clone();

    modal.image = note.image_url.clone().filter(|u| !u.is_empty());
    modal.tags = note.tags.clone();

    if let Some(share) = page.share.as_mut() {
        share.bind(note.id);
        if note.is_public {
            share.button.label = ShareLabel::Unshare;
            if let Some(link) = share.link.as_mut() {
                link.visible = true;
                link.href = share_url(&page.origin, note.public_id.as_deref().unwrap_or(""));
            }
        } else {
            share.button.label = ShareLabel::Share;
            if let Some(link) = share.link.as_mut() {
                link.visible = false;
            }
        }
    }

    if let Some(form) = page.delete_form.as_mut() {
        form.action = format!("/notes/delete/{}", note.id);
    }

    modal.backdrop.add(OPEN_CLASS);
    page.scroll_locked = true;
    tracing::debug!(note_id = note.id, "modal opened");
    true
}

/// Close the modal and drop everything bound to the note it showed.
/// Returns false if it was not open (or absent).
pub fn close_modal(page: &mut NotesPage) -> bool {
    let Some(modal) = page.modal.as_mut() else {
        return false;
    };
    if !modal.is_open() {
        return false;
    }
    *modal = Modal::new();
    if let Some(share) = page.share.as_mut() {
        share.unbind();
    }
    if let Some(form) = page.delete_form.as_mut() {
        form.action.clear();
    }
    page.scroll_locked = false;
    true
}

/// Close the modal if `trigger` is a closing gesture.
pub fn handle_close(page: &mut NotesPage, trigger: &CloseTrigger) -> bool {
    trigger.closes() && close_modal(page)
}
