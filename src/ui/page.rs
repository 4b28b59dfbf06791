//! The notes page model.
//!
//! Optional fields stand for elements a page may or may not contain. A
//! behaviour whose elements are missing does nothing at all, it never
//! half-initialises.

use super::dom::ClassList;
use super::modal::Modal;
use super::profile::NameEditor;
use super::share::ShareControls;
use super::view::ViewSwitcher;
use crate::models::{NoteId, NoteSummary};

pub const CARD_CLASS: &str = "note-card";
pub const CONTAINER_CLASS: &str = "notes-grid";

// ============================================================================
// Note Card
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub summary: NoteSummary,
    pub classes: ClassList,
}

impl NoteCard {
    pub fn new(summary: NoteSummary) -> Self {
        let classes = ClassList::from_names(&[CARD_CLASS, &summary.color]);
        Self { summary, classes }
    }

    pub fn id(&self) -> NoteId {
        self.summary.id
    }
}

/// A form whose submission target is rewired per note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormTarget {
    pub action: String,
}

// ============================================================================
// Page
// ============================================================================

#[derive(Debug, Clone)]
pub struct NotesPage {
    /// Scheme and host the page was served from, used for share links.
    pub origin: String,
    pub switcher: Option<ViewSwitcher>,
    pub container: Option<ClassList>,
    pub cards: Vec<NoteCard>,
    pub modal: Option<Modal>,
    pub share: Option<ShareControls>,
    pub delete_form: Option<FormTarget>,
    pub name: Option<NameEditor>,
    /// Page scroll is suspended while the modal is open.
    pub scroll_locked: bool,
    /// User-visible error messages, oldest first.
    pub notifications: Vec<String>,
}

impl NotesPage {
    /// A page with every element present.
    pub fn new(origin: &str, notes: Vec<NoteSummary>, user_name: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            switcher: Some(ViewSwitcher::standard()),
            container: Some(ClassList::from_names(&[CONTAINER_CLASS])),
            cards: notes.into_iter().map(NoteCard::new).collect(),
            modal: Some(Modal::new()),
            share: Some(ShareControls::new()),
            delete_form: Some(FormTarget::default()),
            name: Some(NameEditor::new(user_name)),
            scroll_locked: false,
            notifications: Vec::new(),
        }
    }

    /// A page with only the given cards and none of the interactive elements.
    pub fn bare(origin: &str, notes: Vec<NoteSummary>) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            switcher: None,
            container: None,
            cards: notes.into_iter().map(NoteCard::new).collect(),
            modal: None,
            share: None,
            delete_form: None,
            name: None,
            scroll_locked: false,
            notifications: Vec::new(),
        }
    }

    pub fn card_index(&self, id: NoteId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    pub fn card(&self, id: NoteId) -> Option<&NoteCard> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn card_mut(&mut self, id: NoteId) -> Option<&mut NoteCard> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }

    pub fn notify(&mut self, message: &str) {
        tracing::warn!(notification = message, "user notification");
        self.notifications.push(message.to_string());
    }
}
