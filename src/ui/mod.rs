//! Interaction layer of the notes page.
//!
//! The page is modelled headlessly: `NotesPage` holds the state a browser
//! would keep in the DOM (class lists, card payloads, the modal subtree, form
//! targets), and each submodule implements one behaviour over it. Storage,
//! network, clipboard and Markdown rendering are injected, so the same code
//! drives server-side rendering and the tests.
//!
//! - `dom` - class lists
//! - `page` - the page model and note cards
//! - `prefs` - persisted view preference
//! - `view` - view mode switching
//! - `bento` - card size heuristic
//! - `gallery` - active-card selection
//! - `modal` - detail overlay binding
//! - `share` - public/private toggle
//! - `profile` - inline name editing
//! - `app` - event dispatch over all of the above

pub mod app;
pub mod bento;
pub mod dom;
pub mod gallery;
pub mod modal;
pub mod page;
pub mod prefs;
pub mod profile;
pub mod share;
pub mod view;

pub use app::{NotesApp, UiEvent};
pub use bento::{apply_bento_sizes, size_class, SizeClass};
pub use dom::ClassList;
pub use gallery::CardClick;
pub use modal::{CloseTrigger, CmarkRenderer, MarkdownRenderer, Modal, ModalBody};
pub use page::{NoteCard, NotesPage};
pub use prefs::{KeyValueStore, MemoryStore, SledStore, ViewPreference};
pub use profile::NameEditor;
pub use share::{Clipboard, ClipboardError, MemoryClipboard, ShareLabel, ShareOutcome};
pub use view::{view_state, ViewMode, ViewState};
