//! Event dispatch for the notes page.
//!
//! `NotesApp` owns the page model and the view preference and routes each
//! discrete event to the behaviour that handles it. Asynchronous work (share,
//! name save) has its own methods; everything else goes through [`NotesApp::dispatch`].

use super::gallery::{self, CardClick};
use super::modal::{self, CloseTrigger, CmarkRenderer, MarkdownRenderer};
use super::page::NotesPage;
use super::prefs::{KeyValueStore, ViewPreference};
use super::profile;
use super::share::{self, Clipboard, ShareOutcome};
use super::view::{self, ViewMode};
use crate::client::NotesBackend;
use crate::models::NoteId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Document loaded.
    Ready,
    /// A view switcher button; carries the button's raw mode string.
    ViewButton(String),
    CardClick(NoteId),
    CloseButton,
    BackdropClick { on_backdrop: bool },
    KeyDown(String),
    /// The "Copied!" timer for a note ran out.
    ShareFeedbackTimer(NoteId),
    EditName,
    NameInput(String),
}

pub struct NotesApp<S> {
    pub page: NotesPage,
    prefs: ViewPreference<S>,
    renderer: Option<Box<dyn MarkdownRenderer + Send + Sync>>,
}

impl<S: KeyValueStore> NotesApp<S> {
    pub fn new(page: NotesPage, store: S) -> Self {
        Self {
            page,
            prefs: ViewPreference::new(store),
            renderer: Some(Box::new(CmarkRenderer)),
        }
    }

    /// Show note bodies as raw text instead of rendered Markdown.
    pub fn without_renderer(mut self) -> Self {
        self.renderer = None;
        self
    }

    pub fn prefs(&self) -> &ViewPreference<S> {
        &self.prefs
    }

    /// The mode the container currently shows, grid if there is no container.
    pub fn view_mode(&self) -> ViewMode {
        self.page
            .container
            .as_ref()
            .map(ViewMode::of_container)
            .unwrap_or_default()
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::Ready => self.on_ready(),
            UiEvent::ViewButton(raw) => self.select_view(&raw),
            UiEvent::CardClick(id) => {
                self.click_card(id);
            }
            UiEvent::CloseButton => {
                self.close(CloseTrigger::CloseButton);
            }
            UiEvent::BackdropClick { on_backdrop } => {
                self.close(CloseTrigger::BackdropClick { on_backdrop });
            }
            UiEvent::KeyDown(key) => {
                self.close(CloseTrigger::Key(key));
            }
            UiEvent::ShareFeedbackTimer(id) => {
                share::revert_feedback(&mut self.page, id);
            }
            UiEvent::EditName => {
                profile::begin_name_edit(&mut self.page);
            }
            UiEvent::NameInput(value) => profile::set_name_input(&mut self.page, &value),
        }
    }

    /// Apply the saved view mode.
    pub fn on_ready(&mut self) {
        let mode = self.prefs.load();
        view::apply_view(&mut self.page, mode, &mut self.prefs);
    }

    pub fn select_view(&mut self, raw: &str) {
        view::apply_view(&mut self.page, ViewMode::parse(raw), &mut self.prefs);
    }

    /// Make `id` the expanded gallery card without going through a click.
    pub fn restore_active(&mut self, id: NoteId) {
        if let Some(index) = self.page.card_index(id) {
            gallery::activate(&mut self.page.cards, index);
        }
    }

    /// Route a card click through gallery gating and, if it gets through, open
    /// the modal. Returns `None` for unknown cards.
    pub fn click_card(&mut self, id: NoteId) -> Option<CardClick> {
        let index = self.page.card_index(id)?;
        let gallery_mode = self.view_mode() == ViewMode::Gallery;
        let outcome = gallery::dispatch_click(&mut self.page.cards, index, gallery_mode);
        if outcome == CardClick::OpenDetail {
            self.open_note(id);
        }
        Some(outcome)
    }

    /// Open the modal for `id` directly.
    pub fn open_note(&mut self, id: NoteId) -> bool {
        let Some(summary) = self.page.card(id).map(|c| c.summary.clone()) else {
            return false;
        };
        let renderer = self.renderer.as_deref().map(|r| r as &dyn MarkdownRenderer);
        modal::open_modal(&mut self.page, &summary, renderer)
    }

    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        modal::handle_close(&mut self.page, &trigger)
    }

    pub async fn submit_share<B, C>(&mut self, backend: &B, clipboard: &mut C) -> ShareOutcome
    where
        B: NotesBackend,
        C: Clipboard,
    {
        share::submit_share(&mut self.page, backend, clipboard).await
    }

    pub async fn commit_name<B: NotesBackend>(&mut self, backend: &B) -> Option<bool> {
        profile::commit_name(&mut self.page, backend).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteSummary;
    use crate::ui::prefs::{MemoryStore, VIEW_PREFERENCE_KEY};
    use crate::ui::ModalBody;

    fn summary(id: NoteId) -> NoteSummary {
        NoteSummary {
            id,
            title: format!("note {}", id),
            content: format!("**body {}**", id),
            image_url: None,
            color: "card-blue".to_string(),
            tags: vec![format!("tag{}", id)],
            is_public: false,
            public_id: None,
        }
    }

    fn app_with(store: MemoryStore) -> NotesApp<MemoryStore> {
        let page = NotesPage::new("http://localhost", vec![summary(1), summary(2), summary(3)], "");
        NotesApp::new(page, store)
    }

    fn modal_note(app: &NotesApp<MemoryStore>) -> Option<NoteId> {
        app.page
            .modal
            .as_ref()
            .filter(|m| m.is_open())
            .and_then(|m| m.note_id)
    }

    #[test]
    fn test_ready_applies_saved_view() {
        let mut store = MemoryStore::new();
        store.set(VIEW_PREFERENCE_KEY, "gallery").unwrap();
        let mut app = app_with(store);

        app.dispatch(UiEvent::Ready);

        assert_eq!(app.view_mode(), ViewMode::Gallery);
        assert!(app.page.cards[0].classes.contains("active"));
    }

    #[test]
    fn test_ready_without_saved_view_is_grid() {
        let mut app = app_with(MemoryStore::new());
        app.dispatch(UiEvent::Ready);
        assert_eq!(app.view_mode(), ViewMode::Grid);
        assert_eq!(
            app.page.switcher.as_ref().unwrap().active_modes(),
            vec![ViewMode::Grid]
        );
    }

    #[test]
    fn test_unknown_view_button_falls_back_to_grid() {
        let mut app = app_with(MemoryStore::new());
        app.dispatch(UiEvent::ViewButton("bento".to_string()));
        app.dispatch(UiEvent::ViewButton("mosaic".to_string()));
        assert_eq!(app.view_mode(), ViewMode::Grid);
        assert_eq!(app.prefs().load(), ViewMode::Grid);
    }

    #[test]
    fn test_gallery_click_flow() {
        let mut app = app_with(MemoryStore::new());
        app.dispatch(UiEvent::ViewButton("gallery".to_string()));

        // second card is collapsed: expand only
        assert_eq!(app.click_card(2), Some(CardClick::Expanded));
        assert_eq!(modal_note(&app), None);
        assert!(app.page.card(2).unwrap().classes.contains("active"));
        assert!(!app.page.card(1).unwrap().classes.contains("active"));

        // now it is active: open
        assert_eq!(app.click_card(2), Some(CardClick::OpenDetail));
        assert_eq!(modal_note(&app), Some(2));
    }

    #[test]
    fn test_grid_click_opens_rendered_modal() {
        let mut app = app_with(MemoryStore::new());
        app.dispatch(UiEvent::Ready);
        app.dispatch(UiEvent::CardClick(3));

        assert_eq!(modal_note(&app), Some(3));
        match &app.page.modal.as_ref().unwrap().body {
            ModalBody::Html(html) => assert!(html.contains("<strong>body 3</strong>")),
            other => panic!("expected rendered body, got {:?}", other),
        }
    }

    #[test]
    fn test_without_renderer_shows_raw_text() {
        let mut app = app_with(MemoryStore::new()).without_renderer();
        app.open_note(1);
        assert_eq!(
            app.page.modal.as_ref().unwrap().body,
            ModalBody::Text("**body 1**".to_string())
        );
    }

    #[test]
    fn test_unknown_card() {
        let mut app = app_with(MemoryStore::new());
        assert_eq!(app.click_card(99), None);
        assert!(!app.open_note(99));
    }

    #[test]
    fn test_close_events() {
        let mut app = app_with(MemoryStore::new());
        for event in [
            UiEvent::CloseButton,
            UiEvent::BackdropClick { on_backdrop: true },
            UiEvent::KeyDown("Escape".to_string()),
        ] {
            app.open_note(1);
            assert!(app.page.scroll_locked);
            app.dispatch(event.clone());
            assert_eq!(modal_note(&app), None);
            assert!(!app.page.scroll_locked);
            app.dispatch(event);
            assert!(!app.page.scroll_locked);
        }
    }

    #[test]
    fn test_click_inside_modal_content_keeps_it_open() {
        let mut app = app_with(MemoryStore::new());
        app.open_note(1);
        app.dispatch(UiEvent::BackdropClick { on_backdrop: false });
        assert_eq!(modal_note(&app), Some(1));
    }

    #[test]
    fn test_restore_active() {
        let mut app = app_with(MemoryStore::new());
        app.select_view("gallery");
        app.restore_active(3);
        assert_eq!(app.click_card(3), Some(CardClick::OpenDetail));
    }
}
