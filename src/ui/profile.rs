//! Inline editing of the user's display name.

use super::page::NotesPage;
use crate::client::{ClientError, NotesBackend};

pub const NAME_SAVE_FAILED: &str = "Failed to save name";
pub const NAME_SAVE_ERROR: &str = "An error occurred while saving your name.";

/// Inputs never get narrower than this many characters.
const MIN_INPUT_WIDTH_CH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEditor {
    /// Text of the name span.
    pub display: String,
    /// Input value while the span is swapped for an input.
    pub input: Option<String>,
    saving: bool,
}

impl NameEditor {
    pub fn new(name: &str) -> Self {
        Self {
            display: name.trim().to_string(),
            input: None,
            saving: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.input.is_some()
    }

    /// Width of the input, in `ch`.
    pub fn input_width_ch(&self) -> usize {
        self.display.chars().count().max(MIN_INPUT_WIDTH_CH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingName {
    pub previous: String,
    pub candidate: String,
}

/// Swap the name span for an input holding the current name.
pub fn begin_name_edit(page: &mut NotesPage) -> bool {
    let Some(editor) = page.name.as_mut() else {
        return false;
    };
    if editor.is_editing() {
        return false;
    }
    editor.input = Some(editor.display.clone());
    true
}

pub fn set_name_input(page: &mut NotesPage, value: &str) {
    if let Some(input) = page.name.as_mut().and_then(|e| e.input.as_mut()) {
        *input = value.to_string();
    }
}

/// Blur or Enter: take the value to save. An empty input keeps the old name,
/// and with no old name the editor just closes without saving.
pub fn take_name_commit(page: &mut NotesPage) -> Option<PendingName> {
    let editor = page.name.as_mut()?;
    if editor.saving {
        return None;
    }
    let input = editor.input.as_ref()?;
    let trimmed = input.trim();
    let candidate = if trimmed.is_empty() {
        editor.display.clone()
    } else {
        trimmed.to_string()
    };
    if candidate.is_empty() {
        editor.input = None;
        return None;
    }
    editor.saving = true;
    Some(PendingName {
        previous: editor.display.clone(),
        candidate,
    })
}

/// Put the span back, showing the new name only if the server accepted it.
pub fn finish_name_commit(
    page: &mut NotesPage,
    pending: &PendingName,
    result: Result<(), ClientError>,
) -> bool {
    let saved = match result {
        Ok(()) => true,
        Err(ClientError::Status(status)) => {
            tracing::warn!(status, "name update rejected");
            page.notify(NAME_SAVE_FAILED);
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "name update failed");
            page.notify(NAME_SAVE_ERROR);
            false
        }
    };

    if let Some(editor) = page.name.as_mut() {
        editor.display = if saved {
            pending.candidate.clone()
        } else {
            pending.previous.clone()
        };
        editor.input = None;
        editor.saving = false;
    }
    saved
}

pub async fn commit_name<B: NotesBackend>(page: &mut NotesPage, backend: &B) -> Option<bool> {
    let pending = take_name_commit(page)?;
    let result = backend.update_name(&pending.candidate).await;
    Some(finish_name_commit(page, &pending, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoteId, ShareResponse};
    use std::cell::RefCell;

    struct NameBackend {
        result: Result<(), ClientError>,
        sent: RefCell<Vec<String>>,
    }

    impl NotesBackend for NameBackend {
        async fn toggle_share(&self, _note_id: NoteId) -> Result<ShareResponse, ClientError> {
            Err(ClientError::Status(404))
        }

        async fn update_name(&self, name: &str) -> Result<(), ClientError> {
            self.sent.borrow_mut().push(name.to_string());
            self.result.clone()
        }
    }

    fn backend(result: Result<(), ClientError>) -> NameBackend {
        NameBackend {
            result,
            sent: RefCell::new(vec![]),
        }
    }

    fn page(name: &str) -> NotesPage {
        NotesPage::new("http://localhost", vec![], name)
    }

    #[tokio::test]
    async fn test_saved_name_is_shown() {
        let mut page = page("Ada");
        assert!(begin_name_edit(&mut page));
        set_name_input(&mut page, "  Ada Lovelace ");
        let backend = backend(Ok(()));

        assert_eq!(commit_name(&mut page, &backend).await, Some(true));

        let editor = page.name.as_ref().unwrap();
        assert_eq!(editor.display, "Ada Lovelace");
        assert!(!editor.is_editing());
        assert_eq!(backend.sent.borrow().as_slice(), ["Ada Lovelace"]);
    }

    #[tokio::test]
    async fn test_empty_input_keeps_old_name() {
        let mut page = page("Ada");
        begin_name_edit(&mut page);
        set_name_input(&mut page, "   ");
        let backend = backend(Ok(()));

        commit_name(&mut page, &backend).await;

        assert_eq!(page.name.as_ref().unwrap().display, "Ada");
        assert_eq!(backend.sent.borrow().as_slice(), ["Ada"]);
    }

    #[tokio::test]
    async fn test_rejected_name_reverts_and_notifies() {
        let mut page = page("Ada");
        begin_name_edit(&mut page);
        set_name_input(&mut page, "Grace");

        let saved = commit_name(&mut page, &backend(Err(ClientError::Status(400)))).await;

        assert_eq!(saved, Some(false));
        let editor = page.name.as_ref().unwrap();
        assert_eq!(editor.display, "Ada");
        assert!(!editor.is_editing());
        assert_eq!(page.notifications, vec![NAME_SAVE_FAILED.to_string()]);
    }

    #[tokio::test]
    async fn test_network_error_reverts() {
        let mut page = page("Ada");
        begin_name_edit(&mut page);
        set_name_input(&mut page, "Grace");

        commit_name(
            &mut page,
            &backend(Err(ClientError::Transport("connection refused".to_string()))),
        )
        .await;

        assert_eq!(page.name.as_ref().unwrap().display, "Ada");
        assert_eq!(page.notifications.len(), 1);
    }

    #[test]
    fn test_commit_without_edit_is_ignored() {
        let mut page = page("Ada");
        assert!(take_name_commit(&mut page).is_none());
    }

    #[test]
    fn test_double_blur_commits_once() {
        let mut page = page("Ada");
        begin_name_edit(&mut page);
        assert!(take_name_commit(&mut page).is_some());
        assert!(take_name_commit(&mut page).is_none());
    }

    #[test]
    fn test_input_width() {
        assert_eq!(NameEditor::new("Al").input_width_ch(), 10);
        assert_eq!(NameEditor::new("Bartholomew Jones").input_width_ch(), 17);
    }

    #[tokio::test]
    async fn test_empty_name_is_never_saved() {
        let mut page = NotesPage::new("http://localhost", vec![], "");
        let backend = NameBackend {
            result: Ok(()),
            sent: RefCell::new(Vec::new()),
        };

        assert!(begin_name_edit(&mut page));
        assert_eq!(page.name.as_ref().and_then(|e| e.input.as_deref()), Some(""));
        set_name_input(&mut page, "   ");

        assert_eq!(commit_name(&mut page, &backend).await, None);
        assert!(backend.sent.borrow().is_empty());
        let editor = page.name.as_ref().unwrap();
        assert!(!editor.is_editing());
        assert_eq!(editor.display, "");
    }

    #[test]
    fn test_missing_name_span() {
        let mut page = NotesPage::bare("http://localhost", vec![]);
        assert!(!begin_name_edit(&mut page));
    }
}
