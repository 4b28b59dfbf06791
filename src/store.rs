//! sled-backed persistence for notes, public share ids and the profile name.
//!
//! Layout:
//! - `notes`: big-endian note id -> JSON `Note`
//! - `public`: public id -> big-endian note id (kept while a note is private)
//! - `profile`: `name` -> UTF-8 display name
//! - `prefs`: UI preferences, see [`crate::ui::prefs::SledStore`]

use crate::error::StoreError;
use crate::models::{Note, NoteDraft, NoteEdit, NoteId, DEFAULT_COLOR};
use crate::notes::note_matches;
use crate::ui::prefs::SledStore;
use chrono::Utc;
use uuid::Uuid;

const NOTES_TREE: &str = "notes";
const PUBLIC_TREE: &str = "public";
const PROFILE_TREE: &str = "profile";
const PREFS_TREE: &str = "prefs";
const PROFILE_NAME_KEY: &str = "name";

fn id_key(id: NoteId) -> [u8; 8] {
    id.to_be_bytes()
}

fn id_from_bytes(bytes: &[u8]) -> Option<NoteId> {
    let arr: [u8; 8] = bytes.try_into().ok()?;
    Some(NoteId::from_be_bytes(arr))
}

#[derive(Clone)]
pub struct NoteStore {
    db: sled::Db,
    notes: sled::Tree,
    public: sled::Tree,
    profile: sled::Tree,
}

impl NoteStore {
    pub fn open(db: &sled::Db) -> Result<Self, StoreError> {
        Ok(Self {
            db: db.clone(),
            notes: db.open_tree(NOTES_TREE)?,
            public: db.open_tree(PUBLIC_TREE)?,
            profile: db.open_tree(PROFILE_TREE)?,
        })
    }

    /// Preference storage living in the same database.
    pub fn preferences(&self) -> Result<SledStore, StoreError> {
        Ok(SledStore::new(self.db.open_tree(PREFS_TREE)?))
    }

    // ------------------------------------------------------------------------
    // Notes
    // ------------------------------------------------------------------------

    pub fn insert(&self, draft: NoteDraft) -> Result<Note, StoreError> {
        // sled ids start at zero; keep them positive like the form routes expect
        let id = self.db.generate_id()? + 1;
        let color = draft
            .color
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string());
        let note = Note {
            id,
            title: draft.title,
            content: draft.content,
            color,
            image_filename: draft.image_filename,
            tags: draft.tags,
            is_public: false,
            public_id: None,
            created_at: Utc::now(),
        };
        self.write(&note)?;
        tracing::info!(note_id = id, "note created");
        Ok(note)
    }

    pub fn get(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        match self.notes.get(id_key(id))? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// All notes, newest first.
    pub fn list(&self) -> Result<Vec<Note>, StoreError> {
        let mut notes = Vec::new();
        for entry in self.notes.iter() {
            let (_, bytes) = entry?;
            match serde_json::from_slice::<Note>(&bytes) {
                Ok(note) => notes.push(note),
                Err(e) => tracing::warn!(error = %e, "skipping unreadable note"),
            }
        }
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(notes)
    }

    pub fn update(&self, id: NoteId, edit: NoteEdit) -> Result<Option<Note>, StoreError> {
        let Some(mut note) = self.get(id)? else {
            return Ok(None);
        };
        note.title = edit.title;
        note.content = edit.content;
        if let Some(color) = edit.color.filter(|c| !c.trim().is_empty()) {
            note.color = color;
        }
        if let Some(tags) = edit.tags {
            note.tags = tags;
        }
        self.write(&note)?;
        tracing::info!(note_id = id, "note updated");
        Ok(Some(note))
    }

    /// Remove a note. Returns the removed note, if it existed.
    pub fn delete(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let Some(bytes) = self.notes.remove(id_key(id))? else {
            return Ok(None);
        };
        let note: Note = serde_json::from_slice(&bytes)?;
        if let Some(ref public_id) = note.public_id {
            self.public.remove(public_id.as_bytes())?;
        }
        tracing::info!(note_id = id, "note deleted");
        Ok(Some(note))
    }

    /// Flip a note between public and private. A public id is allocated the
    /// first time the note is published.
    pub fn toggle_share(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let updated = self.notes.update_and_fetch(id_key(id), |old| {
            let bytes = old?;
            let mut note: Note = match serde_json::from_slice(bytes) {
                Ok(n) => n,
                Err(_) => return Some(bytes.to_vec()),
            };
            note.is_public = !note.is_public;
            if note.is_public && note.public_id.is_none() {
                note.public_id = Some(Uuid::new_v4().to_string());
            }
            Some(serde_json::to_vec(&note).unwrap_or_else(|_| bytes.to_vec()))
        })?;

        let Some(bytes) = updated else {
            return Ok(None);
        };
        let note: Note = serde_json::from_slice(&bytes)?;
        if let Some(ref public_id) = note.public_id {
            self.public.insert(public_id.as_bytes(), id_key(note.id).to_vec())?;
        }
        tracing::info!(note_id = id, is_public = note.is_public, "share toggled");
        Ok(Some(note))
    }

    /// Look up a note by public id. Private notes are not returned.
    pub fn find_public(&self, public_id: &str) -> Result<Option<Note>, StoreError> {
        let Some(id) = self
            .public
            .get(public_id.as_bytes())?
            .and_then(|v| id_from_bytes(&v))
        else {
            return Ok(None);
        };
        Ok(self.get(id)?.filter(|n| n.is_public))
    }

    pub fn search(&self, query: &str) -> Result<Vec<Note>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|n| note_matches(n, query))
            .collect())
    }

    fn write(&self, note: &Note) -> Result<(), StoreError> {
        let json = serde_json::to_vec(note)?;
        self.notes.insert(id_key(note.id), json)?;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------------

    pub fn profile_name(&self) -> Result<Option<String>, StoreError> {
        match self.profile.get(PROFILE_NAME_KEY)? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|_| StoreError::Encoding),
            None => Ok(None),
        }
    }

    pub fn set_profile_name(&self, name: &str) -> Result<(), StoreError> {
        self.profile.insert(PROFILE_NAME_KEY, name.as_bytes())?;
        Ok(())
    }
}
