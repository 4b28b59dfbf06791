//! Data models for the notes board.
//!
//! `Note` is what the store persists. `NoteSummary` is the typed card payload
//! rendered into the page and handed to the modal; it carries everything the
//! interaction layer needs so nothing has to be parsed back out of markup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type NoteId = u64;

/// Color theme applied when a note is created without one.
pub const DEFAULT_COLOR: &str = "card-blue";

/// Card themes the forms offer.
pub const COLOR_THEMES: [&str; 5] = ["card-blue", "card-green", "card-yellow", "card-red", "card-violet"];

/// Separator used when tags are flattened into a single attribute.
pub const TAG_SEPARATOR: &str = ", ";

// ============================================================================
// Stored Note
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub color: String,
    pub image_filename: Option<String>,
    pub tags: Vec<String>,
    pub is_public: bool,
    /// Allocated on first publish and kept across unshare/re-share so old links
    /// come back to life when the note is shared again.
    pub public_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Build the card payload. `upload_prefix` is the URL path images are served from.
    pub fn summary(&self, upload_prefix: &str) -> NoteSummary {
        NoteSummary {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            image_url: self
                .image_filename
                .as_ref()
                .map(|f| format!("{}/{}", upload_prefix.trim_end_matches('/'), f)),
            color: self.color.clone(),
            tags: self.tags.clone(),
            is_public: self.is_public,
            public_id: if self.is_public {
                self.public_id.clone()
            } else {
                None
            },
        }
    }
}

/// Fields supplied when creating a note.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub color: Option<String>,
    pub image_filename: Option<String>,
    pub tags: Vec<String>,
}

impl NoteDraft {
    /// A note is only worth storing when it has a title, some content, or an image.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.content.trim().is_empty()
            && self.image_filename.is_none()
    }
}

/// Fields supplied when editing a note. `tags: None` leaves tags untouched.
#[derive(Debug, Clone, Default)]
pub struct NoteEdit {
    pub title: String,
    pub content: String,
    pub color: Option<String>,
    pub tags: Option<Vec<String>>,
}

// ============================================================================
// Card Payload
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub color: String,
    pub tags: Vec<String>,
    pub is_public: bool,
    /// Present iff `is_public`.
    pub public_id: Option<String>,
}

impl NoteSummary {
    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Tags as they appear in `data-tags`.
    pub fn joined_tags(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }

    /// The `data-*` attributes a rendered card carries, in render order.
    pub fn data_attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.to_string()),
            ("title", self.title.clone()),
            ("content", self.content.clone()),
            ("image", self.image_url.clone().unwrap_or_default()),
            ("color", self.color.clone()),
            ("tags", self.joined_tags()),
            ("public", self.is_public.to_string()),
            ("public-id", self.public_id.clone().unwrap_or_default()),
        ]
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Body returned by the share toggle endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareResponse {
    pub success: bool,
    pub is_public: bool,
    #[serde(default)]
    pub public_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNameRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// One entry of the `/export_data` backup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedNote {
    pub title: String,
    pub content: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub is_public: bool,
}

impl From<&Note> for ExportedNote {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            color: note.color.clone(),
            created_at: note.created_at,
            tags: note.tags.clone(),
            is_public: note.is_public,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    pub notes: Vec<ExportedNote>,
}
