//! View mode switching for the notes container.
//!
//! `view_state` is the pure part: which layout class a mode needs and which
//! classes must go. `apply_view` pushes that onto the page, runs the
//! mode-specific layout pass and persists the choice.

use super::bento::apply_bento_sizes;
use super::dom::ClassList;
use super::gallery::init_gallery;
use super::page::NotesPage;
use super::prefs::{KeyValueStore, ViewPreference};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BENTO_CLASS: &str = "bento-view";
pub const GALLERY_CLASS: &str = "gallery-view";
/// Left by an older list layout; always removed.
pub const LEGACY_LIST_CLASS: &str = "list-view";
pub const ACTIVE_BUTTON_CLASS: &str = "active";

/// Every container class a view mode may own.
pub const LAYOUT_CLASSES: [&str; 3] = [BENTO_CLASS, GALLERY_CLASS, LEGACY_LIST_CLASS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Bento,
    Gallery,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Grid, ViewMode::Bento, ViewMode::Gallery];

    /// Lenient parse: anything unrecognised, including the retired `list`
    /// layout, falls back to grid.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bento" => ViewMode::Bento,
            "gallery" => ViewMode::Gallery,
            _ => ViewMode::Grid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::Bento => "bento",
            ViewMode::Gallery => "gallery",
        }
    }

    pub fn layout_class(self) -> Option<&'static str> {
        match self {
            ViewMode::Grid => None,
            ViewMode::Bento => Some(BENTO_CLASS),
            ViewMode::Gallery => Some(GALLERY_CLASS),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::Bento => "Bento",
            ViewMode::Gallery => "Gallery",
        }
    }

    /// The mode a container's classes currently express.
    pub fn of_container(container: &ClassList) -> Self {
        if container.contains(GALLERY_CLASS) {
            ViewMode::Gallery
        } else if container.contains(BENTO_CLASS) {
            ViewMode::Bento
        } else {
            ViewMode::Grid
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Pure Transition
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    /// The single layout class to set, if any.
    pub layout_class: Option<&'static str>,
    /// Classes to strip before setting `layout_class`.
    pub stale_classes: Vec<&'static str>,
}

pub fn view_state(mode: ViewMode) -> ViewState {
    let layout_class = mode.layout_class();
    ViewState {
        mode,
        layout_class,
        stale_classes: LAYOUT_CLASSES
            .iter()
            .copied()
            .filter(|c| Some(*c) != layout_class)
            .collect(),
    }
}

// ============================================================================
// Switcher
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherButton {
    pub mode: ViewMode,
    pub classes: ClassList,
}

impl SwitcherButton {
    pub fn is_active(&self) -> bool {
        self.classes.contains(ACTIVE_BUTTON_CLASS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSwitcher {
    pub buttons: Vec<SwitcherButton>,
}

impl ViewSwitcher {
    /// One button per view mode.
    pub fn standard() -> Self {
        Self {
            buttons: ViewMode::ALL
                .iter()
                .map(|&mode| SwitcherButton {
                    mode,
                    classes: ClassList::from_names(&["view-btn"]),
                })
                .collect(),
        }
    }

    pub fn active_modes(&self) -> Vec<ViewMode> {
        self.buttons
            .iter()
            .filter(|b| b.is_active())
            .map(|b| b.mode)
            .collect()
    }
}

// ============================================================================
// Applying a View
// ============================================================================

/// Update switcher and container classes for `mode` and run the layout pass.
/// Returns false, touching nothing, when the page has no switcher or container.
pub fn apply_layout(page: &mut NotesPage, mode: ViewMode) -> bool {
    let (Some(switcher), Some(container)) = (page.switcher.as_mut(), page.container.as_mut())
    else {
        return false;
    };

    let state = view_state(mode);

    for button in &mut switcher.buttons {
        button.classes.set(ACTIVE_BUTTON_CLASS, button.mode == state.mode);
    }

    container.remove_all(&state.stale_classes);
    if let Some(class) = state.layout_class {
        container.add(class);
    }

    match state.mode {
        ViewMode::Bento => apply_bento_sizes(&mut page.cards),
        ViewMode::Gallery => init_gallery(&mut page.cards),
        ViewMode::Grid => {}
    }

    true
}

/// Apply `mode` and remember it.
pub fn apply_view<S: KeyValueStore>(
    page: &mut NotesPage,
    mode: ViewMode,
    prefs: &mut ViewPreference<S>,
) -> bool {
    if !apply_layout(page, mode) {
        return false;
    }
    prefs.save(mode);
    tracing::debug!(mode = mode.as_str(), "view applied");
    true
}
