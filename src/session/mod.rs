// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interactive key-finding session.
//!
//! An [`InKeySession`] owns the note selection and the key the user has
//! chosen or is previewing, and turns them into plain values for display.
//! All theory work is delegated to the stateless [`KeyFinder`].

pub mod selection;

pub use selection::SelectionState;

use serde::Serialize;
use tracing::debug;

use crate::music::{Key, KeyFinder, PitchClass, ScaleInfo, TheoryResult, TranspositionOffset};

/// Default number of matching keys above which the list is not shown
pub const DEFAULT_MAX_LISTED_KEYS: usize = 26;

/// What the key list should show for the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeysView {
    /// Nothing is selected
    NoSelection,
    /// No key contains every selected note
    NoMatch,
    /// Too many keys match to be useful
    TooMany(usize),
    /// The matching keys in inference order
    Keys(Vec<Key>),
    /// A key was picked directly rather than inferred
    Chosen(Key),
}

impl KeysView {
    /// Placeholder message for the states that have no keys to list
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            KeysView::NoSelection => Some("Select notes to find matching keys"),
            KeysView::NoMatch => Some("No matching keys found for these notes"),
            KeysView::TooMany(_) => Some("Press more notes to narrow down keys"),
            KeysView::Keys(_) | KeysView::Chosen(_) => None,
        }
    }
}

/// A note shown in the selection panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayNote {
    pub note: PitchClass,
    /// Shown only because it belongs to the previewed key
    pub temp: bool,
}

/// One line of the transposition panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TranspositionRow {
    pub note: PitchClass,
    pub offset: TranspositionOffset,
    pub temp: bool,
}

/// Selection, chosen key and preview for one user
#[derive(Debug, Clone)]
pub struct InKeySession {
    finder: KeyFinder,
    selection: SelectionState,
    chosen_key: Option<Key>,
    preview_key: Option<Key>,
    reference_root: PitchClass,
    max_listed_keys: usize,
}

impl InKeySession {
    /// Create a session with an empty selection, referenced to C
    pub fn new(finder: KeyFinder) -> Self {
        Self {
            finder,
            selection: SelectionState::new(),
            chosen_key: None,
            preview_key: None,
            reference_root: PitchClass::C,
            max_listed_keys: DEFAULT_MAX_LISTED_KEYS,
        }
    }

    /// Set the reference root used for transposition
    pub fn with_reference_root(mut self, root: PitchClass) -> Self {
        self.reference_root = root;
        self
    }

    /// Set the "too many keys" threshold
    pub fn with_max_listed_keys(mut self, max: usize) -> Self {
        self.max_listed_keys = max;
        self
    }

    pub fn finder(&self) -> &KeyFinder {
        &self.finder
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn chosen_key(&self) -> Option<&Key> {
        self.chosen_key.as_ref()
    }

    pub fn preview_key(&self) -> Option<&Key> {
        self.preview_key.as_ref()
    }

    pub fn reference_root(&self) -> PitchClass {
        self.reference_root
    }

    pub fn max_listed_keys(&self) -> usize {
        self.max_listed_keys
    }

    /// Change the reference root
    pub fn set_reference_root(&mut self, root: PitchClass) {
        self.reference_root = root;
    }

    /// Toggle a note picked on an instrument.
    ///
    /// Picking a note drops any chosen key and any preview first.
    /// Returns true if the note is now selected.
    pub fn toggle_note(&mut self, note: PitchClass) -> bool {
        self.chosen_key = None;
        self.preview_key = None;
        let selected = self.selection.toggle(note);
        debug!(%note, selected, "Toggled note");
        selected
    }

    /// Toggle a note by name; flat spellings are accepted
    pub fn toggle_note_name(&mut self, name: &str) -> TheoryResult<bool> {
        let note: PitchClass = name.parse()?;
        Ok(self.toggle_note(note))
    }

    /// Choose a key directly, replacing the selection with its notes
    pub fn select_key(&mut self, root: PitchClass, scale_type: &str) -> TheoryResult<&Key> {
        let key = self.finder.key(root, scale_type)?;
        self.preview_key = None;
        self.selection.replace(self.finder.key_notes(&key));
        debug!(key = %key, "Selected key");
        Ok(&*self.chosen_key.insert(key))
    }

    /// Forget the chosen key but keep the selected notes
    pub fn clear_key_selection(&mut self) {
        self.chosen_key = None;
    }

    /// Click a key in the list: preview it, or stop previewing if it is
    /// already the preview. Returns true if a preview is now active.
    ///
    /// A chosen key is shown on its own and cannot be previewed over, so
    /// clicks are ignored until it is cleared.
    pub fn click_key(&mut self, key: Key) -> bool {
        if self.chosen_key.is_some() {
            debug!(key = %key, "Ignoring preview while a key is chosen");
            return false;
        }
        if self.preview_key.as_ref() == Some(&key) {
            self.preview_key = None;
            return false;
        }
        debug!(key = %key, "Previewing key");
        self.preview_key = Some(key);
        true
    }

    /// Stop previewing
    pub fn clear_preview(&mut self) {
        self.preview_key = None;
    }

    /// Reset notes, chosen key and preview
    pub fn clear(&mut self) {
        self.selection.clear();
        self.chosen_key = None;
        self.preview_key = None;
    }

    /// Notes of the previewed key
    fn preview_notes(&self) -> Vec<PitchClass> {
        self.preview_key
            .as_ref()
            .map(|key| self.finder.key_notes(key))
            .unwrap_or_default()
    }

    /// Selected notes plus preview notes in chromatic order
    pub fn display_notes(&self) -> Vec<DisplayNote> {
        let preview = self.preview_notes();
        PitchClass::ALL
            .into_iter()
            .filter_map(|note| {
                let selected = self.selection.contains(note);
                let previewed = preview.contains(&note);
                (selected || previewed).then_some(DisplayNote {
                    note,
                    temp: !selected,
                })
            })
            .collect()
    }

    /// Keys for the key list panel
    pub fn keys_view(&self) -> KeysView {
        if let Some(key) = &self.chosen_key {
            return KeysView::Chosen(key.clone());
        }
        if self.selection.is_empty() {
            return KeysView::NoSelection;
        }
        let keys = self.finder.find_possible_keys(self.selection.iter());
        if keys.is_empty() {
            KeysView::NoMatch
        } else if keys.len() > self.max_listed_keys {
            KeysView::TooMany(keys.len())
        } else {
            KeysView::Keys(keys)
        }
    }

    /// Scale details for the previewed key, else the chosen key
    pub fn scale_info(&self) -> Option<ScaleInfo> {
        self.preview_key
            .as_ref()
            .or(self.chosen_key.as_ref())
            .and_then(|key| self.finder.scale_info(key.root(), key.scale_type()))
    }

    /// Offsets from the reference root for every displayed note
    pub fn transposition_rows(&self) -> Vec<TranspositionRow> {
        self.display_notes()
            .into_iter()
            .map(|d| TranspositionRow {
                note: d.note,
                offset: TranspositionOffset::between(self.reference_root, d.note),
                temp: d.temp,
            })
            .collect()
    }
}

impl Default for InKeySession {
    fn default() -> Self {
        Self::new(KeyFinder::default())
    }
}
