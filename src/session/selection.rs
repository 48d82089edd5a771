// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The set of notes currently picked on the instruments.

use std::collections::BTreeSet;

use crate::music::PitchClass;

/// Selected pitch classes, kept in chromatic order without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    notes: BTreeSet<PitchClass>,
}

impl SelectionState {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove a note. Returns true if the note is now selected.
    pub fn toggle(&mut self, note: PitchClass) -> bool {
        if self.notes.remove(&note) {
            false
        } else {
            self.notes.insert(note);
            true
        }
    }

    /// Add a note
    pub fn insert(&mut self, note: PitchClass) -> bool {
        self.notes.insert(note)
    }

    /// Remove a note
    pub fn remove(&mut self, note: PitchClass) -> bool {
        self.notes.remove(&note)
    }

    /// Replace the whole selection
    pub fn replace<I: IntoIterator<Item = PitchClass>>(&mut self, notes: I) {
        self.notes = notes.into_iter().collect();
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Whether a note is selected
    pub fn contains(&self, note: PitchClass) -> bool {
        self.notes.contains(&note)
    }

    /// Number of selected notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Selected notes in chromatic order
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.notes.iter().copied()
    }

    /// Snapshot of the selected notes
    pub fn notes(&self) -> &BTreeSet<PitchClass> {
        &self.notes
    }
}

impl FromIterator<PitchClass> for SelectionState {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}
