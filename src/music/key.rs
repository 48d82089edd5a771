// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key inference.
//!
//! Given a set of pitch classes, find every (root, scale) pair whose notes
//! contain all of them. Roots are visited in chromatic order and scales in
//! catalog order, so results are deterministic.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use tracing::debug;

use super::error::{TheoryError, TheoryResult};
use super::note::{index_of, normalize, PitchClass};
use super::scale::{ScaleCatalog, ScaleDefinition, ScaleInfo};

/// A root plus a scale type, with its display label
#[derive(Debug, Clone, Serialize)]
pub struct Key {
    root: PitchClass,
    scale_type: String,
    label: String,
}

impl Key {
    /// Create a key from a root and scale definition
    pub fn new(root: PitchClass, def: &ScaleDefinition) -> Self {
        Self {
            root,
            scale_type: def.id.clone(),
            label: format!("{} {}", root.enharmonic_name(), def.name),
        }
    }

    /// Root pitch class
    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// Scale identifier
    pub fn scale_type(&self) -> &str {
        &self.scale_type
    }

    /// Display label, e.g. `F#/Gb Dorian`
    pub fn label(&self) -> &str {
        &self.label
    }
}

// Keys are identified by root and scale type; the label is derived.
impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.scale_type == other.scale_type
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root.hash(state);
        self.scale_type.hash(state);
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Key inference engine over a fixed scale catalog
#[derive(Debug, Clone, Default)]
pub struct KeyFinder {
    catalog: ScaleCatalog,
}

impl KeyFinder {
    /// Create a finder over the given catalog
    pub fn new(catalog: ScaleCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this finder searches
    pub fn catalog(&self) -> &ScaleCatalog {
        &self.catalog
    }

    /// Notes of a scale in degree order.
    ///
    /// An unknown scale identifier yields an empty list rather than an error.
    pub fn scale_notes(&self, root: PitchClass, scale_type: &str) -> Vec<PitchClass> {
        match self.catalog.get(scale_type) {
            Some(def) => def.notes_from(root),
            None => {
                debug!(scale_type, "No such scale, returning no notes");
                Vec::new()
            }
        }
    }

    /// Build a key, failing if the scale type is not in the catalog
    pub fn key(&self, root: PitchClass, scale_type: &str) -> TheoryResult<Key> {
        self.catalog
            .require(scale_type)
            .map(|def| Key::new(root, def))
    }

    /// Notes of an existing key in degree order
    pub fn key_notes(&self, key: &Key) -> Vec<PitchClass> {
        self.scale_notes(key.root(), key.scale_type())
    }

    /// Scale information for display, or `None` for an unknown scale type
    pub fn scale_info(&self, root: PitchClass, scale_type: &str) -> Option<ScaleInfo> {
        self.catalog
            .get(scale_type)
            .map(|def| ScaleInfo::new(root, def))
    }

    /// Every key whose notes include all of the selected pitch classes.
    ///
    /// An empty selection matches nothing. Matching is a subset test, so keys
    /// with notes beyond the selection still match.
    pub fn find_possible_keys<I>(&self, selected: I) -> Vec<Key>
    where
        I: IntoIterator<Item = PitchClass>,
    {
        let wanted: Vec<PitchClass> = selected.into_iter().collect();
        if wanted.is_empty() {
            return Vec::new();
        }

        let mut keys = Vec::new();
        for root in PitchClass::ALL {
            for def in self.catalog.iter() {
                let mask = def.mask_from(root);
                if wanted.iter().all(|note| mask[note.index()]) {
                    keys.push(Key::new(root, def));
                }
            }
        }

        debug!(
            selected = wanted.len(),
            matches = keys.len(),
            "Key inference complete"
        );
        keys
    }

    /// Same as [`find_possible_keys`](Self::find_possible_keys) for raw note names.
    ///
    /// Flat spellings are normalized first. A name that is not a pitch class
    /// fails with [`TheoryError::UnknownPitchClass`].
    pub fn find_possible_keys_for_names<S: AsRef<str>>(&self, names: &[S]) -> TheoryResult<Vec<Key>> {
        let notes = names
            .iter()
            .map(|name| index_of(normalize(name.as_ref())).map(PitchClass::from_index))
            .collect::<Result<Vec<_>, TheoryError>>()?;
        Ok(self.find_possible_keys(notes))
    }
}
