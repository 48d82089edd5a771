// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Transposition offsets relative to a reference pitch class.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::note::PitchClass;

/// Distance from a reference to a note, both descending and ascending.
///
/// `down` is in -11..=0 and `up` in 0..=11. Unison reports both as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TranspositionOffset {
    pub down: i8,
    pub up: i8,
}

impl TranspositionOffset {
    /// Offsets needed to move from `reference` to `note`
    pub fn between(reference: PitchClass, note: PitchClass) -> Self {
        let semitones = reference.interval_to(note) as i8;
        if semitones == 0 {
            return Self { down: 0, up: 0 };
        }
        Self {
            down: semitones - 12,
            up: semitones,
        }
    }

    /// Whether the note is the reference itself
    pub fn is_unison(&self) -> bool {
        self.up == 0
    }
}

impl fmt::Display for TranspositionOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unison() {
            write!(f, "0")
        } else {
            write!(f, "{}, +{}", self.down, self.up)
        }
    }
}

/// Offsets from `reference` for each note, keyed in chromatic order
pub fn transposition_offsets<I>(notes: I, reference: PitchClass) -> BTreeMap<PitchClass, TranspositionOffset>
where
    I: IntoIterator<Item = PitchClass>,
{
    notes
        .into_iter()
        .map(|note| (note, TranspositionOffset::between(reference, note)))
        .collect()
}
