// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and chromatic arithmetic.
//!
//! Notes are spelled canonically with sharps. Flat spellings are accepted
//! on input and folded onto their sharp equivalent by [`normalize`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{TheoryError, TheoryResult};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Canonical sharp spellings in chromatic order
pub const CHROMATIC: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Display labels showing both spellings of each pitch class
pub const ENHARMONIC_NAMES: [&str; 12] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B",
];

/// Flat spellings and the sharp spelling each one folds onto
pub const FLAT_TO_SHARP: [(&str, &str); 7] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Fb", "E"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
    ("Cb", "B"),
];

/// Octaves covered by [`PitchClass::midi_numbers_across_octaves`]
pub const COMMON_OCTAVES: std::ops::RangeInclusive<i8> = 2..=5;

/// One of the twelve pitch classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Position in the chromatic sequence (0-11)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class at a chromatic position, wrapping modulo 12
    pub fn from_index(index: usize) -> Self {
        PitchClass::ALL[index % 12]
    }

    /// Canonical sharp spelling
    pub fn name(self) -> &'static str {
        CHROMATIC[self.index()]
    }

    /// Sharp/flat display label, e.g. `C#/Db`
    pub fn enharmonic_name(self) -> &'static str {
        ENHARMONIC_NAMES[self.index()]
    }

    /// Whether this pitch class sits on a black piano key
    pub fn is_accidental(self) -> bool {
        self.name().len() > 1
    }

    /// Transpose by any number of semitones, wrapping into the octave
    pub fn transpose(self, semitones: i32) -> Self {
        let index = (self.index() as i32 + semitones.rem_euclid(12)).rem_euclid(12);
        PitchClass::from_index(index as usize)
    }

    /// Ascending interval in semitones to another pitch class (0-11)
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.index() as i32 - self.index() as i32).rem_euclid(12) as u8
    }

    /// MIDI note number in the given octave (C4 = 60)
    pub fn midi_number(self, octave: i8) -> Option<MidiNote> {
        let midi = (octave as i16 + 1) * 12 + self.index() as i16;
        if !(0..=127).contains(&midi) {
            return None;
        }
        Some(midi as MidiNote)
    }

    /// MIDI note numbers for this pitch class in octaves 2 through 5
    pub fn midi_numbers_across_octaves(self) -> Vec<MidiNote> {
        COMMON_OCTAVES
            .filter_map(|octave| self.midi_number(octave))
            .collect()
    }

    /// Pitch class of a MIDI note number
    pub fn from_midi(midi_note: MidiNote) -> Self {
        PitchClass::from_index(midi_note as usize)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    /// Parse a note name, accepting flat spellings and a lowercase letter
    fn from_str(s: &str) -> TheoryResult<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let spelled = match chars.next() {
            Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => return Err(TheoryError::UnknownPitchClass(s.to_string())),
        };
        index_of(normalize(&spelled))
            .map(PitchClass::from_index)
            .map_err(|_| TheoryError::UnknownPitchClass(s.to_string()))
    }
}

/// Position of a canonical sharp spelling in the chromatic sequence.
///
/// Only the twelve sharp spellings are recognised; flats must be passed
/// through [`normalize`] first.
pub fn index_of(name: &str) -> TheoryResult<usize> {
    CHROMATIC
        .iter()
        .position(|&n| n == name)
        .ok_or_else(|| TheoryError::UnknownPitchClass(name.to_string()))
}

/// Transpose a pitch class by any number of semitones
pub fn transpose(root: PitchClass, semitones: i32) -> PitchClass {
    root.transpose(semitones)
}

/// Fold a flat spelling onto its sharp equivalent.
///
/// Anything that is not one of the seven flat spellings comes back untouched,
/// including unknown strings.
pub fn normalize(note: &str) -> &str {
    FLAT_TO_SHARP
        .iter()
        .find(|(flat, _)| *flat == note)
        .map(|(_, sharp)| *sharp)
        .unwrap_or(note)
}
