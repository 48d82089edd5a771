// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Guitar fretboard layout.
//!
//! Strings are listed from the high E down to the low E, matching how the
//! neck is drawn.

use serde::Serialize;

use crate::music::{MidiNote, PitchClass};

/// Highest fret shown
pub const FRET_COUNT: u8 = 12;

/// Standard tuning, high string first: (label, open note, octave)
pub const STANDARD_TUNING: [(&str, PitchClass, i8); 6] = [
    ("e", PitchClass::E, 4),
    ("B", PitchClass::B, 3),
    ("G", PitchClass::G, 3),
    ("D", PitchClass::D, 3),
    ("A", PitchClass::A, 2),
    ("E", PitchClass::E, 2),
];

/// Inlay marker drawn above a fret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FretMarker {
    None,
    Single,
    Double,
}

impl FretMarker {
    /// Marker for a fret number
    pub fn for_fret(fret: u8) -> Self {
        match fret {
            3 | 5 | 7 | 9 => FretMarker::Single,
            12 => FretMarker::Double,
            _ => FretMarker::None,
        }
    }
}

/// One string and its open pitch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuitarString {
    pub label: String,
    pub open: PitchClass,
    pub octave: i8,
}

impl GuitarString {
    /// Pitch class sounded at a fret
    pub fn note_at(&self, fret: u8) -> PitchClass {
        self.open.transpose(fret as i32)
    }

    /// MIDI note number sounded at a fret
    pub fn midi_at(&self, fret: u8) -> Option<MidiNote> {
        self.open
            .midi_number(self.octave)
            .and_then(|open| open.checked_add(fret))
            .filter(|&midi| midi <= 127)
    }
}

/// A (string, fret) location on the neck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FretPosition {
    /// Index into the string list (0 = highest string)
    pub string: usize,
    pub fret: u8,
    pub note: PitchClass,
}

/// The neck: strings and fret range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    strings: Vec<GuitarString>,
    frets: u8,
}

impl Fretboard {
    /// Six-string neck in standard tuning with 12 frets
    pub fn standard() -> Self {
        let strings = STANDARD_TUNING
            .iter()
            .map(|&(label, open, octave)| GuitarString {
                label: label.to_string(),
                open,
                octave,
            })
            .collect();
        Self::new(strings, FRET_COUNT)
    }

    /// Neck with a custom tuning
    pub fn new(strings: Vec<GuitarString>, frets: u8) -> Self {
        Self { strings, frets }
    }

    /// Strings from highest to lowest
    pub fn strings(&self) -> &[GuitarString] {
        &self.strings
    }

    /// Highest fret number
    pub fn frets(&self) -> u8 {
        self.frets
    }

    /// Pitch class at a string and fret, or `None` off the neck
    pub fn note_at(&self, string: usize, fret: u8) -> Option<PitchClass> {
        if fret > self.frets {
            return None;
        }
        self.strings.get(string).map(|s| s.note_at(fret))
    }

    /// Every position on the neck, string by string
    pub fn positions(&self) -> Vec<FretPosition> {
        self.strings
            .iter()
            .enumerate()
            .flat_map(|(i, s)| {
                (0..=self.frets).map(move |fret| FretPosition {
                    string: i,
                    fret,
                    note: s.note_at(fret),
                })
            })
            .collect()
    }

    /// Every position sounding the given pitch class
    pub fn positions_of(&self, note: PitchClass) -> Vec<FretPosition> {
        self.positions()
            .into_iter()
            .filter(|p| p.note == note)
            .collect()
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::standard()
    }
}
