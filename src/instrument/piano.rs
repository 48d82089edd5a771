// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Virtual piano keyboard layout and the QWERTY synth key map.

use serde::Serialize;

use crate::music::{MidiNote, PitchClass};

/// Octaves shown on the keyboard
pub const PIANO_OCTAVES: [i8; 2] = [3, 4];

/// Computer-keyboard keys mapped to (pitch class, octave) for the synth
pub const QWERTY_NOTES: [(char, PitchClass, i8); 15] = [
    ('a', PitchClass::C, 4),
    ('w', PitchClass::Cs, 4),
    ('s', PitchClass::D, 4),
    ('e', PitchClass::Ds, 4),
    ('d', PitchClass::E, 4),
    ('f', PitchClass::F, 4),
    ('t', PitchClass::Fs, 4),
    ('g', PitchClass::G, 4),
    ('y', PitchClass::Gs, 4),
    ('h', PitchClass::A, 4),
    ('u', PitchClass::As, 4),
    ('j', PitchClass::B, 4),
    ('k', PitchClass::C, 5),
    ('o', PitchClass::Cs, 5),
    ('l', PitchClass::D, 5),
];

/// Key colour on the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyColor {
    White,
    Black,
}

/// One physical key on the virtual piano
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PianoKey {
    pub note: PitchClass,
    pub octave: i8,
    pub color: KeyColor,
}

impl PianoKey {
    /// MIDI note number of this key
    pub fn midi(&self) -> Option<MidiNote> {
        self.note.midi_number(self.octave)
    }

    /// Label such as `C4`
    pub fn label(&self) -> String {
        format!("{}{}", self.note, self.octave)
    }
}

/// Two-octave keyboard starting at C3.
///
/// Keys are listed white key first, followed by the black key to its right,
/// which is the order they are laid out in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PianoLayout {
    keys: Vec<PianoKey>,
}

impl PianoLayout {
    /// Build the standard layout
    pub fn new() -> Self {
        let mut keys = Vec::new();
        for &octave in &PIANO_OCTAVES {
            for note in PitchClass::ALL {
                let color = if note.is_accidental() {
                    KeyColor::Black
                } else {
                    KeyColor::White
                };
                keys.push(PianoKey {
                    note,
                    octave,
                    color,
                });
            }
        }
        Self { keys }
    }

    /// All keys in layout order
    pub fn keys(&self) -> &[PianoKey] {
        &self.keys
    }

    /// Keys sounding the given pitch class
    pub fn keys_for(&self, note: PitchClass) -> Vec<&PianoKey> {
        self.keys.iter().filter(|k| k.note == note).collect()
    }

    /// Number of white keys
    pub fn white_key_count(&self) -> usize {
        self.keys
            .iter()
            .filter(|k| k.color == KeyColor::White)
            .count()
    }
}

impl Default for PianoLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Note played by a computer-keyboard key, if it is mapped
pub fn qwerty_note(key: char) -> Option<(PitchClass, i8)> {
    let key = key.to_ascii_lowercase();
    QWERTY_NOTES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|&(_, note, octave)| (note, octave))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_size() {
        let piano = PianoLayout::new();
        assert_eq!(piano.keys().len(), 24);
        assert_eq!(piano.white_key_count(), 14);
    }

    #[test]
    fn test_layout_order() {
        let piano = PianoLayout::new();
        let first: Vec<String> = piano.keys()[..4].iter().map(|k| k.label()).collect();
        assert_eq!(first, vec!["C3", "C#3", "D3", "D#3"]);
        assert_eq!(piano.keys()[1].color, KeyColor::Black);
        assert_eq!(piano.keys()[23].label(), "B4");
    }

    #[test]
    fn test_keys_for() {
        let piano = PianoLayout::new();
        let a_keys = piano.keys_for(PitchClass::A);
        assert_eq!(a_keys.len(), 2);
        assert_eq!(a_keys[1].midi(), Some(69));
    }

    #[test]
    fn test_qwerty_note() {
        assert_eq!(qwerty_note('a'), Some((PitchClass::C, 4)));
        assert_eq!(qwerty_note('U'), Some((PitchClass::As, 4)));
        assert_eq!(qwerty_note('l'), Some((PitchClass::D, 5)));
        assert_eq!(qwerty_note('z'), None);
    }
}
