// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Instrument layouts used to pick notes.
//!
//! These are plain data describing the virtual piano and guitar neck; a UI
//! renders them and feeds clicked notes into a session.

pub mod guitar;
pub mod piano;

pub use guitar::{FretMarker, FretPosition, Fretboard, GuitarString};
pub use piano::{qwerty_note, KeyColor, PianoKey, PianoLayout};
