// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core for inkey.
//!
//! This module provides pitch-class arithmetic, the scale catalog, key
//! inference from a set of selected notes, and transposition offsets.
//! Everything here is pure: no state is kept between calls.

pub mod error;
pub mod key;
pub mod note;
pub mod scale;
pub mod transpose;

pub use error::{TheoryError, TheoryResult};
pub use key::{Key, KeyFinder};
pub use note::{index_of, normalize, transpose, MidiNote, PitchClass};
pub use scale::{degree_label, ScaleCatalog, ScaleDefinition, ScaleInfo};
pub use transpose::{transposition_offsets, TranspositionOffset};
