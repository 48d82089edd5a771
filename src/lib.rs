// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! inkey - find the keys that fit a set of notes.
//!
//! The [`music`] module holds the pure theory core: pitch classes, the scale
//! catalog, key inference and transposition offsets. [`session`] keeps the
//! user's note selection and turns it into display values, [`instrument`]
//! describes the piano and guitar layouts notes are picked from, and
//! [`config`] loads catalog and session settings from YAML or TOML.

pub mod config;
pub mod instrument;
pub mod music;
pub mod session;

pub use music::{Key, KeyFinder, PitchClass, ScaleCatalog, TheoryError};
pub use session::{InKeySession, KeysView, SelectionState};
