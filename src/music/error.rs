// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for note arithmetic and scale catalogs.

use thiserror::Error;

/// Errors raised by the music theory layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// A note name outside the twelve chromatic pitch classes
    #[error("Unknown pitch class: {0:?}")]
    UnknownPitchClass(String),

    /// A scale identifier not present in the catalog
    #[error("Unknown scale type: {0:?}")]
    UnknownScale(String),

    /// A scale definition whose interval list is malformed
    #[error("Invalid scale {name:?}: {reason}")]
    InvalidScale { name: String, reason: String },

    /// Two catalog entries share an identifier
    #[error("Duplicate scale identifier: {0:?}")]
    DuplicateScale(String),
}

/// Result type for music theory operations
pub type TheoryResult<T> = Result<T, TheoryError>;
