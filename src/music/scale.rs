// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale definitions and the scale catalog.
//!
//! A scale is a named list of ascending semitone offsets from a root.
//! The catalog is an explicit, immutable value so that alternative scale
//! sets can be loaded from configuration without touching global state.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{TheoryError, TheoryResult};
use super::note::PitchClass;

/// Built-in scales as (identifier, display name, intervals), in catalog order
pub const BUILTIN_SCALES: [(&str, &str, &[u8]); 12] = [
    ("major", "Major", &[0, 2, 4, 5, 7, 9, 11]),
    ("minor", "Natural Minor", &[0, 2, 3, 5, 7, 8, 10]),
    ("harmonicMinor", "Harmonic Minor", &[0, 2, 3, 5, 7, 8, 11]),
    ("melodicMinor", "Melodic Minor", &[0, 2, 3, 5, 7, 9, 11]),
    ("dorian", "Dorian", &[0, 2, 3, 5, 7, 9, 10]),
    ("phrygian", "Phrygian", &[0, 1, 3, 5, 7, 8, 10]),
    ("lydian", "Lydian", &[0, 2, 4, 6, 7, 9, 11]),
    ("mixolydian", "Mixolydian", &[0, 2, 4, 5, 7, 9, 10]),
    ("locrian", "Locrian", &[0, 1, 3, 5, 6, 8, 10]),
    ("pentatonicMajor", "Pentatonic Major", &[0, 2, 4, 7, 9]),
    ("pentatonicMinor", "Pentatonic Minor", &[0, 3, 5, 7, 10]),
    ("blues", "Blues", &[0, 3, 5, 6, 7, 10]),
];

/// A named interval pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleDefinition {
    /// Identifier used for lookup (e.g. `pentatonicMinor`)
    pub id: String,
    /// Human-readable name (e.g. `Pentatonic Minor`)
    pub name: String,
    /// Semitone offsets from the root, starting at 0 and strictly increasing
    pub intervals: Vec<u8>,
}

impl ScaleDefinition {
    /// Create a validated scale definition
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        intervals: Vec<u8>,
    ) -> TheoryResult<Self> {
        let def = Self {
            id: id.into(),
            name: name.into(),
            intervals,
        };
        def.validate()?;
        Ok(def)
    }

    /// Check the interval list: non-empty, rooted at 0, strictly ascending, within one octave
    pub fn validate(&self) -> TheoryResult<()> {
        let invalid = |reason: &str| TheoryError::InvalidScale {
            name: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("identifier must not be empty"));
        }
        match self.intervals.first() {
            None => return Err(invalid("interval list must not be empty")),
            Some(&first) if first != 0 => return Err(invalid("intervals must start at 0")),
            _ => {}
        }
        if self.intervals.windows(2).any(|w| w[0] >= w[1]) {
            return Err(invalid("intervals must be strictly increasing"));
        }
        if self.intervals.iter().any(|&i| i > 11) {
            return Err(invalid("intervals must be in range 0-11"));
        }
        Ok(())
    }

    /// Number of degrees in the scale
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the scale has no degrees (never true for a validated definition)
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Notes of this scale from the given root, in degree order
    pub fn notes_from(&self, root: PitchClass) -> Vec<PitchClass> {
        self.intervals
            .iter()
            .map(|&interval| root.transpose(interval as i32))
            .collect()
    }

    /// Pitch-class membership mask for this scale from the given root
    pub fn mask_from(&self, root: PitchClass) -> [bool; 12] {
        let mut mask = [false; 12];
        for note in self.notes_from(root) {
            mask[note.index()] = true;
        }
        mask
    }

    /// Degree labels for every position in the scale
    pub fn degree_labels(&self) -> Vec<String> {
        (0..self.len()).map(degree_label).collect()
    }
}

impl fmt::Display for ScaleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Label for the scale degree at a zero-based position.
///
/// Position 0 is `Root`. Later positions use the degree number with `nd`
/// for 2, `rd` for 3 and `th` otherwise. Only meaningful for degrees 1-7.
pub fn degree_label(position: usize) -> String {
    if position == 0 {
        return "Root".to_string();
    }
    let degree = position + 1;
    let suffix = match degree {
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{}", degree, suffix)
}

/// Ordered, immutable collection of scale definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleCatalog {
    scales: Vec<ScaleDefinition>,
}

impl ScaleCatalog {
    /// Build a catalog from definitions, validating each and rejecting duplicate ids
    pub fn new(scales: Vec<ScaleDefinition>) -> TheoryResult<Self> {
        for (i, def) in scales.iter().enumerate() {
            def.validate()?;
            if scales[..i].iter().any(|other| other.id == def.id) {
                return Err(TheoryError::DuplicateScale(def.id.clone()));
            }
        }
        debug!(count = scales.len(), "Built scale catalog");
        Ok(Self { scales })
    }

    /// The twelve built-in scales
    pub fn builtin() -> Self {
        let scales = BUILTIN_SCALES
            .iter()
            .map(|(id, name, intervals)| ScaleDefinition {
                id: id.to_string(),
                name: name.to_string(),
                intervals: intervals.to_vec(),
            })
            .collect();
        Self { scales }
    }

    /// Append further definitions after the existing ones
    pub fn with_scales(self, extra: Vec<ScaleDefinition>) -> TheoryResult<Self> {
        let mut scales = self.scales;
        scales.extend(extra);
        Self::new(scales)
    }

    /// Look up a scale by identifier
    pub fn get(&self, id: &str) -> Option<&ScaleDefinition> {
        self.scales.iter().find(|def| def.id == id)
    }

    /// Look up a scale by identifier, failing if it is missing
    pub fn require(&self, id: &str) -> TheoryResult<&ScaleDefinition> {
        self.get(id)
            .ok_or_else(|| TheoryError::UnknownScale(id.to_string()))
    }

    /// Iterate definitions in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &ScaleDefinition> {
        self.scales.iter()
    }

    /// Scale identifiers in catalog order
    pub fn ids(&self) -> Vec<&str> {
        self.scales.iter().map(|def| def.id.as_str()).collect()
    }

    /// Number of scales in the catalog
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

impl Default for ScaleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Everything the UI shows about one key: label, notes and degree labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleInfo {
    /// Display label, e.g. `C#/Db Major`
    pub label: String,
    /// Root of the key
    pub root: PitchClass,
    /// Scale identifier
    pub scale_id: String,
    /// Notes in degree order
    pub notes: Vec<PitchClass>,
    /// Degree label per note (`Root`, `2nd`, `3rd`, ...)
    pub degree_labels: Vec<String>,
    /// Semitone offsets from the root
    pub intervals: Vec<u8>,
}

impl ScaleInfo {
    /// Compute the scale information for a root and definition
    pub fn new(root: PitchClass, def: &ScaleDefinition) -> Self {
        Self {
            label: format!("{} {}", root.enharmonic_name(), def.name),
            root,
            scale_id: def.id.clone(),
            notes: def.notes_from(root),
            degree_labels: def.degree_labels(),
            intervals: def.intervals.clone(),
        }
    }

    /// Interval line, e.g. `Root (0) → 2nd (2) → 3rd (4)`
    pub fn interval_summary(&self) -> String {
        self.degree_labels
            .iter()
            .zip(&self.intervals)
            .map(|(label, interval)| format!("{} ({})", label, interval))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Degree label for a note, if it belongs to the scale
    pub fn degree_of(&self, note: PitchClass) -> Option<&str> {
        self.notes
            .iter()
            .position(|&n| n == note)
            .map(|i| self.degree_labels[i].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = ScaleCatalog::builtin();
        assert_eq!(catalog.len(), 12);
        assert_eq!(
            catalog.ids(),
            vec![
                "major",
                "minor",
                "harmonicMinor",
                "melodicMinor",
                "dorian",
                "phrygian",
                "lydian",
                "mixolydian",
                "locrian",
                "pentatonicMajor",
                "pentatonicMinor",
                "blues",
            ]
        );
    }

    #[test]
    fn test_builtin_definitions_are_valid() {
        let catalog = ScaleCatalog::builtin();
        for def in catalog.iter() {
            assert!(def.validate().is_ok(), "{} should be valid", def.id);
            assert!((5..=7).contains(&def.len()));
        }
        assert!(ScaleCatalog::new(catalog.iter().cloned().collect()).is_ok());
    }

    #[test]
    fn test_notes_from() {
        let catalog = ScaleCatalog::builtin();
        let major = catalog.get("major").unwrap();
        assert_eq!(
            major.notes_from(PitchClass::C),
            vec![
                PitchClass::C,
                PitchClass::D,
                PitchClass::E,
                PitchClass::F,
                PitchClass::G,
                PitchClass::A,
                PitchClass::B
            ]
        );

        let penta = catalog.get("pentatonicMinor").unwrap();
        assert_eq!(
            penta.notes_from(PitchClass::A),
            vec![
                PitchClass::A,
                PitchClass::C,
                PitchClass::D,
                PitchClass::E,
                PitchClass::G
            ]
        );
    }

    #[test]
    fn test_mask_from() {
        let catalog = ScaleCatalog::builtin();
        let blues = catalog.get("blues").unwrap();
        let mask = blues.mask_from(PitchClass::A);
        let members: Vec<usize> = (0..12).filter(|&i| mask[i]).collect();
        // A C D D# E G
        assert_eq!(members, vec![0, 2, 3, 4, 7, 9]);
    }

    #[test]
    fn test_degree_labels() {
        assert_eq!(degree_label(0), "Root");
        assert_eq!(degree_label(1), "2nd");
        assert_eq!(degree_label(2), "3rd");
        assert_eq!(degree_label(3), "4th");
        assert_eq!(degree_label(6), "7th");

        let catalog = ScaleCatalog::builtin();
        let penta = catalog.get("pentatonicMajor").unwrap();
        assert_eq!(penta.degree_labels(), vec!["Root", "2nd", "3rd", "4th", "5th"]);
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            ScaleDefinition::new("empty", "Empty", vec![]),
            Err(TheoryError::InvalidScale { .. })
        ));
        assert!(matches!(
            ScaleDefinition::new("offset", "Offset", vec![1, 3, 5]),
            Err(TheoryError::InvalidScale { .. })
        ));
        assert!(matches!(
            ScaleDefinition::new("unsorted", "Unsorted", vec![0, 4, 2]),
            Err(TheoryError::InvalidScale { .. })
        ));
        assert!(matches!(
            ScaleDefinition::new("repeat", "Repeat", vec![0, 2, 2]),
            Err(TheoryError::InvalidScale { .. })
        ));
        assert!(matches!(
            ScaleDefinition::new("wide", "Wide", vec![0, 7, 12]),
            Err(TheoryError::InvalidScale { .. })
        ));
        assert!(ScaleDefinition::new("wholeTone", "Whole Tone", vec![0, 2, 4, 6, 8, 10]).is_ok());
    }

    #[test]
    fn test_with_scales() {
        let whole_tone =
            ScaleDefinition::new("wholeTone", "Whole Tone", vec![0, 2, 4, 6, 8, 10]).unwrap();
        let catalog = ScaleCatalog::builtin()
            .with_scales(vec![whole_tone])
            .unwrap();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.ids().last(), Some(&"wholeTone"));

        let duplicate = ScaleDefinition::new("major", "Also Major", vec![0, 2, 4]).unwrap();
        assert_eq!(
            ScaleCatalog::builtin().with_scales(vec![duplicate]),
            Err(TheoryError::DuplicateScale("major".to_string()))
        );
    }

    #[test]
    fn test_require() {
        let catalog = ScaleCatalog::builtin();
        assert!(catalog.require("dorian").is_ok());
        assert_eq!(
            catalog.require("bebop"),
            Err(TheoryError::UnknownScale("bebop".to_string()))
        );
    }

    #[test]
    fn test_scale_info() {
        let catalog = ScaleCatalog::builtin();
        let info = ScaleInfo::new(PitchClass::Cs, catalog.get("major").unwrap());
        assert_eq!(info.label, "C#/Db Major");
        assert_eq!(info.notes[0], PitchClass::Cs);
        assert_eq!(info.notes[6], PitchClass::C);
        assert_eq!(info.degree_of(PitchClass::Fs), Some("4th"));
        assert_eq!(info.degree_of(PitchClass::D), None);

        let info = ScaleInfo::new(PitchClass::A, catalog.get("pentatonicMinor").unwrap());
        assert_eq!(
            info.interval_summary(),
            "Root (0) → 2nd (3) → 3rd (5) → 4th (7) → 5th (10)"
        );
    }
}
