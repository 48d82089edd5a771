// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for inkey
//!
//! These tests exercise the public API: note arithmetic, scale computation,
//! key inference, transposition and the session built on top of them.

use std::collections::BTreeSet;

use inkey::config::TheoryFile;
use inkey::instrument::{Fretboard, PianoLayout};
use inkey::music::{
    index_of, normalize, transpose, transposition_offsets, Key, KeyFinder, PitchClass,
    ScaleCatalog, TheoryError, TranspositionOffset,
};
use inkey::session::{InKeySession, KeysView};

fn pcs(names: &[&str]) -> Vec<PitchClass> {
    names.iter().map(|n| n.parse::<PitchClass>().unwrap()).collect()
}

/// Brute-force reference: every (root, scale) pair whose note set covers `wanted`
fn brute_force_keys(catalog: &ScaleCatalog, wanted: &BTreeSet<PitchClass>) -> Vec<(PitchClass, String)> {
    let mut out = Vec::new();
    for root_index in 0..12 {
        let root = PitchClass::from_index(root_index);
        for def in catalog.iter() {
            let notes: BTreeSet<PitchClass> = def
                .intervals
                .iter()
                .map(|&i| PitchClass::from_index((root_index + i as usize) % 12))
                .collect();
            if !wanted.is_empty() && wanted.is_subset(&notes) {
                out.push((root, def.id.clone()));
            }
        }
    }
    out
}

fn as_pairs(keys: &[Key]) -> Vec<(PitchClass, String)> {
    keys.iter()
        .map(|k| (k.root(), k.scale_type().to_string()))
        .collect()
}

#[test]
fn test_chromatic_indices_are_unique() {
    let indices: BTreeSet<usize> = PitchClass::ALL
        .iter()
        .map(|pc| index_of(pc.name()).unwrap())
        .collect();
    assert_eq!(indices.len(), 12);
    assert!(indices.iter().all(|&i| i <= 11));
}

#[test]
fn test_transpose_properties() {
    for pc in PitchClass::ALL {
        assert_eq!(transpose(pc, 0), pc);
        assert_eq!(transpose(pc, 12), pc);
        for s in -30..30 {
            assert_eq!(transpose(pc, s), transpose(pc, s.rem_euclid(12)));
        }
    }
    assert_eq!(transpose(PitchClass::C, -1), PitchClass::B);

    for s in [i32::MAX, i32::MAX - 1, i32::MIN, i32::MIN + 1] {
        for pc in PitchClass::ALL {
            assert_eq!(transpose(pc, s), transpose(pc, s.rem_euclid(12)));
        }
    }
    // i32::MAX is 7 mod 12
    assert_eq!(transpose(PitchClass::Cs, i32::MAX), PitchClass::Gs);
}

#[test]
fn test_unknown_pitch_class_is_an_error() {
    assert_eq!(
        index_of("X#"),
        Err(TheoryError::UnknownPitchClass("X#".to_string()))
    );
}

#[test]
fn test_scale_notes_examples() {
    let finder = KeyFinder::default();
    assert_eq!(
        finder.scale_notes(PitchClass::C, "major"),
        pcs(&["C", "D", "E", "F", "G", "A", "B"])
    );
    assert_eq!(
        finder.scale_notes(PitchClass::A, "pentatonicMinor"),
        pcs(&["A", "C", "D", "E", "G"])
    );
    assert!(finder.scale_notes(PitchClass::A, "notAScale").is_empty());
}

#[test]
fn test_single_note_keys() {
    let finder = KeyFinder::default();
    let keys = finder.find_possible_keys(pcs(&["C"]));
    let pairs = as_pairs(&keys);
    assert!(pairs.contains(&(PitchClass::C, "major".to_string())));
    assert!(pairs.contains(&(PitchClass::F, "major".to_string())));
    assert!(pairs.contains(&(PitchClass::Cs, "major".to_string())));
    assert!(!pairs.contains(&(PitchClass::D, "major".to_string())));

    let wanted: BTreeSet<PitchClass> = pcs(&["C"]).into_iter().collect();
    assert_eq!(pairs, brute_force_keys(finder.catalog(), &wanted));
}

#[test]
fn test_cluster_matches_brute_force() {
    let finder = KeyFinder::default();
    let wanted: BTreeSet<PitchClass> = pcs(&["C#", "F", "G#"]).into_iter().collect();
    let keys = finder.find_possible_keys(wanted.iter().copied());
    let expected = brute_force_keys(finder.catalog(), &wanted);
    assert!(!expected.is_empty());
    assert_eq!(as_pairs(&keys), expected);
}

#[test]
fn test_every_pair_of_notes_matches_brute_force() {
    let finder = KeyFinder::default();
    for a in PitchClass::ALL {
        for b in PitchClass::ALL {
            let wanted: BTreeSet<PitchClass> = [a, b].into_iter().collect();
            let keys = finder.find_possible_keys(wanted.iter().copied());
            assert_eq!(as_pairs(&keys), brute_force_keys(finder.catalog(), &wanted));
        }
    }
}

#[test]
fn test_empty_selection_has_no_keys() {
    let finder = KeyFinder::default();
    assert!(finder.find_possible_keys(Vec::new()).is_empty());
}

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize("Bb"), "A#");
    assert_eq!(normalize("A#"), "A#");
    assert_eq!(normalize(normalize("Bb")), "A#");
    assert_eq!(normalize("Z"), "Z");
}

#[test]
fn test_transposition_examples() {
    let g = transposition_offsets(pcs(&["G"]), PitchClass::C);
    assert_eq!(g[&PitchClass::G], TranspositionOffset { down: -5, up: 7 });

    let c = transposition_offsets(pcs(&["C"]), PitchClass::C);
    assert_eq!(c[&PitchClass::C], TranspositionOffset { down: 0, up: 0 });
}

#[test]
fn test_inference_is_deterministic() {
    let finder = KeyFinder::default();
    let notes = pcs(&["D", "F#", "A", "C"]);
    let first = finder.find_possible_keys(notes.clone());
    let second = finder.find_possible_keys(notes);
    assert_eq!(first, second);
    let labels: Vec<&str> = first.iter().map(|k| k.label()).collect();
    let labels_again: Vec<&str> = second.iter().map(|k| k.label()).collect();
    assert_eq!(labels, labels_again);
}

#[test]
fn test_found_keys_cover_selection() {
    let finder = KeyFinder::default();
    let names = ["Eb", "G", "Bb"];
    let selected: BTreeSet<PitchClass> = names
        .iter()
        .map(|n| n.parse::<PitchClass>().unwrap())
        .collect();
    let keys = finder.find_possible_keys_for_names(&names).unwrap();
    assert!(!keys.is_empty());
    for key in &keys {
        let notes: BTreeSet<PitchClass> = finder.key_notes(key).into_iter().collect();
        assert!(selected.is_subset(&notes), "{} misses a selected note", key);
    }
}

#[test]
fn test_custom_catalog_from_config() {
    let yaml = r#"
replace_builtin: true
scales:
  - id: wholeTone
    name: Whole Tone
    intervals: [0, 2, 4, 6, 8, 10]
"#;
    let config = TheoryFile::from_yaml(yaml).unwrap();
    let finder = KeyFinder::new(config.build_catalog().unwrap());
    let keys = finder.find_possible_keys(pcs(&["C", "E"]));
    // C and E share a whole-tone scale, which has six possible roots
    assert_eq!(keys.len(), 6);
    assert_eq!(keys[0].label(), "C Whole Tone");

    let wanted: BTreeSet<PitchClass> = pcs(&["C", "E"]).into_iter().collect();
    assert_eq!(as_pairs(&keys), brute_force_keys(finder.catalog(), &wanted));
}

#[test]
fn test_session_flow_from_instruments() {
    let piano = PianoLayout::new();
    let neck = Fretboard::standard();
    let mut session = InKeySession::default().with_reference_root(PitchClass::A);

    // C and B on the piano, E and G on the neck
    session.toggle_note(piano.keys()[0].note);
    session.toggle_note(piano.keys_for(PitchClass::B)[0].note);
    session.toggle_note(neck.note_at(0, 0).unwrap());
    session.toggle_note(neck.note_at(0, 3).unwrap());

    match session.keys_view() {
        KeysView::Keys(keys) => assert_eq!(keys[0].label(), "C Major"),
        other => panic!("expected a key list, got {:?}", other),
    }

    let rows = session.transposition_rows();
    let rendered: Vec<String> = rows
        .iter()
        .map(|r| format!("{}: {}", r.note.enharmonic_name(), r.offset))
        .collect();
    assert_eq!(
        rendered,
        vec!["C: -9, +3", "E: -5, +7", "G: -2, +10", "B: -10, +2"]
    );
}
