mod common;

use common::{catalog_json, manifest_path, write_catalog, WorkoutBuilder};
use std::io::Cursor;
use wattsmith::error::WsError;
use wattsmith::library::Library;
use wattsmith::workout::{AdjustableField, Category, SegmentKind, WorkoutSegment};

fn assert_load_error(result: Result<Library, WsError>, needle: &str) {
    match result {
        Err(WsError::LibraryLoad { reason, .. }) => {
            assert!(
                reason.contains(needle),
                "reason '{}' does not mention '{}'",
                reason,
                needle
            );
        }
        other => panic!("expected LibraryLoad error, got {:?}", other),
    }
}

#[test]
fn test_loads_entries_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(
        dir.path(),
        "lib.json",
        &[
            WorkoutBuilder::new("b", Category::Tempo).build(),
            WorkoutBuilder::new("a", Category::Endurance).build(),
            WorkoutBuilder::new("c", Category::Recovery).build(),
        ],
    );

    let lib = Library::load(&path).unwrap();
    let ids: Vec<&str> = lib.entries().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "c"]);
    assert_eq!(lib.version(), "test");
    assert_eq!(lib.get("a").unwrap().category, Category::Endurance);
    assert!(lib.get("zzz").is_none());
}

#[test]
fn test_loading_twice_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(
        dir.path(),
        "lib.json",
        &[
            WorkoutBuilder::new("a", Category::Endurance)
                .adjustable(AdjustableField::Duration, 30.0, 90.0)
                .build(),
            WorkoutBuilder::new("b", Category::Vo2max).build(),
        ],
    );

    let first = Library::load(&path).unwrap();
    let second = Library::load(&path).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.checksum(), second.checksum());
    assert_eq!(first.checksum().len(), 64);
}

#[test]
fn test_duration_mismatch_is_rejected() {
    let bad = WorkoutBuilder::new("short", Category::Endurance)
        .segments(vec![
            WorkoutSegment::new(SegmentKind::WarmUp, 10.0, 50.0, 60.0),
            WorkoutSegment::new(SegmentKind::Steady, 65.0, 65.0, 75.0),
            WorkoutSegment::new(SegmentKind::CoolDown, 10.0, 45.0, 55.0),
        ])
        .declared_duration(90.0)
        .build();

    let result = Library::from_json_str(&catalog_json(&[bad]));
    assert_load_error(result, "sum to 85");
}

#[test]
fn test_empty_segments_are_rejected() {
    let bad = WorkoutBuilder::new("empty", Category::Tempo)
        .segments(vec![])
        .build();
    assert_load_error(
        Library::from_json_str(&catalog_json(&[bad])),
        "empty segment sequence",
    );
}

#[test]
fn test_inverted_bounds_are_rejected() {
    let bad = WorkoutBuilder::new("inverted", Category::Tempo)
        .adjustable(AdjustableField::Duration, 120.0, 60.0)
        .build();
    assert_load_error(Library::from_json_str(&catalog_json(&[bad])), "inverted");
}

#[test]
fn test_baseline_outside_bounds_is_rejected() {
    let bad = WorkoutBuilder::new("outside", Category::Tempo)
        .stress(60.0)
        .adjustable(AdjustableField::Stress, 70.0, 90.0)
        .build();
    assert_load_error(
        Library::from_json_str(&catalog_json(&[bad])),
        "outside adjustable bounds",
    );
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let a = WorkoutBuilder::new("dup", Category::Tempo).build();
    let b = WorkoutBuilder::new("dup", Category::Threshold).build();
    assert_load_error(
        Library::from_json_str(&catalog_json(&[a, b])),
        "duplicate identifier",
    );
}

#[test]
fn test_negative_stress_is_rejected() {
    let bad = WorkoutBuilder::new("neg", Category::Recovery)
        .stress(-1.0)
        .build();
    assert_load_error(Library::from_json_str(&catalog_json(&[bad])), "invalid stress");
}

#[test]
fn test_one_bad_entry_rejects_whole_catalog() {
    let good = WorkoutBuilder::new("good", Category::Endurance).build();
    let bad = WorkoutBuilder::new("bad", Category::Endurance)
        .declared_duration(61.0)
        .build();
    assert_load_error(Library::from_json_str(&catalog_json(&[good, bad])), "'bad'");
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    assert_load_error(
        Library::load(dir.path().join("nope.json")),
        "cannot read file",
    );
}

#[test]
fn test_malformed_json_is_load_error() {
    assert_load_error(Library::from_json_str("{ not json"), "malformed");
}

#[test]
fn test_unknown_category_is_load_error() {
    let json = catalog_json(&[WorkoutBuilder::new("x", Category::Tempo).build()])
        .replace("\"tempo\"", "\"anaerobic\"");
    assert_load_error(Library::from_json_str(&json), "malformed");
}

#[test]
fn test_hyphenated_spellings_are_accepted() {
    let json = catalog_json(&[WorkoutBuilder::new("x", Category::SweetSpot).build()])
        .replace("\"sweet_spot\"", "\"sweet-spot\"");
    let lib = Library::from_json_str(&json).unwrap();
    assert_eq!(lib.entries()[0].category, Category::SweetSpot);
}

#[test]
fn test_from_reader_matches_from_str() {
    let json = catalog_json(&[WorkoutBuilder::new("x", Category::Tempo).build()]);
    let from_reader = Library::from_reader(Cursor::new(json.clone()), "cursor").unwrap();
    let from_str = Library::from_json_str(&json).unwrap();
    assert_eq!(from_reader, from_str);
}

#[test]
fn test_bundled_library_is_valid() {
    let lib = Library::load(manifest_path("data/workouts.json")).unwrap();
    assert!(lib.len() >= 10);
    for w in lib.entries() {
        assert!(w.violations().is_empty(), "{}: {:?}", w.id, w.violations());
    }
}
