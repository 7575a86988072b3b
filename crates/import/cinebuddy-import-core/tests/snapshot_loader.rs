use cinebuddy_import_core::{load_snapshots, parse_snapshots};
use cinebuddy_test_fixtures as fixtures;

#[test]
fn unordered_file_loads_sorted() {
    let snapshots = parse_snapshots(&fixtures::snapshots::json("unordered").unwrap()).unwrap();
    assert_eq!(snapshots.len(), 6);
    let mut prev_frame = -1;
    let mut prev_timestamp = -1.0;
    for snapshot in &snapshots {
        assert!(snapshot.frame > prev_frame);
        assert!(snapshot.timestamp > prev_timestamp);
        prev_frame = snapshot.frame;
        prev_timestamp = snapshot.timestamp;
    }
}

#[test]
fn two_point_file_loads() {
    let snapshots = parse_snapshots(&fixtures::snapshots::json("two-point").unwrap()).unwrap();
    let frames: Vec<i64> = snapshots.iter().map(|s| s.frame).collect();
    assert_eq!(frames, vec![0, 10]);
    assert_eq!(snapshots[1].timestamp, 1.0);
}

#[test]
fn empty_file_mentions_snapshot() {
    let err = parse_snapshots(&fixtures::snapshots::json("empty").unwrap()).unwrap_err();
    assert!(err.to_string().contains("snapshot"));
}

#[test]
fn missing_file_mentions_snapshot() {
    let path = fixtures::snapshots::path("empty")
        .unwrap()
        .with_file_name("does_not_exist.json");
    let err = load_snapshots(&path).unwrap_err();
    assert!(err.to_string().contains("snapshot"));
}

#[test]
fn fixture_file_loads_from_disk() {
    let path = fixtures::snapshots::path("unordered").unwrap();
    let snapshots = load_snapshots(&path).unwrap();
    assert_eq!(snapshots.len(), 6);
}
