// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Saving, listing, loading and deleting result records.

use covering_design::error::StoreError;
use covering_design::problem::Parameters;
use covering_design::report::{CanonicalSelection, ResultRecord};
use covering_design::store::ResultStore;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn record(run_index: u32) -> ResultRecord {
    ResultRecord::new(
        Parameters::new(45, 7, 4, 4, 3, 1),
        run_index,
        CanonicalSelection::from_groups(vec![
            vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()],
            vec!["D".to_string(), "E".to_string(), "F".to_string(), "G".to_string()],
        ]),
    )
}

#[test]
fn test_empty_and_missing_directories() {
    let dir = TempDir::new().unwrap();
    let store = ResultStore::new(dir.path());
    assert!(store.list().unwrap().is_empty());
    assert_eq!(store.next_run_index().unwrap(), 1);

    let missing = ResultStore::new(dir.path().join("not-there"));
    assert!(missing.list().unwrap().is_empty());
    assert_eq!(missing.next_run_index().unwrap(), 1);
}

#[test]
fn test_save_list_load_delete() {
    let dir = TempDir::new().unwrap();
    let store = ResultStore::new(dir.path().join("results"));

    let saved = record(1);
    let path = store.save(&saved).unwrap();
    let name = path.file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("45-7-4-4-3-1-1-2-"), "{}", name);
    assert!(name.ends_with(".json"));

    assert_eq!(store.list().unwrap(), vec![name.clone()]);
    assert_eq!(store.next_run_index().unwrap(), 2);
    assert_eq!(store.load(&name).unwrap(), saved);

    store.delete(&name).unwrap();
    assert!(store.list().unwrap().is_empty());
    assert!(matches!(store.delete(&name), Err(StoreError::NotFound(_))));
}

#[test]
fn test_next_run_index_uses_largest() {
    let dir = TempDir::new().unwrap();
    let store = ResultStore::new(dir.path());
    for (i, run_index) in [3u32, 11, 7].iter().enumerate() {
        let name = format!("45-7-4-4-3-1-{}-2-2024010{}_120000.json", run_index, i + 1);
        fs::write(dir.path().join(name), record(*run_index).to_json().unwrap()).unwrap();
    }
    assert_eq!(store.next_run_index().unwrap(), 12);
}

#[test]
fn test_foreign_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    let store = ResultStore::new(dir.path());
    fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    fs::write(dir.path().join("summary.json"), "{}").unwrap();

    // Listed because of the extension, but carries no run index
    assert_eq!(store.list().unwrap(), vec!["summary.json".to_string()]);
    assert_eq!(store.next_run_index().unwrap(), 1);
}

#[test]
fn test_load_errors() {
    let dir = TempDir::new().unwrap();
    let store = ResultStore::new(dir.path());
    assert!(matches!(
        store.load("45-7-4-4-3-1-1-2-20240101_120000.json"),
        Err(StoreError::NotFound(_))
    ));

    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    assert!(matches!(store.load("broken.json"), Err(StoreError::Decode { .. })));
}

#[test]
fn test_names_outside_the_directory_are_rejected() {
    let root = TempDir::new().unwrap();
    let store = ResultStore::new(root.path().join("results"));
    let outside = root.path().join("x.json");
    fs::write(&outside, record(1).to_json().unwrap()).unwrap();

    for name in ["../x.json", "sub/x.json", "..", ".", "", "/tmp/x.json"] {
        assert!(
            matches!(store.load(name), Err(StoreError::InvalidName(_))),
            "load accepted {:?}",
            name
        );
        assert!(
            matches!(store.delete(name), Err(StoreError::InvalidName(_))),
            "delete accepted {:?}",
            name
        );
    }
    assert!(outside.exists());
}
