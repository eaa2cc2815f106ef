use std::collections::HashMap;

use folder_notes::catalog::models::{Folder, FolderRef, Note};
use folder_notes::catalog::{Catalog, CatalogError, CatalogLoadError};

fn folder(id: i64, name: &str, database: &str) -> Folder {
    Folder {
        id,
        name: name.to_string(),
        database: database.to_string(),
    }
}

fn two_folder_catalog() -> Catalog {
    let mut notes = HashMap::new();
    notes.insert(
        "pi_kb".to_string(),
        vec![
            Note::from_markdown(1, "Bash", "hostname"),
            Note::from_markdown(2, "Apt", "apt update"),
        ],
    );
    notes.insert("empty_kb".to_string(), Vec::new());

    Catalog::new(
        vec![
            folder(1, "Raspberry_Pi", "pi_kb"),
            folder(2, "Empty", "empty_kb"),
            folder(3, "Orphan", "nowhere"),
        ],
        notes,
    )
}

#[test]
fn test_seeded_catalog() {
    let catalog = Catalog::seeded();

    let folders = catalog.list_folders().unwrap();
    assert_eq!(folders, &[folder(1, "Raspberry_Pi", "pi_kb")]);

    let note = catalog.note_by_id(1, 1).expect("seeded note should exist");
    assert_eq!(note.title, "Bash");
    assert_eq!(
        note.markdown().unwrap(),
        "## Get the hostname\n\n```\nhostname\n```\n"
    );
}

#[test]
fn test_list_folders_empty() {
    let catalog = Catalog::default();
    assert_eq!(catalog.list_folders(), Err(CatalogError::NoFolders));
}

#[test]
fn test_folder_by_id_and_name() {
    let catalog = two_folder_catalog();

    assert_eq!(catalog.folder_by_id(2).unwrap().name, "Empty");
    assert_eq!(catalog.folder_by_name("Raspberry_Pi").unwrap().id, 1);
    assert!(catalog.folder_by_id(42).is_none());
    assert!(catalog.folder_by_name("raspberry_pi").is_none());
}

#[test]
fn test_first_match_wins() {
    let catalog = Catalog::new(
        vec![folder(1, "Dup", "a"), folder(1, "Dup", "b")],
        HashMap::new(),
    );
    assert_eq!(catalog.folder_by_id(1).unwrap().database, "a");
    assert_eq!(catalog.folder_by_name("Dup").unwrap().database, "a");
}

#[test]
fn test_notes_for_folder() {
    let catalog = two_folder_catalog();

    let notes = catalog.notes_for_folder_id(1).unwrap();
    let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Bash", "Apt"]);

    // An empty collection is still a hit
    assert_eq!(catalog.notes_for_folder_id(2).unwrap().len(), 0);

    // Missing folder or missing collection is a miss
    assert!(catalog.notes_for_folder_id(99).is_none());
    assert!(catalog.notes_for_folder_id(3).is_none());
    assert!(catalog.notes_for_folder_name("Orphan").is_none());
}

#[test]
fn test_note_by_id() {
    let catalog = two_folder_catalog();

    assert_eq!(catalog.note_by_id(1, 2).unwrap().title, "Apt");
    assert!(catalog.note_by_id(1, 3).is_none());
    assert!(catalog.note_by_id(2, 1).is_none());
    assert!(catalog.note_by_id(99, 1).is_none());
}

#[test]
fn test_folder_ref_parse() {
    assert_eq!(FolderRef::parse("1"), FolderRef::Id(1));
    assert_eq!(FolderRef::parse("-4"), FolderRef::Id(-4));
    assert_eq!(
        FolderRef::parse("Raspberry_Pi"),
        FolderRef::Name("Raspberry_Pi".to_string())
    );
    assert_eq!(FolderRef::parse("1a"), FolderRef::Name("1a".to_string()));
}

#[test]
fn test_resolve_folder_messages() {
    let catalog = two_folder_catalog();

    assert_eq!(catalog.resolve_folder("1").unwrap().name, "Raspberry_Pi");
    assert_eq!(catalog.resolve_folder("Raspberry_Pi").unwrap().id, 1);

    let err = catalog.resolve_folder("999").unwrap_err();
    assert_eq!(err.to_string(), "Folder ID 999 not found");

    let err = catalog.resolve_folder("Nope").unwrap_err();
    assert_eq!(err.to_string(), "Folder Nope not found");
}

#[test]
fn test_resolve_notes_and_note() {
    let catalog = two_folder_catalog();

    assert_eq!(catalog.resolve_notes("Raspberry_Pi").unwrap().len(), 2);
    assert_eq!(
        catalog.resolve_notes("3").unwrap_err(),
        CatalogError::FolderIdNotFound("3".to_string())
    );

    assert_eq!(catalog.resolve_note("1", "2").unwrap().title, "Apt");
    assert_eq!(
        catalog.resolve_note("1", "7").unwrap_err(),
        CatalogError::NoteIdNotFound("7".to_string())
    );
    assert_eq!(
        catalog.resolve_note("Nope", "1").unwrap_err(),
        CatalogError::FolderNotFound("Nope".to_string())
    );
}

#[test]
fn test_from_json() {
    let json = r#"{
        "folders": [{"id": 5, "name": "Linux", "dbase": "linux_kb"}],
        "notes": {"linux_kb": [{"id": 1, "title": "ls", "data": "bHMgLWxh"}]}
    }"#;

    let catalog = Catalog::from_json(json).unwrap();
    let note = catalog.resolve_note("Linux", "1").unwrap();
    assert_eq!(note.markdown().unwrap(), "ls -la");
}

#[test]
fn test_from_json_without_notes() {
    let json = r#"{"folders": [{"id": 5, "name": "Linux", "dbase": "linux_kb"}]}"#;

    let catalog = Catalog::from_json(json).unwrap();
    assert!(catalog.folder_by_id(5).is_some());
    assert!(catalog.notes_for_folder_id(5).is_none());
}

#[test]
fn test_from_json_rejects_bad_note_data() {
    let json = r#"{
        "folders": [],
        "notes": {"kb": [{"id": 9, "title": "broken", "data": "not base64!"}]}
    }"#;

    match Catalog::from_json(json) {
        Err(CatalogLoadError::InvalidNote {
            database, note_id, ..
        }) => {
            assert_eq!(database, "kb");
            assert_eq!(note_id, 9);
        }
        other => panic!("expected InvalidNote, got {other:?}"),
    }
}

#[test]
fn test_from_json_malformed() {
    assert!(matches!(
        Catalog::from_json("{\"folders\": 3}"),
        Err(CatalogLoadError::Json(_))
    ));
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{"folders": [{"id": 1, "name": "A", "dbase": "a"}], "notes": {"a": []}}"#,
    )
    .unwrap();

    let catalog = Catalog::from_file(&path).unwrap();
    assert_eq!(catalog.list_folders().unwrap().len(), 1);

    assert!(matches!(
        Catalog::from_file(dir.path().join("missing.json")),
        Err(CatalogLoadError::Io(_))
    ));
}
