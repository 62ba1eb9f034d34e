use easel_core::{EventFilter, StorageError};
use easel_editor::{CanvasStore, DocumentFile, DocumentStore, JsonFileStore, MemoryStore};
use tempfile::TempDir;

use crate::common::{rect_at, store, Recorder};

fn seeded() -> CanvasStore {
    let mut store = store();
    store.add_element(rect_at(10.0, 20.0));
    store.add_element(rect_at(30.0, 40.0));
    store
}

#[test]
fn test_json_roundtrip() {
    let dir = TempDir::new().unwrap();
    let file = JsonFileStore::new(dir.path().join("doc").join("canvas.json"));
    let source = seeded();
    source.save_to(&file).unwrap();
    assert!(file.path().exists());

    let mut target = store();
    assert!(target.load_from(&file).unwrap());
    assert_eq!(target.element_count(), 2);
    for (id, el) in source.elements() {
        let loaded = target.get_element(id).unwrap();
        assert_eq!(loaded.x, el.x);
        assert_eq!(loaded.y, el.y);
        assert_eq!(loaded.z_index, el.z_index);
        assert_eq!(loaded.element_type, el.element_type);
    }
}

#[test]
fn test_missing_document_loads_nothing() {
    let dir = TempDir::new().unwrap();
    let file = JsonFileStore::new(dir.path().join("absent.json"));
    let mut store = seeded();

    assert!(!store.load_from(&file).unwrap());
    assert_eq!(store.element_count(), 2);
}

#[test]
fn test_corrupt_document_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("canvas.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StorageError>(),
        Some(StorageError::Corrupt { .. })
    ));
}

#[test]
fn test_newer_version_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("canvas.json");
    let mut document = DocumentFile::new(Default::default());
    document.version = 99;
    std::fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();

    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StorageError>(),
        Some(StorageError::UnsupportedVersion { found: 99, .. })
    ));
}

#[test]
fn test_resave_keeps_creation_time() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("canvas.json");
    let file = JsonFileStore::new(&path);
    let mut store = seeded();

    store.save_to(&file).unwrap();
    let first: DocumentFile = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    store.add_element(rect_at(0.0, 0.0));
    store.save_to(&file).unwrap();
    let second: DocumentFile = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(first.metadata.created, second.metadata.created);
    assert!(second.metadata.modified > first.metadata.modified);
    assert_eq!(second.elements.len(), 3);
}

#[test]
fn test_load_resets_selection_and_history() {
    let memory = MemoryStore::new();
    seeded().save_to(&memory).unwrap();

    let mut store = store();
    let id = store.add_element(rect_at(0.0, 0.0));
    store.select_element(&id, false);
    assert!(store.load_from(&memory).unwrap());

    assert_eq!(store.element_count(), 2);
    assert!(!store.has_selection());
    assert!(store.history().is_empty());
    assert!(!store.can_undo());
    assert!(store.elements().values().all(|el| !el.is_selected));
}

#[test]
fn test_document_events() {
    let memory = MemoryStore::new();
    let store = seeded();
    let recorder = Recorder::attach(store.event_bus(), EventFilter::All);
    store.save_to(&memory).unwrap();

    let mut other = crate::common::store();
    let loaded = Recorder::attach(other.event_bus(), EventFilter::All);
    other.load_from(&memory).unwrap();

    assert_eq!(recorder.descriptions(), vec!["Document saved: 2 element(s)"]);
    assert!(loaded
        .descriptions()
        .contains(&"Document loaded: 2 element(s)".to_string()));
}

#[test]
fn test_clear_canvas_is_undoable() {
    let mut store = seeded();
    assert!(store.clear_canvas());
    assert!(store.is_empty());
    assert!(!store.clear_canvas());

    assert!(store.undo());
    assert_eq!(store.element_count(), 2);
}

#[test]
fn test_sample_data_replaces_existing_elements() {
    let mut store = seeded();
    store.select_all();
    let history_before = store.history().len();

    store.initialize_with_sample_data();
    assert_eq!(store.element_count(), 3);
    assert!(store.selected_ids().is_empty());
    assert!(store.history().len() > history_before);

    store.initialize_with_sample_data();
    assert_eq!(store.element_count(), 3);
}
