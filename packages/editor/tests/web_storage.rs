#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use sprite_editor_engine::persistence::{LocalStorageBackend, StorageBackend};
use sprite_editor_engine::{Editor, PersistenceAdapter, Snapshot, SnapshotStore};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_append_only() {
    let key = "sprite-editor.test-images";
    let mut backend = LocalStorageBackend::open().unwrap();
    backend.set_item(key, r#"{"images":[]}"#).unwrap();

    let mut store = SnapshotStore::new(backend, key);
    let editor = Editor::new();
    let snapshot: Snapshot = editor.session().borrow().snapshot();
    assert_eq!(store.save(&snapshot).unwrap(), 1);
    assert_eq!(store.save(&snapshot).unwrap(), 2);
    assert_eq!(store.load_all().unwrap().len(), 2);
}

#[wasm_bindgen_test]
fn editor_save_reports_count() {
    let editor = Editor::new();
    let before = editor.saved_count().unwrap();
    assert_eq!(editor.save().unwrap(), before + 1);
}
