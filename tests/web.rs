//! Browser tests: `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use selection_persist::platform::{LocalStorage, SelectElement, bind};
use selection_persist::{KeyValueStore, PersistConfig, PersistError, SelectControl};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlOptionElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn raw_storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

/// Append `<select id=..>` with the given option values to the body
fn mount_select(id: &str, values: &[&str]) -> HtmlSelectElement {
    let doc = document();
    let select: HtmlSelectElement = doc.create_element("select").unwrap().dyn_into().unwrap();
    select.set_id(id);
    for value in values {
        let option = HtmlOptionElement::new_with_text_and_value(value, value).unwrap();
        select.append_child(&option).unwrap();
    }
    doc.body().unwrap().append_child(&select).unwrap();
    select
}

fn config(id: &str, key: &str) -> PersistConfig {
    PersistConfig::default()
        .with_control_id(id)
        .with_storage_key(key)
}

#[wasm_bindgen_test]
fn test_change_event_writes_storage() {
    let key = "test_change_event_key";
    raw_storage().remove_item(key).unwrap();
    let select = mount_select("test-change", &["1", "7", "42"]);

    bind(&config("test-change", key)).unwrap();
    select.set_value("42");
    select.dispatch_event(&Event::new("change").unwrap()).unwrap();

    let storage = LocalStorage::open().unwrap();
    assert_eq!(storage.get(key).unwrap().as_deref(), Some("42"));

    select.remove();
    raw_storage().remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn test_bind_after_load_restores_immediately() {
    let key = "test_restore_key";
    raw_storage().set_item(key, "7").unwrap();
    let select = mount_select("test-restore", &["1", "7", "42"]);

    assert_ne!(document().ready_state(), "loading");
    bind(&config("test-restore", key)).unwrap();
    assert_eq!(select.value(), "7");

    select.remove();
    raw_storage().remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn test_stale_value_keeps_default() {
    let key = "test_stale_key";
    raw_storage().set_item(key, "13").unwrap();
    let select = mount_select("test-stale", &["1", "7", "42"]);

    bind(&config("test-stale", key)).unwrap();
    assert_eq!(select.value(), "1");

    select.remove();
    raw_storage().remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn test_has_option_reads_option_values() {
    let select = mount_select("test-options", &["1", "42"]);
    let control = SelectElement::find(&document(), "test-options").unwrap();
    assert!(control.has_option("42"));
    assert!(!control.has_option("7"));
    select.remove();
}

#[wasm_bindgen_test]
fn test_missing_control() {
    let err = bind(&config("test-no-such-element", "unused_key")).unwrap_err();
    assert!(matches!(err, PersistError::MissingControl(id) if id == "test-no-such-element"));
}

#[wasm_bindgen_test]
fn test_not_a_select() {
    let doc = document();
    let div = doc.create_element("div").unwrap();
    div.set_id("test-div");
    doc.body().unwrap().append_child(&div).unwrap();

    let err = SelectElement::find(&doc, "test-div").err().unwrap();
    assert!(matches!(err, PersistError::NotASelect(_)));
    div.remove();
}

#[wasm_bindgen_test]
fn test_quota_exceeded_maps_to_storage_error() {
    let key = "test_quota_key";
    let mut storage = LocalStorage::open().unwrap();
    let huge = "x".repeat(16 * 1024 * 1024);
    let err = storage.set(key, &huge).unwrap_err();
    assert!(matches!(err, PersistError::Storage(_)));
    raw_storage().remove_item(key).unwrap();
}
