use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement};

use crate::config::PersistConfig;
use crate::control::SelectControl;
use crate::error::{PersistError, Result};
use crate::persister::SelectionPersister;
use crate::storage::KeyValueStore;

impl From<PersistError> for JsValue {
    fn from(err: PersistError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

/// `window.localStorage`
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or(PersistError::NoWindow)?;
        let inner = window
            .local_storage()
            .map_err(|e| PersistError::StorageUnavailable(describe(&e)))?
            .ok_or_else(|| PersistError::StorageUnavailable("localStorage is null".into()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| PersistError::Storage(describe(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| PersistError::Storage(describe(&e)))
    }
}

/// A `<select>` element in the page
#[derive(Clone)]
pub struct SelectElement {
    inner: HtmlSelectElement,
}

impl SelectElement {
    /// Look up the control by id; the first match wins on duplicate ids
    pub fn find(document: &Document, id: &str) -> Result<Self> {
        let inner = document
            .get_element_by_id(id)
            .ok_or_else(|| PersistError::MissingControl(id.to_string()))?
            .dyn_into::<HtmlSelectElement>()
            .map_err(|_| PersistError::NotASelect(id.to_string()))?;
        Ok(Self { inner })
    }

    pub fn element(&self) -> &HtmlSelectElement {
        &self.inner
    }
}

impl SelectControl for SelectElement {
    fn value(&self) -> String {
        self.inner.value()
    }

    fn set_value(&mut self, value: &str) {
        self.inner.set_value(value);
    }

    fn has_option(&self, value: &str) -> bool {
        (0..self.inner.length())
            .filter_map(|i| self.inner.item(i))
            .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
            .any(|opt| opt.value() == value)
    }
}

type PagePersister = SelectionPersister<LocalStorage, SelectElement>;

/// Wire the persister into the current page
///
/// Binds the `change` listener now and restores on `DOMContentLoaded`, or
/// immediately if the document finished parsing before the module loaded.
pub fn bind(config: &PersistConfig) -> Result<()> {
    let window = web_sys::window().ok_or(PersistError::NoWindow)?;
    let document = window.document().ok_or(PersistError::NoDocument)?;

    let control = SelectElement::find(&document, &config.control_id)?;
    let storage = LocalStorage::open()?;
    let element = control.element().clone();
    let persister: Rc<RefCell<PagePersister>> = Rc::new(RefCell::new(
        SelectionPersister::from_config(storage, control, config),
    ));

    // Save on change
    {
        let persister = persister.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Err(e) = persister.borrow_mut().on_change() {
                log::error!("Failed to save selection: {}", e);
            }
        });
        element
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .map_err(|e| PersistError::Listener(describe(&e)))?;
        closure.forget();
    }

    // Restore on ready
    if document.ready_state() == "loading" {
        let closure = Closure::once(move |_event: web_sys::Event| {
            if let Err(e) = persister.borrow_mut().on_ready() {
                log::error!("Failed to restore selection: {}", e);
            }
        });
        document
            .add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            )
            .map_err(|e| PersistError::Listener(describe(&e)))?;
        closure.forget();
    } else {
        persister.borrow_mut().on_ready()?;
    }

    log::info!(
        "Bound '#{}' to localStorage['{}']",
        config.control_id,
        config.storage_key
    );
    Ok(())
}

/// Module init: panic hook and console logger only
///
/// Binding is left to the page so a missing default control cannot reject
/// the init promise before `bind_selection` runs.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"selection-persist: logger already set".into());
    }
    log::info!("Selection Persist loaded");
}

/// JS entry for the stock markup: `#user_select` ↔ `selected_user_id`
#[wasm_bindgen]
pub fn bind_default() -> std::result::Result<(), JsValue> {
    bind(&PersistConfig::default())?;
    Ok(())
}

/// JS entry for pages with non-default ids: `bind_selection('{"control_id": "payer"}')`
#[wasm_bindgen]
pub fn bind_selection(config_json: &str) -> std::result::Result<(), JsValue> {
    let config = PersistConfig::from_json(config_json)?;
    bind(&config)?;
    Ok(())
}
