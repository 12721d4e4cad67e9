//! Selection Persist entry point
//!
//! On web the library's `start` sets up logging; the page then calls
//! `bind_default()` or `bind_selection(json)`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use selection_persist::{
        MemoryStorage, PersistConfig, SelectControl, SelectionPersister, StubControl,
    };

    env_logger::init();
    log::info!("Selection Persist (native) starting...");
    log::info!("Native mode has no page to bind - load the wasm build in a browser");

    // Walk one save/reload cycle against in-memory stand-ins
    let config = PersistConfig::default();
    let markup = ["1", "7", "42"];

    let mut page = SelectionPersister::from_config(
        MemoryStorage::new(),
        StubControl::new(markup),
        &config,
    );
    page.control_mut().choose("42");
    if let Err(e) = page.on_change() {
        log::error!("Save failed: {}", e);
        return;
    }

    let (storage, _) = page.into_parts();
    let mut page = SelectionPersister::from_config(storage, StubControl::new(markup), &config);
    match page.on_ready() {
        Ok(outcome) => println!(
            "After reload: {:?}, control shows '{}'",
            outcome,
            page.control().value()
        ),
        Err(e) => log::error!("Restore failed: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
use selection_persist as _;

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::start, this is just to satisfy the compiler
}
