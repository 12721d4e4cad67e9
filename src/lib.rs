//! Selection Persist - remembers a form's selected user across page loads
//!
//! Core modules:
//! - `persister`: Write-on-change, read-on-ready synchronization
//! - `storage`: Key-value store abstraction (LocalStorage on web)
//! - `control`: Selectable input abstraction (`<select>` on web)
//! - `config`: Control id and storage key
//! - `platform`: Browser bindings and listener wiring

pub mod config;
pub mod control;
pub mod error;
pub mod persister;
pub mod platform;
pub mod storage;

pub use config::PersistConfig;
pub use control::{SelectControl, StubControl};
pub use error::{PersistError, Result};
pub use persister::{RestoreOutcome, SelectionPersister};
pub use storage::{KeyValueStore, MemoryStorage};

/// Default names, matching the expense report form markup
pub mod consts {
    /// Element id of the user `<select>`
    pub const DEFAULT_CONTROL_ID: &str = "user_select";
    /// LocalStorage key holding the last selection
    pub const DEFAULT_STORAGE_KEY: &str = "selected_user_id";
}
