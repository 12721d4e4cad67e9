//! Platform abstraction layer
//!
//! On web:
//! - Storage: `window.localStorage`
//! - Control: `<select>` looked up by id
//! - Listeners: `change` on the control, `DOMContentLoaded` on the document
//!
//! Native builds have no page to bind to and use the in-memory types.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{LocalStorage, SelectElement, bind, bind_default, bind_selection, start};
