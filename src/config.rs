//! Persister configuration
//!
//! Pages whose markup differs from the defaults pass a JSON object with
//! `control_id` and/or `storage_key`.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CONTROL_ID, DEFAULT_STORAGE_KEY};
use crate::error::Result;

/// Which control to bind and which slot to use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistConfig {
    /// Element id of the bound `<select>`
    pub control_id: String,
    /// LocalStorage key for the selection
    pub storage_key: String,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            control_id: DEFAULT_CONTROL_ID.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl PersistConfig {
    /// Parse a config object; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn with_control_id(mut self, id: impl Into<String>) -> Self {
        self.control_id = id.into();
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
