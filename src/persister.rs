//! Selection persister
//!
//! Two triggers, no state machine:
//! - control `change` → write the control's value to the slot
//! - document ready → apply the slot's value to the control, if any

use crate::config::PersistConfig;
use crate::control::SelectControl;
use crate::error::Result;
use crate::storage::KeyValueStore;

/// What `on_ready` did to the control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Slot held a valid option; the control now shows it
    Restored(String),
    /// Slot missing or empty; control left at its default
    Absent,
    /// Slot held a value no option carries; control left at its default
    NoMatchingOption(String),
}

/// Keeps one control and one storage slot in sync
#[derive(Debug)]
pub struct SelectionPersister<S, C> {
    storage: S,
    control: C,
    key: String,
}

impl<S: KeyValueStore, C: SelectControl> SelectionPersister<S, C> {
    pub fn new(storage: S, control: C, key: impl Into<String>) -> Self {
        Self {
            storage,
            control,
            key: key.into(),
        }
    }

    pub fn from_config(storage: S, control: C, config: &PersistConfig) -> Self {
        Self::new(storage, control, config.storage_key.clone())
    }

    /// Persist the control's current value
    pub fn on_change(&mut self) -> Result<()> {
        let value = self.control.value();
        if self.storage.get(&self.key)?.as_deref() == Some(value.as_str()) {
            log::debug!("Selection '{}' already stored", value);
            return Ok(());
        }
        self.storage.set(&self.key, &value)?;
        log::info!("Saved selection '{}' under '{}'", value, self.key);
        Ok(())
    }

    /// Restore the stored selection into the control
    pub fn on_ready(&mut self) -> Result<RestoreOutcome> {
        let stored = match self.storage.get(&self.key)? {
            Some(value) if !value.is_empty() => value,
            _ => {
                log::info!("No stored selection under '{}'", self.key);
                return Ok(RestoreOutcome::Absent);
            }
        };

        if !self.control.has_option(&stored) {
            log::debug!("Stored selection '{}' matches no option", stored);
            return Ok(RestoreOutcome::NoMatchingOption(stored));
        }

        self.control.set_value(&stored);
        log::info!("Restored selection '{}'", stored);
        Ok(RestoreOutcome::Restored(stored))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    /// Split back into storage and control (a "page unload")
    pub fn into_parts(self) -> (S, C) {
        (self.storage, self.control)
    }
}
