//! Saving and restoring the selection through a durable key-value slot.
//!
//! The slot holds the selection as a flat JSON array of class records,
//! one entry per time-slot row.

use crate::core::selection::Selection;
use crate::errors::{AppError, AppResult};
use crate::models::class_record::ClassRecord;
use std::collections::HashMap;

/// Default slot name for the saved schedule.
pub const DEFAULT_SLOT: &str = "horarioGuardado";

/// Minimal string key-value storage owned by the host environment.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<bool>;

    fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Process-local store, handy for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<bool> {
        Ok(self.slots.remove(key).is_some())
    }
}

/// Binds a key-value store to the named schedule slot.
pub struct ScheduleBridge<'a, S: KeyValueStore> {
    store: &'a mut S,
    slot: String,
}

impl<'a, S: KeyValueStore> ScheduleBridge<'a, S> {
    pub fn new(store: &'a mut S, slot: &str) -> Self {
        Self {
            store,
            slot: slot.to_string(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Overwrite the slot with the full selection.
    pub fn save(&mut self, selection: &Selection) -> AppResult<()> {
        let json = serde_json::to_string(selection.records())?;
        self.store.set(&self.slot, &json)
    }

    /// Read the saved selection.
    ///
    /// Refused with `NoPoolLoaded` while no classes are imported, whether or
    /// not something is saved. `Ok(None)` means the slot is empty.
    pub fn load(&self, pool_is_empty: bool) -> AppResult<Option<Selection>> {
        if pool_is_empty {
            return Err(AppError::NoPoolLoaded);
        }
        self.peek()
    }

    /// Read the saved selection regardless of pool state (used for reporting).
    pub fn peek(&self) -> AppResult<Option<Selection>> {
        match self.store.get(&self.slot)? {
            Some(json) => {
                let records: Vec<ClassRecord> = serde_json::from_str(&json)?;
                Ok(Some(Selection::from_records(records)))
            }
            None => Ok(None),
        }
    }

    pub fn exists(&self) -> AppResult<bool> {
        self.store.contains(&self.slot)
    }

    /// Forget the saved schedule. Returns false when nothing was saved.
    pub fn discard(&mut self) -> AppResult<bool> {
        self.store.remove(&self.slot)
    }
}
