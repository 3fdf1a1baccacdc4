//! Storage Adapter
//!
//! Persists [`UpvoteState`] as JSON under a single key and rehydrates it on startup.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::JsValue;

use super::defaults::default_state;
use crate::models::UpvoteState;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read `{key}`: {message}")]
    Read { key: String, message: String },
    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String key/value storage, shaped after `window.localStorage`
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

fn js_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|err| StorageError::Read {
            key: key.to_string(),
            message: js_message(err),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            message: js_message(err),
        })
    }
}

/// In-memory storage. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail, as a full quota would
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load the persisted state.
///
/// Missing, empty or structurally invalid data yields the seeded default state.
/// Data that is not JSON at all, or a failing read, yields an empty state.
pub fn load_state<S: KeyValueStorage + ?Sized>(storage: &S, key: &str) -> UpvoteState {
    match storage.get_item(key) {
        Ok(Some(raw)) if !raw.is_empty() => parse_state(&raw),
        Ok(_) => default_state(),
        Err(err) => {
            log::warn!("{}", err);
            UpvoteState::empty()
        }
    }
}

/// Parse a stored blob, applying the same fallbacks as [`load_state`]
pub fn parse_state(raw: &str) -> UpvoteState {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("stored state is not JSON: {}", err);
            return UpvoteState::empty();
        }
    };
    if !is_valid_state(&value) {
        log::warn!("stored state failed validation, using defaults");
        return default_state();
    }
    serde_json::from_value(value).unwrap_or_else(|err| {
        log::warn!("stored state could not be decoded: {}", err);
        default_state()
    })
}

/// Serialize and overwrite the stored state
pub fn save_state<S: KeyValueStorage + ?Sized>(
    storage: &S,
    key: &str,
    state: &UpvoteState,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(state)?;
    storage.set_item(key, &json)
}

/// `{"lists": [{"id": string, "isSelected": bool, "upvotes": [{"id": string}]}]}`.
/// Extra fields are ignored.
pub fn is_valid_state(value: &Value) -> bool {
    value
        .get("lists")
        .and_then(Value::as_array)
        .is_some_and(|lists| lists.iter().all(is_valid_list))
}

fn is_valid_list(list: &Value) -> bool {
    has_string_id(list)
        && list.get("isSelected").is_some_and(Value::is_boolean)
        && list
            .get("upvotes")
            .and_then(Value::as_array)
            .is_some_and(|upvotes| upvotes.iter().all(has_string_id))
}

fn has_string_id(value: &Value) -> bool {
    value.get("id").is_some_and(Value::is_string)
}
