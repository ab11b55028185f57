//! Todo Persistence
//!
//! Key-value storage of UTF-8 strings, plus load/save of the todo list.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::models::TodoItem;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("failed to serialize todos: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Backend(format!("{:?}", value))
    }
}

/// Opaque string key-value backend
pub trait TodoStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window.local_storage()?.ok_or(StorageError::Unavailable)
    }
}

impl TodoStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.storage()?.get_item(key)?)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(self.storage()?.set_item(key, value)?)
    }
}

/// In-memory backend
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl TodoStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted list.
///
/// Returns `None` for a missing key, an unreadable backend, anything that is
/// not a JSON array of todos, and an empty array.
pub fn load_todos(storage: &impl TodoStorage, key: &str) -> Option<Vec<TodoItem>> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("[Storage] Could not read '{}': {}", key, e);
            return None;
        }
    };

    match serde_json::from_str::<Vec<TodoItem>>(&raw) {
        Ok(todos) if !todos.is_empty() => {
            log::info!("[Storage] Loaded {} todos", todos.len());
            Some(todos)
        }
        Ok(_) => None,
        Err(e) => {
            log::warn!("[Storage] Ignoring malformed '{}': {}", key, e);
            None
        }
    }
}

/// Overwrite the persisted list with `todos`
pub fn save_todos(
    storage: &impl TodoStorage,
    key: &str,
    todos: &[TodoItem],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(todos)?;
    storage.set_item(key, &json)?;
    log::debug!("[Storage] Saved {} todos", todos.len());
    Ok(())
}
