//! Todo Models
//!
//! Records persisted under the `todos` storage key.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo record
///
/// Field names are serialized in camelCase (`isCompleted`) to keep the
/// stored JSON array stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Assigned at creation, never changes
    pub id: String,
    pub title: String,
    pub is_completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            is_completed: false,
        }
    }
}

/// Fresh random identifier for a new todo
pub fn new_todo_id() -> String {
    Uuid::new_v4().to_string()
}
