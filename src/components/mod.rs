//! UI Components
//!
//! Leptos components, one per file.

mod todo_editor;
mod todo_list;

pub use todo_editor::TodoEditor;
pub use todo_list::TodoList;
