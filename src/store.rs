//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created once by `App` and handed down through context; every mutation
//! goes through the update functions below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItem;

/// Shared todo state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Todos in insertion (display) order
    pub todos: Vec<TodoItem>,
    /// Whether the input field is editing an existing todo
    pub is_editing: bool,
    /// Title of the todo being edited
    pub todo_to_edit: String,
    /// Raised while the hydrated list is shown as loading
    pub is_loading: bool,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter editing mode for the todo titled `title`
    pub fn begin_edit(&mut self, title: String) {
        self.is_editing = true;
        self.todo_to_edit = title;
    }

    pub fn end_edit(&mut self) {
        self.is_editing = false;
    }

    pub fn append(&mut self, item: TodoItem) {
        self.todos.push(item);
    }

    /// Rename the first todo whose title equals `target`.
    ///
    /// Lookup is by title, so with duplicate titles only the earliest one
    /// is renamed. Returns the id of the renamed todo.
    pub fn rename_by_title(&mut self, target: &str, new_title: String) -> Option<String> {
        let item = self.todos.iter_mut().find(|item| item.title == target)?;
        item.title = new_title;
        Some(item.id.clone())
    }

    /// Replace the list with persisted todos and raise the loading flag
    pub fn hydrate(&mut self, todos: Vec<TodoItem>) {
        self.todos = todos;
        self.is_loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Create the store and provide it to all children
pub fn provide_todo_store() -> TodoStore {
    let store = Store::new(TodoState::new());
    provide_context(store);
    store
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}
