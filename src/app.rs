//! Todo App
//!
//! Root component: provides configuration and the todo store.

use leptos::prelude::*;

use crate::components::{TodoEditor, TodoList};
use crate::config::EditorConfig;
use crate::store::provide_todo_store;

#[component]
pub fn App() -> impl IntoView {
    provide_context(EditorConfig::default());
    provide_todo_store();

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>
            <TodoEditor />
            <TodoList />
        </main>
    }
}
