//! Todo List Component
//!
//! Displays todos in insertion order with an edit trigger per row.

use leptos::prelude::*;

use crate::models::TodoItem;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <Show
            when=move || !store.is_loading().get()
            fallback=|| view! { <p class="todo-loading">"Loading todos..."</p> }
        >
            <ul class="todo-list">
                <For
                    // Title is part of the key so renamed rows re-render
                    each=move || store.todos().get()
                    key=|item| (item.id.clone(), item.title.clone())
                    children=move |item: TodoItem| {
                        let title = item.title.clone();
                        view! {
                            <li class=if item.is_completed { "todo-row completed" } else { "todo-row" }>
                                <span class="todo-title">{item.title}</span>
                                <button
                                    type="button"
                                    class="edit-btn"
                                    on:click=move |_| {
                                        let title = title.clone();
                                        store.update(|state| state.begin_edit(title));
                                    }
                                >
                                    "Edit"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <p class="todo-count">{move || format!("{} todos", store.todos().read().len())}</p>
        </Show>
    }
}
