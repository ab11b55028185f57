//! Todo Editor Component
//!
//! Single input field that adds new todos or renames the todo being edited.

use leptos::html::Input;
use leptos::prelude::*;

use crate::config::EditorConfig;
use crate::editor::{submit, TodoForm};
use crate::loading::LoadingTimer;
use crate::models::new_todo_id;
use crate::storage::{load_todos, save_todos, BrowserStorage};
use crate::store::{use_todo_store, TodoState, TodoStateStoreFields};

/// Add/edit form for todos
#[component]
pub fn TodoEditor() -> impl IntoView {
    let store = use_todo_store();
    let config = expect_context::<EditorConfig>();
    let storage = BrowserStorage;

    let form = RwSignal::new(TodoForm::new());
    let input_ref = NodeRef::<Input>::new();
    let loading_timer = LoadingTimer::new();

    // Hydrate once on mount
    if let Some(todos) = load_todos(&storage, config.storage_key) {
        log::info!("[TodoEditor] Restored {} todos", todos.len());
        store.update(|state| state.hydrate(todos));
        loading_timer.start(config.loading_delay_ms, move || {
            store.update(TodoState::finish_loading);
        });
    }
    on_cleanup(move || loading_timer.cancel());

    // Start an edit session whenever the edit target changes
    Effect::new(move |prev: Option<(bool, String)>| {
        let current = (store.is_editing().get(), store.todo_to_edit().get());
        if current.0 && prev.as_ref() != Some(&current) {
            log::debug!("[TodoEditor] Editing '{}'", current.1);
            form.update(|f| f.begin_session(&current.1));
        }
        current
    });

    // Focus and select the field once the buffer shows the target
    Effect::new(move |_| {
        let is_editing = store.is_editing().get();
        let target = store.todo_to_edit().get();
        if !form.with(|f| f.wants_focus(is_editing, &target)) {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
            form.update(TodoForm::mark_focused);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mut next_form = form.get_untracked();
        let outcome = store.try_update(|state| submit(state, &mut next_form, new_todo_id));
        form.set(next_form);

        let Some(outcome) = outcome else { return };
        log::debug!("[TodoEditor] Submit: {:?}", outcome);
        if outcome.is_mutation() {
            let saved = store.with_untracked(|state| {
                save_todos(&storage, config.storage_key, &state.todos)
            });
            if let Err(e) = saved {
                log::error!("[TodoEditor] Failed to persist todos: {}", e);
            }
        }
    };

    let has_error = move || form.with(|f| f.error);

    view! {
        <form class="todo-form" on:submit=on_submit>
            <div class="todo-form-row">
                <div class="todo-field">
                    <input
                        type="text"
                        node_ref=input_ref
                        placeholder="Write a todo..."
                        class=move || if has_error() { "todo-input error" } else { "todo-input" }
                        prop:value=move || {
                            let is_editing = store.is_editing().get();
                            form.with(|f| f.field_value(is_editing).to_string())
                        }
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            let is_editing = store.is_editing().get_untracked();
                            form.update(|f| f.set_input(is_editing, text));
                        }
                    />
                    <Show when=has_error>
                        <p class="helper-text error">"Empty input!"</p>
                    </Show>
                </div>
                <button type="submit" class="submit-btn">
                    {move || if store.is_editing().get() { "Save Todo" } else { "Add Todo" }}
                </button>
            </div>
        </form>
    }
}
