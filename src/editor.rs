//! Todo Form Logic
//!
//! Local state of the todo input field and the submit action, kept free of
//! DOM types so it can run outside the browser.

use crate::models::TodoItem;
use crate::store::TodoState;

/// Local state of the single todo input field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoForm {
    /// Text typed while adding
    pub new_todo: String,
    /// Text typed while editing
    pub edit_buffer: String,
    /// Set when an empty todo was submitted
    pub error: bool,
    /// One-shot focus request for the current edit session
    focus_pending: bool,
}

impl TodoForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text shown in the input field
    pub fn field_value(&self, is_editing: bool) -> &str {
        if is_editing {
            &self.edit_buffer
        } else {
            &self.new_todo
        }
    }

    pub fn set_input(&mut self, is_editing: bool, text: String) {
        if is_editing {
            self.edit_buffer = text;
        } else {
            self.new_todo = text;
        }
    }

    /// Start an edit session on `target`
    pub fn begin_session(&mut self, target: &str) {
        self.edit_buffer = target.to_string();
        self.focus_pending = true;
    }

    /// Whether the input should be focused and selected now.
    ///
    /// Only true once the edit buffer shows the target title.
    pub fn wants_focus(&self, is_editing: bool, target: &str) -> bool {
        is_editing && self.focus_pending && self.edit_buffer == target
    }

    pub fn mark_focused(&mut self) {
        self.focus_pending = false;
    }
}

/// Result of a form submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new todo was appended
    Added { id: String },
    /// The edited todo got a new title
    Renamed { id: String },
    /// Empty input while adding, nothing changed
    EmptyInput,
    /// No todo carries the edited title anymore, the edit was dropped
    EditTargetMissing,
}

impl SubmitOutcome {
    /// Whether the todo list changed and must be persisted
    pub fn is_mutation(&self) -> bool {
        matches!(self, SubmitOutcome::Added { .. } | SubmitOutcome::Renamed { .. })
    }
}

/// Handle a form submission.
///
/// While editing, renames the todo titled `state.todo_to_edit` and always
/// leaves editing mode. Otherwise appends a new todo with an id from
/// `next_id`, rejecting empty input.
pub fn submit(
    state: &mut TodoState,
    form: &mut TodoForm,
    next_id: impl FnOnce() -> String,
) -> SubmitOutcome {
    form.error = false;

    if state.is_editing {
        let new_title = std::mem::take(&mut form.edit_buffer);
        form.mark_focused();
        let target = state.todo_to_edit.clone();
        let outcome = match state.rename_by_title(&target, new_title) {
            Some(id) => SubmitOutcome::Renamed { id },
            None => {
                log::warn!("[Editor] Edit target '{}' not found, dropping edit", target);
                SubmitOutcome::EditTargetMissing
            }
        };
        state.end_edit();
        return outcome;
    }

    if form.new_todo.is_empty() {
        form.error = true;
        return SubmitOutcome::EmptyInput;
    }

    let title = std::mem::take(&mut form.new_todo);
    let item = TodoItem::new(next_id(), title);
    let id = item.id.clone();
    state.append(item);
    SubmitOutcome::Added { id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TODOS_KEY;
    use crate::storage::{load_todos, save_todos, MemoryStorage};

    fn fixed_id(id: &'static str) -> impl FnOnce() -> String {
        move || id.to_string()
    }

    fn add(state: &mut TodoState, form: &mut TodoForm, title: &str, id: &'static str) {
        form.set_input(false, title.to_string());
        submit(state, form, fixed_id(id));
    }

    #[test]
    fn test_empty_add_sets_error() {
        let mut state = TodoState::new();
        let mut form = TodoForm::new();

        let outcome = submit(&mut state, &mut form, fixed_id("1"));

        assert_eq!(outcome, SubmitOutcome::EmptyInput);
        assert!(!outcome.is_mutation());
        assert!(form.error);
        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_error_cleared_on_next_submit() {
        let mut state = TodoState::new();
        let mut form = TodoForm::new();
        submit(&mut state, &mut form, fixed_id("1"));
        assert!(form.error);

        form.set_input(false, "Buy milk".to_string());
        submit(&mut state, &mut form, fixed_id("1"));
        assert!(!form.error);
    }

    #[test]
    fn test_add_appends_and_clears_field() {
        let mut state = TodoState::new();
        let mut form = TodoForm::new();
        form.set_input(false, "Buy milk".to_string());

        let outcome = submit(&mut state, &mut form, fixed_id("id-1"));

        assert_eq!(outcome, SubmitOutcome::Added { id: "id-1".to_string() });
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].title, "Buy milk");
        assert!(!state.todos[0].is_completed);
        assert_eq!(form.field_value(false), "");
    }

    #[test]
    fn test_adds_get_distinct_ids() {
        let mut state = TodoState::new();
        let mut form = TodoForm::new();
        for title in ["a", "b", "c"] {
            form.set_input(false, title.to_string());
            submit(&mut state, &mut form, crate::models::new_todo_id);
        }

        let mut ids: Vec<_> = state.todos.iter().map(|t| t.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_edit_renames_target() {
        let mut state = TodoState::new();
        let mut form = TodoForm::new();
        add(&mut state, &mut form, "Buy milk", "1");

        state.begin_edit("Buy milk".to_string());
        form.begin_session(&state.todo_to_edit);
        assert_eq!(form.field_value(true), "Buy milk");
        form.set_input(true, "Buy bread".to_string());

        let outcome = submit(&mut state, &mut form, fixed_id("unused"));

        assert_eq!(outcome, SubmitOutcome::Renamed { id: "1".to_string() });
        assert_eq!(state.todos[0].id, "1");
        assert_eq!(state.todos[0].title, "Buy bread");
        assert!(!state.is_editing);
        assert_eq!(form.edit_buffer, "");
    }

    #[test]
    fn test_edit_with_missing_target_exits_edit_mode() {
        let mut state = TodoState::new();
        let mut form = TodoForm::new();
        add(&mut state, &mut form, "Buy milk", "1");

        state.begin_edit("Walk dog".to_string());
        form.begin_session(&state.todo_to_edit);
        form.set_input(true, "Walk cat".to_string());

        let outcome = submit(&mut state, &mut form, fixed_id("unused"));

        assert_eq!(outcome, SubmitOutcome::EditTargetMissing);
        assert!(!outcome.is_mutation());
        assert!(!state.is_editing);
        assert_eq!(state.todos, vec![TodoItem::new("1".to_string(), "Buy milk".to_string())]);
    }

    #[test]
    fn test_edit_allows_empty_title() {
        let mut state = TodoState::new();
        let mut form = TodoForm::new();
        add(&mut state, &mut form, "Buy milk", "1");

        state.begin_edit("Buy milk".to_string());
        form.begin_session(&state.todo_to_edit);
        form.set_input(true, String::new());

        let outcome = submit(&mut state, &mut form, fixed_id("unused"));

        assert!(outcome.is_mutation());
        assert!(!form.error);
        assert_eq!(state.todos[0].title, "");
    }

    #[test]
    fn test_add_buffer_survives_edit_session() {
        let mut state = TodoState::new();
        let mut form = TodoForm::new();
        add(&mut state, &mut form, "Buy milk", "1");
        form.set_input(false, "half typed".to_string());

        state.begin_edit("Buy milk".to_string());
        form.begin_session(&state.todo_to_edit);
        submit(&mut state, &mut form, fixed_id("unused"));

        assert_eq!(form.field_value(state.is_editing), "half typed");
    }

    #[test]
    fn test_focus_requested_once_per_session() {
        let mut form = TodoForm::new();
        assert!(!form.wants_focus(true, "Buy milk"));

        form.begin_session("Buy milk");
        assert!(form.wants_focus(true, "Buy milk"));
        assert!(!form.wants_focus(false, "Buy milk"));

        form.mark_focused();
        form.set_input(true, "Buy milk".to_string());
        assert!(!form.wants_focus(true, "Buy milk"));
    }

    #[test]
    fn test_focus_waits_for_buffer_to_match() {
        let mut form = TodoForm::new();
        form.begin_session("Buy milk");
        form.set_input(true, "Buy".to_string());
        assert!(!form.wants_focus(true, "Buy milk"));
    }

    #[test]
    fn test_storage_matches_state_after_mutations() {
        let storage = MemoryStorage::new();
        let mut state = TodoState::new();
        let mut form = TodoForm::new();

        form.set_input(false, "Buy milk".to_string());
        let outcome = submit(&mut state, &mut form, fixed_id("1"));
        if outcome.is_mutation() {
            save_todos(&storage, TODOS_KEY, &state.todos).unwrap();
        }
        assert_eq!(load_todos(&storage, TODOS_KEY), Some(state.todos.clone()));

        state.begin_edit("Buy milk".to_string());
        form.begin_session(&state.todo_to_edit);
        form.set_input(true, "Buy bread".to_string());
        let outcome = submit(&mut state, &mut form, fixed_id("unused"));
        if outcome.is_mutation() {
            save_todos(&storage, TODOS_KEY, &state.todos).unwrap();
        }
        assert_eq!(load_todos(&storage, TODOS_KEY), Some(state.todos.clone()));
    }
}
