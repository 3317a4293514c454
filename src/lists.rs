//! Rendered Lists
//!
//! The output of a render pass: todos split into pending and done.

use reactive_stores::Store;

use crate::models::Todo;

/// Visible state derived from the todo collection, with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoLists {
    /// Todos not yet done, in append order
    pub pending: Vec<Todo>,
    /// Done todos, in append order
    pub done: Vec<Todo>,
    /// Whether the "clear done" control is visible
    pub show_clear_done: bool,
}

/// Split todos by their `done` flag, keeping relative order in both halves
pub fn partition_todos(todos: &[Todo]) -> TodoLists {
    let (done, pending): (Vec<Todo>, Vec<Todo>) = todos.iter().cloned().partition(|todo| todo.done);
    let show_clear_done = !done.is_empty();
    TodoLists {
        pending,
        done,
        show_clear_done,
    }
}
