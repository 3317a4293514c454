//! UI Components
//!
//! Leptos components for the todo page.

mod todo_input;
mod todo_item;
mod todo_list;

pub use todo_input::TodoInput;
pub use todo_item::TodoItem;
pub use todo_list::{ClearDoneButton, TodoList};
