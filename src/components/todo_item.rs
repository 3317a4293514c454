//! Todo Item Component
//!
//! A single row in the pending or done list.

use leptos::prelude::*;

use crate::context::{report_error, use_todo_context};
use crate::models::Todo;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_todo_context();

    let show_quantity = todo.has_quantity();
    let Todo { id, task, quantity, done } = todo;

    // Quantity label is left out entirely when empty
    let quantity = show_quantity.then(|| view! {
        <span class="todo-quantity">{quantity}</span>
    });

    view! {
        <li class=if done { "todo-item done" } else { "todo-item" }>
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=done
                on:change=move |_| report_error("toggle", ctx.toggle_done(id))
            />
            <span class="todo-task">{task}</span>
            {quantity}
            <button
                class="delete-button"
                on:click=move |_| report_error("delete", ctx.delete_by_id(id))
            >
                "×"
            </button>
        </li>
    }
}
