//! Todo List Components
//!
//! One rendered region (pending or done) and the "clear done" control.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::{report_error, use_todo_context};
use crate::lists::TodoListsStoreFields;
use crate::models::Todo;

#[component]
pub fn TodoList(
    todos: Signal<Vec<Todo>>,
    #[prop(into)] list_class: String,
) -> impl IntoView {
    view! {
        <ul class=list_class>
            <For
                each=move || todos.get()
                key=|todo| todo.id
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </ul>
    }
}

/// Removes every done todo; hidden while the done list is empty
#[component]
pub fn ClearDoneButton() -> impl IntoView {
    let ctx = use_todo_context();
    let visible = move || ctx.lists.show_clear_done().get();

    view! {
        <button
            class=move || if visible() { "remove-done-button" } else { "remove-done-button hide" }
            on:click=move |_| report_error("remove done", ctx.remove_done())
        >
            "Clear done"
        </button>
    }
}
