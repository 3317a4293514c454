//! Todo App
//!
//! Root component: input row, pending list, done list.

use leptos::prelude::*;

use crate::components::{ClearDoneButton, TodoInput, TodoList};
use crate::config::StorageKeys;
use crate::context::TodoContext;
use crate::lists::TodoListsStoreFields;

#[component]
pub fn App() -> impl IntoView {
    // Load from localStorage and render once before mounting
    let ctx = TodoContext::load(StorageKeys::default());
    provide_context(ctx);

    let pending = Signal::derive(move || ctx.lists.pending().get());
    let done = Signal::derive(move || ctx.lists.done().get());

    view! {
        <main class="todo-app">
            <h1>"Todo"</h1>

            <TodoInput />

            <section class="todo-section">
                <h2>"To do"</h2>
                <TodoList todos=pending list_class="todo-list" />
            </section>

            <section class="todo-section">
                <h2>"Done"</h2>
                <TodoList todos=done list_class="done-list" />
                <ClearDoneButton />
            </section>
        </main>
    }
}
