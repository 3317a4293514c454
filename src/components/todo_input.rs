//! Todo Input Component
//!
//! Task and quantity fields. Enter anywhere on the page commits.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::error::TodoError;
use crate::input::InputController;

#[component]
pub fn TodoInput() -> impl IntoView {
    let ctx = use_todo_context();

    let controller = RwSignal::new(InputController::default());
    let task_ref = NodeRef::<html::Input>::new();
    let quantity_ref = NodeRef::<html::Input>::new();

    let commit = move || {
        let mut next = controller.get_untracked();
        match next.commit(|task, quantity| ctx.add(task, quantity)) {
            Ok(todo) => {
                tracing::debug!(id = todo.id, "committed todo");
                controller.set(next);
            }
            Err(err @ TodoError::EmptyTask) => {
                let _ = window().alert_with_message(&err.to_string());
            }
            Err(err) => tracing::error!(%err, "todo could not be saved"),
        }
    };

    // Global Enter, not just while a field has focus. Lives for the whole page.
    let _ = window_event_listener(ev::keyup, move |ev| {
        if ev.key() == "Enter" {
            commit();
        }
    });

    // Focus the task field once mounted
    Effect::new(move |_| {
        if let Some(input) = task_ref.get() {
            let _ = input.focus();
        }
    });

    let toggle_quantity = move |_| {
        let should_focus = controller.try_update(|c| c.toggle_quantity()).unwrap_or(false);
        if should_focus {
            // Wait for the `hide` class to be removed before focusing
            request_animation_frame(move || {
                if let Some(input) = quantity_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
    };

    let expanded = move || controller.with(|c| c.quantity_field.is_expanded());

    view! {
        <div class="todo-input-row">
            <input
                node_ref=task_ref
                class="todo-input"
                type="text"
                placeholder="Add a task..."
                prop:value=move || controller.with(|c| c.task.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    controller.update(|c| c.task = value);
                }
            />
            <input
                node_ref=quantity_ref
                class=move || if expanded() { "quantity-input" } else { "quantity-input hide" }
                type="text"
                placeholder="Quantity"
                prop:value=move || controller.with(|c| c.quantity.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    controller.update(|c| c.quantity = value);
                }
            />
            <button
                class=move || if expanded() { "quantity-button hide" } else { "quantity-button" }
                on:click=toggle_quantity
            >
                "+ Quantity"
            </button>
        </div>
    }
}
