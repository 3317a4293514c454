//! Application Context
//!
//! Owns the todo store and the rendered lists, provided via Leptos Context API.
//! Every mutator is followed by a render pass that refreshes `lists`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::StorageKeys;
use crate::error::{TodoError, TodoResult};
use crate::lists::TodoLists;
use crate::models::Todo;
use crate::storage::{BrowserStorage, KeyValueStorage};
use crate::store::TodoStore;

pub struct TodoContext<S: 'static = BrowserStorage> {
    store: StoredValue<TodoStore<S>>,
    /// Output of the latest render pass
    pub lists: Store<TodoLists>,
}

impl<S: 'static> Clone for TodoContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for TodoContext<S> {}

impl TodoContext<BrowserStorage> {
    /// Load persisted todos from `localStorage`
    pub fn load(keys: StorageKeys) -> Self {
        Self::new(TodoStore::load(BrowserStorage, keys))
    }
}

impl<S: KeyValueStorage + Send + Sync + 'static> TodoContext<S> {
    /// Take ownership of a loaded store and run the initial render pass
    pub fn new(mut store: TodoStore<S>) -> Self {
        let lists = match store.render() {
            Ok(lists) => lists,
            Err(err) => {
                tracing::error!(%err, "initial render could not persist todos");
                store.lists()
            }
        };
        Self {
            store: StoredValue::new(store),
            lists: Store::new(lists),
        }
    }

    pub fn add(&self, task: &str, quantity: &str) -> TodoResult<Todo> {
        let todo = self.with_store(|store| store.add(task, quantity))??;
        self.render()?;
        Ok(todo)
    }

    pub fn toggle_done(&self, id: u64) -> TodoResult<()> {
        self.with_store(|store| store.toggle_done(id))?;
        self.render()
    }

    pub fn delete_by_id(&self, id: u64) -> TodoResult<()> {
        self.with_store(|store| store.delete_by_id(id))??;
        self.render()
    }

    pub fn remove_done(&self) -> TodoResult<()> {
        self.with_store(|store| store.remove_done())??;
        self.render()
    }

    /// Rebuild `lists` from the store. The lists are refreshed even when
    /// persisting fails; the write error is still returned.
    fn render(&self) -> TodoResult<()> {
        let rendered = self.with_store(|store| store.render().map_err(|err| (err, store.lists())))?;
        match rendered {
            Ok(lists) => {
                self.lists.set(lists);
                Ok(())
            }
            Err((err, lists)) => {
                self.lists.set(lists);
                Err(err)
            }
        }
    }

    fn with_store<U>(&self, f: impl FnOnce(&mut TodoStore<S>) -> U) -> TodoResult<U> {
        self.store.try_update_value(f).ok_or(TodoError::StoreDisposed)
    }
}

/// Get the todo context
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}

/// Log a mutator failure. Storage errors are not retried.
pub fn report_error(action: &str, result: TodoResult<()>) {
    if let Err(err) = result {
        tracing::error!(action, %err, "todo update failed");
    }
}
