//! Todo Store
//!
//! Owns the todo collection and the next-id counter, and mirrors both into
//! key-value storage. The four mutators here are the only mutation paths.
//!
//! The counter and the collection are written as two separate keys. `add`
//! writes the counter first, so an interrupted write can only leave the counter
//! ahead of the stored ids, never behind them.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::StorageKeys;
use crate::error::{TodoError, TodoResult};
use crate::lists::{partition_todos, TodoLists};
use crate::models::Todo;
use crate::storage::KeyValueStorage;

#[derive(Debug)]
pub struct TodoStore<S> {
    todos: Vec<Todo>,
    next_id: u64,
    storage: S,
    keys: StorageKeys,
}

impl<S: KeyValueStorage> TodoStore<S> {
    /// Load persisted state. Missing or malformed values fall back to an
    /// empty collection and a zero counter.
    pub fn load(storage: S, keys: StorageKeys) -> Self {
        let todos: Vec<Todo> = read_json(&storage, &keys.todos).unwrap_or_default();
        let next_id: u64 = read_json(&storage, &keys.counter).unwrap_or_default();
        tracing::info!(count = todos.len(), next_id, "loaded todos");
        Self {
            todos,
            next_id,
            storage,
            keys,
        }
    }

    #[cfg(test)]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    #[cfg(test)]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Append a new pending todo.
    ///
    /// Rejects a blank task, or a counter with no ids left, without touching
    /// state or storage.
    pub fn add(&mut self, task: &str, quantity: &str) -> TodoResult<Todo> {
        if task.trim().is_empty() {
            return Err(TodoError::EmptyTask);
        }

        let next_id = self.next_id.checked_add(1).ok_or(TodoError::IdsExhausted)?;

        let todo = Todo::new(self.next_id, task, quantity);
        self.todos.push(todo.clone());
        self.next_id = next_id;
        tracing::debug!(id = todo.id, "added todo");

        self.persist_counter()?;
        self.persist_todos()?;
        Ok(todo)
    }

    /// Flip `done` on the first todo with this id. Returns whether one was found.
    pub fn toggle_done(&mut self, id: u64) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.done = !todo.done;
                tracing::debug!(id, done = todo.done, "toggled todo");
                true
            }
            None => false,
        }
    }

    /// Remove every todo with this id. Returns the number removed.
    pub fn delete_by_id(&mut self, id: u64) -> TodoResult<usize> {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        let removed = before - self.todos.len();
        tracing::debug!(id, removed, "deleted todo");

        self.persist_todos()?;
        Ok(removed)
    }

    /// Remove every done todo. Returns the number removed.
    pub fn remove_done(&mut self) -> TodoResult<usize> {
        let before = self.todos.len();
        self.todos.retain(|todo| !todo.done);
        let removed = before - self.todos.len();
        tracing::debug!(removed, "removed done todos");

        self.persist_todos()?;
        Ok(removed)
    }

    /// Current pending/done split, without persisting
    pub fn lists(&self) -> TodoLists {
        partition_todos(&self.todos)
    }

    /// Full render pass: split the collection and re-persist it.
    pub fn render(&mut self) -> TodoResult<TodoLists> {
        let lists = self.lists();
        self.persist_todos()?;
        Ok(lists)
    }

    fn persist_todos(&mut self) -> TodoResult<()> {
        write_json(&mut self.storage, &self.keys.todos, &self.todos)
    }

    fn persist_counter(&mut self) -> TodoResult<()> {
        write_json(&mut self.storage, &self.keys.counter, &self.next_id)
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn read_json<S: KeyValueStorage, T: DeserializeOwned>(storage: &S, key: &str) -> Option<T> {
    let raw = match storage.get_item(key) {
        Ok(raw) => raw?,
        Err(err) => {
            tracing::warn!(key, %err, "could not read persisted value, using default");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, %err, "discarding malformed persisted value");
            None
        }
    }
}

fn write_json<S: KeyValueStorage, T: Serialize + ?Sized>(
    storage: &mut S,
    key: &str,
    value: &T,
) -> TodoResult<()> {
    let json = serde_json::to_string(value).map_err(|source| TodoError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.set_item(key, &json)
}
