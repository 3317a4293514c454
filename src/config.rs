//! Storage Configuration
//!
//! Names of the keys the todo state is persisted under.

/// Default key for the JSON array of todos
pub const TODOS_KEY: &str = "todos";
/// Default key for the JSON-encoded next id
pub const COUNTER_KEY: &str = "id";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub todos: String,
    pub counter: String,
}

impl StorageKeys {
    /// Keys with a common prefix, e.g. `test.todos` / `test.id`
    #[cfg(test)]
    pub fn prefixed(prefix: &str) -> Self {
        Self {
            todos: format!("{prefix}.{TODOS_KEY}"),
            counter: format!("{prefix}.{COUNTER_KEY}"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            todos: TODOS_KEY.to_string(),
            counter: COUNTER_KEY.to_string(),
        }
    }
}
