//! Frontend Models
//!
//! The todo record, in the exact shape it is persisted.

use serde::{Deserialize, Serialize};

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, taken from the persisted counter
    pub id: u64,
    /// Task text as entered
    pub task: String,
    /// Free-form quantity; empty means "not shown"
    #[serde(default)]
    pub quantity: String,
    /// Completion status
    pub done: bool,
}

impl Todo {
    /// Create a new pending todo
    pub fn new(id: u64, task: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            quantity: quantity.into(),
            done: false,
        }
    }

    pub fn has_quantity(&self) -> bool {
        !self.quantity.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(3, "Buy milk", "2L");
        assert_eq!(todo.id, 3);
        assert_eq!(todo.task, "Buy milk");
        assert!(todo.has_quantity());
        assert!(!todo.done);
    }

    #[test]
    fn test_persisted_shape() {
        let todo = Todo::new(0, "Buy milk", "2L");
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 0, "task": "Buy milk", "quantity": "2L", "done": false})
        );
    }

    #[test]
    fn test_missing_quantity_loads_as_empty() {
        let todo: Todo = serde_json::from_str(r#"{"id":1,"task":"Bread","done":true}"#).unwrap();
        assert_eq!(todo.quantity, "");
        assert!(!todo.has_quantity());
        assert!(todo.done);
    }
}
