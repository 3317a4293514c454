//! Input Controller
//!
//! Text of the two input fields plus the visibility of the quantity field.

use crate::error::TodoResult;
use crate::models::Todo;

/// Visibility of the quantity input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuantityField {
    /// Hidden; the "add quantity" trigger is shown instead
    #[default]
    Collapsed,
    /// Visible and focused; the trigger is hidden
    Expanded,
}

impl QuantityField {
    pub fn toggle(&mut self) {
        *self = match self {
            QuantityField::Collapsed => QuantityField::Expanded,
            QuantityField::Expanded => QuantityField::Collapsed,
        };
    }

    pub fn collapse(&mut self) {
        *self = QuantityField::Collapsed;
    }

    pub fn is_expanded(self) -> bool {
        self == QuantityField::Expanded
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputController {
    pub task: String,
    pub quantity: String,
    pub quantity_field: QuantityField,
}

impl InputController {
    /// Flip the quantity field. Returns true when the field should now take focus.
    pub fn toggle_quantity(&mut self) -> bool {
        self.quantity_field.toggle();
        self.quantity_field.is_expanded()
    }

    /// Submit the current text through `add`.
    ///
    /// On success both fields are cleared and the quantity field collapses;
    /// on failure nothing changes.
    pub fn commit<F>(&mut self, add: F) -> TodoResult<Todo>
    where
        F: FnOnce(&str, &str) -> TodoResult<Todo>,
    {
        let todo = add(&self.task, &self.quantity)?;
        self.task.clear();
        self.quantity.clear();
        self.quantity_field.collapse();
        Ok(todo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageKeys;
    use crate::error::TodoError;
    use crate::storage::MemoryStorage;
    use crate::store::TodoStore;

    #[test]
    fn test_quantity_field_state_machine() {
        let mut field = QuantityField::default();
        assert_eq!(field, QuantityField::Collapsed);

        field.toggle();
        assert!(field.is_expanded());

        field.toggle();
        assert_eq!(field, QuantityField::Collapsed);
    }

    #[test]
    fn test_toggle_requests_focus_only_when_expanding() {
        let mut controller = InputController::default();
        assert!(controller.toggle_quantity());
        assert!(!controller.toggle_quantity());
    }

    #[test]
    fn test_commit_clears_and_collapses() {
        let mut store = TodoStore::load(MemoryStorage::default(), StorageKeys::default());
        let mut controller = InputController {
            task: "Buy milk".to_string(),
            quantity: "2L".to_string(),
            quantity_field: QuantityField::Expanded,
        };

        let todo = controller.commit(|task, quantity| store.add(task, quantity)).unwrap();

        assert_eq!(todo, Todo::new(0, "Buy milk", "2L"));
        assert_eq!(controller, InputController::default());
        assert_eq!(store.todos().len(), 1);
    }

    #[test]
    fn test_rejected_commit_keeps_input() {
        let mut store = TodoStore::load(MemoryStorage::default(), StorageKeys::default());
        let mut controller = InputController {
            task: "   ".to_string(),
            quantity: "3".to_string(),
            quantity_field: QuantityField::Expanded,
        };
        let before = controller.clone();

        let result = controller.commit(|task, quantity| store.add(task, quantity));

        assert!(matches!(result, Err(TodoError::EmptyTask)));
        assert_eq!(controller, before);
        assert!(store.todos().is_empty());
    }
}
