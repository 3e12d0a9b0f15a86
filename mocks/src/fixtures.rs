//! Standard test fixtures for consistent testing
//!
//! Provides pre-built test data including:
//! - The canonical "Buy milk" todo
//! - Invalid payloads for validation paths
//! - Bulk todo generators

use todo_core::{NewTodo, Todo, UpdateTodo};

/// Create a basic test todo with sensible defaults
pub fn create_test_todo() -> Todo {
    Todo::new(
        1,
        "Buy milk".to_string(),
        Some("2 liters".to_string()),
        false,
    )
}

/// Create multiple unique todos with ids 1..=count
pub fn create_test_todos(count: usize) -> Vec<Todo> {
    (1..=count)
        .map(|i| {
            let description = (i % 2 == 0).then(|| format!("Description for todo {i}"));
            Todo::new(i as i64, format!("Todo {i}"), description, i % 3 == 0)
        })
        .collect()
}

/// Create a valid create payload
pub fn create_new_todo() -> NewTodo {
    NewTodo::new("Buy milk").with_description("2 liters")
}

/// Create a create payload with only a title
pub fn create_minimal_new_todo() -> NewTodo {
    NewTodo::new("Walk the dog")
}

/// Create payload whose title is whitespace only
pub fn create_blank_title_todo() -> NewTodo {
    NewTodo::new("   ")
}

/// Update payload that toggles completion only
pub fn create_complete_update() -> UpdateTodo {
    UpdateTodo {
        completed: Some(true),
        ..UpdateTodo::default()
    }
}

/// Update payload that replaces every field
pub fn create_full_update() -> UpdateTodo {
    UpdateTodo {
        title: Some("Buy oat milk".to_string()),
        description: Some("1 liter".to_string()),
        completed: Some(true),
    }
}

/// Update payload with a blank title
pub fn create_invalid_update() -> UpdateTodo {
    UpdateTodo {
        title: Some(" \t ".to_string()),
        ..UpdateTodo::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::TodoValidator;

    #[test]
    fn test_bulk_fixture_ids_are_sequential() {
        let todos = create_test_todos(5);
        let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_invalid_fixtures_fail_validation() {
        assert!(TodoValidator::validate_new_todo(&create_new_todo()).is_ok());
        assert!(TodoValidator::validate_new_todo(&create_blank_title_todo()).is_err());
        assert!(TodoValidator::validate_update_todo(&create_invalid_update()).is_err());
    }
}
