//! Custom assertion helpers for testing

use todo_core::{NewTodo, Todo, TodoError, UpdateTodo};

/// Assert todos are equal ignoring the id
pub fn assert_todo_content_equals(actual: &Todo, expected: &Todo) {
    assert_eq!(actual.title, expected.title, "Todo titles don't match");
    assert_eq!(actual.description, expected.description, "Todo descriptions don't match");
    assert_eq!(actual.completed, expected.completed, "Todo completion flags don't match");
}

/// Assert a stored todo reflects the payload it was created from
pub fn assert_created_from(todo: &Todo, new_todo: &NewTodo) {
    assert!(todo.id > 0, "Created todo should have a positive id, got {}", todo.id);
    assert_eq!(todo.title, new_todo.title, "Created todo should preserve title");
    assert_eq!(
        todo.description, new_todo.description,
        "Created todo should preserve description"
    );
    assert_eq!(
        todo.completed, new_todo.completed,
        "Created todo should preserve completed"
    );
}

/// Assert that `after` equals `before` with `updates` applied
pub fn assert_update_applied(before: &Todo, updates: &UpdateTodo, after: &Todo) {
    let mut expected = before.clone();
    expected.apply(updates.clone());
    assert_eq!(after, &expected, "Update was not applied field by field");
}

/// Assert ids are strictly increasing
pub fn assert_sorted_by_id(todos: &[Todo]) {
    for pair in todos.windows(2) {
        assert!(
            pair[0].id < pair[1].id,
            "Todos not ordered by id: {} before {}",
            pair[0].id,
            pair[1].id
        );
    }
}

/// Assert the list contains a todo with the given id
pub fn assert_contains_id(todos: &[Todo], id: i64) {
    assert!(
        todos.iter().any(|t| t.id == id),
        "Expected todo {id} in {:?}",
        todos.iter().map(|t| t.id).collect::<Vec<_>>()
    );
}

/// Assert the result is a NotFound error
pub fn assert_not_found<T: std::fmt::Debug>(result: &Result<T, TodoError>) {
    match result {
        Err(TodoError::NotFound(_)) => {}
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}

/// Assert the result is a Validation error
pub fn assert_validation_error<T: std::fmt::Debug>(result: &Result<T, TodoError>) {
    match result {
        Err(TodoError::Validation(_)) => {}
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_test_todos;

    #[test]
    fn test_assert_update_applied() {
        let before = Todo::new(1, "a".to_string(), None, false);
        let updates = UpdateTodo {
            completed: Some(true),
            ..UpdateTodo::default()
        };
        let after = Todo::new(1, "a".to_string(), None, true);
        assert_update_applied(&before, &updates, &after);
    }

    #[test]
    fn test_assert_sorted_by_id() {
        assert_sorted_by_id(&create_test_todos(3));
    }

    #[test]
    #[should_panic(expected = "not ordered by id")]
    fn test_assert_sorted_by_id_detects_disorder() {
        let mut todos = create_test_todos(3);
        todos.swap(0, 2);
        assert_sorted_by_id(&todos);
    }

    #[test]
    fn test_error_kind_assertions() {
        assert_not_found::<()>(&Err(TodoError::not_found_id(3)));
        assert_validation_error::<()>(&Err(TodoError::empty_field("title")));
    }
}
