//! Random test data generators using the fake crate
//!
//! Provides realistic random data plus property-based testing strategies.

use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::Fake;
use proptest::prelude::*;
use rand::Rng;
use todo_core::{NewTodo, Todo, UpdateTodo};

/// Generate a realistic todo title
pub fn generate_todo_title() -> String {
    Sentence(2..6).fake()
}

/// Generate a realistic todo description
pub fn generate_todo_description() -> String {
    Paragraph(1..3).fake()
}

/// Generate a random create payload, with a description about half the time
pub fn generate_new_todo() -> NewTodo {
    let mut rng = rand::thread_rng();
    let mut todo = NewTodo::new(generate_todo_title()).with_completed(rng.gen_bool(0.2));
    if rng.gen_bool(0.5) {
        todo = todo.with_description(generate_todo_description());
    }
    todo
}

/// Generate a random stored todo
pub fn generate_random_todo() -> Todo {
    let id: i64 = (1..99999).fake();
    let new_todo = generate_new_todo();
    Todo::new(id, new_todo.title, new_todo.description, new_todo.completed)
}

/// Generate multiple random todos with sequential ids
pub fn generate_random_todos(count: usize) -> Vec<Todo> {
    (1..=count)
        .map(|i| {
            let mut todo = generate_random_todo();
            todo.id = i as i64;
            todo
        })
        .collect()
}

/// Proptest strategy for titles that pass validation
pub fn valid_title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .,!?-]{0,40}"
}

/// Proptest strategy for whitespace-only titles
pub fn blank_title_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,10}"
}

/// Proptest strategy for valid create payloads
pub fn new_todo_strategy() -> impl Strategy<Value = NewTodo> {
    (
        valid_title_strategy(),
        proptest::option::of("[A-Za-z0-9][A-Za-z0-9 .,!?]{0,80}"),
        any::<bool>(),
    )
        .prop_map(|(title, description, completed)| NewTodo {
            title,
            description,
            completed,
        })
}

/// Proptest strategy for valid partial updates, including the empty update
pub fn update_todo_strategy() -> impl Strategy<Value = UpdateTodo> {
    (
        proptest::option::of(valid_title_strategy()),
        proptest::option::of("[A-Za-z0-9][A-Za-z0-9 .,!?]{0,80}"),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(title, description, completed)| UpdateTodo {
            title,
            description,
            completed,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::TodoValidator;

    #[test]
    fn test_generated_todos_are_valid() {
        for _ in 0..20 {
            let todo = generate_new_todo();
            assert!(TodoValidator::validate_new_todo(&todo).is_ok(), "invalid: {todo:?}");
        }
    }

    #[test]
    fn test_generate_random_todos_sequential_ids() {
        let todos = generate_random_todos(4);
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    proptest! {
        #[test]
        fn prop_valid_titles_pass_validation(title in valid_title_strategy()) {
            prop_assert!(TodoValidator::validate_title(&title).is_ok());
        }

        #[test]
        fn prop_blank_titles_fail_validation(title in blank_title_strategy()) {
            prop_assert!(TodoValidator::validate_title(&title).is_err());
        }

        #[test]
        fn prop_generated_updates_pass_validation(updates in update_todo_strategy()) {
            prop_assert!(TodoValidator::validate_update_todo(&updates).is_ok());
        }
    }
}
