//! Todo Core Library
//!
//! This crate provides the domain model, validation rules, and trait seams
//! for the Todo service. All other crates depend on the types and interfaces
//! defined here.
//!
//! # Architecture
//!
//! - [`models`] - The `Todo` entity and its creation/update shapes
//! - [`error`] - Error types and result handling
//! - [`validation`] - Field validation shared by all shapes
//! - [`repository`] - Repository trait for data persistence
//! - [`usecase`] - Usecase trait consumed by the HTTP router
//!
//! # Example
//!
//! ```rust
//! use todo_core::{NewTodo, TodoValidator};
//!
//! let new_todo = NewTodo::new("Buy milk").with_description("2%");
//!
//! // Validate the todo before creation
//! TodoValidator::validate_new_todo(&new_todo).unwrap();
//!
//! // Blank titles are rejected
//! assert!(TodoValidator::validate_new_todo(&NewTodo::new("   ")).is_err());
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod usecase;
pub mod validation;

pub use error::{Result, TodoError};
pub use models::{NewTodo, Todo, UpdateTodo};
pub use repository::TodoRepository;
pub use usecase::{HealthStatus, TodoUsecase};
pub use validation::TodoValidator;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_crate_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(CRATE_NAME, "todo-core");
    }

    #[test]
    fn test_re_exports() {
        let todo = Todo::new(1, "Test".to_string(), None, false);
        assert_eq!(todo.id, 1);

        let error = TodoError::not_found_id(1);
        assert!(error.is_not_found());
    }
}
