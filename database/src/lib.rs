//! Database crate for the Todo service
//!
//! This crate provides the SQLite implementation of the TodoRepository trait.
//!
//! # Features
//!
//! - SQLite database support with WAL mode for file databases
//! - One transaction per repository call, rolled back on every error path
//! - Embedded schema bootstrap via `sqlx::migrate!`
//! - Error mapping from `sqlx::Error` into `TodoError`
//! - In-memory database support for tests
//!
//! # Usage
//!
//! ```rust
//! use database::SqliteTodoRepository;
//! use todo_core::repository::TodoRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create repository (in-memory for testing)
//!     let repo = SqliteTodoRepository::new(":memory:").await?;
//!
//!     // Create the schema
//!     repo.migrate().await?;
//!
//!     // Repository is ready to use
//!     repo.health_check().await?;
//!     println!("Database is healthy!");
//!
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use common::{is_memory_url, normalize_database_url};
pub use sqlite::{SqliteTodoRepository, DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};

// Re-export commonly used types from todo-core for convenience
pub use todo_core::{
    error::{Result, TodoError},
    models::{NewTodo, Todo, UpdateTodo},
    repository::TodoRepository,
};
