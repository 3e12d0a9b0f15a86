use async_trait::async_trait;
use crate::{
    error::Result,
    models::{NewTodo, Todo, UpdateTodo},
};

/// Repository trait for todo persistence and retrieval operations
///
/// Each call runs inside a single transaction acquired from the backing
/// store and released before the call returns, on success and on error.
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// List every todo, ordered by ascending ID
    ///
    /// # Returns
    /// * `Ok(Vec<Todo>)` - All stored todos (may be empty)
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn list(&self) -> Result<Vec<Todo>>;

    /// Get a todo by its ID
    ///
    /// # Returns
    /// * `Ok(Todo)` - The todo
    /// * `Err(TodoError::NotFound)` - If no todo exists with that ID
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn get_by_id(&self, id: i64) -> Result<Todo>;

    /// Create a new todo
    ///
    /// # Returns
    /// * `Ok(Todo)` - The created todo with its store-assigned ID
    /// * `Err(TodoError::Validation)` - If the todo data is invalid
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn create(&self, todo: NewTodo) -> Result<Todo>;

    /// Update an existing todo
    ///
    /// Only the fields present in `updates` change.
    ///
    /// # Returns
    /// * `Ok(Todo)` - The updated todo
    /// * `Err(TodoError::NotFound)` - If the todo doesn't exist
    /// * `Err(TodoError::Validation)` - If the update data is invalid
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn update(&self, id: i64, updates: UpdateTodo) -> Result<Todo>;

    /// Delete a todo
    ///
    /// # Returns
    /// * `Ok(())` - Exactly one row was removed
    /// * `Err(TodoError::NotFound)` - If the todo doesn't exist
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn delete(&self, id: i64) -> Result<()>;

    /// Check that the store is reachable
    async fn health_check(&self) -> Result<()>;
}
