//! Todo Handler
//!
//! Implements the TodoUsecase trait on top of any TodoRepository.

use async_trait::async_trait;
use std::sync::Arc;
use todo_core::error::Result;
use todo_core::{HealthStatus, NewTodo, Todo, TodoRepository, TodoUsecase, UpdateTodo};

/// Usecase implementation that delegates every operation to the repository
pub struct TodoHandler<R> {
    repository: Arc<R>,
}

impl<R> Clone for TodoHandler<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TodoHandler<R> {
    /// Create new todo handler
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TodoRepository> TodoUsecase for TodoHandler<R> {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.repository.list().await
    }

    async fn get_todo(&self, id: i64) -> Result<Todo> {
        self.repository.get_by_id(id).await
    }

    async fn create_todo(&self, todo: NewTodo) -> Result<Todo> {
        self.repository.create(todo).await
    }

    async fn update_todo(&self, id: i64, updates: UpdateTodo) -> Result<Todo> {
        self.repository.update(id, updates).await
    }

    async fn delete_todo(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await
    }

    async fn health_check(&self) -> Result<HealthStatus> {
        self.repository.health_check().await?;

        Ok(HealthStatus::healthy(env!("CARGO_PKG_VERSION")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mocks::{create_new_todo, create_test_todos, MockTodoRepository};
    use todo_core::TodoError;

    fn handler_with(repo: MockTodoRepository) -> TodoHandler<MockTodoRepository> {
        TodoHandler::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_each_operation_delegates_to_repository() {
        let repo = MockTodoRepository::with_todos(create_test_todos(2));
        let handler = handler_with(repo.clone());

        handler.list_todos().await.unwrap();
        handler.get_todo(1).await.unwrap();
        handler.create_todo(create_new_todo()).await.unwrap();
        handler.update_todo(2, UpdateTodo::default()).await.unwrap();
        handler.delete_todo(1).await.unwrap();

        assert_eq!(
            repo.call_history(),
            vec![
                "list()",
                "get_by_id(id=1)",
                "create(title=Buy milk)",
                "update(id=2)",
                "delete(id=1)",
            ]
        );
    }

    #[tokio::test]
    async fn test_errors_pass_through_unchanged() {
        let repo = MockTodoRepository::new();
        let handler = handler_with(repo.clone());

        assert_eq!(handler.get_todo(9).await.unwrap_err(), TodoError::not_found_id(9));

        repo.inject_error(TodoError::Database("disk full".to_string()));
        assert_eq!(
            handler.list_todos().await.unwrap_err(),
            TodoError::Database("disk full".to_string())
        );
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = MockTodoRepository::new();
        let handler = handler_with(repo.clone());

        let health = handler.health_check().await.unwrap();
        assert_eq!(health.status, "healthy");
        assert!(health.database);
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));

        repo.inject_error(TodoError::Database("unreachable".to_string()));
        assert!(handler.health_check().await.unwrap_err().is_database());
    }
}
