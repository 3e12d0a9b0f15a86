use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::{
    error::Result,
    models::{NewTodo, Todo, UpdateTodo},
};

/// Usecase trait for the todo endpoints
///
/// One method per external operation. Keeps the router free of
/// persistence concerns.
#[async_trait]
pub trait TodoUsecase: Send + Sync {
    /// List all todos
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Get one todo by ID
    async fn get_todo(&self, id: i64) -> Result<Todo>;

    /// Create a new todo
    async fn create_todo(&self, todo: NewTodo) -> Result<Todo>;

    /// Update the given fields of an existing todo
    async fn update_todo(&self, id: i64, updates: UpdateTodo) -> Result<Todo>;

    /// Delete a todo
    async fn delete_todo(&self, id: i64) -> Result<()>;

    /// Report service health
    async fn health_check(&self) -> Result<HealthStatus>;
}

/// Health status response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub database: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

impl HealthStatus {
    /// A healthy status stamped with the current time
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            database: true,
            timestamp: chrono::Utc::now(),
            version: version.into(),
        }
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::healthy(env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serialization() {
        let health = HealthStatus::healthy("1.2.3");
        let json = serde_json::to_value(&health).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["database"], true);
        assert_eq!(json["version"], "1.2.3");
        assert!(json["timestamp"].is_string());

        let back: HealthStatus = serde_json::from_value(json).unwrap();
        assert_eq!(back, health);
    }
}
