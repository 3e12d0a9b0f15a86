use thiserror::Error;

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Error types for the Todo service.
///
/// Every layer (repository, usecase, router) speaks this error type. Each
/// variant maps to an HTTP status code so the router can translate failures
/// without inspecting messages.
///
/// # Examples
///
/// ```rust
/// use todo_core::error::TodoError;
///
/// let not_found = TodoError::not_found_id(42);
/// assert!(not_found.is_not_found());
/// assert_eq!(not_found.status_code(), 404);
///
/// let blank = TodoError::empty_field("title");
/// assert!(blank.is_validation());
/// assert_eq!(blank.status_code(), 422);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No todo exists for the given identifier
    #[error("Todo not found: {0}")]
    NotFound(String),

    /// Client supplied a malformed or empty field
    #[error("Validation error: {0}")]
    Validation(String),

    /// Persistence failure (connectivity, constraint violation, ...)
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Create a not found error for a todo ID
    pub fn not_found_id(id: i64) -> Self {
        Self::NotFound(format!("Todo with id {id} not found"))
    }

    /// Create a validation error for an empty or whitespace-only field
    pub fn empty_field(field: &str) -> Self {
        Self::Validation(format!("Field '{field}' cannot be empty"))
    }

    /// Check if this error indicates a not found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound(_))
    }

    /// Check if this error indicates a validation problem
    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::Validation(_))
    }

    /// Check if this error indicates a database problem
    pub fn is_database(&self) -> bool {
        matches!(self, TodoError::Database(_))
    }

    /// Whether the client caused this error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Convert to appropriate HTTP status code equivalent
    pub fn status_code(&self) -> u16 {
        match self {
            TodoError::NotFound(_) => 404,
            TodoError::Validation(_) => 422,
            TodoError::Database(_) => 500,
            TodoError::Configuration(_) => 500,
            TodoError::Internal(_) => 500,
        }
    }
}
