use sqlx::{sqlite::SqliteRow, Row};
use todo_core::{
    error::{Result, TodoError},
    models::Todo,
};

/// Column list shared by every statement that returns a todo
pub const TODO_COLUMNS: &str = "id, title, description, completed";

/// Convert SQLite row to Todo model
pub fn row_to_todo(row: &SqliteRow) -> Result<Todo> {
    Ok(Todo {
        id: row.try_get("id").map_err(sqlx_error_to_todo_error)?,
        title: row.try_get("title").map_err(sqlx_error_to_todo_error)?,
        description: row.try_get("description").map_err(sqlx_error_to_todo_error)?,
        completed: row.try_get("completed").map_err(sqlx_error_to_todo_error)?,
    })
}

/// Convert SQLx error to TodoError
pub fn sqlx_error_to_todo_error(err: sqlx::Error) -> TodoError {
    match &err {
        sqlx::Error::Database(db_err) => {
            TodoError::Database(format!("Database constraint error: {}", db_err.message()))
        }
        sqlx::Error::RowNotFound => {
            // Absent rows are handled with fetch_optional, so this is a bug
            TodoError::Database("Unexpected RowNotFound error".to_string())
        }
        sqlx::Error::ColumnNotFound(column) => {
            TodoError::Database(format!("Column not found: {column}"))
        }
        sqlx::Error::ColumnDecode { index, source } => {
            TodoError::Database(format!("Failed to decode column {index}: {source}"))
        }
        sqlx::Error::PoolTimedOut => TodoError::Database("Connection pool timeout".to_string()),
        sqlx::Error::PoolClosed => TodoError::Database("Connection pool closed".to_string()),
        sqlx::Error::Io(io_err) => TodoError::Database(format!("Database I/O error: {io_err}")),
        _ => TodoError::Database(format!("Database operation failed: {err}")),
    }
}

/// Normalize user-supplied database locations to `sqlite://` URLs
pub fn normalize_database_url(database_url: &str) -> String {
    if is_memory_url(database_url) || database_url.starts_with("sqlite://") {
        database_url.to_string()
    } else if let Some(path) = database_url.strip_prefix("sqlite:") {
        format!("sqlite://{path}")
    } else {
        format!("sqlite://{database_url}")
    }
}

/// Whether the URL names an in-memory database
pub fn is_memory_url(database_url: &str) -> bool {
    database_url.starts_with(":memory:") || database_url.starts_with("sqlite::memory:")
}
