use crate::common::{
    is_memory_url, normalize_database_url, row_to_todo, sqlx_error_to_todo_error, TODO_COLUMNS,
};
use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqliteConnection, SqlitePool,
};
use std::{str::FromStr, time::Duration};
use todo_core::{
    error::{Result, TodoError},
    models::{NewTodo, Todo, UpdateTodo},
    repository::TodoRepository,
    validation::TodoValidator,
};

/// Default pool size for file-backed databases
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a pooled connection
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// SQLite implementation of the TodoRepository trait
///
/// The connection pool is the session provider: every repository call
/// begins one transaction on a pooled connection and commits it before
/// returning. Early returns drop the transaction, which rolls it back and
/// hands the connection back to the pool.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Create a new SQLite repository with default pool settings
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (file path, `sqlite://...` or `:memory:`)
    ///
    /// # Examples
    /// ```rust,no_run
    /// use database::SqliteTodoRepository;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // In-memory database for testing
    /// let repo = SqliteTodoRepository::new(":memory:").await?;
    ///
    /// // File-based database
    /// let repo = SqliteTodoRepository::new("sqlite:///tmp/todos.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::with_options(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT).await
    }

    /// Create a new SQLite repository with explicit pool settings
    ///
    /// # Returns
    /// * `Ok(SqliteTodoRepository)` - Successfully connected repository
    /// * `Err(TodoError::Database)` - If connection fails
    pub async fn with_options(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        let db_url = normalize_database_url(database_url);

        let pool = if is_memory_url(&db_url) {
            let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(sqlx_error_to_todo_error)?
                .journal_mode(SqliteJournalMode::Memory)
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true);

            // An in-memory database lives only as long as its connection,
            // so the pool holds exactly one and never recycles it.
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .acquire_timeout(acquire_timeout)
                .connect_with(connect_options)
                .await
        } else {
            let connect_options = SqliteConnectOptions::new()
                .filename(db_url.trim_start_matches("sqlite://"))
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true);

            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .acquire_timeout(acquire_timeout)
                .connect_with(connect_options)
                .await
        }
        .map_err(sqlx_error_to_todo_error)?;

        tracing::debug!(database_url = %db_url, "SQLite pool connected");
        Ok(Self { pool })
    }

    /// Create the todos table if it does not exist yet
    ///
    /// Should be called once after creating a new repository instance.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| TodoError::Database(format!("Migration failed: {e}")))?;

        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// This method is primarily intended for testing scenarios where
    /// direct SQL execution is needed.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Look up one todo on an already-acquired connection
async fn fetch_todo(conn: &mut SqliteConnection, id: i64) -> Result<Option<Todo>> {
    let sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = ?");
    let row = sqlx::query(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(sqlx_error_to_todo_error)?;

    row.as_ref().map(row_to_todo).transpose()
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>> {
        let mut tx = self.pool.begin().await.map_err(sqlx_error_to_todo_error)?;

        let sql = format!("SELECT {TODO_COLUMNS} FROM todos ORDER BY id ASC");
        let rows = sqlx::query(&sql)
            .fetch_all(&mut *tx)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        tx.commit().await.map_err(sqlx_error_to_todo_error)?;

        tracing::debug!(count = rows.len(), "Listed todos");
        rows.iter().map(row_to_todo).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Todo> {
        let mut tx = self.pool.begin().await.map_err(sqlx_error_to_todo_error)?;

        let todo = fetch_todo(&mut tx, id)
            .await?
            .ok_or_else(|| TodoError::not_found_id(id))?;

        tx.commit().await.map_err(sqlx_error_to_todo_error)?;
        Ok(todo)
    }

    async fn create(&self, todo: NewTodo) -> Result<Todo> {
        TodoValidator::validate_new_todo(&todo)?;

        let mut tx = self.pool.begin().await.map_err(sqlx_error_to_todo_error)?;

        let sql = format!(
            "INSERT INTO todos (title, description, completed) VALUES (?, ?, ?) RETURNING {TODO_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.completed)
            .fetch_one(&mut *tx)
            .await
            .map_err(sqlx_error_to_todo_error)?;
        let created = row_to_todo(&row)?;

        tx.commit().await.map_err(sqlx_error_to_todo_error)?;

        tracing::debug!(id = created.id, "Created todo");
        Ok(created)
    }

    async fn update(&self, id: i64, updates: UpdateTodo) -> Result<Todo> {
        TodoValidator::validate_update_todo(&updates)?;

        let mut tx = self.pool.begin().await.map_err(sqlx_error_to_todo_error)?;

        if updates.is_empty() {
            let existing = fetch_todo(&mut tx, id)
                .await?
                .ok_or_else(|| TodoError::not_found_id(id))?;
            tx.commit().await.map_err(sqlx_error_to_todo_error)?;
            return Ok(existing);
        }

        // Write first: a read-then-write transaction can hit SQLITE_BUSY on upgrade
        let mut query_builder: sqlx::QueryBuilder<sqlx::Sqlite> =
            sqlx::QueryBuilder::new("UPDATE todos SET ");
        {
            let mut assignments = query_builder.separated(", ");
            if let Some(title) = &updates.title {
                assignments.push("title = ");
                assignments.push_bind_unseparated(title);
            }
            if let Some(description) = &updates.description {
                assignments.push("description = ");
                assignments.push_bind_unseparated(description);
            }
            if let Some(completed) = updates.completed {
                assignments.push("completed = ");
                assignments.push_bind_unseparated(completed);
            }
        }
        query_builder.push(" WHERE id = ");
        query_builder.push_bind(id);
        query_builder.push(format!(" RETURNING {TODO_COLUMNS}"));

        let row = query_builder
            .build()
            .fetch_optional(&mut *tx)
            .await
            .map_err(sqlx_error_to_todo_error)?
            .ok_or_else(|| TodoError::not_found_id(id))?;
        let updated = row_to_todo(&row)?;

        tx.commit().await.map_err(sqlx_error_to_todo_error)?;

        tracing::debug!(id, "Updated todo");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(sqlx_error_to_todo_error)?;

        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        match result.rows_affected() {
            0 => return Err(TodoError::not_found_id(id)),
            1 => {}
            n => {
                return Err(TodoError::Internal(format!(
                    "Expected to delete one todo with id {id}, deleted {n}"
                )))
            }
        }

        tx.commit().await.map_err(sqlx_error_to_todo_error)?;

        tracing::debug!(id, "Deleted todo");
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        // Simple query to verify database connectivity
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        Ok(())
    }
}
