use anyhow::{Context, Result};
use database::SqliteTodoRepository;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use todo_api::{TodoHandler, TodoServer};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;

/// Server type produced by [`initialize_app`]
pub type AppServer = TodoServer<TodoHandler<SqliteTodoRepository>>;

/// Create the todo repository and bootstrap its schema
pub async fn create_repository(config: &Config) -> Result<Arc<SqliteTodoRepository>> {
    let database_url = config.database_url();
    info!(database_url = %database_url, "Initializing SQLite repository");

    let repo = SqliteTodoRepository::with_options(
        &database_url,
        config.database.max_connections,
        Duration::from_secs(config.database.connection_timeout),
    )
    .await
    .with_context(|| format!("Failed to open database at {database_url}"))?;

    info!("Running database migrations");
    repo.migrate()
        .await
        .context("Failed to run database migrations")?;

    Ok(Arc::new(repo))
}

/// Wire the usecase and router around the repository
pub fn create_server(repository: Arc<SqliteTodoRepository>) -> AppServer {
    let usecase = Arc::new(TodoHandler::new(repository));
    TodoServer::new(usecase)
}

/// Initialize the complete application
pub async fn initialize_app(config: &Config) -> Result<AppServer> {
    info!("Initializing application");

    ensure_database_directory(&config.database_url())
        .context("Failed to create database directory")?;

    let repository = create_repository(config)
        .await
        .context("Failed to create repository")?;

    info!("Application initialized successfully");
    Ok(create_server(repository))
}

/// Initialize the application and serve on `listener` until `shutdown` resolves
pub async fn run_with_listener<F>(config: &Config, listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let server = initialize_app(config).await?;
    server
        .serve_with_listener(listener, shutdown)
        .await
        .context("HTTP server error")
}

/// Ensure the parent directory of a file database exists
pub fn ensure_database_directory(database_url: &str) -> Result<()> {
    if database::is_memory_url(database_url) {
        return Ok(());
    }

    if let Some(db_path) = database_url.strip_prefix("sqlite://") {
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                info!(directory = %parent.display(), "Creating database directory");
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;

                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))
                        .context("Failed to set directory permissions")?;
                }
            }
        }
    }

    Ok(())
}
