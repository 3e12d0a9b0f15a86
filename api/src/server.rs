//! HTTP server exposing the todo endpoints
//!
//! Routes:
//! - `GET /` greeting
//! - `GET /health` service health, 503 when the store is unreachable
//! - `GET|POST /todos`
//! - `GET|PUT|DELETE /todos/:id`

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::{future::Future, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use crate::{error::ApiError, request_logger::request_logging_middleware};
use todo_core::{HealthStatus, NewTodo, Todo, TodoUsecase, TodoValidator, UpdateTodo};

type ApiResult<T> = std::result::Result<T, ApiError>;

/// Todo HTTP server
pub struct TodoServer<U> {
    usecase: Arc<U>,
}

impl<U: TodoUsecase + 'static> TodoServer<U> {
    /// Create new server around the given usecase
    pub fn new(usecase: Arc<U>) -> Self {
        Self { usecase }
    }

    /// Build the router for this server
    pub fn router(&self) -> Router {
        create_router(Arc::clone(&self.usecase))
    }

    /// Bind `addr` and serve until `shutdown` resolves
    pub async fn serve<F>(self, addr: &str, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr).await?;
        self.serve_with_listener(listener, shutdown).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves
    pub async fn serve_with_listener<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        info!(address = %local_addr, "Starting todo server");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Todo server stopped");
        Ok(())
    }
}

/// Create the router with all endpoints
pub fn create_router<U: TodoUsecase + 'static>(usecase: Arc<U>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler::<U>))
        .route(
            "/todos",
            get(list_todos_handler::<U>).post(create_todo_handler::<U>),
        )
        .route(
            "/todos/:id",
            get(get_todo_handler::<U>)
                .put(update_todo_handler::<U>)
                .delete(delete_todo_handler::<U>),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .with_state(usecase)
}

async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

async fn health_handler<U: TodoUsecase>(
    State(usecase): State<Arc<U>>,
) -> ApiResult<Json<HealthStatus>> {
    usecase
        .health_check()
        .await
        .map(Json)
        .map_err(ApiError::unavailable)
}

async fn list_todos_handler<U: TodoUsecase>(
    State(usecase): State<Arc<U>>,
) -> ApiResult<Json<Vec<Todo>>> {
    Ok(Json(usecase.list_todos().await?))
}

async fn get_todo_handler<U: TodoUsecase>(
    State(usecase): State<Arc<U>>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Todo>> {
    let Path(id) = id?;
    Ok(Json(usecase.get_todo(id).await?))
}

async fn create_todo_handler<U: TodoUsecase>(
    State(usecase): State<Arc<U>>,
    payload: std::result::Result<Json<NewTodo>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let Json(new_todo) = payload?;
    TodoValidator::validate_new_todo(&new_todo)?;

    let todo = usecase.create_todo(new_todo).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo_handler<U: TodoUsecase>(
    State(usecase): State<Arc<U>>,
    id: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<UpdateTodo>, JsonRejection>,
) -> ApiResult<Json<Todo>> {
    let Path(id) = id?;
    let Json(updates) = payload?;
    TodoValidator::validate_update_todo(&updates)?;

    Ok(Json(usecase.update_todo(id, updates).await?))
}

async fn delete_todo_handler<U: TodoUsecase>(
    State(usecase): State<Arc<U>>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    usecase.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
