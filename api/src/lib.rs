//! Todo HTTP API
//!
//! This crate provides the router and usecase layers of the Todo service:
//!
//! - [`handler::TodoHandler`] implements `TodoUsecase` over any `TodoRepository`
//! - [`server`] exposes the usecase as a JSON REST API with axum
//! - [`error::ApiError`] maps core errors to HTTP status codes and bodies
//! - [`request_logger`] logs one structured event per todo request
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_api::{TodoHandler, TodoServer};
//!
//! async fn start_server<R: todo_core::TodoRepository + 'static>(
//!     repository: Arc<R>,
//! ) -> std::io::Result<()> {
//!     let usecase = Arc::new(TodoHandler::new(repository));
//!     let server = TodoServer::new(usecase);
//!     server.serve("127.0.0.1:8000", std::future::pending()).await
//! }
//! ```

pub mod error;
pub mod handler;
pub mod request_logger;
pub mod server;

pub use error::ApiError;
pub use handler::TodoHandler;
pub use server::{create_router, TodoServer};

// Re-export core types for external consumers
pub use todo_core::{HealthStatus, NewTodo, Todo, TodoRepository, TodoUsecase, UpdateTodo};
