//! Todo Server Library
//!
//! Configuration loading, logging setup, and application wiring for the
//! `todo-server` binary. Exposed as a library so the wiring can be tested.

pub mod config;
pub mod setup;
pub mod telemetry;

pub use config::Config;
pub use setup::{
    create_repository, create_server, ensure_database_directory, initialize_app,
    run_with_listener, AppServer,
};
pub use telemetry::init_telemetry;
