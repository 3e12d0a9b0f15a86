//! Mock implementations and test utilities for the Todo service
//!
//! This crate provides the shared testing infrastructure:
//! - A mock TodoRepository with error injection and call tracking
//! - Builders, fixtures and random data generators
//! - Custom assertion helpers
//! - Property-based testing strategies
//! - Repository contract tests run against every implementation

pub mod assertions;
pub mod builders;
pub mod contracts;
pub mod fixtures;
pub mod generators;
pub mod repository;

pub use assertions::*;
pub use builders::*;
pub use contracts::*;
pub use fixtures::*;
pub use generators::*;
pub use repository::MockTodoRepository;
