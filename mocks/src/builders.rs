//! Builder pattern implementations for easy test data construction
//!
//! Provides fluent builders for:
//! - Todo construction with sensible defaults
//! - NewTodo and UpdateTodo payloads

use todo_core::{NewTodo, Todo, UpdateTodo};

/// Builder for constructing Todo instances in tests
pub struct TodoBuilder {
    todo: Todo,
}

impl Default for TodoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            todo: Todo::new(1, "Test Todo".to_string(), None, false),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.todo.id = id;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.todo.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.todo.description = Some(description.into());
        self
    }

    pub fn without_description(mut self) -> Self {
        self.todo.description = None;
        self
    }

    pub fn completed(mut self) -> Self {
        self.todo.completed = true;
        self
    }

    pub fn build(self) -> Todo {
        self.todo
    }
}

/// Builder for NewTodo create payloads
pub struct NewTodoBuilder {
    todo: NewTodo,
}

impl Default for NewTodoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewTodoBuilder {
    pub fn new() -> Self {
        Self {
            todo: NewTodo::new("New Todo"),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.todo.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.todo.description = Some(description.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.todo.completed = completed;
        self
    }

    pub fn build(self) -> NewTodo {
        self.todo
    }
}

/// Builder for UpdateTodo partial payloads
///
/// Starts empty; only the fields set on the builder are present in the result.
#[derive(Default)]
pub struct UpdateTodoBuilder {
    updates: UpdateTodo,
}

impl UpdateTodoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.updates.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.updates.description = Some(description.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.updates.completed = Some(completed);
        self
    }

    pub fn build(self) -> UpdateTodo {
        self.updates
    }
}
