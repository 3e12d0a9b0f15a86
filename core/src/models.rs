use serde::{de, Deserialize, Deserializer, Serialize};

/// A persisted todo item (read shape).
///
/// The `id` is assigned by the store on creation and never changes. This is
/// the representation returned to clients by every endpoint.
///
/// # Examples
///
/// ```rust
/// use todo_core::models::Todo;
///
/// let todo = Todo {
///     id: 1,
///     title: "Buy milk".to_string(),
///     description: Some("2%".to_string()),
///     completed: false,
/// };
///
/// assert!(!todo.completed);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Auto-increment primary key
    pub id: i64,
    /// Short title, never blank
    pub title: String,
    /// Optional free-form details
    pub description: Option<String>,
    /// Completion flag
    pub completed: bool,
}

impl Todo {
    /// Create a todo from its parts
    pub fn new(id: i64, title: String, description: Option<String>, completed: bool) -> Self {
        Self {
            id,
            title,
            description,
            completed,
        }
    }

    /// Apply the fields present in `updates`, leaving the others untouched
    pub fn apply(&mut self, updates: UpdateTodo) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(description) = updates.description {
            self.description = Some(description);
        }
        if let Some(completed) = updates.completed {
            self.completed = completed;
        }
    }
}

/// Data transfer object for creating new todos.
///
/// Carries no identifier; the store generates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl NewTodo {
    /// Create a NewTodo with no description, not completed
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the completion flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Data transfer object for updating existing todos.
///
/// Omitted fields are left unchanged. A field sent as an explicit JSON
/// `null` is rejected during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UpdateTodo {
    /// Optional new title
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional new description
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional new completion flag
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

/// Only called when the key is present, so `None` here means an explicit `null`.
fn non_null<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)?
        .map(Some)
        .ok_or_else(|| de::Error::custom("field cannot be null"))
}
