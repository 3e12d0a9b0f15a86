use crate::{
    error::{Result, TodoError},
    models::{NewTodo, UpdateTodo},
};

/// Validation utilities shared by the creation and update shapes
pub struct TodoValidator;

impl TodoValidator {
    /// Validate a todo title
    ///
    /// Titles must not be empty or only whitespace. No length or charset
    /// limits apply.
    ///
    /// # Returns
    /// * `Ok(())` - If the title is valid
    /// * `Err(TodoError::Validation)` - If the title is blank
    pub fn validate_title(title: &str) -> Result<()> {
        Self::require_non_blank("title", title)
    }

    /// Validate a todo description
    ///
    /// A description that is present must not be empty or only whitespace.
    pub fn validate_description(description: &str) -> Result<()> {
        Self::require_non_blank("description", description)
    }

    /// Validate a complete NewTodo structure
    pub fn validate_new_todo(todo: &NewTodo) -> Result<()> {
        Self::validate_title(&todo.title)?;
        if let Some(description) = &todo.description {
            Self::validate_description(description)?;
        }
        Ok(())
    }

    /// Validate the fields present in an UpdateTodo
    pub fn validate_update_todo(updates: &UpdateTodo) -> Result<()> {
        if let Some(title) = &updates.title {
            Self::validate_title(title)?;
        }
        if let Some(description) = &updates.description {
            Self::validate_description(description)?;
        }
        Ok(())
    }

    fn require_non_blank(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(TodoError::empty_field(field));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_titles() {
        assert!(TodoValidator::validate_title("Buy milk").is_ok());
        assert!(TodoValidator::validate_title("A").is_ok());
        assert!(TodoValidator::validate_title("  padded  ").is_ok());
        assert!(TodoValidator::validate_title("Symbols: !@#$% 日本語").is_ok());
        assert!(TodoValidator::validate_title(&"a".repeat(10_000)).is_ok());
    }

    #[test]
    fn test_invalid_titles() {
        assert!(TodoValidator::validate_title("").is_err());
        assert!(TodoValidator::validate_title("   ").is_err());
        assert!(TodoValidator::validate_title("\t\n").is_err());

        let err = TodoValidator::validate_title(" ").unwrap_err();
        assert_eq!(err, TodoError::empty_field("title"));
    }

    #[test]
    fn test_invalid_descriptions() {
        assert!(TodoValidator::validate_description("").is_err());
        assert!(TodoValidator::validate_description("  ").is_err());
        assert!(TodoValidator::validate_description("2%").is_ok());
    }

    #[test]
    fn test_validate_new_todo() {
        assert!(TodoValidator::validate_new_todo(&NewTodo::new("Buy milk")).is_ok());
        assert!(TodoValidator::validate_new_todo(&NewTodo::new("Buy milk").with_description("2%")).is_ok());

        let blank_title = NewTodo::new("   ");
        assert_eq!(
            TodoValidator::validate_new_todo(&blank_title).unwrap_err(),
            TodoError::empty_field("title")
        );

        let blank_description = NewTodo::new("Buy milk").with_description(" ");
        assert_eq!(
            TodoValidator::validate_new_todo(&blank_description).unwrap_err(),
            TodoError::empty_field("description")
        );
    }

    #[test]
    fn test_validate_update_todo() {
        // Absent fields are allowed
        assert!(TodoValidator::validate_update_todo(&UpdateTodo::new()).is_ok());

        let completed_only = UpdateTodo {
            completed: Some(true),
            ..Default::default()
        };
        assert!(TodoValidator::validate_update_todo(&completed_only).is_ok());

        let blank_title = UpdateTodo {
            title: Some("".to_string()),
            ..Default::default()
        };
        assert!(TodoValidator::validate_update_todo(&blank_title).unwrap_err().is_validation());

        let blank_description = UpdateTodo {
            description: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            TodoValidator::validate_update_todo(&blank_description).unwrap_err(),
            TodoError::empty_field("description")
        );
    }
}
