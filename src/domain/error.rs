use std::fmt;

use thiserror::Error;

use super::types::Field;

/// A single validation failure tied to the offending form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every rule violation found while checking a draft, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render_messages(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Returns `None` when `errors` is empty so callers cannot build an empty failure.
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        (!errors.is_empty()).then_some(Self { errors })
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|error| error.message.as_str())
    }

    /// Messages for one field, for inline display next to that input.
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter(move |error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

fn render_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_list_is_not_an_error() {
        assert!(ValidationError::from_errors(Vec::new()).is_none());
    }

    #[test]
    fn display_lists_one_message_per_line() {
        let error = ValidationError::from_errors(vec![
            FieldError::new(Field::Name, "Name is required"),
            FieldError::new(Field::Email, "Email is required"),
        ])
        .expect("non-empty");

        assert_eq!(error.to_string(), "Name is required\nEmail is required");
        assert_eq!(
            error.for_field(Field::Email).collect::<Vec<_>>(),
            vec!["Email is required"]
        );
        assert!(!error.has_field(Field::Title));
    }
}
