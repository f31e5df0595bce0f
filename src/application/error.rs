use std::error::Error as StdError;

use thiserror::Error;

use crate::{
    application::{export::ExportError, render::RenderError},
    domain::error::ValidationError,
    infra::error::InfraError,
};

/// Error chain flattened into printable lines, outermost first.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self { source, messages }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed:\n{0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl AppError {
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            AppError::Validation(error) => Some(error),
            _ => None,
        }
    }

    /// Short, user-facing summary of the failure category.
    pub fn presentation_message(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Please correct the highlighted fields",
            AppError::Render(_) => "Signature could not be rendered",
            AppError::Export(_) => "Signature files could not be written",
            AppError::Infra(InfraError::Io(_)) => "I/O failure",
            AppError::Infra(InfraError::Telemetry(_)) => "Logging subsystem could not start",
            AppError::Infra(InfraError::Configuration { .. }) => "Configuration is invalid",
        }
    }
}
