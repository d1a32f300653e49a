use miette::{Diagnostic, Result};
use thiserror::Error;

use crate::api::ApiError;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(planning::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(planning::config))]
    Config(String),

    #[error("Events API error: {0}")]
    #[diagnostic(code(planning::api))]
    Api(#[from] ApiError),

    #[error(transparent)]
    #[diagnostic(code(planning::io))]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    #[diagnostic(code(planning::other))]
    Other(String),
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}
