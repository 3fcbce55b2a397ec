//! Error types for the tk_misc library

use thiserror::Error;

/// Result type alias for tk_misc operations
pub type Result<T> = std::result::Result<T, MiscError>;

/// Error types for color, distance and toolkit operations
#[derive(Error, Debug)]
pub enum MiscError {
    /// Color could not be constructed from the given arguments
    #[error("Invalid color: {message}")]
    InvalidColor { message: String },

    /// A toolkit reply could not be decoded into the requested type
    #[error("Type mismatch: expected {expected}, got {found:?}")]
    TypeMismatch { expected: &'static str, found: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// The toolkit interpreter rejected a command
    #[error("Toolkit error in `{command}`: {message}")]
    Toolkit { command: String, message: String },

    /// Display profile could not be loaded or saved
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MiscError {
    /// Create an invalid color error
    pub fn invalid_color(message: impl Into<String>) -> Self {
        Self::InvalidColor {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error came from color construction
    pub fn is_color_error(&self) -> bool {
        matches!(self, MiscError::InvalidColor { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            MiscError::InvalidColor { message } => message.clone(),
            MiscError::Toolkit { .. } => {
                "The windowing toolkit rejected the request.".to_string()
            }
            MiscError::Config { .. } => {
                "Could not read the display profile. Please check the file and try again."
                    .to_string()
            }
            _ => "Invalid value.".to_string(),
        }
    }
}
