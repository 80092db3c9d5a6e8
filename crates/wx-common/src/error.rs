//! Error types for station-field estimation and its collaborators.

use thiserror::Error;

/// Result type alias using FieldError.
pub type FieldResult<T> = Result<T, FieldError>;

/// Primary error type for weather field operations.
#[derive(Debug, Error)]
pub enum FieldError {
    // === Input Errors ===
    #[error("Parse error: {0}")]
    Parse(String),

    // === Domain Errors ===
    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Insufficient data: {required} stations required, {available} available")]
    InsufficientData { required: usize, available: usize },

    // === Rendering Errors ===
    #[error("Temperature {0}°C is outside the color scale")]
    Lookup(i64),

    #[error("Rendering failed: {0}")]
    Render(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),
}

impl FieldError {
    /// Create a Parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a Domain error.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Create a Render error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Whether the error should abort a whole estimation pass.
    ///
    /// Lookup errors are recovered by clamping at the rendering layer.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, FieldError::Lookup(_))
    }
}

impl From<std::io::Error> for FieldError {
    fn from(err: std::io::Error) -> Self {
        FieldError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let err = FieldError::InsufficientData {
            required: 3,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: 3 stations required, 1 available"
        );
    }

    #[test]
    fn test_lookup_is_not_fatal() {
        assert!(!FieldError::Lookup(55).is_fatal());
        assert!(FieldError::domain("zero-width extent").is_fatal());
    }
}
