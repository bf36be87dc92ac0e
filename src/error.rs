//! Custom error types for Carteira
//!
//! The chart builders never fail; errors only come from the outer surfaces
//! (settings, dataset files, terminal I/O).

use thiserror::Error;

/// The main error type for Carteira operations
#[derive(Error, Debug)]
pub enum CarteiraError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for loaded datasets
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl CarteiraError {
    /// Create a "not found" error for routes
    pub fn route_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Route",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for chart kinds
    pub fn chart_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Chart",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for CarteiraError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CarteiraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for CarteiraError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for Carteira operations
pub type CarteiraResult<T> = Result<T, CarteiraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CarteiraError::Config("bad tick rate".into());
        assert_eq!(err.to_string(), "Configuration error: bad tick rate");
    }

    #[test]
    fn test_not_found_error() {
        let err = CarteiraError::route_not_found("/relatorios");
        assert_eq!(err.to_string(), "Route not found: /relatorios");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CarteiraError = io_err.into();
        assert!(matches!(err, CarteiraError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CarteiraError = json_err.into();
        assert!(matches!(err, CarteiraError::Json(_)));
    }
}
