// src/error.rs - Storefront error handling

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A referenced record does not exist, e.g. add-to-cart with an unknown product id
    NotFound {
        entity: String,
        id: String,
    },
    Configuration {
        key: Option<String>,
        validation_errors: Vec<String>,
    },
    Validation {
        field: Option<String>,
        rules: Vec<String>,
    },
    /// A (simulated) submission such as checkout or the contact form failed
    Submission {
        operation: String,
    },
    Application,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub id: Uuid,
    pub kind: ErrorKind,
    pub message: String,
    pub severity: ErrorSeverity,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub causes: Vec<String>,
}

impl Error {
    /// Creates a new error with the specified kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            severity: ErrorSeverity::Medium,
            source: "unknown".to_string(),
            timestamp: crate::utils::Time::now(),
            causes: Vec::new(),
        }
    }

    /// Sets the error severity
    pub fn severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the error source
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Adds a cause to the error chain
    pub fn caused_by(mut self, cause: impl fmt::Display) -> Self {
        self.causes.push(cause.to_string());
        self
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound { .. })
    }

    /// Creates a not-found error for the given entity
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        let entity = entity.into();
        let id = id.into();
        let message = format!("{} '{}' not found", entity, id);
        Self::new(ErrorKind::NotFound { entity, id }, message).severity(ErrorSeverity::Low)
    }

    /// Creates a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Configuration {
                key: None,
                validation_errors: Vec::new(),
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a configuration error carrying every failed validation rule
    pub fn config_invalid(validation_errors: Vec<String>) -> Self {
        let message = format!(
            "Invalid configuration: {}",
            validation_errors.join("; ")
        );
        Self::new(
            ErrorKind::Configuration {
                key: None,
                validation_errors,
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a form/input validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Validation {
                field: Some(field.into()),
                rules: Vec::new(),
            },
            message,
        )
        .severity(ErrorSeverity::Low)
    }

    /// Creates a submission error
    pub fn submission(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Submission {
                operation: operation.into(),
            },
            message,
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.severity, self.source, self.id, self.message
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let msg = err.to_string();

        let mut error = Error::new(ErrorKind::Io, msg);
        error.source = "std::io::Error".to_string();
        error.severity = ErrorSeverity::High;

        error
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorKind::Serialization, err.to_string())
            .source("serde_json")
            .severity(ErrorSeverity::High)
    }
}

/// Extension trait for Results to add context
pub trait ResultExt<T> {
    /// Adds context to an error
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::new(ErrorKind::Application, f()).caused_by(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = Error::not_found("product", "42").source("cart");

        assert!(error.is_not_found());
        assert_eq!(error.severity, ErrorSeverity::Low);
        assert_eq!(error.source, "cart");
        assert_eq!(error.message, "product '42' not found");
        assert_eq!(
            error.kind,
            ErrorKind::NotFound {
                entity: "product".to_string(),
                id: "42".to_string()
            }
        );
    }

    #[test]
    fn test_config_error() {
        let error = Error::config_invalid(vec![
            "shop.promo_percent must be between 1 and 100".to_string(),
            "logging.level is not a valid filter".to_string(),
        ]);

        assert_eq!(error.severity, ErrorSeverity::High);
        match &error.kind {
            ErrorKind::Configuration {
                validation_errors, ..
            } => assert_eq!(validation_errors.len(), 2),
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));

        let error = result
            .with_context(|| "Failed to read store config".to_string())
            .unwrap_err();

        assert_eq!(error.message, "Failed to read store config");
        assert_eq!(error.causes, vec!["missing file".to_string()]);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io.into();

        assert_eq!(error.kind, ErrorKind::Io);
        assert_eq!(error.severity, ErrorSeverity::High);
        assert_eq!(error.source, "std::io::Error");
    }

    #[test]
    fn test_display_includes_severity_and_source() {
        let error = Error::validation("email", "Email is required").source("contact");
        let rendered = error.to_string();

        assert!(rendered.starts_with("[LOW] contact"));
        assert!(rendered.ends_with("Email is required"));
    }
}
