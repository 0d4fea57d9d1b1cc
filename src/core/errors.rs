//! Shared error types for the calculator

use std::fmt;
use thiserror::Error;

/// Main error type for revleak operations
#[derive(Debug, Error)]
pub enum Error {
    /// Industry selector does not match any benchmark entry
    #[error("Unknown industry '{name}'")]
    InvalidIndustryKey { name: String },

    /// One or more raw inputs fall outside their documented bounds
    #[error("Input out of range: {}", format_violations(.violations))]
    OutOfRange { violations: Vec<RangeViolation> },

    /// Impact tier selector could not be parsed
    #[error("Unknown impact tier '{0}' (expected high, medium or low)")]
    UnknownTier(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown industry error
    pub fn invalid_industry(name: impl Into<String>) -> Self {
        Self::InvalidIndustryKey { name: name.into() }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Range violations carried by this error, empty for other variants
    pub fn violations(&self) -> &[RangeViolation] {
        match self {
            Self::OutOfRange { violations } => violations,
            _ => &[],
        }
    }
}

/// A single raw input outside its accepted bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeViolation {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} (allowed {} to {})",
            self.field, self.value, self.min, self.max
        )
    }
}

fn format_violations(violations: &[RangeViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
