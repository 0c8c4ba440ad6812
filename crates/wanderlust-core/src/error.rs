//! Error types for the dashboard engine.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::models::PlanType;

/// Comprehensive error type for all dashboard operations.
///
/// The first group of variants is the engine's own taxonomy (lookups,
/// selection preconditions, plan collection rules, collaborator failures).
/// None of them are fatal: callers degrade to an empty or error state and
/// keep accepting input.
#[derive(Error, Debug)]
pub enum WanderlustError {
    /// Lookup miss in the reference cache
    #[error("Country with code '{code}' not found")]
    CountryNotFound { code: String },
    /// Operation requires a selection level that is not set yet
    #[error("Cannot {operation}: select {requirement} first")]
    Precondition {
        operation: String,
        requirement: String,
    },
    /// Explore was requested without a selected country
    #[error("Please select a country first")]
    MissingSelection,
    /// A plan with the same (type, name, date) identity is already saved
    #[error("Already saved: {plan_type} '{name}'{}", date_suffix(.date))]
    DuplicatePlan {
        plan_type: PlanType,
        name: String,
        date: String,
    },
    /// Plan removal with an index outside the backing collection
    #[error("Plan index {index} is out of range (saved plans: {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// Network or parse failure reported by an external data source
    #[error("{collaborator} request failed: {reason}")]
    Collaborator {
        collaborator: String,
        reason: String,
    },
    /// External data source did not answer within the configured timeout
    #[error("{collaborator} request timed out after {}ms", .timeout.as_millis())]
    CollaboratorTimeout {
        collaborator: String,
        timeout: Duration,
    },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn date_suffix(date: &str) -> String {
    if date.is_empty() {
        String::new()
    } else {
        format!(" on {date}")
    }
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WanderlustError {
        WanderlustError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WanderlustError {
        WanderlustError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for failures reported by external data sources.
pub struct CollaboratorErrorBuilder {
    collaborator: String,
}

impl CollaboratorErrorBuilder {
    /// Create a new builder naming the failing collaborator.
    pub fn new(collaborator: impl Into<String>) -> Self {
        Self {
            collaborator: collaborator.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl fmt::Display) -> WanderlustError {
        WanderlustError::Collaborator {
            collaborator: self.collaborator,
            reason: reason.to_string(),
        }
    }
}

impl WanderlustError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for collaborator failures.
    pub fn collaborator(name: impl Into<String>) -> CollaboratorErrorBuilder {
        CollaboratorErrorBuilder::new(name)
    }

    /// Creates a precondition error for an operation that needs a selection.
    pub fn precondition(operation: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self::Precondition {
            operation: operation.into(),
            requirement: requirement.into(),
        }
    }

    /// Returns true for failures that originate in an external data source.
    ///
    /// Views render these as "request failed" rather than "no data".
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            Self::Collaborator { .. } | Self::CollaboratorTimeout { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WanderlustError::database(message).with_source(e))
    }
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, WanderlustError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_plan_message_includes_date_when_present() {
        let err = WanderlustError::DuplicatePlan {
            plan_type: PlanType::Holiday,
            name: "Bastille Day".to_string(),
            date: "2026-07-14".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Already saved: Holiday 'Bastille Day' on 2026-07-14"
        );

        let undated = WanderlustError::DuplicatePlan {
            plan_type: PlanType::Event,
            name: "Night Market".to_string(),
            date: String::new(),
        };
        assert_eq!(undated.to_string(), "Already saved: Event 'Night Market'");
    }

    #[test]
    fn test_collaborator_failure_classification() {
        let failure = WanderlustError::collaborator("cities").with_reason("HTTP 502");
        assert!(failure.is_collaborator_failure());
        assert_eq!(failure.to_string(), "cities request failed: HTTP 502");

        let timeout = WanderlustError::CollaboratorTimeout {
            collaborator: "holidays".to_string(),
            timeout: Duration::from_millis(250),
        };
        assert!(timeout.is_collaborator_failure());
        assert!(timeout.to_string().contains("250ms"));

        assert!(!WanderlustError::MissingSelection.is_collaborator_failure());
    }

    #[test]
    fn test_precondition_message() {
        let err = WanderlustError::precondition("select a city", "a country");
        assert_eq!(err.to_string(), "Cannot select a city: select a country first");
    }
}
