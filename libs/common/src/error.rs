//! Custom error types for the common library
//!
//! This module defines the storefront's data-access error taxonomy. Every
//! repository operation resolves to one of these variants so that callers
//! can map them onto HTTP responses uniformly.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error occurred while establishing the database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Connection settings were malformed (bad URL, unparsable values)
    #[error("Database configuration error: {0}")]
    Configuration(String),

    /// Error occurred during database migration
    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A field failed validation before the write was attempted
    #[error("Validation failed for field '{field}': {message}")]
    Validation { field: &'static str, message: String },

    /// A uniqueness constraint was violated at the storage engine
    #[error("Value for '{field}' already exists")]
    Conflict { field: String },

    /// The referenced record does not exist
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Error occurred during query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),
}

impl StoreError {
    /// Shorthand for a field-level validation failure
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        StoreError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Classify an sqlx error raised by a write. Uniqueness violations
    /// become `Conflict` carrying the offending column, foreign-key
    /// violations become `NotFound` for the referenced resource, anything
    /// else stays a `Query` error.
    pub fn from_write(err: SqlxError, referenced: &'static str) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                let field = db_err
                    .constraint()
                    .map(constraint_field)
                    .unwrap_or("value")
                    .to_string();
                return StoreError::Conflict { field };
            }
            if db_err.is_foreign_key_violation() {
                return StoreError::NotFound {
                    resource: referenced,
                };
            }
        }
        StoreError::Query(err)
    }
}

/// Map a Postgres unique-constraint name (`<table>_<column>_key`) back to
/// the column the admin form submitted.
fn constraint_field(constraint: &str) -> &str {
    constraint
        .strip_suffix("_key")
        .and_then(|rest| rest.split_once('_'))
        .map(|(_table, column)| column)
        .unwrap_or(constraint)
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_field_maps_to_column() {
        assert_eq!(constraint_field("categories_name_key"), "name");
        assert_eq!(constraint_field("categories_slug_key"), "slug");
        assert_eq!(constraint_field("users_external_id_key"), "external_id");
        assert_eq!(constraint_field("no_key_suffix_here"), "no_key_suffix_here");
    }

    #[test]
    fn test_validation_shorthand() {
        let err = StoreError::validation("rating", "must be between 1 and 5");
        match err {
            StoreError::Validation { field, message } => {
                assert_eq!(field, "rating");
                assert_eq!(message, "must be between 1 and 5");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
