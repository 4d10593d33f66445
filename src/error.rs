//! Error type shared by every schema operation.

use may_postgres::error::SqlState;
use thiserror::Error;

/// Failure raised while connecting or while executing a schema statement.
///
/// Driver errors are carried unchanged so the calling runner can decide
/// whether to abort its batch.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// `PostgreSQL` error from `may_postgres`
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] may_postgres::Error),

    /// Row could not be decoded into the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Value outside the `level_type` enumeration
    #[error("Invalid level type: {0:?} (expected one of: box, balloon)")]
    InvalidLevelType(String),
}

impl SchemaError {
    /// SQLSTATE reported by the server, if this is a database error.
    pub fn sql_state(&self) -> Option<&SqlState> {
        match self {
            SchemaError::Postgres(e) => e.code(),
            _ => None,
        }
    }

    /// The table being created already exists.
    pub fn is_duplicate_table(&self) -> bool {
        self.sql_state() == Some(&SqlState::DUPLICATE_TABLE)
    }

    /// A referenced table (e.g. `games`) does not exist.
    pub fn is_undefined_table(&self) -> bool {
        self.sql_state() == Some(&SqlState::UNDEFINED_TABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::Decode("level_type".to_string());
        assert!(err.to_string().contains("Decode error"));

        let err = SchemaError::InvalidLevelType("triangle".to_string());
        let display = err.to_string();
        assert!(display.contains("\"triangle\""));
        assert!(display.contains("box, balloon"));
    }

    #[test]
    fn test_non_database_errors_have_no_sql_state() {
        let err = SchemaError::Decode("x".to_string());
        assert!(err.sql_state().is_none());
        assert!(!err.is_duplicate_table());
        assert!(!err.is_undefined_table());
    }
}
