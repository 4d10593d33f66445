//! Migration trait definition

use super::schema_manager::SchemaManager;
use crate::SchemaError;

/// A versioned, reversible schema change
///
/// Calls are synchronous: `may_postgres` blocks the calling coroutine, not
/// the thread.
pub trait Migration: Send + Sync {
    /// Human-readable identifier
    fn name(&self) -> &str;

    /// Version timestamp (`YYYYMMDDHHMMSS`); runners apply in ascending order
    fn version(&self) -> i64;

    /// Apply the change
    ///
    /// Not required to tolerate a previous successful run; the runner guards
    /// against re-application.
    fn up(&self, manager: &SchemaManager<'_>) -> Result<(), SchemaError>;

    /// Undo the change
    fn down(&self, manager: &SchemaManager<'_>) -> Result<(), SchemaError>;
}
