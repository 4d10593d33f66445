//! SchemaManager - Provides methods for schema operations in migrations

use crate::{DbExecutor, SchemaError};
use may_postgres::types::ToSql;
use may_postgres::Row;
use sea_query::{PostgresQueryBuilder, TableCreateStatement, TableDropStatement};

const TABLE_EXISTS_SQL: &str = "SELECT EXISTS (
    SELECT 1 FROM information_schema.tables
    WHERE table_schema = current_schema() AND table_name::text = $1
)";

const TABLE_COLUMNS_SQL: &str = "SELECT column_name::text, data_type::text, is_nullable::text
    FROM information_schema.columns
    WHERE table_schema = current_schema() AND table_name::text = $1
    ORDER BY ordinal_position";

/// Column as reported by `information_schema.columns`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub is_nullable: bool,
}

impl ColumnInfo {
    fn from_row(row: &Row) -> Result<Self, SchemaError> {
        let decode = |e: may_postgres::Error| SchemaError::Decode(format!("column info: {e}"));
        let name: String = row.try_get(0).map_err(decode)?;
        let data_type: String = row.try_get(1).map_err(decode)?;
        let is_nullable: String = row.try_get(2).map_err(decode)?;

        Ok(Self {
            name,
            data_type,
            is_nullable: is_nullable == "YES",
        })
    }
}

/// SchemaManager renders DDL for PostgreSQL and runs it on a borrowed executor
///
/// It never opens, closes or commits the connection.
pub struct SchemaManager<'a> {
    executor: &'a dyn DbExecutor,
}

impl<'a> SchemaManager<'a> {
    pub fn new(executor: &'a dyn DbExecutor) -> Self {
        Self { executor }
    }

    /// Create a table
    ///
    /// # Example
    /// ```rust,no_run
    /// # use levels_schema::migration::SchemaManager;
    /// # fn run(manager: &SchemaManager<'_>) -> Result<(), levels_schema::SchemaError> {
    /// use sea_query::{ColumnDef, Table};
    ///
    /// let table = Table::create()
    ///     .table("users")
    ///     .col(ColumnDef::new("id").integer().not_null().auto_increment().primary_key())
    ///     .to_owned();
    ///
    /// manager.create_table(table)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_table(&self, table: TableCreateStatement) -> Result<(), SchemaError> {
        let sql = table.build(PostgresQueryBuilder);
        self.execute(&sql, &[])
    }

    /// Drop a table
    pub fn drop_table(&self, table: TableDropStatement) -> Result<(), SchemaError> {
        let sql = table.build(PostgresQueryBuilder);
        self.execute(&sql, &[])
    }

    /// Execute raw SQL
    pub fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<(), SchemaError> {
        log::debug!("schema statement: {sql}");
        self.executor.execute(sql, params).map(|_| ())
    }

    /// Whether `table` exists in the current schema
    pub fn has_table(&self, table: &str) -> Result<bool, SchemaError> {
        let row = self.executor.query_one(TABLE_EXISTS_SQL, &[&table])?;
        row.try_get(0)
            .map_err(|e| SchemaError::Decode(format!("table exists: {e}")))
    }

    /// Columns of `table` in ordinal order; empty when the table is absent
    pub fn columns(&self, table: &str) -> Result<Vec<ColumnInfo>, SchemaError> {
        self.executor
            .query_all(TABLE_COLUMNS_SQL, &[&table])?
            .iter()
            .map(ColumnInfo::from_row)
            .collect()
    }
}
