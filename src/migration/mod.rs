//! Migration contract between a schema change and the runner that calls it.
//!
//! A runner owns the connection, decides ordering, records completion and
//! wraps each call in a transaction where the database allows it. A schema
//! change only implements [`Migration`] and issues statements through the
//! borrowed [`SchemaManager`].
//!
//! # Example
//!
//! ```rust,no_run
//! use levels_schema::migration::{Migration, SchemaManager};
//! use levels_schema::SchemaError;
//! use sea_query::{ColumnDef, Table};
//!
//! pub struct CreateUsersTable;
//!
//! impl Migration for CreateUsersTable {
//!     fn name(&self) -> &str {
//!         "create_users_table"
//!     }
//!
//!     fn version(&self) -> i64 {
//!         20240120120000
//!     }
//!
//!     fn up(&self, manager: &SchemaManager<'_>) -> Result<(), SchemaError> {
//!         let table = Table::create()
//!             .table("users")
//!             .col(ColumnDef::new("id").big_integer().not_null().auto_increment().primary_key())
//!             .to_owned();
//!         manager.create_table(table)
//!     }
//!
//!     fn down(&self, manager: &SchemaManager<'_>) -> Result<(), SchemaError> {
//!         manager.drop_table(Table::drop().table("users").if_exists().to_owned())
//!     }
//! }
//! ```

pub mod migration;
pub mod schema_manager;

pub use migration::Migration;
pub use schema_manager::{ColumnInfo, SchemaManager};
