//! Migration: Create Levels
//! Version: 20250220132124
//! Description: Creates `levels`, one row per level of a game
//!
//! Requires `games(game_id)`. Levels are removed with their game.

use crate::entity::{Games, LevelType, Levels};
use crate::migration::{Migration, SchemaManager};
use crate::{DbExecutor, SchemaError};
use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, IdenStatic, Table, TableCreateStatement, TableDropStatement,
};

pub const NAME: &str = "create_levels_table";
pub const VERSION: i64 = 20250220132124;
pub const GAME_FOREIGN_KEY: &str = "levels_game_id_foreign";

pub struct CreateLevelsTable;

impl Migration for CreateLevelsTable {
    fn name(&self) -> &str {
        NAME
    }

    fn version(&self) -> i64 {
        VERSION
    }

    fn up(&self, manager: &SchemaManager<'_>) -> Result<(), SchemaError> {
        manager.create_table(create_levels_table_statement())
    }

    fn down(&self, manager: &SchemaManager<'_>) -> Result<(), SchemaError> {
        manager.drop_table(drop_levels_table_statement())
    }
}

/// Create `levels`.
///
/// Fails with the driver's error if `games` is missing or `levels` already
/// exists. Nothing is retried.
pub fn apply(executor: &dyn DbExecutor) -> Result<(), SchemaError> {
    log::info!("applying migration {VERSION} {NAME}");
    CreateLevelsTable.up(&SchemaManager::new(executor))
}

/// Drop `levels` and every row in it. A missing table is not an error.
pub fn revert(executor: &dyn DbExecutor) -> Result<(), SchemaError> {
    log::info!("reverting migration {VERSION} {NAME}");
    CreateLevelsTable.down(&SchemaManager::new(executor))
}

/// `CREATE TABLE "levels"` without `IF NOT EXISTS`; a second apply fails.
pub fn create_levels_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Levels::Table)
        .col(
            ColumnDef::new(Levels::LevelId)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Levels::GameId).big_integer().not_null())
        .col(ColumnDef::new(Levels::LevelNumber).integer().not_null())
        .col(
            ColumnDef::new(Levels::LevelType)
                .string_len(255)
                .not_null()
                .extra(level_type_check()),
        )
        .col(ColumnDef::new(Levels::CreatedAt).timestamp().null())
        .col(ColumnDef::new(Levels::UpdatedAt).timestamp().null())
        .foreign_key(
            ForeignKey::create()
                .name(GAME_FOREIGN_KEY)
                .from(Levels::Table, Levels::GameId)
                .to(Games::Table, Games::GameId)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

/// `DROP TABLE IF EXISTS "levels"`.
pub fn drop_levels_table_statement() -> TableDropStatement {
    Table::drop().table(Levels::Table).if_exists().to_owned()
}

// Enumerated column as a check constraint; values come from `LevelType`.
fn level_type_check() -> String {
    let allowed = LevelType::ALL
        .iter()
        .map(|t| format!("'{}'", t.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(r#"CHECK ("{}" IN ({allowed}))"#, Levels::LevelType.as_str())
}
