//! The `levels` table: column identifiers, the `level_type` enumeration and
//! the row type.

use crate::SchemaError;
use chrono::NaiveDateTime;
use may_postgres::Row;
use sea_query::{Iden, IdenStatic};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column identifiers of `levels`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Levels {
    Table,
    LevelId,
    GameId,
    LevelNumber,
    LevelType,
    CreatedAt,
    UpdatedAt,
}

impl Levels {
    /// Every column, in table order.
    pub const COLUMNS: [Levels; 6] = [
        Levels::LevelId,
        Levels::GameId,
        Levels::LevelNumber,
        Levels::LevelType,
        Levels::CreatedAt,
        Levels::UpdatedAt,
    ];
}

impl IdenStatic for Levels {
    fn as_str(&self) -> &'static str {
        match self {
            Levels::Table => "levels",
            Levels::LevelId => "level_id",
            Levels::GameId => "game_id",
            Levels::LevelNumber => "level_number",
            Levels::LevelType => "level_type",
            Levels::CreatedAt => "created_at",
            Levels::UpdatedAt => "updated_at",
        }
    }
}

impl Iden for Levels {
    fn unquoted(&self) -> &str {
        self.as_str()
    }
}

/// Allowed values of `levels.level_type`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelType {
    Box,
    Balloon,
}

impl LevelType {
    /// The complete enumeration; the table's check constraint is built from it.
    pub const ALL: [LevelType; 2] = [LevelType::Box, LevelType::Balloon];

    pub fn as_str(&self) -> &'static str {
        match self {
            LevelType::Box => "box",
            LevelType::Balloon => "balloon",
        }
    }
}

impl fmt::Display for LevelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact match only; the database compares case-sensitively too.
        LevelType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::InvalidLevelType(s.to_string()))
    }
}

/// One row of `levels`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub level_id: i64,
    pub game_id: i64,
    pub level_number: i32,
    pub level_type: LevelType,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Level {
    /// Decode a row selected with the columns of [`Levels::COLUMNS`], by name.
    pub fn from_row(row: &Row) -> Result<Self, SchemaError> {
        let level_type: String = get(row, Levels::LevelType)?;

        Ok(Self {
            level_id: get(row, Levels::LevelId)?,
            game_id: get(row, Levels::GameId)?,
            level_number: get(row, Levels::LevelNumber)?,
            level_type: level_type.parse()?,
            created_at: get(row, Levels::CreatedAt)?,
            updated_at: get(row, Levels::UpdatedAt)?,
        })
    }
}

fn get<'a, T>(row: &'a Row, column: Levels) -> Result<T, SchemaError>
where
    T: may_postgres::types::FromSql<'a>,
{
    row.try_get(column.as_str())
        .map_err(|e| SchemaError::Decode(format!("{}: {e}", column.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        let names: Vec<&str> = Levels::COLUMNS.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec!["level_id", "game_id", "level_number", "level_type", "created_at", "updated_at"]
        );
        assert_eq!(Levels::Table.unquoted(), "levels");
    }

    #[test]
    fn test_level_type_parse() {
        assert_eq!("box".parse::<LevelType>().unwrap(), LevelType::Box);
        assert_eq!("balloon".parse::<LevelType>().unwrap(), LevelType::Balloon);
    }

    #[test]
    fn test_level_type_rejects_values_outside_enumeration() {
        for bad in ["triangle", "Box", "BALLOON", "", " box"] {
            let err = bad.parse::<LevelType>().unwrap_err();
            assert!(matches!(err, SchemaError::InvalidLevelType(ref v) if v == bad));
        }
    }

    #[test]
    fn test_level_type_display_matches_stored_value() {
        for t in LevelType::ALL {
            assert_eq!(t.to_string().parse::<LevelType>().unwrap(), t);
        }
    }

    #[test]
    fn test_level_serde_uses_stored_strings() {
        let level = Level {
            level_id: 5,
            game_id: 1,
            level_number: 3,
            level_type: LevelType::Box,
            created_at: None,
            updated_at: None,
        };

        let json = serde_json::to_value(&level).unwrap();
        assert_eq!(json["level_type"], "box");
        assert!(json["created_at"].is_null());

        let bad = serde_json::json!({
            "level_id": 5,
            "game_id": 1,
            "level_number": 3,
            "level_type": "triangle",
            "created_at": null,
            "updated_at": null,
        });
        assert!(serde_json::from_value::<Level>(bad).is_err());
    }
}
