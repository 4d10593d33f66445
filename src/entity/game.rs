//! Identifiers for the parts of `games` that `levels` references.
//!
//! The `games` table is defined elsewhere; only its name and key are needed here.

use sea_query::{Iden, IdenStatic};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Games {
    Table,
    GameId,
}

impl IdenStatic for Games {
    fn as_str(&self) -> &'static str {
        match self {
            Games::Table => "games",
            Games::GameId => "game_id",
        }
    }
}

impl Iden for Games {
    fn unquoted(&self) -> &str {
        self.as_str()
    }
}
