//! Schema changes shipped by this crate, in version order.

pub mod create_levels_table;

pub use create_levels_table::CreateLevelsTable;

use crate::migration::Migration;

/// Every migration, ascending by version, for a runner to register.
pub fn all() -> Vec<Box<dyn Migration>> {
    vec![Box::new(CreateLevelsTable)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_by_version() {
        let migrations = all();
        assert!(!migrations.is_empty());
        assert!(migrations.windows(2).all(|w| w[0].version() < w[1].version()));
    }
}
