//! Span helpers for the optional `tracing` feature.

use tracing::{debug_span, Span};

/// Longest statement prefix recorded on a span.
const MAX_STATEMENT_LEN: usize = 120;

/// Span wrapping one schema statement.
///
/// Only the leading keyword and a bounded prefix of the SQL are recorded.
pub fn schema_statement_span(sql: &str) -> Span {
    let trimmed = sql.trim_start();
    let kind = trimmed.split_whitespace().next().unwrap_or("");
    debug_span!(
        "schema_statement",
        db.system = "postgresql",
        db.operation = kind,
        db.statement = statement_prefix(trimmed),
    )
}

fn statement_prefix(sql: &str) -> &str {
    match sql.char_indices().nth(MAX_STATEMENT_LEN) {
        Some((idx, _)) => &sql[..idx],
        None => sql,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_prefix_is_bounded() {
        let long = "x".repeat(500);
        assert_eq!(statement_prefix(&long).len(), MAX_STATEMENT_LEN);
        assert_eq!(statement_prefix("DROP TABLE levels"), "DROP TABLE levels");
    }

    #[test]
    fn test_span_builds_without_subscriber() {
        let span = schema_statement_span("  CREATE TABLE \"levels\" ()");
        let _entered = span.entered();
    }
}
