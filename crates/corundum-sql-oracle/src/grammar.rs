//! Oracle grammar implementation.

use tracing::debug;

use corundum_sql_core::grammar::{concatenate, GenericGrammar, Grammar};
use corundum_sql_core::query::{LockSpec, Query};
use corundum_sql_core::value::SqlValue;

use crate::config::OracleConfig;

/// Oracle grammar.
///
/// Composes a [`GenericGrammar`] for everything Oracle renders the
/// standard way and overrides the four operations it does not:
/// pagination (rownum wrapping), generated-key retrieval
/// (`returning ... into ?`), row locking, and conditional identifier
/// quoting.
///
/// The grammar holds no mutable state; `quoting` is fixed at
/// construction, so a single instance can compile from any number of
/// threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleGrammar {
    base: GenericGrammar,
    quoting: bool,
}

impl OracleGrammar {
    /// Creates an Oracle grammar.
    ///
    /// `quoting` controls whether identifiers are wrapped in `"`
    /// delimiters or emitted bare; quoted identifiers are
    /// case-sensitive in Oracle, so this is off in most deployments.
    #[must_use]
    pub const fn new(quoting: bool) -> Self {
        Self {
            base: GenericGrammar::new(),
            quoting,
        }
    }

    /// Creates an Oracle grammar from a configuration.
    #[must_use]
    pub const fn from_config(config: &OracleConfig) -> Self {
        Self::new(config.quoting)
    }

    /// Returns whether identifier quoting is enabled.
    #[must_use]
    pub const fn quoting(&self) -> bool {
        self.quoting
    }

    /// Wraps an already-assembled select in the rownum range filter.
    fn compile_ansi_offset(query: &Query, components: &[String]) -> String {
        let constraint =
            Self::compile_row_constraint(query.effective_offset(), query.effective_limit());
        let sql = concatenate(components);

        debug!("emulating limit/offset with rownum wrapping ({constraint})");

        Self::compile_table_expression(&sql, &constraint, query.effective_limit() > 0)
    }

    /// Compiles the numeric row-range predicate.
    ///
    /// `rownum` is 1-based, so a zero-based offset of 10 admits rows
    /// starting at 11, and a limit of 5 closes the range at 15
    /// inclusive.
    fn compile_row_constraint(offset: u64, limit: u64) -> String {
        let start = offset + 1;

        if limit > 0 {
            let finish = offset + limit;
            format!("between {start} and {finish}")
        } else {
            format!(">= {start}")
        }
    }

    /// Wraps the inner select in one or two nested table expressions.
    ///
    /// With a limit, the innermost subquery (`t1`) materializes the
    /// rows, the middle select assigns `rownum` under the alias `rn`,
    /// and the outer select (`t2`) filters on the range.
    ///
    /// Without a limit the filter sits directly on `rownum` in a
    /// single wrapping select. Oracle assigns `rownum` as rows pass
    /// the filter, so `rownum >= N` can never be satisfied for N > 1
    /// and an offset without a limit returns no rows when executed.
    /// That is the long-observed contract of this grammar and is kept
    /// as-is; callers that want a pure offset must supply a limit.
    fn compile_table_expression(sql: &str, constraint: &str, has_limit: bool) -> String {
        if has_limit {
            format!(
                "select t2.* from ( select rownum as \"rn\", t1.* from ( {sql} ) t1 ) t2 \
                 where t2.\"rn\" {constraint}"
            )
        } else {
            format!("select * from ( {sql} ) where rownum {constraint}")
        }
    }
}

impl Grammar for OracleGrammar {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn compile_select(&self, query: &Query) -> String {
        let components = self.compile_components(query);

        if query.effective_limit() > 0 || query.effective_offset() > 0 {
            return Self::compile_ansi_offset(query, &components);
        }

        concatenate(&components).trim().to_string()
    }

    /// Limiting happens exclusively through rownum wrapping.
    fn compile_limit(&self, _query: &Query) -> String {
        String::new()
    }

    /// Offsets happen exclusively through rownum wrapping.
    fn compile_offset(&self, _query: &Query) -> String {
        String::new()
    }

    fn compile_lock(&self, spec: &LockSpec) -> String {
        match spec {
            LockSpec::Raw(sql) => sql.clone(),
            LockSpec::Default(true) => String::from("for update"),
            // Not valid Oracle locking syntax, but it is the
            // long-standing output of this grammar and callers match
            // on it. Kept verbatim; see DESIGN.md.
            LockSpec::Default(false) => String::from("lock in share mode"),
        }
    }

    fn compile_insert_get_id(
        &self,
        query: &Query,
        values: &[(&str, SqlValue)],
        sequence: Option<&str>,
    ) -> String {
        let sequence = sequence.unwrap_or("id");

        format!(
            "{} returning {} into ?",
            self.compile_insert(query, values),
            self.wrap(sequence)
        )
    }

    fn wrap_value(&self, value: &str) -> String {
        if self.quoting {
            self.base.wrap_value(value)
        } else {
            String::from(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corundum_sql_core::value::ToSqlValue;

    #[test]
    fn test_row_constraint_with_limit() {
        assert_eq!(
            OracleGrammar::compile_row_constraint(10, 5),
            "between 11 and 15"
        );
        assert_eq!(
            OracleGrammar::compile_row_constraint(0, 10),
            "between 1 and 10"
        );
    }

    #[test]
    fn test_row_constraint_without_limit() {
        assert_eq!(OracleGrammar::compile_row_constraint(10, 0), ">= 11");
        assert_eq!(OracleGrammar::compile_row_constraint(0, 0), ">= 1");
    }

    #[test]
    fn test_table_expression_double_wrap() {
        assert_eq!(
            OracleGrammar::compile_table_expression(
                "select * from \"orders\"",
                "between 21 and 30",
                true
            ),
            "select t2.* from ( select rownum as \"rn\", t1.* from \
             ( select * from \"orders\" ) t1 ) t2 where t2.\"rn\" between 21 and 30"
        );
    }

    #[test]
    fn test_table_expression_single_wrap() {
        assert_eq!(
            OracleGrammar::compile_table_expression("select * from \"orders\"", ">= 11", false),
            "select * from ( select * from \"orders\" ) where rownum >= 11"
        );
    }

    #[test]
    fn test_no_inline_limit_or_offset_clauses() {
        let grammar = OracleGrammar::new(true);
        let query = Query::table("users").limit(10).offset(20);

        assert_eq!(grammar.compile_limit(&query), "");
        assert_eq!(grammar.compile_offset(&query), "");
    }

    #[test]
    fn test_lock_variants() {
        let grammar = OracleGrammar::new(false);

        assert_eq!(
            grammar.compile_lock(&LockSpec::Default(true)),
            "for update"
        );
        assert_eq!(
            grammar.compile_lock(&LockSpec::Default(false)),
            "lock in share mode"
        );
        assert_eq!(
            grammar.compile_lock(&LockSpec::Raw(String::from("custom clause"))),
            "custom clause"
        );
    }

    #[test]
    fn test_wrap_value_respects_quoting_flag() {
        assert_eq!(OracleGrammar::new(false).wrap_value("orders"), "orders");
        assert_eq!(OracleGrammar::new(true).wrap_value("orders"), "\"orders\"");
        assert_eq!(
            OracleGrammar::new(true).wrap_value("odd\"name"),
            "\"odd\"\"name\""
        );
    }

    #[test]
    fn test_insert_get_id_defaults_sequence_to_id() {
        let grammar = OracleGrammar::new(true);
        let query = Query::table("users");
        let values = [("name", "Alice".to_sql_value())];

        assert_eq!(
            grammar.compile_insert_get_id(&query, &values, None),
            "insert into \"users\" (\"name\") values (?) returning \"id\" into ?"
        );
    }

    #[test]
    fn test_insert_get_id_without_quoting() {
        let grammar = OracleGrammar::new(false);
        let query = Query::table("users");
        let values = [("name", "Alice".to_sql_value())];

        assert_eq!(
            grammar.compile_insert_get_id(&query, &values, Some("users_seq")),
            "insert into users (name) values (?) returning users_seq into ?"
        );
    }
}
