//! SQL grammar support.
//!
//! A grammar turns a [`Query`] descriptor into engine-specific SQL
//! text. The [`Grammar`] trait carries default methods covering the
//! common ANSI-flavored rendering, so a dialect implementation
//! overrides only the operations its engine renders differently.

mod generic;

pub use generic::GenericGrammar;

use crate::query::{LockSpec, Query};
use crate::value::SqlValue;

/// Joins clause fragments with single spaces, skipping empty ones.
#[must_use]
pub fn concatenate(fragments: &[String]) -> String {
    fragments
        .iter()
        .filter(|fragment| !fragment.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trait for dialect-specific SQL compilation.
///
/// Every method is a pure function of the descriptor plus the
/// grammar's own construction-time state; grammars hold no mutable
/// state and are safe to share across threads.
pub trait Grammar {
    /// Returns the name of the grammar.
    fn name(&self) -> &'static str;

    /// Compiles a select statement.
    fn compile_select(&self, query: &Query) -> String {
        let components = self.compile_components(query);
        concatenate(&components).trim().to_string()
    }

    /// Compiles every select clause in fixed order.
    ///
    /// Absent clauses compile to empty fragments, which
    /// [`concatenate`] skips.
    fn compile_components(&self, query: &Query) -> Vec<String> {
        vec![
            self.compile_columns(query),
            self.compile_from(query),
            self.compile_joins(query),
            self.compile_wheres(query),
            self.compile_groups(query),
            self.compile_havings(query),
            self.compile_orders(query),
            self.compile_limit(query),
            self.compile_offset(query),
            self.compile_lock_clause(query),
        ]
    }

    /// Compiles the select list, defaulting to the wildcard when the
    /// descriptor names no columns.
    fn compile_columns(&self, query: &Query) -> String {
        let select = if query.distinct {
            "select distinct"
        } else {
            "select"
        };

        if query.columns.is_empty() {
            format!("{select} *")
        } else {
            format!("{select} {}", self.columnize(&query.columns))
        }
    }

    /// Compiles the from clause.
    fn compile_from(&self, query: &Query) -> String {
        format!("from {}", self.wrap_table(&query.table))
    }

    /// Concatenates the pre-rendered join fragments.
    fn compile_joins(&self, query: &Query) -> String {
        query.joins.join(" ")
    }

    /// Compiles the where clause from the pre-rendered predicate.
    fn compile_wheres(&self, query: &Query) -> String {
        query
            .wheres
            .as_ref()
            .map_or_else(String::new, |predicate| format!("where {predicate}"))
    }

    /// Compiles the group by clause.
    fn compile_groups(&self, query: &Query) -> String {
        if query.groups.is_empty() {
            String::new()
        } else {
            format!("group by {}", self.columnize(&query.groups))
        }
    }

    /// Compiles the having clause from the pre-rendered predicate.
    fn compile_havings(&self, query: &Query) -> String {
        query
            .havings
            .as_ref()
            .map_or_else(String::new, |predicate| format!("having {predicate}"))
    }

    /// Compiles the order by clause from the pre-rendered fragments.
    fn compile_orders(&self, query: &Query) -> String {
        if query.orders.is_empty() {
            String::new()
        } else {
            format!("order by {}", query.orders.join(", "))
        }
    }

    /// Compiles the limit clause.
    fn compile_limit(&self, query: &Query) -> String {
        query
            .limit
            .map_or_else(String::new, |n| format!("limit {n}"))
    }

    /// Compiles the offset clause.
    fn compile_offset(&self, query: &Query) -> String {
        query
            .offset
            .map_or_else(String::new, |n| format!("offset {n}"))
    }

    /// Compiles the lock clause component of a select, if requested.
    fn compile_lock_clause(&self, query: &Query) -> String {
        query
            .lock
            .as_ref()
            .map_or_else(String::new, |spec| self.compile_lock(spec))
    }

    /// Compiles a lock specification into SQL text.
    ///
    /// Raw SQL passes through verbatim. The boolean forms compile to
    /// nothing here; choosing locking keywords is a dialect concern.
    fn compile_lock(&self, spec: &LockSpec) -> String {
        match spec {
            LockSpec::Raw(sql) => sql.clone(),
            LockSpec::Default(_) => String::new(),
        }
    }

    /// Compiles an insert statement with positional placeholders.
    fn compile_insert(&self, query: &Query, values: &[(&str, SqlValue)]) -> String {
        let table = self.wrap_table(&query.table);
        let columns: Vec<String> = values.iter().map(|(col, _)| String::from(*col)).collect();
        let placeholders: Vec<&str> = values.iter().map(|_| SqlValue::placeholder()).collect();

        format!(
            "insert into {table} ({}) values ({})",
            self.columnize(&columns),
            placeholders.join(", ")
        )
    }

    /// Compiles an insert statement that also retrieves a generated
    /// key.
    ///
    /// The default is the plain insert: engines with a native
    /// last-insert-id mechanism need no extra clause. Dialects that
    /// return the key through the statement itself override this.
    fn compile_insert_get_id(
        &self,
        query: &Query,
        values: &[(&str, SqlValue)],
        _sequence: Option<&str>,
    ) -> String {
        self.compile_insert(query, values)
    }

    /// Wraps a value that may be qualified (`table.column`) or
    /// aliased (`expr as name`) in identifier delimiters.
    fn wrap(&self, value: &str) -> String {
        if let Some((head, alias)) = value.split_once(" as ") {
            return format!("{} as {}", self.wrap(head), self.wrap_value(alias));
        }

        value
            .split('.')
            .map(|segment| self.wrap_value(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Wraps a table name in identifier delimiters.
    fn wrap_table(&self, table: &str) -> String {
        self.wrap(table)
    }

    /// Wraps a single identifier in the grammar's quote delimiter,
    /// doubling any embedded occurrence. The wildcard passes through
    /// untouched.
    fn wrap_value(&self, value: &str) -> String {
        if value == "*" {
            return String::from(value);
        }

        format!("\"{}\"", value.replace('"', "\"\""))
    }

    /// Wraps and comma-separates a column list.
    fn columnize(&self, columns: &[String]) -> String {
        columns
            .iter()
            .map(|column| self.wrap(column))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
