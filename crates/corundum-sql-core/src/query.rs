//! The query descriptor consumed by grammar implementations.
//!
//! A [`Query`] is a passive bag of compilation inputs: identifiers the
//! grammar will quote (table, columns, groups) and clause fragments the
//! caller has already rendered (joins, predicates, orderings). Grammars
//! never inspect fragment text; they only place it in clause order.

/// Row-locking requested for a select statement.
///
/// The boolean form asks the dialect for its own locking keywords; the
/// raw form is caller-supplied SQL passed through verbatim and trusted
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockSpec {
    /// Dialect-chosen locking clause: `true` for an exclusive row lock,
    /// `false` for a shared one.
    Default(bool),
    /// Verbatim locking SQL supplied by the caller.
    Raw(String),
}

/// A database-independent description of a single statement.
///
/// Built fluently in the style of the rest of the workspace:
///
/// ```rust
/// use corundum_sql_core::Query;
///
/// let query = Query::table("orders")
///     .columns(&["id", "total"])
///     .wheres("total > ?")
///     .limit(10)
///     .offset(20);
/// ```
///
/// No field is validated here; a descriptor that makes no semantic
/// sense produces SQL that makes no semantic sense. `limit` and
/// `offset` are `u64`, so the non-negativity invariant holds by
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Table the statement targets (quoted by the grammar).
    pub table: String,
    /// Select list. Empty means "default to `*` at compile time".
    pub columns: Vec<String>,
    /// Whether the select list is DISTINCT.
    pub distinct: bool,
    /// Pre-rendered join fragments, e.g. `inner join x on a = b`.
    pub joins: Vec<String>,
    /// Pre-rendered predicate text, without the `where` keyword.
    pub wheres: Option<String>,
    /// Grouping columns (quoted by the grammar).
    pub groups: Vec<String>,
    /// Pre-rendered having text, without the `having` keyword.
    pub havings: Option<String>,
    /// Pre-rendered ordering fragments, e.g. `total desc`.
    pub orders: Vec<String>,
    /// Maximum number of rows to return.
    pub limit: Option<u64>,
    /// Number of rows to skip.
    pub offset: Option<u64>,
    /// Row-locking request, if any.
    pub lock: Option<LockSpec>,
}

impl Query {
    /// Creates a descriptor targeting `table`.
    #[must_use]
    pub fn table(table: &str) -> Self {
        Self {
            table: String::from(table),
            columns: vec![],
            distinct: false,
            joins: vec![],
            wheres: None,
            groups: vec![],
            havings: None,
            orders: vec![],
            limit: None,
            offset: None,
            lock: None,
        }
    }

    /// Sets the select list.
    #[must_use]
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns = cols.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Marks the select list DISTINCT.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Appends a pre-rendered join fragment.
    #[must_use]
    pub fn join(mut self, fragment: &str) -> Self {
        self.joins.push(String::from(fragment));
        self
    }

    /// Sets the pre-rendered predicate text.
    #[must_use]
    pub fn wheres(mut self, predicate: &str) -> Self {
        self.wheres = Some(String::from(predicate));
        self
    }

    /// Sets the grouping columns.
    #[must_use]
    pub fn group_by(mut self, cols: &[&str]) -> Self {
        self.groups = cols.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Sets the pre-rendered having text.
    #[must_use]
    pub fn having(mut self, predicate: &str) -> Self {
        self.havings = Some(String::from(predicate));
        self
    }

    /// Sets the pre-rendered ordering fragments.
    #[must_use]
    pub fn order_by(mut self, fragments: &[&str]) -> Self {
        self.orders = fragments.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Sets the row limit.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets the row offset.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Requests a row lock.
    #[must_use]
    pub fn lock(mut self, spec: LockSpec) -> Self {
        self.lock = Some(spec);
        self
    }

    /// Returns the effective limit, treating "absent" as zero.
    ///
    /// Grammars branch on `effective_limit() > 0`; a caller that sets
    /// an explicit limit of zero gets the same treatment as one that
    /// never set a limit at all.
    #[must_use]
    pub const fn effective_limit(&self) -> u64 {
        match self.limit {
            Some(n) => n,
            None => 0,
        }
    }

    /// Returns the effective offset, treating "absent" as zero.
    #[must_use]
    pub const fn effective_offset(&self) -> u64 {
        match self.offset {
            Some(n) => n,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = Query::table("users");
        assert_eq!(query.table, "users");
        assert!(query.columns.is_empty());
        assert!(!query.distinct);
        assert_eq!(query.effective_limit(), 0);
        assert_eq!(query.effective_offset(), 0);
        assert!(query.lock.is_none());
    }

    #[test]
    fn test_fluent_building() {
        let query = Query::table("orders")
            .columns(&["id", "total"])
            .join("inner join users on users.id = orders.user_id")
            .wheres("total > ?")
            .group_by(&["status"])
            .having("count(*) > 1")
            .order_by(&["total desc"])
            .limit(10)
            .offset(20);

        assert_eq!(query.columns, vec!["id", "total"]);
        assert_eq!(query.joins.len(), 1);
        assert_eq!(query.wheres.as_deref(), Some("total > ?"));
        assert_eq!(query.groups, vec!["status"]);
        assert_eq!(query.havings.as_deref(), Some("count(*) > 1"));
        assert_eq!(query.orders, vec!["total desc"]);
        assert_eq!(query.effective_limit(), 10);
        assert_eq!(query.effective_offset(), 20);
    }

    #[test]
    fn test_explicit_zero_limit_reads_as_absent() {
        let query = Query::table("users").limit(0);
        assert_eq!(query.limit, Some(0));
        assert_eq!(query.effective_limit(), 0);
    }

    #[test]
    fn test_lock_spec_variants() {
        let exclusive = Query::table("users").lock(LockSpec::Default(true));
        assert_eq!(exclusive.lock, Some(LockSpec::Default(true)));

        let raw = Query::table("users").lock(LockSpec::Raw(String::from("for update nowait")));
        assert_eq!(
            raw.lock,
            Some(LockSpec::Raw(String::from("for update nowait")))
        );
    }
}
