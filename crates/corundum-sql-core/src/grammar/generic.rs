//! Generic SQL grammar.

use super::Grammar;

/// A generic grammar rendering ANSI-flavored SQL.
///
/// Takes every default from the [`Grammar`] trait: inline
/// `limit`/`offset` clauses, `"` identifier quoting, raw lock
/// passthrough. Dialect crates embed one of these and delegate to it
/// for the behavior they do not override.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericGrammar;

impl GenericGrammar {
    /// Creates a new generic grammar.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Grammar for GenericGrammar {
    fn name(&self) -> &'static str {
        "generic"
    }
}
