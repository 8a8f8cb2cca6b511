//! # corundum-sql-oracle
//!
//! Oracle-specific grammar for `corundum-sql-core`.
//!
//! # How Oracle differs from other dialects
//!
//! - **No native LIMIT/OFFSET**: Oracle (before 12c's `FETCH FIRST`)
//!   paginates through the `rownum` pseudo-column. This grammar never
//!   emits inline limit/offset clauses; it wraps the whole statement
//!   in nested selects filtered on `rownum` instead. See
//!   [`OracleGrammar`] for the two wrapping shapes and the offset-only
//!   caveat.
//! - **Generated keys**: an insert retrieves its key through a
//!   trailing `returning <column> into ?` clause with an output bind,
//!   not through a last-insert-id call.
//! - **Identifier quoting is optional**: quoted identifiers are
//!   case-sensitive in Oracle, which breaks schemas created without
//!   quotes. The grammar therefore only quotes identifiers when
//!   constructed with quoting enabled (see [`OracleConfig`]).
//!
//! ## Example
//!
//! ```rust
//! use corundum_sql_core::{Grammar, Query};
//! use corundum_sql_oracle::OracleGrammar;
//!
//! let grammar = OracleGrammar::new(true);
//! let query = Query::table("orders").limit(10).offset(20);
//!
//! assert_eq!(
//!     grammar.compile_select(&query),
//!     "select t2.* from ( select rownum as \"rn\", t1.* from \
//!      ( select * from \"orders\" ) t1 ) t2 where t2.\"rn\" between 21 and 30"
//! );
//! ```

mod config;
mod error;
mod grammar;

pub use config::OracleConfig;
pub use error::{ConfigError, Result};
pub use grammar::OracleGrammar;
