//! # corundum-sql-core
//!
//! The dialect-independent half of the corundum-sql query compiler.
//!
//! This crate provides:
//! - A [`Query`] descriptor that carries the column list, limit/offset,
//!   lock mode, and the already-rendered clause fragments owned by the
//!   caller's query builder
//! - A [`Grammar`] trait whose default methods supply ANSI-flavored
//!   clause compilation, so a dialect overrides only what differs
//! - The base identifier-quoting algorithm (`"` delimiters, embedded
//!   quotes doubled) shared by every dialect that quotes at all
//!
//! Compilation is pure string assembly: no parsing, no execution, no
//! validation of the descriptor. Dialect crates such as
//! `corundum-sql-oracle` compose a [`GenericGrammar`] and override the
//! handful of operations their engine renders differently.
//!
//! ## Example
//!
//! ```rust
//! use corundum_sql_core::{GenericGrammar, Grammar, Query};
//!
//! let query = Query::table("users")
//!     .columns(&["id", "name"])
//!     .wheres("active = ?")
//!     .order_by(&["name"]);
//!
//! let sql = GenericGrammar::new().compile_select(&query);
//! assert_eq!(sql, "select \"id\", \"name\" from \"users\" where active = ? order by name");
//! ```

pub mod grammar;
pub mod query;
pub mod value;

pub use grammar::{concatenate, GenericGrammar, Grammar};
pub use query::{LockSpec, Query};
pub use value::{SqlValue, ToSqlValue};
