//! Query expression model and serializer for the arXiv search grammar.
//!
//! The search API accepts a single `search_query` string in a fielded
//! boolean grammar, documented in
//! <https://info.arxiv.org/help/api/user-manual.html#query_details>:
//!
//! Field prefixes:
//!
//! | prefix          | field                                            |
//! |-----------------|--------------------------------------------------|
//! | `ti`            | Title                                            |
//! | `au`            | Author                                           |
//! | `abs`           | Abstract                                         |
//! | `co`            | Comment                                          |
//! | `jr`            | Journal Reference                                |
//! | `cat`           | Subject Category                                 |
//! | `rn`            | Report Number                                    |
//! | `id`            | Id (prefer the `id_list` request parameter)      |
//! | `all`           | All of the above                                 |
//! | `submittedDate` | Submission date range `[YYYYMMDDhhmm TO ...]`    |
//!
//! Boolean operators: `AND`, `OR`, `ANDNOT`. There is no standalone `NOT`
//! and no `OR NOT`; negation exists only as the right-hand side of
//! `ANDNOT`.
//!
//! Special symbols: parentheses group boolean expressions, double quotes
//! group words into phrases, and spaces separate terms. Literal quotes and
//! parentheses inside a term value have no escape and are rejected at
//! construction.
//!
//! Queries are immutable trees built by the per-field factories on
//! [`Query`] and combined with [`and`]/[`or`]/[`andnot`] (or the `&`, `|`,
//! `!` operator sugar). Every invalid shape is rejected while building;
//! rendering a successfully built query never fails.

mod date;
mod expr;
mod fields;
mod render;

pub use date::DateBound;
pub use expr::{and, andnot, or, Negation, Operand, Query};
pub use fields::{Field, FieldTerm, FieldValue};

use thiserror::Error;

/// Query construction error types.
///
/// All variants are raised while a query is being built; a [`Query`] value
/// in hand always renders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A value/field combination the grammar cannot represent.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A boolean shape the grammar cannot express.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
