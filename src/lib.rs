//! # arXiv Query
//!
//! A typed query builder, category taxonomy, and article-identifier parser
//! for the arXiv search API.
//!
//! Queries are immutable expression trees built through per-field
//! factories and boolean combinators, then rendered to the API's
//! `search_query` grammar. Every invalid construction is rejected while
//! building, so a [`Query`] value always renders to a syntactically valid
//! string. The crate performs no I/O: issuing requests and parsing
//! responses belong to HTTP clients layered on top.
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - [`query`]: Expression model, per-field factories, combinators, and
//!   the grammar serializer
//! - [`taxonomy`]: The Group → Archive → Category catalog with curated
//!   collections and legacy ids
//! - [`ident`]: Parser for legacy and modern article identifiers
//!
//! ## Example
//!
//! ```
//! use arxiv_query::{catalog, DateBound, Query};
//! use chrono::NaiveDate;
//!
//! let since = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! let q = Query::category(catalog().ml_karpathy())?
//!     .and(Query::title("state space models")?)?
//!     .and(Query::submitted_date(since, DateBound::Open)?)?;
//! assert_eq!(
//!     q.to_query_string(),
//!     "((cat:(cs.CV cs.AI cs.CL cs.LG cs.NE stat.ML) AND ti:\"state space models\") \
//!      AND submittedDate:[202301010000 TO 900001010000])"
//! );
//! # Ok::<(), arxiv_query::QueryError>(())
//! ```

pub mod ident;
pub mod query;
pub mod taxonomy;

// Re-export commonly used types
pub use ident::{ArticleId, IdentifierError};
pub use query::{
    and, andnot, or, DateBound, Field, FieldTerm, FieldValue, Negation, Operand, Query, QueryError,
};
pub use taxonomy::{catalog, Archive, Catalog, Category, Group, TaxonomyError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
