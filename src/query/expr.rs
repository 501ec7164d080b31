//! The expression tree and its boolean combinators.

use std::ops::{BitAnd, BitOr, Not};

use super::fields::Field;
use super::QueryError;

/// Boolean operators of the search grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoolOp {
    And,
    Or,
    AndNot,
}

impl BoolOp {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            BoolOp::And => "AND",
            BoolOp::Or => "OR",
            BoolOp::AndNot => "ANDNOT",
        }
    }
}

/// A validated scalar inside a term value. Quoting is decided when the
/// term is built, never while rendering.
#[derive(Debug, Clone)]
pub(crate) struct ScalarTerm {
    pub text: String,
    pub quoted: bool,
}

/// The value shape of a term node.
#[derive(Debug, Clone)]
pub(crate) enum TermValue {
    Single(ScalarTerm),
    AnyOf(Vec<ScalarTerm>),
    AllOf(Vec<ScalarTerm>),
    Range { low: String, high: String },
}

#[derive(Debug, Clone)]
pub(crate) enum Node {
    Term { field: Field, value: TermValue },
    Binary { op: BoolOp, lhs: Box<Node>, rhs: Box<Node> },
    Raw(String),
}

/// An immutable search query expression.
///
/// Built by the per-field factories ([`Query::title`], [`Query::category`],
/// [`Query::submitted_date`], ...) and combined with [`and`]/[`or`]/
/// [`andnot`]. Combining always produces a new value; existing queries are
/// never modified. Rendering is [`Query::to_query_string`] or plain
/// [`Display`](std::fmt::Display).
///
/// ```
/// use arxiv_query::Query;
///
/// let q = Query::category("cs.NE")?.and(Query::title("autoencoders")?)?;
/// assert_eq!(q.to_query_string(), "(cat:cs.NE AND ti:autoencoders)");
/// # Ok::<(), arxiv_query::QueryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    pub(crate) node: Node,
}

/// A negated expression, produced by `!query`.
///
/// The grammar has no standalone `NOT`: a `Negation` is not renderable and
/// its only legal position is the right-hand side of an AND combination,
/// which yields `ANDNOT`. Negating it again cancels back to the inner
/// [`Query`].
#[derive(Debug, Clone)]
pub struct Negation {
    pub(crate) inner: Query,
}

/// Either side of a boolean combinator: a built query, a negated query, or
/// a raw string fragment.
///
/// Raw strings are wrapped as opaque fragments and parenthesized when
/// rendered; they are never parsed or interpreted as field terms.
#[derive(Debug, Clone)]
pub enum Operand {
    Query(Query),
    Negated(Query),
}

impl From<Query> for Operand {
    fn from(query: Query) -> Self {
        Operand::Query(query)
    }
}

impl From<Negation> for Operand {
    fn from(negation: Negation) -> Self {
        Operand::Negated(negation.inner)
    }
}

impl From<&str> for Operand {
    fn from(raw: &str) -> Self {
        Operand::Query(Query::from_raw(raw))
    }
}

impl From<String> for Operand {
    fn from(raw: String) -> Self {
        Operand::Query(Query::from_raw(raw))
    }
}

impl Query {
    /// Wraps an opaque, pre-validated fragment of grammar text.
    ///
    /// The fragment is carried verbatim and parenthesized on render so it
    /// combines safely with typed nodes.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Query {
            node: Node::Raw(raw.into()),
        }
    }

    /// Combines with `rhs` under `AND`; a negated `rhs` yields `ANDNOT`.
    pub fn and(self, rhs: impl Into<Operand>) -> Result<Query, QueryError> {
        combine(BoolOp::And, self.into(), rhs.into())
    }

    /// Combines with `rhs` under `OR`.
    ///
    /// Fails with [`QueryError::UnsupportedOperation`] when `rhs` is
    /// negated: the grammar has no `OR NOT` form.
    pub fn or(self, rhs: impl Into<Operand>) -> Result<Query, QueryError> {
        combine(BoolOp::Or, self.into(), rhs.into())
    }

    /// Combines with `rhs` under `ANDNOT`. Always succeeds for two built
    /// queries.
    pub fn andnot(self, rhs: impl Into<Operand>) -> Result<Query, QueryError> {
        combine(BoolOp::AndNot, self.into(), rhs.into())
    }
}

/// `AND` combinator accepting queries, negations, and raw strings on
/// either side.
pub fn and(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Result<Query, QueryError> {
    combine(BoolOp::And, lhs.into(), rhs.into())
}

/// `OR` combinator accepting queries and raw strings on either side.
pub fn or(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Result<Query, QueryError> {
    combine(BoolOp::Or, lhs.into(), rhs.into())
}

/// `ANDNOT` combinator accepting queries and raw strings on either side.
pub fn andnot(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Result<Query, QueryError> {
    combine(BoolOp::AndNot, lhs.into(), rhs.into())
}

fn combine(op: BoolOp, lhs: Operand, rhs: Operand) -> Result<Query, QueryError> {
    let lhs = match lhs {
        Operand::Query(query) => query,
        Operand::Negated(_) => {
            return Err(QueryError::UnsupportedOperation(
                "there is no standalone negation in the arXiv API; a negated expression may \
                 only be the right-hand side of AND"
                    .to_string(),
            ))
        }
    };
    match (op, rhs) {
        (BoolOp::And, Operand::Query(rhs)) => Ok(binary(BoolOp::And, lhs, rhs)),
        (BoolOp::And, Operand::Negated(rhs)) => Ok(binary(BoolOp::AndNot, lhs, rhs)),
        (BoolOp::Or, Operand::Query(rhs)) => Ok(binary(BoolOp::Or, lhs, rhs)),
        (BoolOp::Or, Operand::Negated(_)) => Err(QueryError::UnsupportedOperation(
            "there is no ORNOT operator in the arXiv API".to_string(),
        )),
        (BoolOp::AndNot, Operand::Query(rhs)) => Ok(binary(BoolOp::AndNot, lhs, rhs)),
        // a double negation under ANDNOT cancels back to plain AND
        (BoolOp::AndNot, Operand::Negated(rhs)) => Ok(binary(BoolOp::And, lhs, rhs)),
    }
}

fn binary(op: BoolOp, lhs: Query, rhs: Query) -> Query {
    Query {
        node: Node::Binary {
            op,
            lhs: Box::new(lhs.node),
            rhs: Box::new(rhs.node),
        },
    }
}

impl Not for Query {
    type Output = Negation;

    fn not(self) -> Negation {
        Negation { inner: self }
    }
}

impl Not for Negation {
    type Output = Query;

    fn not(self) -> Query {
        self.inner
    }
}

// Operator sugar over the combinator functions. Only the shapes that can
// never fail are implemented, so the operators stay panic-free; `query |
// !other` and a negation on the left of any operator do not compile.

impl BitAnd for Query {
    type Output = Query;

    fn bitand(self, rhs: Query) -> Query {
        binary(BoolOp::And, self, rhs)
    }
}

impl BitAnd<Negation> for Query {
    type Output = Query;

    fn bitand(self, rhs: Negation) -> Query {
        binary(BoolOp::AndNot, self, rhs.inner)
    }
}

impl BitAnd<&str> for Query {
    type Output = Query;

    fn bitand(self, rhs: &str) -> Query {
        binary(BoolOp::And, self, Query::from_raw(rhs))
    }
}

impl BitAnd<Query> for &str {
    type Output = Query;

    fn bitand(self, rhs: Query) -> Query {
        binary(BoolOp::And, Query::from_raw(self), rhs)
    }
}

impl BitOr for Query {
    type Output = Query;

    fn bitor(self, rhs: Query) -> Query {
        binary(BoolOp::Or, self, rhs)
    }
}

impl BitOr<&str> for Query {
    type Output = Query;

    fn bitor(self, rhs: &str) -> Query {
        binary(BoolOp::Or, self, Query::from_raw(rhs))
    }
}

impl BitOr<Query> for &str {
    type Output = Query;

    fn bitor(self, rhs: Query) -> Query {
        binary(BoolOp::Or, Query::from_raw(self), rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(s: &str) -> Query {
        Query::title(s).unwrap()
    }

    #[test]
    fn test_and_combinator() {
        let q = title("autoencoders").and(Query::author("Hinton").unwrap()).unwrap();
        assert_eq!(q.to_query_string(), "(ti:autoencoders AND au:Hinton)");
    }

    #[test]
    fn test_or_combinator() {
        let q = Query::category("cs.NE")
            .unwrap()
            .or(Query::category("cs.CL").unwrap())
            .unwrap();
        assert_eq!(q.to_query_string(), "(cat:cs.NE OR cat:cs.CL)");
    }

    #[test]
    fn test_andnot_combinator() {
        let q = Query::author("Sutskever")
            .unwrap()
            .andnot(Query::category("cs.AI").unwrap())
            .unwrap();
        assert_eq!(q.to_query_string(), "(au:Sutskever ANDNOT cat:cs.AI)");
    }

    #[test]
    fn test_and_with_negated_rhs_becomes_andnot() {
        let q = title("diffusion").and(!title("survey")).unwrap();
        assert_eq!(q.to_query_string(), "(ti:diffusion ANDNOT ti:survey)");
    }

    #[test]
    fn test_or_with_negated_rhs_fails() {
        let err = title("a").or(!title("b")).unwrap_err();
        assert!(matches!(err, QueryError::UnsupportedOperation(_)));
    }

    #[test]
    fn test_negated_lhs_fails_everywhere() {
        let ops: [fn(Operand, Operand) -> Result<Query, QueryError>; 3] =
            [|a, b| and(a, b), |a, b| or(a, b), |a, b| andnot(a, b)];
        for op in ops {
            let err = op(Operand::from(!title("a")), Operand::from(title("b"))).unwrap_err();
            assert!(matches!(err, QueryError::UnsupportedOperation(_)));
        }
    }

    #[test]
    fn test_andnot_always_succeeds_on_built_queries() {
        assert!(andnot(title("a"), title("b")).is_ok());
        assert!(title("a").andnot("raw fragment").is_ok());
    }

    #[test]
    fn test_double_negation_cancels() {
        let q = title("a").andnot(!title("b")).unwrap();
        assert_eq!(q.to_query_string(), "(ti:a AND ti:b)");
        let back: Query = !!title("c");
        assert_eq!(back.to_query_string(), "ti:c");
    }

    #[test]
    fn test_raw_string_operands_are_fragments() {
        let q = Query::category("cs.AI").unwrap().and("machine learning").unwrap();
        assert_eq!(q.to_query_string(), "(cat:cs.AI AND (machine learning))");

        let q = or("transformers", Query::category("cs.AI").unwrap()).unwrap();
        assert_eq!(q.to_query_string(), "((transformers) OR cat:cs.AI)");
    }

    #[test]
    fn test_operator_sugar() {
        let a1 = Query::author("Ilya Sutskever").unwrap();
        let a2 = Query::author(("Geoffrey", "Hinton")).unwrap();
        let q = a1 & a2;
        assert_eq!(
            q.to_query_string(),
            "(au:\"Ilya Sutskever\" AND au:(Geoffrey AND Hinton))"
        );

        let q = Query::category("cs.NE").unwrap() | Query::category("cs.CL").unwrap();
        assert_eq!(q.to_query_string(), "(cat:cs.NE OR cat:cs.CL)");

        let q = Query::author("Sutskever").unwrap() & !Query::category("cs.AI").unwrap();
        assert_eq!(q.to_query_string(), "(au:Sutskever ANDNOT cat:cs.AI)");

        let q = "neural networks" & Query::category("cs.NE").unwrap();
        assert_eq!(q.to_query_string(), "((neural networks) AND cat:cs.NE)");
    }

    #[test]
    fn test_and_chain_groups_left() {
        let a1 = Query::author("Ilya Sutskever").unwrap();
        let a2 = Query::author(("Geoffrey", "Hinton")).unwrap();
        let c1 = Query::category("cs.NE").unwrap();
        let q = a1 & a2 & c1;
        assert_eq!(
            q.to_query_string(),
            "((au:\"Ilya Sutskever\" AND au:(Geoffrey AND Hinton)) AND cat:cs.NE)"
        );
    }

    #[test]
    fn test_mixed_and_or() {
        let a1 = Query::author("Ilya Sutskever").unwrap();
        let a2 = Query::author(("Geoffrey", "Hinton")).unwrap();
        let c1 = Query::category("cs.NE").unwrap();
        let c2 = Query::category("cs.CL").unwrap();
        let q = (a1 | a2) & (c1 | c2);
        assert_eq!(
            q.to_query_string(),
            "((au:\"Ilya Sutskever\" OR au:(Geoffrey AND Hinton)) AND (cat:cs.NE OR cat:cs.CL))"
        );
    }
}
