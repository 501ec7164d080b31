//! Serializer from expression trees to the grammar's surface syntax.
//!
//! Rendering is a pure, deterministic walk: every validation already
//! happened while the tree was being built, so any [`Query`] in hand
//! produces a syntactically valid string.

use std::fmt;

use super::expr::{Node, ScalarTerm, TermValue};
use super::Query;

impl Query {
    /// Renders the expression in the grammar's surface syntax.
    pub fn to_query_string(&self) -> String {
        self.to_string()
    }

    /// Renders and percent-encodes the expression for use as the
    /// `search_query` URL parameter, with spaces encoded as `+`.
    pub fn to_url_encoded(&self) -> String {
        urlencoding::encode(&self.to_query_string())
            .replace("%20", "+")
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, &self.node)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    match node {
        Node::Term { field, value } => {
            write!(f, "{}:", field.prefix())?;
            write_value(f, value)
        }
        Node::Binary { op, lhs, rhs } => {
            write!(f, "(")?;
            write_node(f, lhs)?;
            write!(f, " {} ", op.as_str())?;
            write_node(f, rhs)?;
            write!(f, ")")
        }
        Node::Raw(text) => write!(f, "({text})"),
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &TermValue) -> fmt::Result {
    match value {
        TermValue::Single(term) => write_scalar(f, term),
        TermValue::AnyOf(terms) => write_group(f, terms, " "),
        TermValue::AllOf(terms) => write_group(f, terms, " AND "),
        TermValue::Range { low, high } => write!(f, "[{low} TO {high}]"),
    }
}

fn write_group(f: &mut fmt::Formatter<'_>, terms: &[ScalarTerm], separator: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write_scalar(f, term)?;
    }
    write!(f, ")")
}

fn write_scalar(f: &mut fmt::Formatter<'_>, term: &ScalarTerm) -> fmt::Result {
    if term.quoted {
        write!(f, "\"{}\"", term.text)
    } else {
        f.write_str(&term.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_to_query_string() {
        let q = Query::title("test").unwrap();
        assert_eq!(q.to_string(), q.to_query_string());
    }

    #[test]
    fn test_binary_render_is_compositional() {
        let a = Query::title("left side").unwrap();
        let b = Query::r#abstract("right").unwrap();
        let rendered_a = a.to_query_string();
        let rendered_b = b.to_query_string();
        let q = a.and(b).unwrap();
        assert_eq!(q.to_query_string(), format!("({rendered_a} AND {rendered_b})"));
    }

    #[test]
    fn test_url_encoding() {
        let q = Query::author("Ilya Sutskever").unwrap()
            & Query::category("cs.NE").unwrap();
        assert_eq!(
            q.to_url_encoded(),
            "%28au%3A%22Ilya+Sutskever%22+AND+cat%3Acs.NE%29"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let q = Query::category(vec!["cs.AI", "stat.ML"]).unwrap();
        assert_eq!(q.to_query_string(), q.to_query_string());
    }
}
