//! Field tags, input value shapes, and the per-field query factories.

use std::sync::Arc;

use crate::taxonomy::{Archive, Category};

use super::expr::{Node, ScalarTerm, TermValue};
use super::{Query, QueryError};

/// The searchable fields, each with its grammar prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Abstract,
    Author,
    Comment,
    Journal,
    ReportNumber,
    Id,
    All,
    Category,
    SubmittedDate,
}

impl Field {
    /// The prefix placed before `:` in the rendered query.
    pub fn prefix(self) -> &'static str {
        match self {
            Field::Title => "ti",
            Field::Abstract => "abs",
            Field::Author => "au",
            Field::Comment => "co",
            Field::Journal => "jr",
            Field::ReportNumber => "rn",
            Field::Id => "id",
            Field::All => "all",
            Field::Category => "cat",
            Field::SubmittedDate => "submittedDate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TermKind {
    Text,
    Category,
}

/// One scalar inside a field value: plain text, or a category-typed value
/// taken from the taxonomy.
///
/// Category-typed terms remember their origin so that grammar rules
/// specific to categories (no quoted category groups) can be enforced.
/// An [`Archive`] converts to its wildcard pattern, e.g. `cs.*`; raw
/// strings pass through untouched, which allows ad hoc patterns like
/// `cs.?I`.
#[derive(Debug, Clone)]
pub struct FieldTerm {
    pub(crate) text: String,
    pub(crate) kind: TermKind,
}

impl From<&str> for FieldTerm {
    fn from(text: &str) -> Self {
        FieldTerm {
            text: text.to_string(),
            kind: TermKind::Text,
        }
    }
}

impl From<String> for FieldTerm {
    fn from(text: String) -> Self {
        FieldTerm {
            text,
            kind: TermKind::Text,
        }
    }
}

impl From<&Category> for FieldTerm {
    fn from(category: &Category) -> Self {
        FieldTerm {
            text: category.id.clone(),
            kind: TermKind::Category,
        }
    }
}

impl From<Category> for FieldTerm {
    fn from(category: Category) -> Self {
        FieldTerm {
            text: category.id,
            kind: TermKind::Category,
        }
    }
}

impl From<Arc<Category>> for FieldTerm {
    fn from(category: Arc<Category>) -> Self {
        FieldTerm::from(category.as_ref())
    }
}

impl From<&Arc<Category>> for FieldTerm {
    fn from(category: &Arc<Category>) -> Self {
        FieldTerm::from(category.as_ref())
    }
}

impl From<&Archive> for FieldTerm {
    fn from(archive: &Archive) -> Self {
        FieldTerm {
            text: archive.wildcard(),
            kind: TermKind::Category,
        }
    }
}

impl From<Arc<Archive>> for FieldTerm {
    fn from(archive: Arc<Archive>) -> Self {
        FieldTerm::from(archive.as_ref())
    }
}

impl From<&Arc<Archive>> for FieldTerm {
    fn from(archive: &Arc<Archive>) -> Self {
        FieldTerm::from(archive.as_ref())
    }
}

/// The three input shapes a field factory accepts.
///
/// A lone scalar makes a plain term. An ordered sequence (vector, slice,
/// or array) makes an any-of group: space-separated alternatives with the
/// grammar's implicit OR. A tuple (arity 2 to 4) makes an all-of group
/// joined with explicit `AND`. Single-element groups collapse to the bare
/// scalar form.
#[derive(Debug, Clone)]
pub enum FieldValue {
    One(FieldTerm),
    AnyOf(Vec<FieldTerm>),
    AllOf(Vec<FieldTerm>),
}

impl FieldValue {
    /// Builds an any-of group from any iterable of scalars.
    pub fn any_of<T: Into<FieldTerm>>(terms: impl IntoIterator<Item = T>) -> Self {
        FieldValue::AnyOf(terms.into_iter().map(Into::into).collect())
    }

    /// Builds an all-of group from any iterable of scalars.
    pub fn all_of<T: Into<FieldTerm>>(terms: impl IntoIterator<Item = T>) -> Self {
        FieldValue::AllOf(terms.into_iter().map(Into::into).collect())
    }
}

impl From<FieldTerm> for FieldValue {
    fn from(term: FieldTerm) -> Self {
        FieldValue::One(term)
    }
}

macro_rules! scalar_into_field_value {
    ($($ty:ty),+ $(,)?) => {
        $(impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                FieldValue::One(FieldTerm::from(value))
            }
        })+
    };
}

scalar_into_field_value!(
    &str,
    String,
    Category,
    &Category,
    Arc<Category>,
    &Arc<Category>,
    &Archive,
    Arc<Archive>,
    &Arc<Archive>,
);

impl<T: Into<FieldTerm>> From<Vec<T>> for FieldValue {
    fn from(terms: Vec<T>) -> Self {
        FieldValue::any_of(terms)
    }
}

impl<T: Into<FieldTerm> + Clone> From<&[T]> for FieldValue {
    fn from(terms: &[T]) -> Self {
        FieldValue::any_of(terms.iter().cloned())
    }
}

impl<T: Into<FieldTerm>, const N: usize> From<[T; N]> for FieldValue {
    fn from(terms: [T; N]) -> Self {
        FieldValue::any_of(terms)
    }
}

impl<A: Into<FieldTerm>, B: Into<FieldTerm>> From<(A, B)> for FieldValue {
    fn from((a, b): (A, B)) -> Self {
        FieldValue::AllOf(vec![a.into(), b.into()])
    }
}

impl<A: Into<FieldTerm>, B: Into<FieldTerm>, C: Into<FieldTerm>> From<(A, B, C)> for FieldValue {
    fn from((a, b, c): (A, B, C)) -> Self {
        FieldValue::AllOf(vec![a.into(), b.into(), c.into()])
    }
}

impl<A: Into<FieldTerm>, B: Into<FieldTerm>, C: Into<FieldTerm>, D: Into<FieldTerm>>
    From<(A, B, C, D)> for FieldValue
{
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        FieldValue::AllOf(vec![a.into(), b.into(), c.into(), d.into()])
    }
}

impl Query {
    /// Builds a field-scoped term from any accepted value shape.
    ///
    /// `quote` controls whether multi-word scalars are phrase-quoted;
    /// fields where quoting is meaningless (categories) pass `false` and
    /// reject multi-word values instead.
    pub fn from_field(
        value: impl Into<FieldValue>,
        field: Field,
        quote: bool,
    ) -> Result<Self, QueryError> {
        let value = match value.into() {
            FieldValue::One(term) => TermValue::Single(validate_term(term, quote)?),
            FieldValue::AnyOf(terms) => build_group(terms, quote, false)?,
            FieldValue::AllOf(terms) => build_group(terms, quote, true)?,
        };
        Ok(Query {
            node: Node::Term { field, value },
        })
    }

    /// Title search (`ti:`).
    pub fn title(value: impl Into<FieldValue>) -> Result<Self, QueryError> {
        Self::from_field(value, Field::Title, true)
    }

    /// Abstract search (`abs:`).
    pub fn r#abstract(value: impl Into<FieldValue>) -> Result<Self, QueryError> {
        Self::from_field(value, Field::Abstract, true)
    }

    /// Author search (`au:`).
    pub fn author(value: impl Into<FieldValue>) -> Result<Self, QueryError> {
        Self::from_field(value, Field::Author, true)
    }

    /// Comment search (`co:`).
    pub fn comment(value: impl Into<FieldValue>) -> Result<Self, QueryError> {
        Self::from_field(value, Field::Comment, true)
    }

    /// Journal reference search (`jr:`).
    pub fn journal(value: impl Into<FieldValue>) -> Result<Self, QueryError> {
        Self::from_field(value, Field::Journal, true)
    }

    /// Report number search (`rn:`).
    pub fn report(value: impl Into<FieldValue>) -> Result<Self, QueryError> {
        Self::from_field(value, Field::ReportNumber, true)
    }

    /// Id search (`id:`).
    #[deprecated(note = "pass article ids through the API's id_list parameter instead")]
    pub fn id(value: impl Into<FieldValue>) -> Result<Self, QueryError> {
        Self::from_field(value, Field::Id, true)
    }

    /// Search across all fields (`all:`).
    pub fn all(value: impl Into<FieldValue>) -> Result<Self, QueryError> {
        Self::from_field(value, Field::All, true)
    }

    /// Subject category search (`cat:`).
    ///
    /// Accepts a [`Category`], an [`Archive`] (rendered as its wildcard
    /// pattern), a raw id or pattern string, or a sequence of these.
    pub fn category(value: impl Into<FieldValue>) -> Result<Self, QueryError> {
        Self::from_field(value, Field::Category, false)
    }
}

fn validate_term(term: FieldTerm, quote: bool) -> Result<ScalarTerm, QueryError> {
    if term.text.contains(['"', '(', ')']) {
        return Err(QueryError::InvalidQuery(format!(
            "double quotes and parentheses are forbidden in term values: {}",
            term.text
        )));
    }
    let multi_word = term.text.split_whitespace().nth(1).is_some();
    if multi_word && !quote {
        return Err(QueryError::InvalidQuery(format!(
            "unquotable multi-word value: {}",
            term.text
        )));
    }
    Ok(ScalarTerm {
        text: term.text,
        quoted: multi_word,
    })
}

fn build_group(terms: Vec<FieldTerm>, quote: bool, all: bool) -> Result<TermValue, QueryError> {
    if terms.is_empty() {
        return Err(QueryError::InvalidQuery(
            "a field group needs at least one member".to_string(),
        ));
    }
    if quote && terms.len() > 1 && terms.iter().any(|t| t.kind == TermKind::Category) {
        return Err(QueryError::InvalidQuery(
            "a quoted group of categories is meaningless in the grammar; build category \
             groups through the unquoted category field"
                .to_string(),
        ));
    }
    let mut scalars = terms
        .into_iter()
        .map(|term| validate_term(term, quote))
        .collect::<Result<Vec<_>, _>>()?;
    if scalars.len() == 1 {
        // a one-element group is just its element
        return Ok(TermValue::Single(scalars.remove(0)));
    }
    Ok(if all {
        TermValue::AllOf(scalars)
    } else {
        TermValue::AnyOf(scalars)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::catalog;

    #[test]
    fn test_single_word_fields() {
        assert_eq!(Query::title("word").unwrap().to_query_string(), "ti:word");
        assert_eq!(Query::author("Sutskever").unwrap().to_query_string(), "au:Sutskever");
        assert_eq!(Query::r#abstract("neural").unwrap().to_query_string(), "abs:neural");
        assert_eq!(Query::comment("ICLR").unwrap().to_query_string(), "co:ICLR");
        assert_eq!(Query::journal("Nature").unwrap().to_query_string(), "jr:Nature");
        assert_eq!(Query::report("TR-123").unwrap().to_query_string(), "rn:TR-123");
        assert_eq!(Query::all("transformers").unwrap().to_query_string(), "all:transformers");
        assert_eq!(Query::category("cs.AI").unwrap().to_query_string(), "cat:cs.AI");
    }

    #[test]
    #[allow(deprecated)]
    fn test_id_field() {
        assert_eq!(Query::id("2301.12345").unwrap().to_query_string(), "id:2301.12345");
    }

    #[test]
    fn test_multi_word_auto_quotes() {
        assert_eq!(
            Query::r#abstract("some words").unwrap().to_query_string(),
            "abs:\"some words\""
        );
    }

    #[test]
    fn test_any_of_group() {
        let q = Query::r#abstract(vec!["word1", "word2", "word3"]).unwrap();
        assert_eq!(q.to_query_string(), "abs:(word1 word2 word3)");
    }

    #[test]
    fn test_any_of_group_quotes_phrases() {
        let q = Query::r#abstract(["single", "multi word phrase"]).unwrap();
        assert_eq!(q.to_query_string(), "abs:(single \"multi word phrase\")");
    }

    #[test]
    fn test_all_of_group() {
        let q = Query::r#abstract(("word1", "word2", "word3")).unwrap();
        assert_eq!(q.to_query_string(), "abs:(word1 AND word2 AND word3)");
    }

    #[test]
    fn test_all_of_group_quotes_phrases() {
        let q = Query::r#abstract(("Syntactic", "natural language processing", "synthetic corpus"))
            .unwrap();
        assert_eq!(
            q.to_query_string(),
            "abs:(Syntactic AND \"natural language processing\" AND \"synthetic corpus\")"
        );
    }

    #[test]
    fn test_author_examples() {
        assert_eq!(
            Query::author(("Geoffrey", "Hinton")).unwrap().to_query_string(),
            "au:(Geoffrey AND Hinton)"
        );
        assert_eq!(
            Query::author(["Geoffrey", "Hinton"]).unwrap().to_query_string(),
            "au:(Geoffrey Hinton)"
        );
    }

    #[test]
    fn test_single_element_groups_collapse() {
        assert_eq!(Query::title(vec!["word"]).unwrap().to_query_string(), "ti:word");
        assert_eq!(
            Query::author(FieldValue::all_of(["Hinton"])).unwrap().to_query_string(),
            "au:Hinton"
        );
    }

    #[test]
    fn test_empty_group_fails() {
        let err = Query::title(Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, QueryError::InvalidQuery(_)));
    }

    #[test]
    fn test_forbidden_characters() {
        for bad in ["\"quoted words\"", "(parenthesized words)", "test (value", "test) value"] {
            let err = Query::title(bad).unwrap_err();
            assert!(matches!(err, QueryError::InvalidQuery(_)), "{bad}");
        }
    }

    #[test]
    fn test_wildcards_pass_through() {
        assert_eq!(Query::title("transform*").unwrap().to_query_string(), "ti:transform*");
        assert_eq!(Query::author("Suts???er").unwrap().to_query_string(), "au:Suts???er");
        assert_eq!(Query::category("cs.?I").unwrap().to_query_string(), "cat:cs.?I");
        assert_eq!(Query::category("q-?i*").unwrap().to_query_string(), "cat:q-?i*");
    }

    #[test]
    fn test_category_multi_word_fails() {
        let err = Query::category("cs.AI cs.LG").unwrap_err();
        assert!(matches!(err, QueryError::InvalidQuery(_)));
    }

    #[test]
    fn test_category_groups() {
        let q = Query::category(vec!["cs.AI", "cs.LG", "stat.ML"]).unwrap();
        assert_eq!(q.to_query_string(), "cat:(cs.AI cs.LG stat.ML)");

        let q = Query::category(("cs.LG", "stat.ML")).unwrap();
        assert_eq!(q.to_query_string(), "cat:(cs.LG AND stat.ML)");
    }

    #[test]
    fn test_category_from_taxonomy() {
        let c = catalog();
        let q = Query::category(c.category("cs.AI").unwrap()).unwrap();
        assert_eq!(q.to_query_string(), "cat:cs.AI");

        let lg = c.category("cs.LG").unwrap();
        let ml = c.category("stat.ML").unwrap();
        let q = Query::category((lg, ml)).unwrap();
        assert_eq!(q.to_query_string(), "cat:(cs.LG AND stat.ML)");
    }

    #[test]
    fn test_archive_values_render_wildcards() {
        let c = catalog();
        let q = Query::category(c.archive("cs").unwrap()).unwrap();
        assert_eq!(q.to_query_string(), "cat:cs.*");

        let q = Query::category(c.archive("astro-ph").unwrap()).unwrap();
        assert_eq!(q.to_query_string(), "cat:astro-ph*");

        let q = Query::category(c.archive("hep-th").unwrap()).unwrap();
        assert_eq!(q.to_query_string(), "cat:hep-th");
    }

    #[test]
    fn test_catalog_collection_as_value() {
        let q = Query::category(catalog().ml_karpathy()).unwrap();
        assert_eq!(
            q.to_query_string(),
            "cat:(cs.CV cs.AI cs.CL cs.LG cs.NE stat.ML)"
        );
    }

    #[test]
    fn test_quoted_category_group_fails() {
        let c = catalog();
        let lg = c.category("cs.LG").unwrap();
        let ml = c.category("stat.ML").unwrap();
        let err = Query::title((lg, ml)).unwrap_err();
        assert!(matches!(err, QueryError::InvalidQuery(_)));
    }

    #[test]
    fn test_single_quoted_category_renders_unchanged() {
        let lg = catalog().category("cs.LG").unwrap();
        let q = Query::title(lg).unwrap();
        assert_eq!(q.to_query_string(), "ti:cs.LG");
    }
}
