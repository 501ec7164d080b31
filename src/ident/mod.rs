//! Parser and normalizer for arXiv article identifiers.
//!
//! Two mutually exclusive formats exist, recognized by the presence of a
//! slash (see <https://info.arxiv.org/help/arxiv_identifier.html>):
//!
//! - legacy, used through 2007-03: `archive[.subject]/YYMMNNN[vV]`, e.g.
//!   `math.GT/0309136` or `quant-ph/0201082v1`;
//! - modern, from 2007-04 on: `YYMM.NNNN[vV]` with a four-digit sequence
//!   number through 2014-12 and five digits from 2015-01, e.g.
//!   `1412.8770` or `1805.12345v2`.
//!
//! Either form may carry a case-insensitive `arXiv:` prefix. This module
//! never talks to the network; whether a parsed id or version actually
//! exists is the caller's concern.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier parsing error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Malformed arXiv identifier: {0}")]
    MalformedIdentifier(String),
}

/// A fully parsed arXiv article identifier.
///
/// Built by [`ArticleId::from_id`] and immutable afterwards. The canonical
/// string form is recovered by [`ArticleId::id`], which is
/// format-preserving: a legacy id keeps its archive segment and
/// three-digit sequence padding, a modern id uses the sequence width its
/// year mandates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId {
    prefix: Option<String>,
    archive: Option<String>,
    subject: Option<String>,
    year: u16,
    month: u8,
    number: u32,
    version: Option<u32>,
}

impl ArticleId {
    /// Parses an identifier in either format.
    ///
    /// Surrounding whitespace and an optional case-insensitive `arXiv:`
    /// prefix are accepted; the prefix text is preserved verbatim for
    /// reconstruction.
    pub fn from_id(raw: &str) -> Result<Self, IdentifierError> {
        let mut body = raw.trim();

        let mut prefix = None;
        if let Some((head, rest)) = body.split_once(':') {
            if !head.eq_ignore_ascii_case("arxiv") {
                return Err(IdentifierError::MalformedIdentifier(raw.to_string()));
            }
            prefix = Some(head.to_string());
            body = rest.trim();
        }

        // Split a trailing "v<digits>" off the base id. The lazy base
        // group keeps the version out of the id when one is present.
        static VERSION_RE: OnceLock<Regex> = OnceLock::new();
        let version_re = VERSION_RE
            .get_or_init(|| Regex::new(r"^(?P<id>.+?)(?:v(?P<version>[0-9]+))?$").expect("version pattern is valid"));
        let captures = version_re
            .captures(body)
            .ok_or_else(|| IdentifierError::MalformedIdentifier(raw.to_string()))?;
        let base_id = &captures["id"];
        let version = match captures.name("version") {
            Some(digits) => Some(
                digits
                    .as_str()
                    .parse::<u32>()
                    .map_err(|_| IdentifierError::MalformedIdentifier(raw.to_string()))?,
            ),
            None => None,
        };

        let (year, month, number, archive, subject) = if base_id.contains('/') {
            parse_legacy(base_id).ok_or_else(|| IdentifierError::MalformedIdentifier(raw.to_string()))?
        } else {
            parse_modern(base_id).ok_or_else(|| IdentifierError::MalformedIdentifier(raw.to_string()))?
        };

        Ok(ArticleId {
            prefix,
            archive,
            subject,
            year,
            month,
            number,
            version,
        })
    }

    /// The identifier without prefix and version, e.g. `quant-ph/0201082`.
    pub fn base_id(&self) -> String {
        match &self.archive {
            Some(archive) => {
                let category = match &self.subject {
                    Some(subject) => format!("{archive}.{subject}"),
                    None => archive.clone(),
                };
                format!(
                    "{category}/{:02}{:02}{:03}",
                    self.year % 100,
                    self.month,
                    self.number
                )
            }
            None => {
                // four-digit sequence numbers through 2014, five from 2015
                let width: usize = if self.year >= 2015 { 5 } else { 4 };
                format!(
                    "{:02}{:02}.{:0width$}",
                    self.year % 100,
                    self.month,
                    self.number,
                )
            }
        }
    }

    /// The canonical identifier, prefix and version included.
    pub fn id(&self) -> String {
        let prefix = match &self.prefix {
            Some(prefix) => format!("{prefix}:"),
            None => String::new(),
        };
        let version = match self.version {
            Some(version) => format!("v{version}"),
            None => String::new(),
        };
        format!("{prefix}{}{version}", self.base_id())
    }

    /// The `arXiv` prefix text, when the input carried one.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The archive segment of a legacy identifier; `None` for modern ids.
    pub fn archive(&self) -> Option<&str> {
        self.archive.as_deref()
    }

    /// The subject-class segment of a legacy identifier, e.g. `GT` in
    /// `math.GT/0309136`.
    ///
    /// Empty in current full-metadata snapshots even for old articles:
    /// `math.GT/0309136` is now referred to as `math/0309136`.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Four-digit submission year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Submission month, 1 to 12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Sequence number within the month.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Version number, when the identifier carried one.
    pub fn version(&self) -> Option<u32> {
        self.version
    }
}

impl FromStr for ArticleId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleId::from_id(s)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

type Parsed = (u16, u8, u32, Option<String>, Option<String>);

/// `archive[.subject]/YYMMNNN`. Legacy years span 1991-2007, so 90-99
/// means the 1900s and anything below means the 2000s.
fn parse_legacy(base_id: &str) -> Option<Parsed> {
    static LEGACY_RE: OnceLock<Regex> = OnceLock::new();
    let re = LEGACY_RE.get_or_init(|| {
        Regex::new(r"^(?P<category>[A-Za-z0-9_.-]+)/(?P<numeric>[0-9]{7})$")
            .expect("legacy pattern is valid")
    });
    let captures = re.captures(base_id)?;
    let category = &captures["category"];
    let numeric = &captures["numeric"];

    let yy: u16 = numeric[..2].parse().ok()?;
    let month: u8 = numeric[2..4].parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    let year = if yy >= 90 { 1900 + yy } else { 2000 + yy };
    let number: u32 = numeric[4..].parse().ok()?;

    let (archive, subject) = match category.split_once('.') {
        Some((archive, subject)) => (archive.to_string(), Some(subject.to_string())),
        None => (category.to_string(), None),
    };
    Some((year, month, number, Some(archive), subject))
}

/// `YYMM.NNNN` or `YYMM.NNNNN`. The modern scheme started 2007-04, so the
/// two-digit year is always in the 2000s.
fn parse_modern(base_id: &str) -> Option<Parsed> {
    static MODERN_RE: OnceLock<Regex> = OnceLock::new();
    let re = MODERN_RE.get_or_init(|| {
        Regex::new(r"^(?P<yymm>[0-9]{4})\.(?P<sequence>[0-9]{4,5})$")
            .expect("modern pattern is valid")
    });
    let captures = re.captures(base_id)?;
    let yymm = &captures["yymm"];

    let yy: u16 = yymm[..2].parse().ok()?;
    let month: u8 = yymm[2..4].parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    let number: u32 = captures["sequence"].parse().ok()?;
    Some((2000 + yy, month, number, None, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_reconstruction(raw: &str) {
        let parsed = ArticleId::from_id(raw).unwrap();
        assert_eq!(parsed.id(), raw, "reconstruction of {raw}");
    }

    #[test]
    fn test_modern_id_with_prefix_and_version() {
        let parsed = ArticleId::from_id("   arXiv:1805.12345v2 ").unwrap();
        assert_eq!(parsed.base_id(), "1805.12345");
        assert_eq!(parsed.version(), Some(2));
        assert_eq!(parsed.year(), 2018);
        assert_eq!(parsed.month(), 5);
        assert_eq!(parsed.number(), 12345);
        assert_eq!(parsed.prefix(), Some("arXiv"));
        assert_eq!(parsed.archive(), None);
        assert_eq!(parsed.subject(), None);
        assert_eq!(parsed.id(), "arXiv:1805.12345v2");
    }

    #[test]
    fn test_modern_id_bare() {
        let parsed = ArticleId::from_id("1805.12345").unwrap();
        assert_eq!(parsed.base_id(), "1805.12345");
        assert_eq!(parsed.version(), None);
        assert_eq!(parsed.prefix(), None);
        assert_eq!(parsed.id(), "1805.12345");
    }

    #[test]
    fn test_legacy_id_with_prefix_and_version() {
        let parsed = ArticleId::from_id("arXiv:quant-ph/0201082v1").unwrap();
        assert_eq!(parsed.base_id(), "quant-ph/0201082");
        assert_eq!(parsed.version(), Some(1));
        assert_eq!(parsed.year(), 2002);
        assert_eq!(parsed.month(), 1);
        assert_eq!(parsed.number(), 82);
        assert_eq!(parsed.archive(), Some("quant-ph"));
        assert_eq!(parsed.subject(), None);
        assert_eq!(parsed.id(), "arXiv:quant-ph/0201082v1");
    }

    #[test]
    fn test_legacy_id_with_subject_class() {
        let parsed = ArticleId::from_id("math.GT/0309136").unwrap();
        assert_eq!(parsed.archive(), Some("math"));
        assert_eq!(parsed.subject(), Some("GT"));
        assert_eq!(parsed.year(), 2003);
        assert_eq!(parsed.month(), 9);
        assert_eq!(parsed.number(), 136);
        assert_eq!(parsed.id(), "math.GT/0309136");
    }

    #[test]
    fn test_legacy_epoch_disambiguation() {
        assert_eq!(ArticleId::from_id("physics/9403001").unwrap().year(), 1994);
        assert_eq!(ArticleId::from_id("cmp-lg/9404001").unwrap().year(), 1994);
        assert_eq!(ArticleId::from_id("cs/0411052").unwrap().year(), 2004);
        assert_eq!(ArticleId::from_id("q-bio/0703067").unwrap().year(), 2007);
    }

    #[test]
    fn test_modern_sequence_widths() {
        // last month of four-digit numbering
        let parsed = ArticleId::from_id("1412.8770").unwrap();
        assert_eq!(parsed.number(), 8770);
        assert_eq!(parsed.base_id(), "1412.8770");
        // five digits from 2015-01 on
        let parsed = ArticleId::from_id("1501.00001").unwrap();
        assert_eq!(parsed.number(), 1);
        assert_eq!(parsed.base_id(), "1501.00001");
    }

    #[test]
    fn test_reconstruction_round_trips() {
        for raw in [
            "1805.12345",
            "1805.12345v1",
            "1805.12345v2",
            "arXiv:1805.12345",
            "arXiv:1805.12345v2",
            "1412.8770",
            "1412.8770v1",
            "arXiv:1412.8770",
            "math.GT/0309136",
            "math.GT/0309136v1",
            "arXiv:math.GT/0309136",
            "cmp-lg/9404001",
            "cs/0411052",
            "q-bio/0703067",
            "quant-ph/0201082v1",
            "physics/9403001v1",
        ] {
            check_reconstruction(raw);
        }
    }

    #[test]
    fn test_prefix_case_insensitive() {
        let parsed = ArticleId::from_id("arxiv:1805.12345").unwrap();
        assert_eq!(parsed.prefix(), Some("arxiv"));
        assert_eq!(parsed.id(), "arxiv:1805.12345");
    }

    #[test]
    fn test_malformed_identifiers() {
        for raw in [
            "",
            "not an id",
            "180512345",
            "1805.123",
            "1805.123456",
            "1813.12345",
            "quant-ph/020108",
            "quant-ph/02010822",
            "quant-ph/0213082",
            "doi:10.1000/xyz",
            "1805.12345v",
        ] {
            let err = ArticleId::from_id(raw).unwrap_err();
            assert!(
                matches!(err, IdentifierError::MalformedIdentifier(_)),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_from_str_and_display() {
        let parsed: ArticleId = "arXiv:1805.12345v2".parse().unwrap();
        assert_eq!(parsed.to_string(), "arXiv:1805.12345v2");
    }

    #[test]
    fn test_serde_round_trip() {
        let parsed = ArticleId::from_id("quant-ph/0201082v1").unwrap();
        let json = serde_json::to_string(&parsed).unwrap();
        let back: ArticleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parsed);
    }
}
