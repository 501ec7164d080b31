//! The arXiv category taxonomy: groups, archives, and subject categories.
//!
//! The taxonomy is a closed, three-level hierarchy (Group → Archive →
//! Category) mirroring <https://arxiv.org/category_taxonomy>, extended with
//! the retired category ids that still appear in historical article
//! metadata. It is embedded as static tables and materialized once per
//! process by [`catalog()`].

mod catalog;
mod data;

pub use catalog::{catalog, Catalog};

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Taxonomy lookup error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("Unknown category id: {0}")]
    UnknownCategory(String),

    #[error("Unknown archive id: {0}")]
    UnknownArchive(String),

    #[error("Unknown group name: {0}")]
    UnknownGroup(String),
}

/// A single subject category, the leaf level of the taxonomy.
///
/// The `id` is the canonical form used in search queries and article
/// metadata: dotted for subject classes of a multi-category archive
/// (`"astro-ph.HE"`), bare for single-category archives (`"hep-th"`) and
/// for legacy ids (`"cmp-lg"`).
///
/// Equality, ordering, and hashing are by `id` alone; the remaining fields
/// are descriptive metadata fixed at catalog construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Canonical category id, e.g. `"cs.AI"` or `"hep-th"`.
    pub id: String,

    /// Human-readable category name.
    pub name: String,

    /// Name of the top-level group this category belongs to.
    pub group_name: String,

    /// Id of the archive this category belongs to.
    pub archive_id: String,

    /// Human-readable archive name.
    pub archive_name: String,

    /// Scope description from the taxonomy listing (opaque text).
    pub description: String,
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A named group of categories sharing an archive id, the middle level of
/// the taxonomy.
///
/// An archive is an ordered, finite collection of [`Category`] values. A
/// single-category archive (e.g. `hep-th`) still iterates as a one-element
/// collection. Three archives (`astro-ph`, `cond-mat`, `q-bio`) carry a
/// distinguished legacy member whose id equals the bare archive id.
#[derive(Debug, Clone)]
pub struct Archive {
    /// Archive id, e.g. `"cs"` or `"astro-ph"`.
    pub id: String,

    /// Human-readable archive name.
    pub name: String,

    /// Name of the group this archive belongs to.
    pub group_name: String,

    members: Vec<Arc<Category>>,
    legacy_member: Option<Arc<Category>>,
}

impl Archive {
    pub(crate) fn new(
        id: String,
        name: String,
        group_name: String,
        members: Vec<Arc<Category>>,
        legacy_member: Option<Arc<Category>>,
    ) -> Self {
        Self {
            id,
            name,
            group_name,
            members,
            legacy_member,
        }
    }

    /// Number of member categories.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`: every archive has at least one category.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member categories in taxonomy listing order.
    pub fn categories(&self) -> &[Arc<Category>] {
        &self.members
    }

    /// Iterate over member categories in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.members.iter().map(|member| member.as_ref())
    }

    /// The legacy bare-id member, when the archive has one.
    ///
    /// Only `astro-ph`, `cond-mat`, and `q-bio` retain a category whose id
    /// overlaps the archive id; everywhere else this is `None`.
    pub fn legacy_member(&self) -> Option<&Category> {
        self.legacy_member.as_deref()
    }

    /// The category-query pattern covering this whole archive.
    ///
    /// `cs.*` for archives with dotted ids only, `astro-ph*` when a legacy
    /// bare-id member must also match, and the bare id for single-category
    /// archives.
    pub fn wildcard(&self) -> String {
        if self.members.len() == 1 && self.members[0].id == self.id {
            self.id.clone()
        } else if self.legacy_member.is_some() {
            format!("{}*", self.id)
        } else {
            format!("{}.*", self.id)
        }
    }
}

impl<'a> IntoIterator for &'a Archive {
    type Item = &'a Arc<Category>;
    type IntoIter = std::slice::Iter<'a, Arc<Category>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl fmt::Display for Archive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wildcard())
    }
}

/// A top-level taxonomy group, e.g. "Physics" or "Computer Science".
///
/// Most groups contain a single archive named after the group; the Physics
/// group spans thirteen archives.
#[derive(Debug, Clone)]
pub struct Group {
    /// Group name as listed in the taxonomy.
    pub name: String,

    archives: Vec<Arc<Archive>>,
}

impl Group {
    pub(crate) fn new(name: String, archives: Vec<Arc<Archive>>) -> Self {
        Self { name, archives }
    }

    /// Member archives in taxonomy listing order.
    pub fn archives(&self) -> &[Arc<Archive>] {
        &self.archives
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
