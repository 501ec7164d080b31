//! Process-wide taxonomy catalog built from the embedded record tables.
//!
//! The catalog is constructed on first use and never mutated afterwards, so
//! the `&'static` reference returned by [`catalog()`] is safe to share
//! across threads without locking.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::data::{CategoryRecord, ARCHIVE_NAMES, CATEGORY_RECORDS, LEGACY_RECORDS};
use super::{Archive, Category, Group, TaxonomyError};

/// Categories of the broad machine-learning sweep recommended by the arXiv
/// ML classification guide.
const ML_BROAD_IDS: &[&str] = &[
    "cs.LG", "stat.ML", "math.OC", "cs.CV", "cs.CL", "eess.AS", "cs.IR", "cs.HC", "cs.SI",
    "cs.CY", "cs.GR", "cs.SY", "cs.AI", "cs.MM", "cs.ET", "cs.NE",
];

/// The classic arxiv-sanity category set.
const ML_KARPATHY_IDS: &[&str] = &["cs.CV", "cs.AI", "cs.CL", "cs.LG", "cs.NE", "stat.ML"];

/// The four high-energy-physics archives.
const HEP_IDS: &[&str] = &["hep-th", "hep-ph", "hep-ex", "hep-lat"];

/// The immutable category catalog.
///
/// Holds every category id ever observed in arXiv metadata (modern subject
/// classes, bare single-archive ids, and retired legacy ids), the archive
/// and group hierarchy over the live portion, and a few curated category
/// collections. Obtain the process-wide instance via [`catalog()`].
pub struct Catalog {
    categories: Vec<Arc<Category>>,
    archives: Vec<Arc<Archive>>,
    groups: Vec<Group>,
    by_id: HashMap<String, Arc<Category>>,
    ml_broad: Vec<Arc<Category>>,
    ml_karpathy: Vec<Arc<Category>>,
    hep: Vec<Arc<Category>>,
    legacy: Vec<Arc<Category>>,
}

/// Returns the process-wide catalog, building it on first call.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::build)
}

impl Catalog {
    fn build() -> Self {
        let mut archive_order: Vec<&'static str> = Vec::new();
        let mut by_archive: HashMap<&'static str, Vec<&'static CategoryRecord>> = HashMap::new();
        for record in CATEGORY_RECORDS {
            if !by_archive.contains_key(record.archive) {
                archive_order.push(record.archive);
            }
            by_archive.entry(record.archive).or_default().push(record);
        }

        let mut categories = Vec::new();
        let mut by_id: HashMap<String, Arc<Category>> = HashMap::new();
        let mut archives = Vec::new();

        for archive_id in &archive_order {
            let records = &by_archive[archive_id];
            let group_name = records[0].group;
            let archive_name = ARCHIVE_NAMES
                .iter()
                .find(|(id, _)| id == archive_id)
                .map(|(_, name)| *name)
                .unwrap_or(group_name);

            let mut members = Vec::with_capacity(records.len());
            let mut legacy_member = None;
            for record in records {
                let id = match record.suffix {
                    Some(suffix) => format!("{archive_id}.{suffix}"),
                    None => archive_id.to_string(),
                };
                let category = Arc::new(Category {
                    id: id.clone(),
                    name: record.name.to_string(),
                    group_name: record.group.to_string(),
                    archive_id: archive_id.to_string(),
                    archive_name: archive_name.to_string(),
                    description: record.description.to_string(),
                });
                if record.suffix.is_none() && records.len() > 1 {
                    legacy_member = Some(Arc::clone(&category));
                }
                members.push(Arc::clone(&category));
                categories.push(Arc::clone(&category));
                by_id.insert(id, category);
            }

            archives.push(Arc::new(Archive::new(
                archive_id.to_string(),
                archive_name.to_string(),
                group_name.to_string(),
                members,
                legacy_member,
            )));
        }

        for record in LEGACY_RECORDS {
            let category = Arc::new(Category {
                id: record.id.to_string(),
                name: record.name.to_string(),
                group_name: record.group.to_string(),
                archive_id: record.id.to_string(),
                archive_name: record.name.to_string(),
                description: format!(
                    "Subsumed into {}. The bare id remains on articles submitted before the merge.",
                    record.successor
                ),
            });
            categories.push(Arc::clone(&category));
            by_id.insert(record.id.to_string(), category);
        }

        let mut group_order: Vec<&str> = Vec::new();
        let mut group_archives: HashMap<&str, Vec<Arc<Archive>>> = HashMap::new();
        for archive in &archives {
            let group_name = archive.group_name.as_str();
            if !group_archives.contains_key(group_name) {
                group_order.push(group_name);
            }
            group_archives
                .entry(group_name)
                .or_default()
                .push(Arc::clone(archive));
        }
        let groups = group_order
            .iter()
            .map(|name| {
                Group::new(
                    name.to_string(),
                    group_archives.remove(name).unwrap_or_default(),
                )
            })
            .collect();

        let mut legacy: Vec<Arc<Category>> = ["astro-ph", "cond-mat", "q-bio"]
            .into_iter()
            .map(|id| curated(&by_id, id))
            .collect();
        legacy.extend(LEGACY_RECORDS.iter().map(|record| curated(&by_id, record.id)));

        let ml_broad = ML_BROAD_IDS.iter().map(|&id| curated(&by_id, id)).collect();
        let ml_karpathy = ML_KARPATHY_IDS
            .iter()
            .map(|&id| curated(&by_id, id))
            .collect();
        let hep = HEP_IDS.iter().map(|&id| curated(&by_id, id)).collect();

        tracing::debug!(
            categories = categories.len(),
            archives = archives.len(),
            "built taxonomy catalog"
        );

        Self {
            categories,
            archives,
            groups,
            by_id,
            ml_broad,
            ml_karpathy,
            hep,
            legacy,
        }
    }

    /// Looks up a category by its canonical id.
    pub fn category(&self, id: &str) -> Result<&Category, TaxonomyError> {
        self.by_id
            .get(id)
            .map(|category| category.as_ref())
            .ok_or_else(|| TaxonomyError::UnknownCategory(id.to_string()))
    }

    /// Looks up an archive by its id.
    pub fn archive(&self, id: &str) -> Result<&Archive, TaxonomyError> {
        self.archives
            .iter()
            .find(|archive| archive.id == id)
            .map(|archive| archive.as_ref())
            .ok_or_else(|| TaxonomyError::UnknownArchive(id.to_string()))
    }

    /// Looks up a group by its listed name.
    pub fn group(&self, name: &str) -> Result<&Group, TaxonomyError> {
        self.groups
            .iter()
            .find(|group| group.name == name)
            .ok_or_else(|| TaxonomyError::UnknownGroup(name.to_string()))
    }

    /// The complete id → category mapping, legacy ids included.
    pub fn categories_by_id(&self) -> &HashMap<String, Arc<Category>> {
        &self.by_id
    }

    /// Every category, in taxonomy listing order with legacy ids last.
    pub fn all_categories(&self) -> &[Arc<Category>] {
        &self.categories
    }

    /// Every live archive, single-category archives included.
    pub fn all_archives(&self) -> &[Arc<Archive>] {
        &self.archives
    }

    /// The top-level groups in listing order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Broad machine-learning categories per the arXiv ML classification
    /// guide.
    pub fn ml_broad(&self) -> &[Arc<Category>] {
        &self.ml_broad
    }

    /// The six categories scanned by Karpathy's arxiv-sanity.
    pub fn ml_karpathy(&self) -> &[Arc<Category>] {
        &self.ml_karpathy
    }

    /// The four high-energy-physics categories.
    pub fn hep(&self) -> &[Arc<Category>] {
        &self.hep
    }

    /// Every retired category id: the three bare dual-purpose ids followed
    /// by the subsumed legacy archives.
    pub fn legacy(&self) -> &[Arc<Category>] {
        &self.legacy
    }
}

// The collection tables are fixed at compile time together with the record
// tables they index into, so a miss is an inconsistency in the embedded
// data rather than a runtime condition.
fn curated(by_id: &HashMap<String, Arc<Category>>, id: &str) -> Arc<Category> {
    Arc::clone(
        by_id
            .get(id)
            .unwrap_or_else(|| panic!("curated collection references unknown id {id}")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_by_id_count() {
        assert_eq!(catalog().categories_by_id().len(), 176);
        assert_eq!(catalog().all_categories().len(), 176);
    }

    #[test]
    fn test_lookup_by_id() {
        let cat = catalog().category("cs.AI").unwrap();
        assert_eq!(cat.id, "cs.AI");
        assert_eq!(cat.name, "Artificial Intelligence");
        assert_eq!(cat.group_name, "Computer Science");
        assert_eq!(cat.archive_id, "cs");
        assert_eq!(cat.archive_name, "Computer Science");
    }

    #[test]
    fn test_lookup_single_category_archive() {
        let cat = catalog().category("hep-th").unwrap();
        assert_eq!(cat.id, "hep-th");
        assert_eq!(cat.name, "High Energy Physics - Theory");
        assert_eq!(cat.archive_name, "High Energy Physics - Theory");
        assert_eq!(cat.group_name, "Physics");
    }

    #[test]
    fn test_lookup_unknown_category() {
        let err = catalog().category("cs.ZZ").unwrap_err();
        assert_eq!(err, TaxonomyError::UnknownCategory("cs.ZZ".to_string()));
    }

    #[test]
    fn test_id_matches_key() {
        for (key, cat) in catalog().categories_by_id() {
            assert_eq!(key, &cat.id);
        }
    }

    #[test]
    fn test_all_archives_count() {
        assert_eq!(catalog().all_archives().len(), 20);
    }

    #[test]
    fn test_archive_iteration_matches_catalog_filter() {
        let from_iter: Vec<&str> = catalog()
            .archive("cs")
            .unwrap()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        let from_catalog: Vec<&str> = catalog()
            .all_categories()
            .iter()
            .filter(|c| c.archive_id == "cs")
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(from_iter, from_catalog);
    }

    #[test]
    fn test_archive_iteration_covers_all_live_categories() {
        let from_archives: usize = catalog().all_archives().iter().map(|a| a.len()).sum();
        let legacy_only = LEGACY_RECORDS.len();
        assert_eq!(from_archives + legacy_only, catalog().all_categories().len());
    }

    #[test]
    fn test_single_category_archive_iterates_over_itself() {
        let archive = catalog().archive("hep-th").unwrap();
        assert_eq!(archive.len(), 1);
        let members: Vec<&Category> = archive.iter().collect();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, "hep-th");
    }

    #[test]
    fn test_archive_wildcards() {
        let c = catalog();
        assert_eq!(c.archive("cs").unwrap().wildcard(), "cs.*");
        assert_eq!(c.archive("stat").unwrap().wildcard(), "stat.*");
        assert_eq!(c.archive("astro-ph").unwrap().wildcard(), "astro-ph*");
        assert_eq!(c.archive("cond-mat").unwrap().wildcard(), "cond-mat*");
        assert_eq!(c.archive("q-bio").unwrap().wildcard(), "q-bio*");
        assert_eq!(c.archive("hep-th").unwrap().wildcard(), "hep-th");
        assert_eq!(c.archive("quant-ph").unwrap().wildcard(), "quant-ph");
    }

    #[test]
    fn test_legacy_members() {
        let astro = catalog().archive("astro-ph").unwrap();
        let general = astro.legacy_member().unwrap();
        assert_eq!(general.id, "astro-ph");
        assert!(general.description.to_lowercase().contains("legacy"));

        let cond = catalog().archive("cond-mat").unwrap();
        assert_eq!(cond.legacy_member().unwrap().id, "cond-mat");

        assert!(catalog().archive("cs").unwrap().legacy_member().is_none());
    }

    #[test]
    fn test_legacy_collection() {
        let legacy = catalog().legacy();
        assert_eq!(legacy.len(), 21);
        for cat in legacy {
            assert!(catalog().categories_by_id().contains_key(&cat.id));
        }
        assert_eq!(legacy[0].id, "astro-ph");
        assert!(legacy.iter().any(|c| c.id == "cmp-lg"));
        assert!(legacy.iter().any(|c| c.id == "supr-con"));
    }

    #[test]
    fn test_ml_collections() {
        assert_eq!(catalog().ml_broad().len(), 16);
        assert_eq!(catalog().ml_karpathy().len(), 6);
        assert_eq!(catalog().hep().len(), 4);
        assert!(catalog().ml_broad().iter().any(|c| c.id == "cs.LG"));
        assert!(catalog().ml_karpathy().iter().all(|c| {
            catalog().ml_broad().contains(c)
        }));
    }

    #[test]
    fn test_groups() {
        assert_eq!(catalog().groups().len(), 8);
        let physics = catalog().group("Physics").unwrap();
        assert_eq!(physics.archives().len(), 13);
        let cs = catalog().group("Computer Science").unwrap();
        assert_eq!(cs.archives().len(), 1);
        assert!(catalog().group("Alchemy").is_err());
    }

    #[test]
    fn test_alias_pairs_resolve_independently() {
        let pairs = [
            ("cs.NA", "math.NA"),
            ("cs.SY", "eess.SY"),
            ("math.IT", "cs.IT"),
            ("math.MP", "math-ph"),
            ("stat.TH", "math.ST"),
            ("q-fin.EC", "econ.GN"),
        ];
        for (alias, canonical) in pairs {
            let a = catalog().category(alias).unwrap();
            let c = catalog().category(canonical).unwrap();
            assert_ne!(a.id, c.id);
            assert!(
                a.description.contains("alias"),
                "{alias} should document its aliasing"
            );
        }
    }

    #[test]
    fn test_category_ordering_and_equality() {
        let a = catalog().category("cs.AI").unwrap();
        let b = catalog().category("cs.AR").unwrap();
        assert!(a < b);
        assert_eq!(a, &a.clone());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(catalog().category("cs.AI").unwrap().to_string(), "cs.AI");
        assert_eq!(catalog().archive("cs").unwrap().to_string(), "cs.*");
        assert_eq!(catalog().archive("astro-ph").unwrap().to_string(), "astro-ph*");
    }

    #[test]
    fn test_category_serde_round_trip() {
        let cat = catalog().category("stat.ML").unwrap();
        let json = serde_json::to_string(cat).unwrap();
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, cat);
        assert_eq!(back.name, cat.name);
    }
}
