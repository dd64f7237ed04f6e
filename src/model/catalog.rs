// Static content catalog: batch -> term -> option -> documents
use crate::error::CatalogError;
use crate::model::DocumentRef;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::Path;

const CATALOG_VERSION: u32 = 1;

/// Upper bound on semesters per batch; the term list is built eagerly.
pub const MAX_TERMS: u32 = 16;

const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.toml");

static NO_OPTIONS: BTreeMap<u32, OptionInfo> = BTreeMap::new();

/// Display metadata for a project option. Either field may be absent in the
/// data file; the renderer fills in placeholders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionInfo {
    pub name: Option<String>,
    pub tag: Option<String>,
}

#[derive(Clone, Debug, Default)]
struct TermData {
    options: BTreeMap<u32, OptionInfo>,
    documents: BTreeMap<u32, Vec<DocumentRef>>,
}

#[derive(Clone, Debug)]
pub struct BatchInfo {
    pub id: String,
    pub summary: Option<String>,
    pub terms: u32,
    in_progress: BTreeSet<u32>,
    term_data: BTreeMap<u32, TermData>,
}

impl BatchInfo {
    /// Short description shown under the batch id.
    pub fn summary(&self) -> String {
        match &self.summary {
            Some(summary) => summary.clone(),
            None if self.terms == 1 => "1 Semester".to_string(),
            None => format!("{} Semesters", self.terms),
        }
    }

    /// Whether the 1-based term ordinal may be selected.
    pub fn is_term_available(&self, ordinal: u32) -> bool {
        (1..=self.terms).contains(&ordinal) && !self.in_progress.contains(&ordinal)
    }
}

/// Immutable catalog, built once at startup.
#[derive(Clone, Debug)]
pub struct Catalog {
    batches: Vec<BatchInfo>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_toml_str(EMBEDDED_CATALOG)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(contents)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCatalog) -> Result<Self, CatalogError> {
        if raw.version != CATALOG_VERSION {
            return Err(CatalogError::Invalid(format!(
                "unsupported catalog version {} (expected {})",
                raw.version, CATALOG_VERSION
            )));
        }

        let mut seen_ids = HashSet::new();
        let mut batches = Vec::with_capacity(raw.batches.len());

        for raw_batch in raw.batches {
            let id = raw_batch.id.trim().to_string();
            if id.is_empty() {
                return Err(CatalogError::Invalid("batch with empty id".into()));
            }
            if !seen_ids.insert(id.clone()) {
                return Err(CatalogError::Invalid(format!("duplicate batch id {id}")));
            }
            if raw_batch.terms == 0 {
                return Err(CatalogError::Invalid(format!("batch {id} has no terms")));
            }
            if raw_batch.terms > MAX_TERMS {
                return Err(CatalogError::Invalid(format!(
                    "batch {id}: {} terms exceeds the limit of {MAX_TERMS}",
                    raw_batch.terms
                )));
            }

            let in_range = 1..=raw_batch.terms;
            let mut in_progress = BTreeSet::new();
            for ordinal in raw_batch.in_progress {
                if !in_range.contains(&ordinal) {
                    return Err(CatalogError::Invalid(format!(
                        "batch {id}: in-progress term {ordinal} outside 1..={}",
                        raw_batch.terms
                    )));
                }
                in_progress.insert(ordinal);
            }

            let mut term_data = BTreeMap::new();
            for raw_term in raw_batch.term {
                if !in_range.contains(&raw_term.ordinal) {
                    return Err(CatalogError::Invalid(format!(
                        "batch {id}: term {} outside 1..={}",
                        raw_term.ordinal, raw_batch.terms
                    )));
                }
                let data = build_term(&id, &raw_term)?;
                if term_data.insert(raw_term.ordinal, data).is_some() {
                    return Err(CatalogError::Invalid(format!(
                        "batch {id}: duplicate term {}",
                        raw_term.ordinal
                    )));
                }
            }

            batches.push(BatchInfo {
                id,
                summary: raw_batch.summary,
                terms: raw_batch.terms,
                in_progress,
                term_data,
            });
        }

        tracing::debug!(batches = batches.len(), "catalog built");
        Ok(Self { batches })
    }

    /// Batches in catalog order.
    pub fn batches(&self) -> &[BatchInfo] {
        &self.batches
    }

    pub fn batch(&self, id: &str) -> Option<&BatchInfo> {
        self.batches.iter().find(|b| b.id == id)
    }

    pub fn is_term_available(&self, batch: &str, ordinal: u32) -> bool {
        self.batch(batch)
            .map(|b| b.is_term_available(ordinal))
            .unwrap_or(false)
    }

    /// Options offered in a term, keyed by ordinal. Empty when nothing is
    /// recorded for the pair.
    pub fn options_for(&self, batch: &str, term: u32) -> &BTreeMap<u32, OptionInfo> {
        self.term(batch, term)
            .map(|t| &t.options)
            .unwrap_or(&NO_OPTIONS)
    }

    /// Documents for an option in catalog order. Empty when nothing is
    /// recorded for the triple.
    pub fn documents_for(&self, batch: &str, term: u32, option: u32) -> &[DocumentRef] {
        self.term(batch, term)
            .and_then(|t| t.documents.get(&option))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn term(&self, batch: &str, term: u32) -> Option<&TermData> {
        self.batch(batch)?.term_data.get(&term)
    }
}

fn build_term(batch: &str, raw: &RawTerm) -> Result<TermData, CatalogError> {
    let mut data = TermData::default();
    for option in &raw.option {
        let info = OptionInfo {
            name: option.name.clone(),
            tag: option.tag.clone(),
        };
        if data.options.insert(option.ordinal, info).is_some() {
            return Err(CatalogError::Invalid(format!(
                "batch {batch} term {}: duplicate option {}",
                raw.ordinal, option.ordinal
            )));
        }
        let documents = option.documents.iter().map(DocumentRef::new).collect();
        data.documents.insert(option.ordinal, documents);
    }

    // Ordinals must be exactly 1..=N
    for (expected, ordinal) in (1u32..).zip(data.options.keys()) {
        if *ordinal != expected {
            return Err(CatalogError::Invalid(format!(
                "batch {batch} term {}: option ordinals must be dense from 1, found {ordinal} where {expected} was expected",
                raw.ordinal
            )));
        }
    }

    Ok(data)
}

// --- On-disk format ---

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    version: u32,
    #[serde(default, rename = "batch")]
    batches: Vec<RawBatch>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBatch {
    id: String,
    summary: Option<String>,
    terms: u32,
    #[serde(default)]
    in_progress: Vec<u32>,
    #[serde(default)]
    term: Vec<RawTerm>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTerm {
    ordinal: u32,
    #[serde(default)]
    option: Vec<RawOption>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOption {
    ordinal: u32,
    name: Option<String>,
    tag: Option<String>,
    #[serde(default)]
    documents: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL: &str = r#"
version = 1

[[batch]]
id = "A"
terms = 4
in_progress = [4]

[[batch.term]]
ordinal = 1

[[batch.term.option]]
ordinal = 1
name = "First"
tag = "green"
documents = ["/docs/a/one.pdf", "/docs/a/two.pdf"]

[[batch.term.option]]
ordinal = 2
documents = []
"#;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().expect("embedded catalog must parse");
        let ids: Vec<&str> = catalog.batches().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["2023-2027", "2024-2028"]);
        assert_eq!(catalog.batch("2023-2027").map(|b| b.terms), Some(4));
        assert_eq!(catalog.batch("2024-2028").map(|b| b.terms), Some(2));
        assert_eq!(catalog.options_for("2023-2027", 2).len(), 4);
        assert_eq!(catalog.documents_for("2023-2027", 2, 2).len(), 5);
    }

    #[test]
    fn test_embedded_availability_policy() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.is_term_available("2023-2027", 1));
        assert!(catalog.is_term_available("2023-2027", 3));
        assert!(!catalog.is_term_available("2023-2027", 4));
        assert!(catalog.is_term_available("2024-2028", 1));
        assert!(!catalog.is_term_available("2024-2028", 2));
        assert!(!catalog.is_term_available("2024-2028", 3));
        assert!(!catalog.is_term_available("1999-2003", 1));
    }

    #[test]
    fn test_empty_option_still_listed() {
        let catalog = Catalog::embedded().unwrap();
        let options = catalog.options_for("2023-2027", 3);
        assert_eq!(
            options.get(&4).and_then(|o| o.name.as_deref()),
            Some("Climate Change")
        );
        assert!(catalog.documents_for("2023-2027", 3, 4).is_empty());
    }

    #[test]
    fn test_missing_entries_are_empty() {
        let catalog = Catalog::from_toml_str(SMALL).unwrap();
        assert!(catalog.options_for("A", 2).is_empty());
        assert!(catalog.options_for("B", 1).is_empty());
        assert!(catalog.documents_for("A", 1, 9).is_empty());
        assert!(catalog.documents_for("A", 3, 1).is_empty());
    }

    #[test]
    fn test_lookups_preserve_order() {
        let catalog = Catalog::from_toml_str(SMALL).unwrap();
        let first: Vec<&str> = catalog
            .documents_for("A", 1, 1)
            .iter()
            .map(|d| d.reference())
            .collect();
        let second: Vec<&str> = catalog
            .documents_for("A", 1, 1)
            .iter()
            .map(|d| d.reference())
            .collect();
        assert_eq!(first, vec!["/docs/a/one.pdf", "/docs/a/two.pdf"]);
        assert_eq!(first, second);

        let ordinals: Vec<u32> = catalog.options_for("A", 1).keys().copied().collect();
        assert_eq!(ordinals, vec![1, 2]);
        assert_eq!(catalog.options_for("A", 1), catalog.options_for("A", 1));
    }

    #[test]
    fn test_optional_metadata() {
        let catalog = Catalog::from_toml_str(SMALL).unwrap();
        let options = catalog.options_for("A", 1);
        assert_eq!(options[&2], OptionInfo::default());
        assert_eq!(catalog.batch("A").unwrap().summary(), "4 Semesters");
    }

    #[test]
    fn test_rejects_sparse_option_ordinals() {
        let sparse = SMALL.replace("ordinal = 2\ndocuments", "ordinal = 3\ndocuments");
        let err = Catalog::from_toml_str(&sparse).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(msg) if msg.contains("dense")));
    }

    #[test]
    fn test_rejects_duplicate_batch() {
        let doubled = format!(
            "{SMALL}\n[[batch]]\nid = \"A\"\nterms = 1\n"
        );
        let err = Catalog::from_toml_str(&doubled).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(msg) if msg.contains("duplicate batch")));
    }

    #[test]
    fn test_rejects_zero_terms() {
        let bad = SMALL.replace("terms = 4", "terms = 0");
        assert!(matches!(
            Catalog::from_toml_str(&bad),
            Err(CatalogError::Invalid(msg)) if msg.contains("no terms")
        ));
    }

    #[test]
    fn test_rejects_too_many_terms() {
        let huge = "version = 1\n[[batch]]\nid = \"X\"\nterms = 4294967295\n";
        assert!(matches!(
            Catalog::from_toml_str(huge),
            Err(CatalogError::Invalid(msg)) if msg.contains("limit")
        ));

        let at_limit = format!("version = 1\n[[batch]]\nid = \"X\"\nterms = {MAX_TERMS}\n");
        let catalog = Catalog::from_toml_str(&at_limit).unwrap();
        assert_eq!(catalog.batch("X").map(|b| b.terms), Some(MAX_TERMS));
    }

    #[test]
    fn test_rejects_blank_batch_id() {
        for id in ["", "   "] {
            let bad = SMALL.replace("id = \"A\"", &format!("id = \"{id}\""));
            assert!(matches!(
                Catalog::from_toml_str(&bad),
                Err(CatalogError::Invalid(msg)) if msg.contains("empty id")
            ));
        }
    }

    #[test]
    fn test_rejects_term_outside_range() {
        let bad = SMALL.replace("[[batch.term]]\nordinal = 1", "[[batch.term]]\nordinal = 5");
        assert!(matches!(
            Catalog::from_toml_str(&bad),
            Err(CatalogError::Invalid(msg)) if msg.contains("term 5 outside")
        ));
    }

    #[test]
    fn test_rejects_duplicate_term() {
        let doubled = format!("{SMALL}\n[[batch.term]]\nordinal = 1\n");
        assert!(matches!(
            Catalog::from_toml_str(&doubled),
            Err(CatalogError::Invalid(msg)) if msg.contains("duplicate term 1")
        ));
    }

    #[test]
    fn test_rejects_duplicate_option() {
        let bad = SMALL.replace("ordinal = 2\ndocuments", "ordinal = 1\ndocuments");
        assert!(matches!(
            Catalog::from_toml_str(&bad),
            Err(CatalogError::Invalid(msg)) if msg.contains("duplicate option 1")
        ));
    }

    #[test]
    fn test_rejects_out_of_range_in_progress() {
        let bad = SMALL.replace("in_progress = [4]", "in_progress = [5]");
        assert!(matches!(
            Catalog::from_toml_str(&bad),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_version() {
        let bad = SMALL.replace("version = 1", "version = 2");
        assert!(matches!(
            Catalog::from_toml_str(&bad),
            Err(CatalogError::Invalid(msg)) if msg.contains("version")
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Catalog::from_toml_str("version = "),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.batches().len(), 1);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            Catalog::load(&missing),
            Err(CatalogError::Io { .. })
        ));
    }
}
