// Panel model: what the current level shows, independent of egui
use crate::model::{Catalog, DocumentRef};
use crate::state::{Level, NavigationState};

pub const PLACEHOLDER_TAG: &str = "yellow";

pub fn placeholder_name(ordinal: u32) -> String {
    format!("Major Project {ordinal}")
}

#[derive(Clone, Debug, PartialEq)]
pub struct BatchItem {
    pub id: String,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TermItem {
    /// Zero-based position, as passed to `select_term`.
    pub index: usize,
    pub ordinal: u32,
    pub available: bool,
}

impl TermItem {
    pub fn label(&self) -> String {
        if self.available {
            format!("Semester {}", self.ordinal)
        } else {
            "Semester in progress".to_string()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionItem {
    pub ordinal: u32,
    pub name: String,
    pub tag: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentItem {
    pub document: DocumentRef,
    pub name: String,
    pub tag: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Listing {
    Batches(Vec<BatchItem>),
    Terms(Vec<TermItem>),
    Options(Vec<OptionItem>),
    Documents(Vec<DocumentItem>),
}

impl Listing {
    pub fn len(&self) -> usize {
        match self {
            Listing::Batches(items) => items.len(),
            Listing::Terms(items) => items.len(),
            Listing::Options(items) => items.len(),
            Listing::Documents(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn title(&self) -> &'static str {
        match self {
            Listing::Batches(_) => "Select Your Batch",
            Listing::Terms(_) => "Select Semester",
            Listing::Options(_) => "Major Projects",
            Listing::Documents(_) => "Project Reports",
        }
    }

    pub fn empty_text(&self) -> &'static str {
        match self {
            Listing::Batches(_) => "No batches in the catalog",
            Listing::Terms(_) => "No semesters",
            Listing::Options(_) => "No projects recorded for this semester",
            Listing::Documents(_) => "No reports uploaded yet",
        }
    }
}

/// Enumerate the items for the panel matching `state.level`.
pub fn build(state: &NavigationState, catalog: &Catalog) -> Listing {
    match state.level {
        Level::BatchSelect => Listing::Batches(
            catalog
                .batches()
                .iter()
                .map(|b| BatchItem {
                    id: b.id.clone(),
                    summary: b.summary(),
                })
                .collect(),
        ),
        Level::TermSelect => {
            let items = state
                .batch
                .as_deref()
                .and_then(|id| catalog.batch(id))
                .map(|b| {
                    (1..=b.terms)
                        .enumerate()
                        .map(|(index, ordinal)| TermItem {
                            index,
                            ordinal,
                            available: catalog.is_term_available(&b.id, ordinal),
                        })
                        .collect()
                })
                .unwrap_or_default();
            Listing::Terms(items)
        }
        Level::OptionSelect => {
            let items = match (state.batch.as_deref(), state.term) {
                (Some(batch), Some(term)) => option_items(catalog, batch, term),
                _ => Vec::new(),
            };
            Listing::Options(items)
        }
        Level::DocumentList => {
            let items = match (state.batch.as_deref(), state.term, state.option) {
                (Some(batch), Some(term), Some(option)) => {
                    let tag = catalog
                        .options_for(batch, term)
                        .get(&option)
                        .and_then(|o| o.tag.clone())
                        .unwrap_or_else(|| PLACEHOLDER_TAG.to_string());
                    catalog
                        .documents_for(batch, term, option)
                        .iter()
                        .map(|doc| DocumentItem {
                            name: doc.display_name().to_string(),
                            document: doc.clone(),
                            tag: tag.clone(),
                        })
                        .collect()
                }
                _ => Vec::new(),
            };
            Listing::Documents(items)
        }
    }
}

fn option_items(catalog: &Catalog, batch: &str, term: u32) -> Vec<OptionItem> {
    catalog
        .options_for(batch, term)
        .iter()
        .map(|(&ordinal, info)| OptionItem {
            ordinal,
            name: info
                .name
                .clone()
                .unwrap_or_else(|| placeholder_name(ordinal)),
            tag: info
                .tag
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_TAG.to_string()),
        })
        .collect()
}
