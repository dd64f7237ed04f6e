// Navigation state - drill-down position through batch, term and option
use crate::error::NavError;
use crate::model::Catalog;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    BatchSelect,
    TermSelect,
    OptionSelect,
    DocumentList,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub batch: Option<String>,
    pub term: Option<u32>,
    pub option: Option<u32>,
    pub level: Level,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            batch: None,
            term: None,
            option: None,
            level: Level::BatchSelect,
        }
    }
}

impl NavigationState {
    /// True when exactly the selectors required by `level` are set.
    pub fn is_consistent(&self) -> bool {
        let set = (
            self.batch.is_some(),
            self.term.is_some(),
            self.option.is_some(),
        );
        match self.level {
            Level::BatchSelect => set == (false, false, false),
            Level::TermSelect => set == (true, false, false),
            Level::OptionSelect => set == (true, true, false),
            Level::DocumentList => set == (true, true, true),
        }
    }
}

/// Owns the session's navigation state. The transition methods are the only
/// way to change it, and a rejected transition leaves it untouched.
pub struct Navigator {
    state: NavigationState,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            state: NavigationState::default(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn level(&self) -> Level {
        self.state.level
    }

    fn expect_level(&self, expected: Level, action: &'static str) -> Result<(), NavError> {
        if self.state.level == expected {
            Ok(())
        } else {
            Err(NavError::InvalidTransition {
                action,
                level: self.state.level,
            })
        }
    }

    pub fn select_batch(&mut self, catalog: &Catalog, id: &str) -> Result<(), NavError> {
        self.expect_level(Level::BatchSelect, "select a batch")?;
        let batch = catalog
            .batch(id)
            .ok_or_else(|| NavError::UnknownBatch(id.to_string()))?;

        self.state = NavigationState {
            batch: Some(batch.id.clone()),
            term: None,
            option: None,
            level: Level::TermSelect,
        };
        debug_assert!(self.state.is_consistent());
        tracing::debug!(batch = %batch.id, "batch selected");
        Ok(())
    }

    /// Select the term at zero-based `index` in the term list.
    pub fn select_term(&mut self, catalog: &Catalog, index: usize) -> Result<(), NavError> {
        self.expect_level(Level::TermSelect, "select a semester")?;
        let Some(batch_id) = self.state.batch.as_deref() else {
            return Err(NavError::InvalidTransition {
                action: "select a semester",
                level: self.state.level,
            });
        };
        let batch = catalog
            .batch(batch_id)
            .ok_or_else(|| NavError::UnknownBatch(batch_id.to_string()))?;

        let ordinal = u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .filter(|o| *o <= batch.terms)
            .ok_or_else(|| NavError::TermOutOfRange {
                batch: batch.id.clone(),
                index,
            })?;

        if !batch.is_term_available(ordinal) {
            return Err(NavError::UnavailableTerm {
                batch: batch.id.clone(),
                ordinal,
            });
        }

        self.state.term = Some(ordinal);
        self.state.option = None;
        self.state.level = Level::OptionSelect;
        debug_assert!(self.state.is_consistent());
        tracing::debug!(batch = %batch.id, term = ordinal, "semester selected");
        Ok(())
    }

    /// Select an option by ordinal. An option without documents is a valid
    /// empty listing, so the catalog is not consulted.
    pub fn select_option(&mut self, ordinal: u32) -> Result<(), NavError> {
        self.expect_level(Level::OptionSelect, "select an option")?;
        self.state.option = Some(ordinal);
        self.state.level = Level::DocumentList;
        debug_assert!(self.state.is_consistent());
        tracing::debug!(option = ordinal, "option selected");
        Ok(())
    }

    /// Step one level back. Returns false at BatchSelect, where there is
    /// nothing to go back to.
    pub fn go_back(&mut self) -> bool {
        match self.state.level {
            Level::BatchSelect => return false,
            Level::TermSelect => self.state = NavigationState::default(),
            Level::OptionSelect => {
                self.state.term = None;
                self.state.option = None;
                self.state.level = Level::TermSelect;
            }
            Level::DocumentList => {
                self.state.option = None;
                self.state.level = Level::OptionSelect;
            }
        }
        debug_assert!(self.state.is_consistent());
        tracing::debug!(level = ?self.state.level, "navigated back");
        true
    }

    /// Path taken so far, e.g. `2023-2027 › Semester 2 › Data Lens`.
    pub fn breadcrumb(&self, catalog: &Catalog) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(batch) = &self.state.batch {
            parts.push(batch.clone());
            if let Some(term) = self.state.term {
                parts.push(format!("Semester {term}"));
                if let Some(option) = self.state.option {
                    let name = catalog
                        .options_for(batch, term)
                        .get(&option)
                        .and_then(|o| o.name.clone())
                        .unwrap_or_else(|| crate::view::listing::placeholder_name(option));
                    parts.push(name);
                }
            }
        }
        parts.join(" › ")
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
