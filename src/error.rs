use crate::state::Level;
use std::path::PathBuf;
use thiserror::Error;

/// A rejected navigation transition. None of these change the state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown batch: {0}")]
    UnknownBatch(String),

    #[error("Semester {ordinal} of batch {batch} is in progress")]
    UnavailableTerm { batch: String, ordinal: u32 },

    #[error("batch {batch} has no semester at position {index}")]
    TermOutOfRange { batch: String, index: usize },

    #[error("cannot {action} while in {level:?}")]
    InvalidTransition { action: &'static str, level: Level },
}

impl NavError {
    /// Errors the user must acknowledge before continuing.
    pub fn is_blocking(&self) -> bool {
        matches!(self, NavError::UnavailableTerm { .. })
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine config directory")]
    NoConfigDir,
}

#[derive(Error, Debug)]
#[error("could not open {target}: {source}")]
pub struct OpenError {
    pub target: String,
    #[source]
    pub source: std::io::Error,
}
