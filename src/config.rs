use crate::error::ConfigError;
use crate::style;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration. Every section has defaults, so a partial file
/// only overrides what it names.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub catalog: CatalogConfig,
    pub documents: DocumentsConfig,
    pub ui: UiConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Initial window size (in points)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Catalog source
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file to use instead of the built-in one
    pub path: Option<PathBuf>,
}

/// Document host
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Directory that document paths like `/pdfs/...` are relative to
    pub root: PathBuf,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    /// Seconds before info and error notices disappear
    pub notice_timeout_secs: u64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "dark".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: style::WINDOW_WIDTH,
            height: style::WINDOW_HEIGHT,
        }
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_timeout_secs: style::MESSAGE_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "degree-navigator")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or
    /// broken.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::debug!("no config directory, using defaults");
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "config loaded");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
            tracing::info!(path = %path.display(), "wrote default config");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.window.width, style::WINDOW_WIDTH);
        assert_eq!(config.window.height, style::WINDOW_HEIGHT);
        assert!(config.catalog.path.is_none());
        assert_eq!(config.documents.root, PathBuf::from("public"));
        assert_eq!(config.ui.notice_timeout_secs, 5);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.documents.root, deserialized.documents.root);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[theme]
mode = "light"

[catalog]
path = "/etc/dyd/catalog.toml"
"#,
        )
        .unwrap();
        assert_eq!(config.theme.mode, "light");
        assert_eq!(
            config.catalog.path,
            Some(PathBuf::from("/etc/dyd/catalog.toml"))
        );
        assert_eq!(config.window.width, style::WINDOW_WIDTH);
        assert_eq!(config.ui.notice_timeout_secs, 5);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.documents.root = PathBuf::from("/srv/reports");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.documents.root, PathBuf::from("/srv/reports"));
    }

    #[test]
    fn test_broken_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme\nmode = ").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
