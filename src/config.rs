//! Configuration management for the editor title
//!
//! Handles loading the workbench settings that influence the title
//! controller. Settings are read-only from the controller's point of view.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier following reverse-DNS convention
pub const APP_ID: &str = "com.cosmic.Notebook";

/// Settings file name inside the configuration directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Default height of the editor title region in pixels
pub const DEFAULT_TITLE_HEIGHT: u16 = 35;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workbench configuration
    pub workbench: WorkbenchConfig,

    /// UI configuration
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from the user's configuration directory or return defaults
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_dir()?.join(SETTINGS_FILE))
    }

    /// Load configuration from a JSON file; a missing file yields defaults
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::LoadError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = serde_json::from_str(&raw)?;
        log::debug!(
            "Loaded settings from {} (label format {:?})",
            path.display(),
            config.workbench.label_format
        );
        Ok(config)
    }

    /// Get the configuration directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }

    /// Tab options as exposed by the group service
    pub fn tab_options(&self) -> TabOptions {
        TabOptions {
            show_tabs: self.workbench.show_tabs,
            label_format: self.workbench.label_format.clone(),
        }
    }
}

/// Workbench configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    /// Show one tab per document instead of a single title
    pub show_tabs: bool,

    /// How much detail the title label shows
    pub label_format: LabelFormat,

    /// Root folder used to shorten document paths
    pub workspace_root: Option<PathBuf>,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            show_tabs: false,
            label_format: LabelFormat::Default,
            workspace_root: None,
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme preference (follows system by default)
    pub theme: ThemePreference,

    /// Height of the editor title region
    pub title_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            title_height: DEFAULT_TITLE_HEIGHT,
        }
    }
}

/// Theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemePreference {
    /// Follow system theme
    #[default]
    System,
    /// Always use light theme
    Light,
    /// Always use dark theme
    Dark,
}

/// Label format for editor titles
///
/// Any string is accepted; values other than the known ones are kept
/// verbatim and treated like `medium`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LabelFormat {
    #[default]
    Default,
    Short,
    Medium,
    Long,
    Other(String),
}

impl LabelFormat {
    pub fn as_str(&self) -> &str {
        match self {
            LabelFormat::Default => "default",
            LabelFormat::Short => "short",
            LabelFormat::Medium => "medium",
            LabelFormat::Long => "long",
            LabelFormat::Other(raw) => raw,
        }
    }
}

impl From<String> for LabelFormat {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "default" => LabelFormat::Default,
            "short" => LabelFormat::Short,
            "medium" => LabelFormat::Medium,
            "long" => LabelFormat::Long,
            _ => LabelFormat::Other(raw),
        }
    }
}

impl From<&str> for LabelFormat {
    fn from(raw: &str) -> Self {
        LabelFormat::from(raw.to_string())
    }
}

impl From<LabelFormat> for String {
    fn from(format: LabelFormat) -> Self {
        format.as_str().to_string()
    }
}

/// Tab related options read by editor titles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabOptions {
    pub show_tabs: bool,
    pub label_format: LabelFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.workbench.show_tabs);
        assert_eq!(config.workbench.label_format, LabelFormat::Default);
        assert_eq!(config.ui.title_height, DEFAULT_TITLE_HEIGHT);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.workbench.label_format = LabelFormat::Long;
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.workbench.label_format, LabelFormat::Long);
    }

    #[test]
    fn test_unknown_label_format_is_kept() {
        let config: Config =
            serde_json::from_str(r#"{"workbench": {"label_format": "tiny"}}"#).unwrap();
        assert_eq!(
            config.workbench.label_format,
            LabelFormat::Other("tiny".to_string())
        );
        assert_eq!(config.ui.theme, ThemePreference::System);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.workbench.label_format, LabelFormat::Default);
    }

    #[test]
    fn test_load_settings_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"workbench": {"label_format": "short"}, "ui": {"title_height": 40}}"#)
            .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.workbench.label_format, LabelFormat::Short);
        assert_eq!(config.ui.title_height, 40);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_tab_options_projection() {
        let mut config = Config::default();
        config.workbench.label_format = LabelFormat::Short;
        let options = config.tab_options();
        assert_eq!(options.label_format, LabelFormat::Short);
        assert!(!options.show_tabs);
    }
}
