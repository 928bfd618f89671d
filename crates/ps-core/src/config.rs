// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves layout and view settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happens when a split is requested on a pane that is already split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResplitPolicy {
    /// Refuse the split and keep the existing subtree
    #[default]
    Guard,
    /// Discard the existing subtree and start over with two fresh leaves
    Replace,
}

impl ResplitPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            ResplitPolicy::Guard => "guard",
            ResplitPolicy::Replace => "replace",
        }
    }
}

impl std::str::FromStr for ResplitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "guard" => Ok(ResplitPolicy::Guard),
            "replace" => Ok(ResplitPolicy::Replace),
            other => Err(format!("unknown re-split policy '{other}' (expected guard or replace)")),
        }
    }
}

/// How the current tree is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewFormat {
    /// Box drawing of every pane on a character grid
    #[default]
    Grid,
    /// Indented tree listing
    Outline,
    /// Serialized view model
    Json,
}

impl ViewFormat {
    pub fn all() -> &'static [ViewFormat] {
        &[ViewFormat::Grid, ViewFormat::Outline, ViewFormat::Json]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewFormat::Grid => "grid",
            ViewFormat::Outline => "outline",
            ViewFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ViewFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewFormat::all()
            .iter()
            .copied()
            .find(|f| f.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown view format '{s}' (expected grid, outline or json)"))
    }
}

/// Structural rules for the pane tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Behavior of split on an already-split pane
    pub resplit: ResplitPolicy,
    /// Deepest nesting level a split may create (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            resplit: ResplitPolicy::Guard,
            max_depth: None,
        }
    }
}

/// Text view settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Grid width in characters
    pub cols: usize,
    /// Grid height in characters
    pub rows: usize,
    /// Label panes with their ids
    pub show_ids: bool,
    /// Format used by `show` without an argument and after each change
    pub format: ViewFormat,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            show_ids: true,
            format: ViewFormat::Grid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default tracing filter (RUST_LOG takes precedence)
    pub log_level: String,
    pub layout: LayoutSettings,
    pub view: ViewSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            layout: LayoutSettings::default(),
            view: ViewSettings::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl Config {
    /// Get the default config file path (~/.config/pane-splitter/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pane-splitter").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save(&path)?;
        Ok(path)
    }
}
