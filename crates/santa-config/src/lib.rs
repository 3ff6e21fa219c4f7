//! Santa configuration system
//!
//! This crate provides centralized presentation settings, loaded from
//! `santa.toml` and overridable through environment variables. Control values
//! (suit color, beard width) are deliberately not configurable: every session
//! starts from the built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "santa.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SantaConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Side panel settings
    pub panel: PanelConfig,
    /// Text rendering settings
    pub text: TextConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels
    pub width: u32,
    /// Initial inner height in logical pixels
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    /// Width of the control side panel in logical pixels
    pub sidebar_width: f32,
    /// Preset colors offered by the suit color picker (any CSS color syntax)
    pub swatches: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Path to a font file (.ttf/.otf); system sans-serif when unset
    pub font: Option<PathBuf>,
    /// Base text size in logical pixels
    pub size: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// env_logger filter string, e.g. "info" or "santa_shell=debug"
    pub filter: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Santa Customizer".to_string(),
            width: 960,
            height: 680,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            sidebar_width: 280.0,
            swatches: [
                "#FF0000", "#B22222", "#8B0000", "#FF8C00", "#FFD700", "#00FF00", "#228B22",
                "#00CED1", "#0000FF", "#4B0082", "#FF69B4", "#000000",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: None,
            size: 15.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

fn env_flag_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn env_flag_f32(name: &str) -> Option<f32> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}

impl SantaConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from `path`, or return defaults if it is missing.
    ///
    /// A file that exists but does not parse is reported and ignored.
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from the default location (santa.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(CONFIG_FILE)
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(title) = std::env::var("SANTA_WINDOW_TITLE") {
            self.window.title = title;
        }
        if let Some(w) = env_flag_u32("SANTA_WINDOW_WIDTH") {
            self.window.width = w;
        }
        if let Some(h) = env_flag_u32("SANTA_WINDOW_HEIGHT") {
            self.window.height = h;
        }
        if let Some(w) = env_flag_f32("SANTA_SIDEBAR_WIDTH") {
            self.panel.sidebar_width = w;
        }
        if let Ok(font) = std::env::var("SANTA_FONT") {
            self.text.font = Some(PathBuf::from(font));
        }
        if let Some(size) = env_flag_f32("SANTA_TEXT_SIZE") {
            self.text.size = size;
        }
        if let Ok(filter) = std::env::var("SANTA_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from santa.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
