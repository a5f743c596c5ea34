//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config FILE`, or the default location if present)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Word-material and storage locations.
    pub paths: PathsConfig,
    /// Default values for generation.
    pub defaults: GenerationDefaults,
    /// Output settings.
    pub output: OutputConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub adjectives: PathBuf,
    pub nouns: PathBuf,
    pub exclusions: PathBuf,
    pub favorites: PathBuf,
    pub themes_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            adjectives: PathBuf::from("adjectives.txt"),
            nouns: PathBuf::from("nouns.txt"),
            exclusions: PathBuf::from("exclusions.txt"),
            favorites: PathBuf::from("favorites.txt"),
            themes_dir: PathBuf::from("themes"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationDefaults {
    pub count: usize,
    pub separator: String,
    /// Pattern name; unrecognized values fall back to `adj-noun`.
    pub pattern: String,
    /// Case-style name; unrecognized values fall back to `title`.
    pub case: String,
    pub min_length: usize,
    pub max_length: usize,
    /// Render-format name; unrecognized values fall back to `text`.
    pub format: String,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            count: 1,
            separator: " ".into(),
            pattern: "adj-noun".into(),
            case: "title".into(),
            min_length: 0,
            max_length: 0,
            format: "text".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// With `--config FILE` the file must exist and parse; without it, the
    /// default location is read only if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(path) => path.clone(),
            None => {
                let default = Self::config_path();
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.spyspeak.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "spyspeak", "spyspeak")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".spyspeak.toml"))
    }
}
