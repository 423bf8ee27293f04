//! Runtime configuration
//!
//! Values are resolved in three layers: built-in defaults, then an optional
//! TOML config file, then command-line flags.
//!
//! ```toml
//! tasks_file = "~/todo/tasks.json"
//! sync_git = true
//! default_sort = "alphabetical"
//! ```

use crate::todo::SortMode;
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Tasks file used when neither the config file nor the CLI names one
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Contents of the TOML config file (every key optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub tasks_file: Option<PathBuf>,
    pub sync_git: Option<bool>,
    pub default_sort: Option<String>,
}

impl FileConfig {
    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub tasks_file: Option<PathBuf>,
    /// `--sync-git` can only turn sync on
    pub sync_git: bool,
    pub sort: Option<String>,
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tasks_file: PathBuf,
    pub sync_git: bool,
    pub default_sort: SortMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            sync_git: false,
            default_sort: SortMode::default(),
        }
    }
}

impl Config {
    /// Merge defaults, the config file and command-line overrides
    pub fn resolve(file: Option<FileConfig>, overrides: ConfigOverrides) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = Config::default();

        let sort_name = overrides.sort.or(file.default_sort);
        let default_sort = match sort_name {
            Some(name) => name.parse::<SortMode>().map_err(|e| anyhow!(e))?,
            None => defaults.default_sort,
        };

        Ok(Self {
            tasks_file: overrides
                .tasks_file
                .or(file.tasks_file)
                .unwrap_or(defaults.tasks_file),
            sync_git: overrides.sync_git || file.sync_git.unwrap_or(defaults.sync_git),
            default_sort,
        })
    }
}
