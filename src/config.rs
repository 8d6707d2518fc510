//! Config file.
//!
//! Read from `config.toml` in the platform config directory (for example
//! `~/.config/assign-jump/config.toml`), or from `--config`. The file is
//! read fresh on every run and never written. A missing default file means
//! built-in defaults; a missing `--config` file is an error.
//!
//! ```toml
//! allow_chars_before_assign_op = false
//! selection = "reselect"   # or "caret"
//! reveal = "center"        # or "minimal"
//!
//! [viewport]
//! height = 40
//! width = 120
//! tab_width = 4
//!
//! [operators]
//! r = ["<-", "="]
//! default = ["="]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use aj_editor::options::Options;
use aj_lang::OperatorTable;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

/// Everything the config file can set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Command options, at the top level of the file.
    #[serde(flatten)]
    pub options: Options,

    /// Viewport size used when the CLI does not give one.
    pub viewport: ViewportConfig,

    /// Per-language operator overrides, keyed by language tag.
    pub operators: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub height: usize,
    pub width: usize,
    pub tab_width: u8,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            height: 24,
            width: 80,
            tab_width: 4,
        }
    }
}

impl Config {
    /// Load from `explicit`, or from the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let Some(path) = Self::default_path() else {
            tracing::debug!("no config directory available, using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Read and parse one file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// `config.toml` under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "assign-jump").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Built-in operators with this file's overrides applied.
    pub fn operator_table(&self) -> OperatorTable {
        OperatorTable::builtin().with_overrides(
            self.operators
                .iter()
                .map(|(lang, ops)| (lang.as_str(), ops.iter().map(String::as_str))),
        )
    }
}
