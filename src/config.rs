//! Project configuration (comic.yaml) parsing.
//!
//! The config file sets defaults for the CLI. Command-line flags win over
//! anything set here, and the parsers themselves never read it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ComicError, Result};
use crate::parser::{Mode, ScriptOptions};
use crate::types::Style;

/// Config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "comic.yaml";

/// Settings loaded from comic.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComicConfig {
    /// Which parser to run (`auto`, `structured`, `natural`).
    pub mode: Mode,

    /// Style applied when a parsed comic declares none.
    pub style: Option<Style>,

    /// Default a missing title instead of failing structured parses.
    pub lenient_title: bool,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for ComicConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Auto,
            style: None,
            lenient_title: false,
            pretty: true,
        }
    }
}

impl ComicConfig {
    /// Load config from a comic.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ComicError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ComicError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(
                "Known keys are mode, style, lenient_title and pretty. Check comic.yaml syntax"
                    .to_string(),
            ),
        })
    }

    /// Load an explicit config file, or `comic.yaml` in `dir` if present,
    /// or fall back to defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        match find_config(dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "found config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn script_options(&self) -> ScriptOptions {
        ScriptOptions {
            lenient_title: self.lenient_title,
        }
    }
}

/// Path of `comic.yaml` in `dir`, if it exists.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILENAME);
    path.is_file().then_some(path)
}

/// Contents written by `comic init`.
pub fn default_config_yaml() -> String {
    let config = ComicConfig::default();
    format!(
        "# comicscript settings\n\
         # mode: auto | structured | natural\n\
         mode: {}\n\
         # style: manga | superhero | cartoon | webcomic | noir | chibi\n\
         # style: cartoon\n\
         lenient_title: {}\n\
         pretty: {}\n",
        config.mode, config.lenient_title, config.pretty
    )
}
