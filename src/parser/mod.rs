//! Script parsers.
//!
//! Two independent front-ends produce the same [`Comic`] model:
//!
//! - [`parse_script`] reads the structured markup (frontmatter, `# Page N`
//!   headers, character cues, `*sfx*`, `> narration`, `~ thought`).
//! - [`parse_story`] reads free prose and infers panels heuristically.
//!
//! [`parse_auto`] picks one with [`detect_mode`].
//!
//! # Usage
//!
//! ```
//! use comicscript::parser::parse_script;
//!
//! let comic = parse_script("---\ntitle: Demo\n---\n# Page 1\nA quiet street").unwrap();
//! assert_eq!(comic.panel_count(), 1);
//! ```

mod assemble;
mod classify;
mod frontmatter;
pub mod natural;
pub mod structured;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ComicError, ParseErrors};
use crate::types::Comic;

pub use assemble::{paginate, truncate_chars, FALLBACK_SCENE_CHARS, PANELS_PER_PAGE};
pub use classify::{classify, LineKind};
pub use frontmatter::{extract_frontmatter, Frontmatter};
pub use natural::parse_story;
pub use structured::{parse_script, parse_script_with, ScriptOptions, THOUGHT_SPEAKER};

/// Outcome of either front-end: a complete comic or every error found.
pub type ParseResult = std::result::Result<Comic, ParseErrors>;

/// Which front-end to run.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Decide from the text itself
    #[default]
    Auto,
    /// Structured markup
    Structured,
    /// Free prose
    Natural,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::Structured => "structured",
            Mode::Natural => "natural",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ComicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Mode::Auto),
            "structured" | "script" => Ok(Mode::Structured),
            "natural" | "story" => Ok(Mode::Natural),
            other => Err(ComicError::Parse {
                message: format!("Unknown mode: {}", other),
                help: Some("Expected one of: auto, structured, natural".to_string()),
            }),
        }
    }
}

/// Guess which front-end suits `text`.
///
/// Structured when the first non-blank line opens frontmatter or any line
/// is a page header; natural otherwise. Never returns [`Mode::Auto`].
pub fn detect_mode(text: &str) -> Mode {
    let first = text.lines().map(str::trim).find(|line| !line.is_empty());
    if first == Some("---") {
        return Mode::Structured;
    }

    let has_page_header = text
        .lines()
        .any(|line| matches!(classify(line.trim(), None), LineKind::PageHeader(_)));

    if has_page_header {
        Mode::Structured
    } else {
        Mode::Natural
    }
}

/// Parse with the given mode, resolving [`Mode::Auto`] by detection.
pub fn parse_with_mode(input: &str, mode: Mode, options: &ScriptOptions) -> ParseResult {
    let mode = match mode {
        Mode::Auto => detect_mode(input),
        explicit => explicit,
    };
    tracing::debug!(mode = %mode, "parsing");

    match mode {
        Mode::Natural => parse_story(input),
        _ => parse_script_with(input, options),
    }
}

/// Parse with a detected mode and default options.
pub fn parse_auto(input: &str) -> ParseResult {
    parse_with_mode(input, Mode::Auto, &ScriptOptions::default())
}
