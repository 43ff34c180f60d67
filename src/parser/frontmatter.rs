//! Frontmatter extraction.
//!
//! A structured script may open with a block of `key: value` lines fenced by
//! `---`:
//!
//! ```text
//! ---
//! title: Night Shift
//! author: R. Pony
//! style: noir
//! ---
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Style;

static KEY_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([\w-]+)\s*:\s*(.*)$").unwrap());

/// Result of extracting frontmatter from a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// Key-value pairs, keys lower-cased. Unknown keys are kept.
    pub values: BTreeMap<String, String>,
    /// Index of the first body line
    pub body_start: usize,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn author(&self) -> Option<&str> {
        self.get("author")
    }

    /// The declared style, if it names a known one.
    pub fn style(&self) -> Option<Style> {
        let raw = self.get("style")?;
        match raw.parse() {
            Ok(style) => Some(style),
            Err(_) => {
                tracing::warn!(style = raw, "ignoring unknown style in frontmatter");
                None
            }
        }
    }
}

/// Extract frontmatter from the start of a script.
///
/// Frontmatter exists only when line 0 is exactly `---`. Pairs are collected
/// until the matching closing `---` and the body begins on the line after it.
/// Without an opening fence, or when the fence is never closed, there is no
/// frontmatter and the body starts at line 0.
pub fn extract_frontmatter(lines: &[&str]) -> Frontmatter {
    if lines.first().map(|line| line.trim()) != Some("---") {
        return Frontmatter::default();
    }

    let Some(closing) = find_closing_delimiter(&lines[1..]).map(|i| i + 1) else {
        tracing::warn!("unclosed frontmatter: missing closing ---");
        return Frontmatter::default();
    };

    let values = lines[1..closing]
        .iter()
        .filter_map(|line| parse_pair(line))
        .collect();

    Frontmatter {
        values,
        body_start: closing + 1,
    }
}

/// Find the closing --- delimiter.
fn find_closing_delimiter(lines: &[&str]) -> Option<usize> {
    lines.iter().position(|line| line.trim() == "---")
}

/// Parse a `key: value` line. Lines without a value are skipped.
fn parse_pair(line: &str) -> Option<(String, String)> {
    let caps = KEY_VALUE.captures(line.trim())?;
    let key = caps.get(1)?.as_str().to_ascii_lowercase();
    let value = unquote(caps.get(2)?.as_str().trim());

    if value.is_empty() {
        return None;
    }

    Some((key, value.to_string()))
}

/// Strip one layer of matching quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
