//! Natural-language story parser.
//!
//! Turns loosely written prose into a comic by heuristics: an optional title
//! line, segmentation into panels, and pattern extraction of speech, sound
//! effects and narration. Any non-blank input produces a comic with at least
//! one panel.

mod extract;
mod segment;

pub use extract::{extract_panel, infer_character, SCENE_FALLBACK_CHARS, UNKNOWN_SPEAKER};
pub use segment::split_segments;

use crate::error::{ComicError, ParseErrors};
use crate::types::{Panel, DEFAULT_TITLE};

use super::assemble::natural_comic;
use super::ParseResult;

/// A first line at least this many characters long is never a title.
pub const TITLE_MAX_CHARS: usize = 100;

/// Parse a prose story.
///
/// Fails only when `input` is empty or whitespace.
pub fn parse_story(input: &str) -> ParseResult {
    if input.trim().is_empty() {
        return Err(ParseErrors::single(ComicError::EmptyInput));
    }

    let (title, body) = split_title(input);
    let title = title.unwrap_or(DEFAULT_TITLE).to_string();

    let panels: Vec<Panel> = split_segments(body)
        .iter()
        .map(|segment| extract_panel(segment))
        .filter(|panel| !panel.is_empty())
        .collect();

    tracing::debug!(title = %title, panels = panels.len(), "parsed story");

    let fallback_source = if body.trim().is_empty() { input } else { body };
    Ok(natural_comic(title, panels, fallback_source))
}

/// Split off a title line.
///
/// The first non-blank line is a title when it is shorter than
/// [`TITLE_MAX_CHARS`] and does not end like a sentence. The body is the
/// text after it; otherwise the whole input is body.
pub fn split_title(input: &str) -> (Option<&str>, &str) {
    let mut offset = 0;

    for line in input.split_inclusive('\n') {
        let end = offset + line.len();
        let candidate = line.trim();

        if candidate.is_empty() {
            offset = end;
            continue;
        }

        let is_title = candidate.chars().count() < TITLE_MAX_CHARS
            && !candidate.ends_with(['.', '!', '?']);

        return if is_title {
            (Some(candidate), &input[end..])
        } else {
            (None, input)
        };
    }

    (None, input)
}
