//! Splitting prose into panel-sized segments.
//!
//! Two strategies, chosen per document:
//!
//! - **Explicit markers.** If `[NEW PANEL]` appears anywhere (any case), each
//!   marker opens a segment that runs to `[END PANEL]`, `[/PANEL]`, the next
//!   `[NEW PANEL]` or the end of the text. Text outside markers is ignored and
//!   no other rule applies to the document.
//! - **Scene breaks.** Otherwise lines are scanned and a new segment starts
//!   at a scene-break keyword line (the keyword prefix is dropped), a bare
//!   `---` line, or a blank line after some content.

use once_cell::sync::Lazy;
use regex::Regex;

static PANEL_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\[NEW\s+PANEL\]").unwrap());

static PANEL_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[(?:END\s+PANEL|/PANEL)\]").unwrap());

static SCENE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:meanwhile|later|suddenly|next panel|cut to|new panel|panel break)\b")
        .unwrap()
});

static BREAK_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:meanwhile|later|suddenly|next panel|cut to|new panel|panel break)\b[\s:,.!]*",
    )
    .unwrap()
});

/// Split story text into trimmed, non-empty segments.
pub fn split_segments(text: &str) -> Vec<String> {
    if PANEL_START.is_match(text) {
        let segments = explicit_segments(text);
        tracing::debug!(segments = segments.len(), "segmented on explicit panel markers");
        segments
    } else {
        let segments = scene_break_segments(text);
        tracing::debug!(segments = segments.len(), "segmented on scene breaks");
        segments
    }
}

fn explicit_segments(text: &str) -> Vec<String> {
    let starts: Vec<_> = PANEL_START.find_iter(text).collect();

    starts
        .iter()
        .enumerate()
        .filter_map(|(i, start)| {
            let region_end = starts.get(i + 1).map_or(text.len(), |next| next.start());
            let region = &text[start.end()..region_end];
            let content = match PANEL_END.find(region) {
                Some(end) => &region[..end.start()],
                None => region,
            };
            let content = content.trim();
            (!content.is_empty()).then(|| content.to_string())
        })
        .collect()
}

fn scene_break_segments(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let trimmed = line.trim();
        let is_break = is_scene_break(trimmed);

        if is_break {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            current.push_str(strip_break_prefix(trimmed));
        } else if trimmed.is_empty() {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(trimmed);
        }
    }

    if !current.trim().is_empty() {
        segments.push(current);
    }

    segments
        .into_iter()
        .map(|segment| segment.trim().to_string())
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn is_scene_break(line: &str) -> bool {
    line == "---" || SCENE_BREAK.is_match(line)
}

/// Drop a leading scene-break keyword (and trailing punctuation) from a line.
fn strip_break_prefix(line: &str) -> &str {
    if line == "---" {
        return "";
    }
    match BREAK_PREFIX.find(line) {
        Some(prefix) => &line[prefix.end()..],
        None => line,
    }
}
