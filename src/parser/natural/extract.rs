//! Element extraction from a single prose segment.
//!
//! Sweeps run in a fixed order: speech with a verb, speech after a colon,
//! sound effects, then narration. Each sweep removes the text it matched
//! before the next one runs, so a span is never claimed twice. Whatever is
//! left becomes the panel's scene.
//!
//! Elements are reported in reading order: each remembers where its span sat
//! in the original segment, not the order of the sweep that found it.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::composition::{extract_composition, extract_environment};
use crate::parser::assemble::truncate_chars;
use crate::types::{Dialogue, DialogueStyle, Narration, Panel, PanelElement, SoundEffect};

/// Characters of the segment kept as scene when extraction consumed it all.
pub const SCENE_FALLBACK_CHARS: usize = 150;

/// Name used when a speaker cannot be resolved.
pub const UNKNOWN_SPEAKER: &str = "Character";

static SPEECH_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b((?:the\s+)?\w+)\s+(says|said|say|shouts|shouted|shout|whispers|whispered|whisper|thinks|thought|think|yells|yelled|yell|asks|asked|ask|replies|replied|reply|exclaims|exclaimed|exclaim)\s*[:,]?\s*["“]([^"”]+)["”]"#,
    )
    .unwrap()
});

static SPEECH_COLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\b((?:the\s+)?\w+)\s*:\s*["“]([^"”]+)["”]"#).unwrap());

static SOUND_EFFECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z]{2,}(?:[A-Z \t!]+)?)[!.]").unwrap());

static CAPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)\b(?:caption|narrator|narration)[:\s]+(.+?)(?:\.+|$)").unwrap()
});

static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());

static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// Subjects that introduce narration rather than speech.
const NARRATION_SUBJECTS: &[&str] = &["caption", "narrator", "narration"];

/// Working copy of a segment that remembers where each byte came from.
///
/// Each removed span leaves a single space marked as a seam. Sweeps search
/// the text between seams separately, so a match never joins words that
/// were not next to each other in the segment.
struct SpanBuffer {
    text: String,
    origin: Vec<usize>,
    seam: Vec<bool>,
}

impl SpanBuffer {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            origin: (0..text.len()).collect(),
            seam: vec![false; text.len()],
        }
    }

    /// Offset in the original segment of working byte `pos`.
    fn origin_of(&self, pos: usize) -> usize {
        self.origin.get(pos).copied().unwrap_or(usize::MAX)
    }

    /// Working ranges between seams.
    fn pieces(&self) -> Vec<Range<usize>> {
        let mut pieces = Vec::new();
        let mut start = 0;
        for (pos, _) in self.seam.iter().enumerate().filter(|(_, seam)| **seam) {
            if pos > start {
                pieces.push(start..pos);
            }
            start = pos + 1;
        }
        if self.text.len() > start {
            pieces.push(start..self.text.len());
        }
        pieces
    }

    /// Remove ascending, non-overlapping ranges, leaving a seam in place of
    /// each so neighbouring words stay apart.
    fn remove(&mut self, ranges: &[Range<usize>]) {
        for range in ranges.iter().rev() {
            let start = self.origin_of(range.start);
            self.text.replace_range(range.clone(), " ");
            self.origin.drain(range.clone());
            self.origin.insert(range.start, start);
            self.seam.drain(range.clone());
            self.seam.insert(range.start, true);
        }
    }

    /// Remaining text with whitespace runs collapsed.
    fn residual(&self) -> String {
        self.text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Run `pattern` over each piece of the buffer, recording an element for
/// each match that `build` accepts and removing exactly those matches.
fn sweep<F>(
    buffer: &mut SpanBuffer,
    pattern: &Regex,
    found: &mut Vec<(usize, PanelElement)>,
    mut build: F,
) where
    F: FnMut(&Captures) -> Option<PanelElement>,
{
    let mut consumed = Vec::new();

    for piece in buffer.pieces() {
        for caps in pattern.captures_iter(&buffer.text[piece.clone()]) {
            let Some(whole) = caps.get(0) else { continue };
            if let Some(element) = build(&caps) {
                let start = piece.start + whole.start();
                found.push((buffer.origin_of(start), element));
                consumed.push(start..piece.start + whole.end());
            }
        }
    }

    buffer.remove(&consumed);
}

/// Turn one prose segment into a panel.
pub fn extract_panel(segment: &str) -> Panel {
    let mut buffer = SpanBuffer::new(segment);
    let mut found: Vec<(usize, PanelElement)> = Vec::new();

    sweep(&mut buffer, &SPEECH_VERB, &mut found, |caps| {
        let subject = caps.get(1)?.as_str();
        let style = style_for_verb(caps.get(2)?.as_str());
        speech(subject, caps.get(3)?.as_str(), style)
    });

    sweep(&mut buffer, &SPEECH_COLON, &mut found, |caps| {
        let subject = caps.get(1)?.as_str();
        if is_narration_subject(subject) {
            return None;
        }
        speech(subject, caps.get(2)?.as_str(), DialogueStyle::Normal)
    });

    sweep(&mut buffer, &SOUND_EFFECT, &mut found, |caps| {
        let text = caps
            .get(1)?
            .as_str()
            .trim_end_matches(|c: char| c == '!' || c.is_whitespace());
        (!text.is_empty()).then(|| SoundEffect::new(text).into())
    });

    for pattern in [&*CAPTION, &*BRACKETED, &*PARENTHESIZED] {
        sweep(&mut buffer, pattern, &mut found, |caps| {
            let text = caps.get(1)?.as_str().trim();
            (!text.is_empty()).then(|| Narration::new(text).into())
        });
    }

    found.sort_by_key(|(position, _)| *position);

    let residual = buffer.residual();
    let scene = if residual.is_empty() {
        truncate_chars(segment.trim(), SCENE_FALLBACK_CHARS).to_string()
    } else {
        residual
    };

    tracing::trace!(elements = found.len(), scene = %scene, "extracted panel");

    Panel {
        composition: extract_composition(&scene),
        environment: extract_environment(&scene),
        scene: Some(scene),
        elements: found.into_iter().map(|(_, element)| element).collect(),
        rendering: None,
    }
}

fn speech(subject: &str, text: &str, style: DialogueStyle) -> Option<PanelElement> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(
        Dialogue::new(infer_character(subject), text)
            .with_style(style)
            .into(),
    )
}

fn is_narration_subject(subject: &str) -> bool {
    let word = strip_article(subject);
    NARRATION_SUBJECTS
        .iter()
        .any(|candidate| word.eq_ignore_ascii_case(candidate))
}

/// Balloon style implied by a speech verb.
fn style_for_verb(verb: &str) -> DialogueStyle {
    let verb = verb.to_ascii_lowercase();
    if ["shout", "yell", "exclaim"].iter().any(|v| verb.starts_with(v)) {
        DialogueStyle::Shout
    } else if verb.starts_with("whisper") {
        DialogueStyle::Whisper
    } else if verb.starts_with("think") || verb == "thought" {
        DialogueStyle::Thought
    } else {
        DialogueStyle::Normal
    }
}

/// Resolve a speech subject to a character name.
///
/// A capitalized non-pronoun is taken as a proper name. Pronouns map to a
/// generic role, and anything else becomes [`UNKNOWN_SPEAKER`].
pub fn infer_character(subject: &str) -> String {
    let word = strip_article(subject);

    if let Some(role) = pronoun_role(word) {
        return role.to_string();
    }

    if word.chars().next().is_some_and(char::is_uppercase) {
        word.to_string()
    } else {
        UNKNOWN_SPEAKER.to_string()
    }
}

fn pronoun_role(word: &str) -> Option<&'static str> {
    match word.to_ascii_lowercase().as_str() {
        "he" | "him" | "his" => Some("Hero"),
        "she" | "her" | "hers" => Some("Heroine"),
        "they" | "them" | "their" => Some("Character"),
        _ => None,
    }
}

fn strip_article(subject: &str) -> &str {
    let subject = subject.trim();
    match subject.split_once(char::is_whitespace) {
        Some((article, rest)) if is_article(article) => rest.trim(),
        _ => subject,
    }
}

fn is_article(word: &str) -> bool {
    ["the", "a", "an"]
        .iter()
        .any(|article| word.eq_ignore_ascii_case(article))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SfxIntensity;

    fn dialogue(panel: &Panel) -> Vec<(&str, &str)> {
        panel
            .dialogue()
            .map(|d| (d.character.as_str(), d.text.as_str()))
            .collect()
    }

    #[test]
    fn test_named_speaker_with_verb() {
        let panel = extract_panel("Hero says \"I'll save the day!\"");

        assert_eq!(dialogue(&panel), vec![("Hero", "I'll save the day!")]);
    }

    #[test]
    fn test_verb_sets_balloon_style() {
        let panel = extract_panel("Max shouts \"Run!\" and Ana whispers \"quietly now\"");

        let styles: Vec<_> = panel.dialogue().map(|d| d.style).collect();
        assert_eq!(
            styles,
            vec![Some(DialogueStyle::Shout), Some(DialogueStyle::Whisper)]
        );
    }

    #[test]
    fn test_colon_speech() {
        let panel = extract_panel("Rex: \"Over here.\"");

        assert_eq!(dialogue(&panel), vec![("Rex", "Over here.")]);
        assert_eq!(panel.elements.len(), 1);
    }

    #[test]
    fn test_curly_quotes() {
        let panel = extract_panel("Luna asks “Who goes there?”");

        assert_eq!(dialogue(&panel), vec![("Luna", "Who goes there?")]);
    }

    #[test]
    fn test_caption_colon_is_narration_not_speech() {
        let panel = extract_panel("Caption: \"Years passed\"");

        assert_eq!(panel.dialogue().count(), 0);
        assert_eq!(panel.narration().count(), 1);
    }

    #[test]
    fn test_character_inference() {
        assert_eq!(infer_character("Hero"), "Hero");
        assert_eq!(infer_character("the Guard"), "Guard");
        assert_eq!(infer_character("she"), "Heroine");
        assert_eq!(infer_character("He"), "Hero");
        assert_eq!(infer_character("they"), "Character");
        assert_eq!(infer_character("the guard"), UNKNOWN_SPEAKER);
    }

    #[test]
    fn test_sound_effect_and_residual_scene() {
        let panel = extract_panel("WHOOSH! The wind howls.");

        let sfx: Vec<_> = panel.sound_effects().collect();
        assert_eq!(sfx.len(), 1);
        assert_eq!(sfx[0].text, "WHOOSH");
        assert_eq!(sfx[0].intensity, SfxIntensity::Loud);
        assert_eq!(panel.scene.as_deref(), Some("The wind howls."));
    }

    #[test]
    fn test_single_capital_is_not_sound_effect() {
        let panel = extract_panel("I ran. A dog barked.");

        assert_eq!(panel.sound_effects().count(), 0);
    }

    #[test]
    fn test_bracket_and_paren_narration() {
        let panel = extract_panel("[Years later] The tower stands (still).");

        let texts: Vec<_> = panel.narration().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["Years later", "still"]);
        assert_eq!(panel.scene.as_deref(), Some("The tower stands ."));
    }

    #[test]
    fn test_elements_follow_reading_order() {
        // The narration sweep runs last but its span comes first.
        let panel = extract_panel("[Dawn] BANG! Rex says \"Duck!\"");

        let kinds: Vec<_> = panel
            .elements
            .iter()
            .map(|e| match e {
                PanelElement::Dialogue(_) => "dialogue",
                PanelElement::SoundEffect(_) => "sfx",
                PanelElement::Narration(_) => "narration",
            })
            .collect();
        assert_eq!(kinds, vec!["narration", "sfx", "dialogue"]);
    }

    #[test]
    fn test_sound_effect_does_not_span_removed_speech() {
        let panel = extract_panel("HEY Rex says \"hi\" YOU. The end.");

        let sfx: Vec<_> = panel.sound_effects().map(|s| s.text.as_str()).collect();
        assert_eq!(sfx, vec!["YOU"]);
        assert_eq!(dialogue(&panel), vec![("Rex", "hi")]);
        assert!(matches!(panel.elements[0], PanelElement::Dialogue(_)));
        assert_eq!(panel.scene.as_deref(), Some("HEY The end."));
    }

    #[test]
    fn test_sound_effect_before_removed_speech_survives() {
        let panel = extract_panel("BAM! Rex says \"down\" NOW. Dust settles.");

        let sfx: Vec<_> = panel.sound_effects().map(|s| s.text.as_str()).collect();
        assert_eq!(sfx, vec!["BAM", "NOW"]);
        assert_eq!(panel.scene.as_deref(), Some("Dust settles."));
    }

    #[test]
    fn test_scene_falls_back_when_everything_consumed() {
        let panel = extract_panel("Hero says \"Go!\"");

        assert_eq!(panel.scene.as_deref(), Some("Hero says \"Go!\""));
        assert_eq!(panel.dialogue().count(), 1);
    }

    #[test]
    fn test_scene_feeds_composition() {
        let panel = extract_panel("Close-up of the hero at night.");

        assert!(panel.composition.is_some());
        assert!(panel.environment.is_some());
    }
}
