//! Line classification for structured scripts.
//!
//! Every body line of a structured script is tagged by walking [`RULES`] in
//! order and taking the first rule that accepts it. Lines no rule accepts
//! are plain scene text.
//!
//! | Priority | Rule             | Shape                                   |
//! |----------|------------------|-----------------------------------------|
//! | 1        | comment          | `// anything`                           |
//! | 2        | page header      | `# Page 3` (number optional)            |
//! | 3        | layout hint      | `[2x2]`                                 |
//! | 4        | panel separator  | `---`                                   |
//! | 5        | sound effect     | `*BOOM*` (no inner asterisks)           |
//! | 6        | narration        | `> Meanwhile...`                        |
//! | 7        | thought          | `~ I wonder`                            |
//! | 8        | character cue    | `HERO` or `HERO (angry)` + usable line  |

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Dialogue, DialogueStyle, Emotion};

static PAGE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#\s*page\s*(\d+)?\s*$").unwrap());

static CHARACTER_CUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z][A-Z0-9 _'.\-]*[A-Z0-9.'])\s*(?:\(([^()]+)\))?$").unwrap()
});

/// The classification of a single script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Comment,
    PageHeader(Option<u32>),
    LayoutHint(&'a str),
    PanelSeparator,
    SoundEffect(&'a str),
    Narration(&'a str),
    Thought(&'a str),
    CharacterCue {
        name: &'a str,
        modifier: Option<&'a str>,
    },
    PlainText(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Comment,
    PageHeader,
    LayoutHint,
    PanelSeparator,
    SoundEffect,
    Narration,
    Thought,
    CharacterCue,
}

/// Classification rules in priority order.
const RULES: [Rule; 8] = [
    Rule::Comment,
    Rule::PageHeader,
    Rule::LayoutHint,
    Rule::PanelSeparator,
    Rule::SoundEffect,
    Rule::Narration,
    Rule::Thought,
    Rule::CharacterCue,
];

impl Rule {
    fn apply<'a>(self, line: &'a str, next: Option<&str>) -> Option<LineKind<'a>> {
        match self {
            Rule::Comment => line.starts_with("//").then_some(LineKind::Comment),
            Rule::PageHeader => PAGE_HEADER.captures(line).map(|caps| {
                LineKind::PageHeader(caps.get(1).and_then(|n| n.as_str().parse().ok()))
            }),
            Rule::LayoutHint => line
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .map(str::trim)
                .filter(|inner| !inner.is_empty())
                .map(LineKind::LayoutHint),
            Rule::PanelSeparator => (line == "---").then_some(LineKind::PanelSeparator),
            Rule::SoundEffect => line
                .strip_prefix('*')
                .and_then(|rest| rest.strip_suffix('*'))
                .filter(|inner| !inner.contains('*'))
                .map(str::trim)
                .filter(|inner| !inner.is_empty())
                .map(LineKind::SoundEffect),
            Rule::Narration => line
                .strip_prefix('>')
                .map(|rest| LineKind::Narration(rest.trim())),
            Rule::Thought => line
                .strip_prefix('~')
                .map(|rest| LineKind::Thought(rest.trim())),
            Rule::CharacterCue => {
                let caps = CHARACTER_CUE.captures(line)?;
                if !next.is_some_and(is_usable_dialogue_line) {
                    return None;
                }
                let name = caps.get(1)?.as_str().trim();
                let modifier = caps.get(2).map(|m| m.as_str().trim()).filter(|m| !m.is_empty());
                Some(LineKind::CharacterCue { name, modifier })
            }
        }
    }
}

/// Classify one line, using `next` as lookahead for character cues.
pub fn classify<'a>(line: &'a str, next: Option<&str>) -> LineKind<'a> {
    let line = line.trim();
    RULES
        .iter()
        .find_map(|rule| rule.apply(line, next))
        .unwrap_or(LineKind::PlainText(line))
}

/// Whether a line can serve as the spoken text after a character cue.
///
/// Blank lines, structural markers, sound effects, narration, thoughts and
/// other cues cannot.
fn is_usable_dialogue_line(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() || CHARACTER_CUE.is_match(line) {
        return false;
    }
    RULES
        .iter()
        .filter(|rule| **rule != Rule::CharacterCue)
        .all(|rule| rule.apply(line, None).is_none())
}

/// Build a dialogue entry from a cue and the line spoken after it.
///
/// Text wrapped in `*...*` is whispered (delimiters stripped), text ending in
/// `!` is shouted. Otherwise the cue modifier decides the style. A modifier
/// that names an emotion is also kept as the emotion; anything else is
/// discarded.
pub fn resolve_dialogue(name: &str, modifier: Option<&str>, text: &str) -> Dialogue {
    let text = text.trim();
    let modifier_style = modifier.and_then(DialogueStyle::from_modifier);
    let emotion = modifier.and_then(|m| m.parse::<Emotion>().ok());

    let whispered = text
        .strip_prefix('*')
        .and_then(|rest| rest.strip_suffix('*'))
        .map(str::trim)
        .filter(|inner| !inner.is_empty());

    let (text, style) = match whispered {
        Some(inner) => (inner, DialogueStyle::Whisper),
        None if text.ends_with('!') => (text, DialogueStyle::Shout),
        None => (text, modifier_style.unwrap_or_default()),
    };

    Dialogue::new(name, text)
        .with_emotion(emotion)
        .with_style(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_beats_everything() {
        assert_eq!(classify("// # Page 1", None), LineKind::Comment);
    }

    #[test]
    fn test_page_header() {
        assert_eq!(classify("# Page 3", None), LineKind::PageHeader(Some(3)));
        assert_eq!(classify("#page", None), LineKind::PageHeader(None));
        assert_eq!(classify("# PAGE 12 ", None), LineKind::PageHeader(Some(12)));
        assert!(matches!(classify("# Pages of history", None), LineKind::PlainText(_)));
    }

    #[test]
    fn test_layout_hint() {
        assert_eq!(classify("[2x2]", None), LineKind::LayoutHint("2x2"));
        assert_eq!(classify("[ splash ]", None), LineKind::LayoutHint("splash"));
        assert!(matches!(classify("[]", None), LineKind::PlainText(_)));
    }

    #[test]
    fn test_separator() {
        assert_eq!(classify("  ---  ", None), LineKind::PanelSeparator);
        assert!(matches!(classify("----", None), LineKind::PlainText(_)));
    }

    #[test]
    fn test_sound_effect() {
        assert_eq!(classify("*BOOM*", None), LineKind::SoundEffect("BOOM"));
        assert_eq!(classify("*drip drip*", None), LineKind::SoundEffect("drip drip"));
        assert!(matches!(classify("*a *b* c*", None), LineKind::PlainText(_)));
    }

    #[test]
    fn test_narration_and_thought() {
        assert_eq!(classify("> And so it began", None), LineKind::Narration("And so it began"));
        assert_eq!(classify("~ Where am I?", None), LineKind::Thought("Where am I?"));
    }

    #[test]
    fn test_character_cue_needs_usable_next_line() {
        assert_eq!(
            classify("HERO", Some("Hello!")),
            LineKind::CharacterCue { name: "HERO", modifier: None }
        );
        assert_eq!(
            classify("DR. NO (angry)", Some("You fool.")),
            LineKind::CharacterCue { name: "DR. NO", modifier: Some("angry") }
        );

        assert_eq!(classify("HERO", None), LineKind::PlainText("HERO"));
        assert_eq!(classify("HERO", Some("   ")), LineKind::PlainText("HERO"));
        assert_eq!(classify("HERO", Some("*BOOM*")), LineKind::PlainText("HERO"));
        assert_eq!(classify("HERO", Some("> narration")), LineKind::PlainText("HERO"));
        assert_eq!(classify("HERO", Some("VILLAIN")), LineKind::PlainText("HERO"));
        assert_eq!(classify("HERO", Some("# Page 2")), LineKind::PlainText("HERO"));
    }

    #[test]
    fn test_mixed_case_is_plain_text() {
        assert_eq!(
            classify("A simple scene", Some("HERO")),
            LineKind::PlainText("A simple scene")
        );
    }

    #[test]
    fn test_resolve_dialogue_styles() {
        let shout = resolve_dialogue("HERO", None, "Take this!");
        assert_eq!(shout.style, Some(DialogueStyle::Shout));

        let whisper = resolve_dialogue("HERO", None, "*over *there**");
        assert_eq!(whisper.style, Some(DialogueStyle::Whisper));
        assert_eq!(whisper.text, "over *there*");

        let normal = resolve_dialogue("HERO", None, "Hello.");
        assert_eq!(normal.style, Some(DialogueStyle::Normal));
        assert_eq!(normal.emotion, None);
    }

    #[test]
    fn test_resolve_dialogue_modifiers() {
        let thought = resolve_dialogue("HERO", Some("thinking"), "Hmm.");
        assert_eq!(thought.style, Some(DialogueStyle::Thought));
        assert_eq!(thought.emotion, Some(Emotion::Thinking));

        let angry = resolve_dialogue("HERO", Some("angry"), "Go away.");
        assert_eq!(angry.style, Some(DialogueStyle::Shout));
        assert_eq!(angry.emotion, Some(Emotion::Angry));

        let happy = resolve_dialogue("HERO", Some("happy"), "Yay.");
        assert_eq!(happy.style, Some(DialogueStyle::Normal));
        assert_eq!(happy.emotion, Some(Emotion::Happy));

        let unknown = resolve_dialogue("HERO", Some("sarcastic"), "Great.");
        assert_eq!(unknown.style, Some(DialogueStyle::Normal));
        assert_eq!(unknown.emotion, None);
    }

    #[test]
    fn test_text_style_overrides_modifier() {
        let dialogue = resolve_dialogue("HERO", Some("whispering"), "Run!");
        assert_eq!(dialogue.style, Some(DialogueStyle::Shout));
    }
}
