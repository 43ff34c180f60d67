//! Comic to structured script text.

use std::fmt::Write;

use crate::parser::THOUGHT_SPEAKER;
use crate::types::{Comic, Dialogue, DialogueStyle, Page, Panel, PanelElement};

/// Render a comic as a structured script.
///
/// Parsing the result again gives back the same title, pages, panels and
/// spoken text. Lettering details survive when the cue grammar can carry
/// them. Asterisks wrapping a whole spoken line are dropped, since such a
/// line would read back as a sound effect.
pub fn to_script(comic: &Comic) -> String {
    let mut out = String::new();

    out.push_str("---\n");
    let _ = writeln!(out, "title: {}", comic.title);
    if let Some(author) = &comic.author {
        let _ = writeln!(out, "author: {}", author);
    }
    if let Some(style) = comic.style {
        let _ = writeln!(out, "style: {}", style);
    }
    out.push_str("---\n");

    for page in &comic.pages {
        write_page(&mut out, page);
    }

    out
}

fn write_page(out: &mut String, page: &Page) {
    let _ = write!(out, "\n# Page {}\n", page.number);
    if let Some(layout) = &page.layout {
        let _ = writeln!(out, "[{}]", layout);
    }

    for (i, panel) in page.panels.iter().enumerate() {
        if i > 0 {
            out.push_str("\n---\n");
        }
        write_panel(out, panel);
    }
}

fn write_panel(out: &mut String, panel: &Panel) {
    if let Some(scene) = panel.scene.as_deref().filter(|s| !s.trim().is_empty()) {
        let _ = write!(out, "\n{}\n", scene.trim());
    }

    for element in &panel.elements {
        out.push('\n');
        match element {
            PanelElement::Dialogue(dialogue) if is_thought_line(dialogue) => {
                let _ = writeln!(out, "~ {}", dialogue.text);
            }
            PanelElement::Dialogue(dialogue) => write_dialogue(out, dialogue),
            PanelElement::SoundEffect(sfx) => {
                let _ = writeln!(out, "*{}*", sfx.text);
            }
            PanelElement::Narration(narration) => {
                let _ = writeln!(out, "> {}", narration.text);
            }
        }
    }
}

fn is_thought_line(dialogue: &Dialogue) -> bool {
    dialogue.character == THOUGHT_SPEAKER && dialogue.style == Some(DialogueStyle::Thought)
}

fn write_dialogue(out: &mut String, dialogue: &Dialogue) {
    let name = dialogue.character.to_uppercase();
    match cue_modifier(dialogue) {
        Some(modifier) => {
            let _ = writeln!(out, "{} ({})", name, modifier);
        }
        None => {
            let _ = writeln!(out, "{}", name);
        }
    }
    let _ = writeln!(out, "{}", spoken_text(&dialogue.text));
}

/// Dialogue text without a `*...*` wrapper the cue could not carry.
fn spoken_text(text: &str) -> &str {
    text.strip_prefix('*')
        .and_then(|rest| rest.strip_suffix('*'))
        .map(str::trim)
        .filter(|inner| !inner.is_empty() && !inner.contains('*'))
        .unwrap_or(text)
}

/// The cue modifier that makes the parser reproduce this line's lettering.
///
/// A trailing `!` already reads back as a shout, so only the emotion is
/// needed there. An emotion is kept when the style it implies agrees with
/// the line's style.
fn cue_modifier(dialogue: &Dialogue) -> Option<&'static str> {
    let style = dialogue.style.unwrap_or_default();
    let shout_from_text = style == DialogueStyle::Shout && dialogue.text.ends_with('!');

    if let Some(emotion) = dialogue.emotion {
        let implied = DialogueStyle::from_modifier(emotion.as_str()).unwrap_or_default();
        if shout_from_text || implied == style {
            return Some(emotion.as_str());
        }
    }

    if shout_from_text {
        return None;
    }

    match style {
        DialogueStyle::Normal => None,
        DialogueStyle::Shout => Some("shouting"),
        DialogueStyle::Whisper => Some("whispering"),
        DialogueStyle::Thought => Some("thinking"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_script;
    use crate::types::Emotion;

    #[test]
    fn test_cue_modifiers() {
        let plain = Dialogue::new("A", "hi").with_style(DialogueStyle::Normal);
        assert_eq!(cue_modifier(&plain), None);

        let happy = plain.clone().with_emotion(Some(Emotion::Happy));
        assert_eq!(cue_modifier(&happy), Some("happy"));

        let loud = Dialogue::new("A", "Go!").with_style(DialogueStyle::Shout);
        assert_eq!(cue_modifier(&loud), None);

        let quiet_shout = Dialogue::new("A", "go").with_style(DialogueStyle::Shout);
        assert_eq!(cue_modifier(&quiet_shout), Some("shouting"));

        let angry = quiet_shout.with_emotion(Some(Emotion::Angry));
        assert_eq!(cue_modifier(&angry), Some("angry"));

        let whisper = Dialogue::new("A", "psst").with_style(DialogueStyle::Whisper);
        assert_eq!(cue_modifier(&whisper), Some("whispering"));
    }

    #[test]
    fn test_writes_every_element_kind() {
        let comic = parse_script(
            "---\ntitle: Night\nauthor: Ana\n---\n# Page 2\n[splash]\nA dark alley\nCAT (scared)\nWho's there?\n*CRASH*\n> Later\n~ hmm",
        )
        .unwrap();

        let script = to_script(&comic);

        insta::assert_snapshot!(script, @r"
        ---
        title: Night
        author: Ana
        ---

        # Page 2
        [splash]

        A dark alley

        CAT (scared)
        Who's there?

        *CRASH*

        > Later

        ~ hmm
        ");
    }

    #[test]
    fn test_starred_whisper_keeps_its_text() {
        let mut panel = Panel::with_scene("Below deck");
        panel.elements = vec![
            Dialogue::new("CAPTAIN", "*psst*")
                .with_style(DialogueStyle::Whisper)
                .into(),
            Dialogue::new("CAPTAIN", "ok")
                .with_style(DialogueStyle::Normal)
                .into(),
        ];
        let mut page = Page::new(1);
        page.panels.push(panel);
        let comic = Comic::new("Hush", vec![page]);

        let reparsed = parse_script(&to_script(&comic)).unwrap();

        let spoken: Vec<_> = reparsed
            .panels()
            .flat_map(|p| p.dialogue())
            .map(|d| (d.text.as_str(), d.style))
            .collect();
        assert_eq!(
            spoken,
            vec![
                ("psst", Some(DialogueStyle::Whisper)),
                ("ok", Some(DialogueStyle::Normal)),
            ]
        );
    }

    #[test]
    fn test_reparse_is_equivalent() {
        let source = "---\ntitle: Loop\nstyle: noir\n---\n# Page 1\nStreet\nJO (angry)\nStop\n---\nRoof\n*BANG*\n# Page 2\nMAX\nWait!";
        let first = parse_script(source).unwrap();

        let second = parse_script(&to_script(&first)).unwrap();

        assert_eq!(first, second);
    }
}
