//! Comic to prose.

use crate::parser::THOUGHT_SPEAKER;
use crate::types::{Comic, Dialogue, DialogueStyle, Panel, PanelElement};

/// Render a comic as prose: the title, a blank line, then one paragraph per
/// panel.
pub fn to_natural(comic: &Comic) -> String {
    let mut paragraphs = vec![comic.title.clone()];
    paragraphs.extend(comic.panels().map(panel_paragraph).filter(|p| !p.is_empty()));

    let mut out = paragraphs.join("\n\n");
    out.push('\n');
    out
}

fn panel_paragraph(panel: &Panel) -> String {
    let mut sentences: Vec<String> = Vec::new();

    if let Some(scene) = panel.scene.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        sentences.push(scene.to_string());
    }

    for element in &panel.elements {
        sentences.push(match element {
            PanelElement::Dialogue(dialogue) if dialogue.character == THOUGHT_SPEAKER => {
                format!("[{}]", dialogue.text)
            }
            PanelElement::Dialogue(dialogue) => speech_sentence(dialogue),
            PanelElement::SoundEffect(sfx) => format!("{}!", sfx.text.to_uppercase()),
            PanelElement::Narration(narration) => format!("[{}]", narration.text),
        });
    }

    sentences.join(" ")
}

fn speech_sentence(dialogue: &Dialogue) -> String {
    let verb = match dialogue.style.unwrap_or_default() {
        DialogueStyle::Normal => "says",
        DialogueStyle::Shout => "shouts",
        DialogueStyle::Whisper => "whispers",
        DialogueStyle::Thought => "thinks",
    };
    format!("{} {} \"{}\"", display_name(&dialogue.character), verb, dialogue.text)
}

/// `HERO` reads as `Hero` in prose.
fn display_name(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
