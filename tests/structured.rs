//! Integration tests for structured scripts.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use comicscript::parser::{parse_script, parse_script_with, ScriptOptions, THOUGHT_SPEAKER};
use comicscript::{
    ComicError, Dialogue, DialogueStyle, Emotion, Narration, PanelElement, SfxIntensity,
    SoundEffect, Style,
};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_simple_scene_with_dialogue() {
    let comic =
        parse_script("---\ntitle: Test\n---\n\n# Page 1\n\nA simple scene\n\nHERO\nHello!").unwrap();

    assert_eq!(comic.pages.len(), 1);
    assert_eq!(comic.pages[0].panels.len(), 1);
    let panel = &comic.pages[0].panels[0];
    assert_eq!(panel.scene.as_deref(), Some("A simple scene"));
    let lines: Vec<_> = panel.dialogue().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].character, "HERO");
    assert_eq!(lines[0].text, "Hello!");
}

#[test]
fn test_rooftop_fixture() {
    let comic = parse_script(&fixture("rooftop.script.md")).unwrap();

    assert_eq!(comic.title, "Rooftop Rescue");
    assert_eq!(comic.author.as_deref(), Some("R. Pony"));
    assert_eq!(comic.style, Some(Style::Superhero));
    assert_eq!(comic.pages.len(), 2);
    assert_eq!(comic.pages[0].layout.as_deref(), Some("2x2"));
    assert_eq!(comic.pages[0].panels.len(), 3);
    assert_eq!(comic.pages[1].layout, None);
    assert_eq!(comic.panel_count(), 4);

    let first = &comic.pages[0].panels[0];
    assert_eq!(
        first.elements,
        vec![PanelElement::from(
            Dialogue::new("HERO", "The city needs me!")
                .with_emotion(Some(Emotion::Excited))
                .with_style(DialogueStyle::Shout)
        )]
    );

    let second = &comic.pages[0].panels[1];
    assert_eq!(
        second.elements,
        vec![
            PanelElement::from(
                Dialogue::new("CIVILIAN", "Please hurry...")
                    .with_emotion(Some(Emotion::Scared))
                    .with_style(DialogueStyle::Normal)
            ),
            PanelElement::from(SoundEffect {
                text: "creak".to_string(),
                intensity: SfxIntensity::Subtle,
            }),
        ]
    );

    let third = &comic.pages[0].panels[2];
    assert_eq!(third.scene, None);
    assert_eq!(
        third.elements,
        vec![
            PanelElement::from(Narration::new("Three floors below, the fire spreads.")),
            PanelElement::from(
                Dialogue::new("HERO", "I have to be fast.")
                    .with_emotion(Some(Emotion::Thinking))
                    .with_style(DialogueStyle::Thought)
            ),
        ]
    );

    let last = &comic.pages[1].panels[0];
    assert_eq!(last.scene.as_deref(), Some("Wide shot of the skyline at night"));
    assert_eq!(
        last.elements,
        vec![
            PanelElement::from(SoundEffect::new("WHOOSH")),
            PanelElement::from(
                Dialogue::new("CIVILIAN", "Thank you.").with_style(DialogueStyle::Whisper)
            ),
            PanelElement::from(
                Dialogue::new(THOUGHT_SPEAKER, "Another one saved.")
                    .with_style(DialogueStyle::Thought)
            ),
        ]
    );
}

#[test]
fn test_missing_title_is_strict_by_default() {
    let errors = parse_script(&fixture("no-title.script.md")).unwrap_err();

    assert_eq!(errors.messages(), vec!["Missing required field: title"]);
}

#[test]
fn test_missing_title_lenient() {
    let options = ScriptOptions {
        lenient_title: true,
    };

    let comic = parse_script_with(&fixture("no-title.script.md"), &options).unwrap();

    assert_eq!(comic.title, "Untitled Comic");
    assert_eq!(comic.panel_count(), 1);
}

#[test]
fn test_pages_without_panels_fail() {
    let errors = parse_script(&fixture("empty-pages.script.md")).unwrap_err();

    assert!(errors.contains(|e| matches!(e, ComicError::EmptyDocument)));
    assert_eq!(errors.errors.len(), 1);
}

#[test]
fn test_all_errors_reported_together() {
    let errors = parse_script("# Page 1\n// only a comment").unwrap_err();

    assert_eq!(
        errors.messages(),
        vec![
            "Missing required field: title",
            "No pages found. Start a page with # Page 1",
        ]
    );
}

#[test]
fn test_comic_json_shape() {
    let comic = parse_script("---\ntitle: J\n---\n# Page 1\nA room\n*BANG*").unwrap();

    let json = serde_json::to_value(&comic).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "title": "J",
            "pages": [{
                "number": 1,
                "panels": [{
                    "scene": "A room",
                    "elements": [{"type": "sfx", "text": "BANG", "intensity": "loud"}]
                }]
            }]
        })
    );
}
