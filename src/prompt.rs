//! Image prompt construction.
//!
//! Turns a panel into a single comma-separated prompt for an image model.
//! Sending it anywhere is left to the caller.

use crate::types::{Comic, DialogueStyle, Panel, Style};

/// Style used when neither the caller nor the comic names one.
pub const DEFAULT_PROMPT_STYLE: Style = Style::Cartoon;

const QUALITY_SUFFIX: &str = "comic panel, high quality";

/// Build the image prompt for one panel.
///
/// Parts, in order: scene, camera, environment, style, quality suffix,
/// speaking characters, emotions, sound effects, balloon shapes. Empty
/// parts are left out.
pub fn build_prompt(panel: &Panel, style: Option<Style>) -> String {
    let style = style.unwrap_or(DEFAULT_PROMPT_STYLE);
    let mut parts: Vec<String> = Vec::new();

    if let Some(scene) = panel.scene.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        parts.push(scene.to_string());
    }

    if let Some(composition) = &panel.composition {
        if let Some(shot) = composition.shot {
            parts.push(format!("{} shot", words(shot.as_str())));
        }
        if let Some(angle) = composition.camera_angle {
            parts.push(format!("{} view", words(angle.as_str())));
        }
        if let Some(focus) = composition.focus {
            parts.push(format!("focus on {}", focus.as_str()));
        }
    }

    if let Some(environment) = &panel.environment {
        if let Some(setting) = &environment.setting {
            parts.push(format!("setting: {}", setting));
        }
        if let Some(lighting) = environment.lighting {
            parts.push(format!("{} lighting", lighting.as_str()));
        }
        if let Some(time) = environment.time_of_day {
            parts.push(format!("at {}", time.as_str()));
        }
        if let Some(weather) = environment.weather {
            parts.push(format!("{} weather", weather.as_str()));
        }
    }

    parts.push(style.prompt_modifier().to_string());
    parts.push(QUALITY_SUFFIX.to_string());

    let characters = speaking_characters(panel);
    if !characters.is_empty() {
        parts.push(format!("featuring {}", characters.join(" and ")));
    }

    for dialogue in panel.dialogue() {
        if let Some(emotion) = dialogue.emotion {
            parts.push(format!("{} looking {}", dialogue.character, emotion));
        }
    }

    for sfx in panel.sound_effects() {
        parts.push(format!("{} sound effect \"{}\"", sfx.intensity, sfx.text));
    }

    let mut balloons: Vec<DialogueStyle> = Vec::new();
    for style in panel.dialogue().filter_map(|d| d.style) {
        if style != DialogueStyle::Normal && !balloons.contains(&style) {
            balloons.push(style);
        }
    }
    for balloon in balloons {
        parts.push(format!("{} speech balloon", balloon.balloon()));
    }

    parts.join(", ")
}

/// One prompt per panel in reading order, using the comic's own style.
pub fn build_prompts(comic: &Comic, style: Option<Style>) -> Vec<String> {
    let style = style.or(comic.style);
    comic.panels().map(|panel| build_prompt(panel, style)).collect()
}

/// Distinct speakers in first-appearance order.
fn speaking_characters(panel: &Panel) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for dialogue in panel.dialogue() {
        if !seen.contains(&dialogue.character.as_str()) {
            seen.push(&dialogue.character);
        }
    }
    seen
}

fn words(token: &str) -> String {
    token.replace('-', " ")
}
