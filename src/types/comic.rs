//! The comic document model shared by both parsers.
//!
//! A [`Comic`] is a list of numbered [`Page`]s, each holding [`Panel`]s in
//! reading order. A panel carries an optional scene description plus an
//! ordered list of [`PanelElement`]s (dialogue, sound effects, narration).
//!
//! All of these are plain values: parsers build them once and hand them
//! out; nothing in this crate mutates a comic after assembly.

use serde::{Deserialize, Serialize};

use super::composition::{Composition, Environment, Rendering};
use super::style::{DialogueStyle, Emotion, SfxIntensity, Style};

/// Title used when a script does not provide one.
pub const DEFAULT_TITLE: &str = "Untitled Comic";

/// A complete comic document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    pub pages: Vec<Page>,
}

impl Comic {
    pub fn new(title: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            title: title.into(),
            author: None,
            style: None,
            pages,
        }
    }

    /// Iterate over every panel in reading order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.pages.iter().flat_map(|page| page.panels.iter())
    }

    pub fn panel_count(&self) -> usize {
        self.pages.iter().map(|page| page.panels.len()).sum()
    }
}

/// A numbered page of panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based page number.
    pub number: u32,
    /// Free-form layout token such as `2x2` or `splash`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    pub panels: Vec<Panel>,
}

impl Page {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            layout: None,
            panels: Vec::new(),
        }
    }
}

/// One drawable frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    #[serde(default)]
    pub elements: Vec<PanelElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<Composition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendering: Option<Rendering>,
}

impl Panel {
    pub fn with_scene(scene: impl Into<String>) -> Self {
        Self {
            scene: Some(scene.into()),
            ..Default::default()
        }
    }

    /// A panel with no scene text and no elements is never emitted.
    pub fn is_empty(&self) -> bool {
        self.scene.as_deref().map_or(true, |s| s.trim().is_empty()) && self.elements.is_empty()
    }

    pub fn dialogue(&self) -> impl Iterator<Item = &Dialogue> {
        self.elements.iter().filter_map(|element| match element {
            PanelElement::Dialogue(dialogue) => Some(dialogue),
            _ => None,
        })
    }

    pub fn sound_effects(&self) -> impl Iterator<Item = &SoundEffect> {
        self.elements.iter().filter_map(|element| match element {
            PanelElement::SoundEffect(sfx) => Some(sfx),
            _ => None,
        })
    }

    pub fn narration(&self) -> impl Iterator<Item = &Narration> {
        self.elements.iter().filter_map(|element| match element {
            PanelElement::Narration(narration) => Some(narration),
            _ => None,
        })
    }
}

/// Something lettered into a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PanelElement {
    Dialogue(Dialogue),
    #[serde(rename = "sfx")]
    SoundEffect(SoundEffect),
    Narration(Narration),
}

impl From<Dialogue> for PanelElement {
    fn from(dialogue: Dialogue) -> Self {
        PanelElement::Dialogue(dialogue)
    }
}

impl From<SoundEffect> for PanelElement {
    fn from(sfx: SoundEffect) -> Self {
        PanelElement::SoundEffect(sfx)
    }
}

impl From<Narration> for PanelElement {
    fn from(narration: Narration) -> Self {
        PanelElement::Narration(narration)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dialogue {
    pub character: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<DialogueStyle>,
}

impl Dialogue {
    pub fn new(character: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            character: character.into().trim().to_string(),
            text: text.into(),
            emotion: None,
            style: None,
        }
    }

    pub fn with_emotion(mut self, emotion: Option<Emotion>) -> Self {
        self.emotion = emotion;
        self
    }

    pub fn with_style(mut self, style: DialogueStyle) -> Self {
        self.style = Some(style);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundEffect {
    pub text: String,
    pub intensity: SfxIntensity,
}

impl SoundEffect {
    /// Create a sound effect, deriving intensity from the lettering.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let intensity = SfxIntensity::from_case(&text);
        Self { text, intensity }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narration {
    pub text: String,
}

impl Narration {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
