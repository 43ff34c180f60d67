//! Art style, emotion and lettering enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ComicError, Result};

/// Overall art style of a comic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Manga,
    Superhero,
    Cartoon,
    Webcomic,
    Noir,
    Chibi,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Manga,
        Style::Superhero,
        Style::Cartoon,
        Style::Webcomic,
        Style::Noir,
        Style::Chibi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Manga => "manga",
            Style::Superhero => "superhero",
            Style::Cartoon => "cartoon",
            Style::Webcomic => "webcomic",
            Style::Noir => "noir",
            Style::Chibi => "chibi",
        }
    }

    /// Phrase appended to image prompts for this style.
    pub fn prompt_modifier(self) -> &'static str {
        match self {
            Style::Manga => "manga style, anime art, clean lines, screentone shading",
            Style::Superhero => "comic book style, bold colors, dynamic poses, american comics",
            Style::Cartoon => "cartoon style, simple shapes, bright colors, friendly",
            Style::Webcomic => "digital art, clean lines, modern webcomic style",
            Style::Noir => "noir style, high contrast, black and white, dramatic shadows",
            Style::Chibi => "chibi style, cute, super deformed, kawaii",
        }
    }
}

impl FromStr for Style {
    type Err = ComicError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == needle)
            .ok_or_else(|| ComicError::Parse {
                message: format!("Unknown style: {}", s.trim()),
                help: Some(format!(
                    "Use one of: {}",
                    Style::ALL.map(Style::as_str).join(", ")
                )),
            })
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotion attached to a line of dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Neutral,
    Happy,
    Sad,
    Angry,
    Surprised,
    Scared,
    Excited,
    Thinking,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Neutral,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprised,
        Emotion::Scared,
        Emotion::Excited,
        Emotion::Thinking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprised => "surprised",
            Emotion::Scared => "scared",
            Emotion::Excited => "excited",
            Emotion::Thinking => "thinking",
        }
    }
}

impl FromStr for Emotion {
    type Err = ComicError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.as_str() == needle)
            .ok_or_else(|| ComicError::Parse {
                message: format!("Unknown emotion: {}", s.trim()),
                help: None,
            })
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a speech balloon is lettered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogueStyle {
    #[default]
    Normal,
    Shout,
    Whisper,
    Thought,
}

impl DialogueStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            DialogueStyle::Normal => "normal",
            DialogueStyle::Shout => "shout",
            DialogueStyle::Whisper => "whisper",
            DialogueStyle::Thought => "thought",
        }
    }

    /// Map a character-cue modifier like `(yelling)` to a lettering style.
    pub fn from_modifier(modifier: &str) -> Option<Self> {
        match modifier.trim().to_ascii_lowercase().as_str() {
            "thinking" | "thought" => Some(DialogueStyle::Thought),
            "shouting" | "yelling" | "angry" => Some(DialogueStyle::Shout),
            "whispering" | "quiet" => Some(DialogueStyle::Whisper),
            _ => None,
        }
    }

    /// Balloon shape description used in image prompts.
    pub fn balloon(self) -> &'static str {
        match self {
            DialogueStyle::Normal => "standard",
            DialogueStyle::Shout => "jagged edges",
            DialogueStyle::Whisper => "dashed outline",
            DialogueStyle::Thought => "cloud shape",
        }
    }
}

impl fmt::Display for DialogueStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loudness of a sound effect, derived from how it is lettered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SfxIntensity {
    Subtle,
    Medium,
    Loud,
}

impl SfxIntensity {
    /// All-uppercase text is loud, all-lowercase is subtle, anything else medium.
    ///
    /// Only cased letters are considered, so `"BOOM!!"` is still loud.
    pub fn from_case(text: &str) -> Self {
        let mut letters = text.chars().filter(|c| c.is_alphabetic()).peekable();
        if letters.peek().is_none() {
            return SfxIntensity::Medium;
        }

        let (mut upper, mut lower) = (false, false);
        for c in letters {
            upper |= c.is_uppercase();
            lower |= c.is_lowercase();
        }

        match (upper, lower) {
            (true, false) => SfxIntensity::Loud,
            (false, true) => SfxIntensity::Subtle,
            _ => SfxIntensity::Medium,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SfxIntensity::Subtle => "subtle",
            SfxIntensity::Medium => "medium",
            SfxIntensity::Loud => "loud",
        }
    }
}

impl fmt::Display for SfxIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_from_case() {
        assert_eq!(SfxIntensity::from_case("BOOM"), SfxIntensity::Loud);
        assert_eq!(SfxIntensity::from_case("boom"), SfxIntensity::Subtle);
        assert_eq!(SfxIntensity::from_case("Boom"), SfxIntensity::Medium);
    }

    #[test]
    fn test_intensity_ignores_punctuation() {
        assert_eq!(SfxIntensity::from_case("KA-BOOM!!"), SfxIntensity::Loud);
        assert_eq!(SfxIntensity::from_case("drip... drip"), SfxIntensity::Subtle);
        assert_eq!(SfxIntensity::from_case("!!!"), SfxIntensity::Medium);
    }

    #[test]
    fn test_style_from_str_case_insensitive() {
        assert_eq!("Noir".parse::<Style>().unwrap(), Style::Noir);
        assert_eq!(" manga ".parse::<Style>().unwrap(), Style::Manga);
        assert!("baroque".parse::<Style>().is_err());
    }

    #[test]
    fn test_emotion_round_trips_through_display() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.to_string().parse::<Emotion>().unwrap(), emotion);
        }
    }

    #[test]
    fn test_dialogue_style_from_modifier() {
        assert_eq!(DialogueStyle::from_modifier("thinking"), Some(DialogueStyle::Thought));
        assert_eq!(DialogueStyle::from_modifier("YELLING"), Some(DialogueStyle::Shout));
        assert_eq!(DialogueStyle::from_modifier("quiet"), Some(DialogueStyle::Whisper));
        assert_eq!(DialogueStyle::from_modifier("happy"), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Style::Superhero).unwrap(), "\"superhero\"");
        assert_eq!(serde_json::to_string(&SfxIntensity::Loud).unwrap(), "\"loud\"");
    }
}
