//! comicscript - Comic script parser
//!
//! A library for turning comic scripts into a structured page/panel model.
//! Scripts may be written in a light structured markup or as free prose;
//! both produce the same [`Comic`] document.

pub mod cli;
pub mod composition;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parser;
pub mod prompt;
pub mod types;

pub use composition::{extract_composition, extract_environment};
pub use config::{ComicConfig, CONFIG_FILENAME};
pub use error::{ComicError, ParseErrors, Result};
pub use format::{to_natural, to_script, TextFormat};
pub use parser::{
    detect_mode, parse_auto, parse_script, parse_script_with, parse_story, parse_with_mode, Mode,
    ParseResult, ScriptOptions,
};
pub use prompt::{build_prompt, build_prompts};
pub use types::{
    CameraAngle, Comic, Composition, Dialogue, DialogueStyle, Emotion, Environment, FocusType,
    Lighting, Narration, Page, Panel, PanelElement, Rendering, SfxIntensity, ShotType,
    SoundEffect, Style, TimeOfDay, Weather,
};
