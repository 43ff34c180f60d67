//! Core domain types for comicscript.
//!
//! This module contains the document model both parsers produce:
//! - `Comic`, `Page`, `Panel` - the page/panel tree
//! - `PanelElement` - dialogue, sound effects and narration
//! - `Style`, `Emotion`, `DialogueStyle`, `SfxIntensity` - lettering and art enums
//! - `Composition`, `Environment`, `Rendering` - optional panel metadata

mod comic;
mod composition;
mod style;

pub use comic::{
    Comic, Dialogue, Narration, Page, Panel, PanelElement, SoundEffect, DEFAULT_TITLE,
};
pub use composition::{
    CameraAngle, Composition, Environment, FocusType, Lighting, Rendering, ShotType, TimeOfDay,
    Weather,
};
pub use style::{DialogueStyle, Emotion, SfxIntensity, Style};
