//! Camera, environment and rendering metadata for a panel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How much of the subject fills the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShotType {
    ExtremeCloseUp,
    CloseUp,
    Medium,
    Full,
    Long,
    ExtremeLong,
}

impl ShotType {
    pub fn as_str(self) -> &'static str {
        match self {
            ShotType::ExtremeCloseUp => "extreme-close-up",
            ShotType::CloseUp => "close-up",
            ShotType::Medium => "medium",
            ShotType::Full => "full",
            ShotType::Long => "long",
            ShotType::ExtremeLong => "extreme-long",
        }
    }
}

/// Where the camera sits relative to the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraAngle {
    EyeLevel,
    HighAngle,
    LowAngle,
    DutchAngle,
    OverShoulder,
}

impl CameraAngle {
    pub fn as_str(self) -> &'static str {
        match self {
            CameraAngle::EyeLevel => "eye-level",
            CameraAngle::HighAngle => "high-angle",
            CameraAngle::LowAngle => "low-angle",
            CameraAngle::DutchAngle => "dutch-angle",
            CameraAngle::OverShoulder => "over-shoulder",
        }
    }
}

/// What the panel draws attention to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusType {
    Character,
    Background,
    Action,
    Object,
}

impl FocusType {
    pub fn as_str(self) -> &'static str {
        match self {
            FocusType::Character => "character",
            FocusType::Background => "background",
            FocusType::Action => "action",
            FocusType::Object => "object",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lighting {
    Bright,
    Dim,
    Dramatic,
    Natural,
    Neon,
    Silhouette,
}

impl Lighting {
    pub fn as_str(self) -> &'static str {
        match self {
            Lighting::Bright => "bright",
            Lighting::Dim => "dim",
            Lighting::Dramatic => "dramatic",
            Lighting::Natural => "natural",
            Lighting::Neon => "neon",
            Lighting::Silhouette => "silhouette",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOfDay {
    Dawn,
    Day,
    Dusk,
    Night,
}

impl TimeOfDay {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Dawn => "dawn",
            TimeOfDay::Day => "day",
            TimeOfDay::Dusk => "dusk",
            TimeOfDay::Night => "night",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weather {
    Clear,
    Rain,
    Snow,
    Storm,
    Fog,
    Wind,
}

impl Weather {
    pub fn as_str(self) -> &'static str {
        match self {
            Weather::Clear => "clear",
            Weather::Rain => "rain",
            Weather::Snow => "snow",
            Weather::Storm => "storm",
            Weather::Fog => "fog",
            Weather::Wind => "wind",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(ShotType, CameraAngle, FocusType, Lighting, TimeOfDay, Weather);

/// Camera-level metadata. Unset fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot: Option<ShotType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_angle: Option<CameraAngle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<FocusType>,
}

impl Composition {
    pub fn is_empty(&self) -> bool {
        self.shot.is_none() && self.camera_angle.is_none() && self.focus.is_none()
    }
}

/// Where and when the panel takes place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<Lighting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
}

impl Environment {
    pub fn is_empty(&self) -> bool {
        self.setting.is_none()
            && self.lighting.is_none()
            && self.weather.is_none()
            && self.time_of_day.is_none()
    }
}

/// Free-form rendering preferences for downstream image generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rendering {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub color_palette: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<String>,
}

impl Rendering {
    pub fn is_empty(&self) -> bool {
        self.color_palette.is_empty() && self.mood.is_none() && self.effects.is_empty()
    }
}
