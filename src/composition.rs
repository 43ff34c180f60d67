//! Keyword heuristics for camera and environment metadata.
//!
//! Each category is a table of `(value, phrases)` rows in priority order.
//! Phrases match case-insensitively on word boundaries, and the first row
//! with any matching phrase decides the value for that category. A category
//! with no match stays unset.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{
    CameraAngle, Composition, Environment, FocusType, Lighting, ShotType, TimeOfDay, Weather,
};

type Table<T> = &'static [(T, &'static [&'static str])];

const SHOTS: Table<ShotType> = &[
    (
        ShotType::ExtremeCloseUp,
        &["extreme close-up", "extreme closeup", "extreme close up", "macro shot"],
    ),
    (ShotType::CloseUp, &["close-up", "closeup", "close up"]),
    (
        ShotType::ExtremeLong,
        &["extreme long shot", "extreme wide shot", "extreme wide"],
    ),
    (
        ShotType::Long,
        &["long shot", "wide shot", "establishing shot", "panorama", "panoramic"],
    ),
    (ShotType::Full, &["full shot", "full body", "full-body", "head to toe"]),
    (ShotType::Medium, &["medium shot", "mid shot", "mid-shot", "waist up"]),
];

const ANGLES: Table<CameraAngle> = &[
    (
        CameraAngle::HighAngle,
        &["high angle", "high-angle", "bird's eye", "bird's-eye", "birds eye", "from above", "looking down"],
    ),
    (
        CameraAngle::LowAngle,
        &["low angle", "low-angle", "worm's eye", "worm's-eye", "from below", "looking up"],
    ),
    (CameraAngle::DutchAngle, &["dutch angle", "dutch tilt", "tilted", "canted"]),
    (
        CameraAngle::OverShoulder,
        &["over the shoulder", "over-the-shoulder", "over shoulder"],
    ),
    (CameraAngle::EyeLevel, &["eye level", "eye-level"]),
];

const FOCUS: Table<FocusType> = &[
    (
        FocusType::Action,
        &["action shot", "mid-air", "in motion", "explosion", "punches", "leaps", "charges"],
    ),
    (FocusType::Character, &["portrait", "reaction shot", "face"]),
    (FocusType::Object, &["artifact", "relic", "the object"]),
    (FocusType::Background, &["landscape", "scenery", "skyline", "vista"]),
];

const LIGHTING: Table<Lighting> = &[
    (Lighting::Silhouette, &["silhouette", "silhouetted", "backlit"]),
    (Lighting::Neon, &["neon"]),
    (
        Lighting::Dramatic,
        &["dramatic", "spotlight", "harsh shadows", "chiaroscuro"],
    ),
    (
        Lighting::Dim,
        &["dim", "dimly", "dark", "shadowy", "gloomy", "candlelit", "candlelight"],
    ),
    (Lighting::Bright, &["bright", "sunny", "sunlit", "well-lit", "brilliant"]),
    (Lighting::Natural, &["natural light", "daylight", "sunlight"]),
];

const TIMES: Table<TimeOfDay> = &[
    (TimeOfDay::Dawn, &["dawn", "sunrise", "daybreak", "first light"]),
    (TimeOfDay::Dusk, &["dusk", "sunset", "twilight", "evening"]),
    (
        TimeOfDay::Night,
        &["night", "nighttime", "midnight", "moonlight", "moonlit", "starry"],
    ),
    (
        TimeOfDay::Day,
        &["midday", "noon", "afternoon", "morning", "daytime", "broad daylight"],
    ),
];

const WEATHER: Table<Weather> = &[
    (
        Weather::Storm,
        &["storm", "stormy", "thunderstorm", "thunder", "lightning"],
    ),
    (Weather::Rain, &["rain", "raining", "rainy", "drizzle", "downpour"]),
    (Weather::Snow, &["snow", "snowing", "snowy", "blizzard"]),
    (Weather::Fog, &["fog", "foggy", "mist", "misty", "haze", "hazy"]),
    (Weather::Wind, &["wind", "windy", "gale", "breeze"]),
    (Weather::Clear, &["clear sky", "clear skies", "cloudless"]),
];

/// Compile a table into one case-insensitive regex per row.
fn compile<T: Copy>(table: Table<T>) -> Vec<(T, Regex)> {
    table
        .iter()
        .map(|(value, phrases)| {
            let alternatives: Vec<String> = phrases.iter().map(|p| regex::escape(p)).collect();
            let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
            (*value, Regex::new(&pattern).unwrap())
        })
        .collect()
}

static SHOT_RULES: Lazy<Vec<(ShotType, Regex)>> = Lazy::new(|| compile(SHOTS));
static ANGLE_RULES: Lazy<Vec<(CameraAngle, Regex)>> = Lazy::new(|| compile(ANGLES));
static FOCUS_RULES: Lazy<Vec<(FocusType, Regex)>> = Lazy::new(|| compile(FOCUS));
static LIGHTING_RULES: Lazy<Vec<(Lighting, Regex)>> = Lazy::new(|| compile(LIGHTING));
static TIME_RULES: Lazy<Vec<(TimeOfDay, Regex)>> = Lazy::new(|| compile(TIMES));
static WEATHER_RULES: Lazy<Vec<(Weather, Regex)>> = Lazy::new(|| compile(WEATHER));

fn first_match<T: Copy>(rules: &[(T, Regex)], text: &str) -> Option<T> {
    rules
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(value, _)| *value)
}

pub fn detect_shot(text: &str) -> Option<ShotType> {
    first_match(&SHOT_RULES, text)
}

pub fn detect_camera_angle(text: &str) -> Option<CameraAngle> {
    first_match(&ANGLE_RULES, text)
}

pub fn detect_focus(text: &str) -> Option<FocusType> {
    first_match(&FOCUS_RULES, text)
}

pub fn detect_lighting(text: &str) -> Option<Lighting> {
    first_match(&LIGHTING_RULES, text)
}

pub fn detect_time_of_day(text: &str) -> Option<TimeOfDay> {
    first_match(&TIME_RULES, text)
}

pub fn detect_weather(text: &str) -> Option<Weather> {
    first_match(&WEATHER_RULES, text)
}

/// Camera metadata implied by `text`, or `None` if nothing matched.
pub fn extract_composition(text: &str) -> Option<Composition> {
    let composition = Composition {
        shot: detect_shot(text),
        camera_angle: detect_camera_angle(text),
        focus: detect_focus(text),
    };
    (!composition.is_empty()).then_some(composition)
}

/// Environment metadata implied by `text`, or `None` if nothing matched.
pub fn extract_environment(text: &str) -> Option<Environment> {
    let environment = Environment {
        setting: None,
        lighting: detect_lighting(text),
        weather: detect_weather(text),
        time_of_day: detect_time_of_day(text),
    };
    (!environment.is_empty()).then_some(environment)
}
