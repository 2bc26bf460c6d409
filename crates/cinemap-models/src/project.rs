//! Project settings and the persisted project document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

use crate::map_style::DEFAULT_MAP_STYLE;
use crate::{Keyframe, ModelResult};

/// Default output frame rate
pub const DEFAULT_FPS: u32 = 30;
/// Default output width
pub const DEFAULT_WIDTH: u32 = 1920;
/// Default output height
pub const DEFAULT_HEIGHT: u32 = 1080;
/// Default composition length (10s at 30fps)
pub const DEFAULT_DURATION_IN_FRAMES: u32 = 300;

/// Map projection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    #[default]
    Globe,
    Mercator,
}

impl Projection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Projection::Globe => "globe",
            Projection::Mercator => "mercator",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Projection {
    type Err = ProjectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "globe" => Ok(Projection::Globe),
            "mercator" => Ok(Projection::Mercator),
            _ => Err(ProjectionParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown projection: {0}")]
pub struct ProjectionParseError(String);

/// Project-wide output and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    /// Output frame rate
    #[serde(default = "default_fps")]
    #[validate(range(min = 1, max = 240))]
    pub fps: u32,

    /// Output width in pixels
    #[serde(default = "default_width")]
    #[validate(range(min = 16, max = 8192))]
    pub width: u32,

    /// Output height in pixels
    #[serde(default = "default_height")]
    #[validate(range(min = 16, max = 8192))]
    pub height: u32,

    /// Composition length in frames
    #[serde(default = "default_duration_in_frames")]
    #[validate(range(min = 1))]
    pub duration_in_frames: u32,

    /// Basemap style URL
    #[serde(default = "default_map_style")]
    #[validate(length(min = 1))]
    pub map_style: String,

    #[serde(default)]
    pub projection: Projection,

    /// GeoJSON overlay, carried opaquely for the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_data: Option<serde_json::Value>,

    /// Draw the coordinate/altitude readouts
    #[serde(default = "default_true")]
    pub show_data_counters: bool,

    /// Draw the steep-pitch warning
    #[serde(default = "default_true")]
    pub show_warning_system: bool,
}

fn default_fps() -> u32 {
    DEFAULT_FPS
}
fn default_width() -> u32 {
    DEFAULT_WIDTH
}
fn default_height() -> u32 {
    DEFAULT_HEIGHT
}
fn default_duration_in_frames() -> u32 {
    DEFAULT_DURATION_IN_FRAMES
}
fn default_map_style() -> String {
    DEFAULT_MAP_STYLE.to_string()
}
fn default_true() -> bool {
    true
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            duration_in_frames: DEFAULT_DURATION_IN_FRAMES,
            map_style: DEFAULT_MAP_STYLE.to_string(),
            projection: Projection::default(),
            overlay_data: None,
            show_data_counters: true,
            show_warning_system: true,
        }
    }
}

impl ProjectSettings {
    /// Composition length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_in_frames as f64 / self.fps as f64
    }

    /// Timeline position of a frame in seconds.
    pub fn frame_to_seconds(&self, frame: f64) -> f64 {
        frame / self.fps as f64
    }
}

/// The project document exchanged between the editor and the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(flatten)]
    #[validate(nested)]
    pub settings: ProjectSettings,

    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl Project {
    pub fn new(settings: ProjectSettings, keyframes: Vec<Keyframe>) -> Self {
        Self {
            settings,
            keyframes,
        }
    }

    /// Parse and validate a project document.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let project: Project = serde_json::from_str(json)?;
        project.validate()?;
        Ok(project)
    }

    pub fn to_json_pretty(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON schema of the project document.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Project)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EasingKind, ModelError};

    const EDITOR_DOCUMENT: &str = r#"{
        "fps": 60,
        "width": 3840,
        "height": 2160,
        "durationInFrames": 600,
        "mapStyle": "mapbox://styles/mapbox/satellite-v9",
        "projection": "mercator",
        "showDataCounters": false,
        "keyframes": [
            {
                "id": "b",
                "frame": 120,
                "camera": {"lng": 10, "lat": 0, "zoom": 10, "pitch": 0, "bearing": 0},
                "durationToNext": 60,
                "easing": "linear"
            },
            {
                "id": "a",
                "frame": 0,
                "camera": {"lng": 0, "lat": 0, "zoom": 10, "pitch": 0, "bearing": 0},
                "durationToNext": 120,
                "easing": "custom",
                "label": "Start"
            }
        ]
    }"#;

    #[test]
    fn test_parse_editor_document() {
        let project = Project::from_json(EDITOR_DOCUMENT).unwrap();
        assert_eq!(project.settings.fps, 60);
        assert_eq!(project.settings.projection, Projection::Mercator);
        assert!(!project.settings.show_data_counters);
        assert!(project.settings.show_warning_system);
        assert_eq!(project.keyframes.len(), 2);
        // Document order is preserved; sorting belongs to the sequence.
        assert_eq!(project.keyframes[0].id.as_str(), "b");
        assert_eq!(project.keyframes[1].easing, EasingKind::Custom);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let project = Project::from_json("{}").unwrap();
        assert_eq!(project.settings, ProjectSettings::default());
        assert!(project.keyframes.is_empty());
    }

    #[test]
    fn test_invalid_fps_rejected() {
        let err = Project::from_json(r#"{"fps": 0}"#).unwrap_err();
        assert!(matches!(err, ModelError::Validation(_)));
    }

    #[test]
    fn test_unknown_projection_rejected() {
        let err = Project::from_json(r#"{"projection": "albers"}"#).unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
        assert!("albers".parse::<Projection>().is_err());
    }

    #[test]
    fn test_settings_are_flattened() {
        let json = Project::default().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["durationInFrames"], 300);
        assert_eq!(value["mapStyle"], DEFAULT_MAP_STYLE);
        assert!(value.get("settings").is_none());
        assert!(value.get("overlayData").is_none());
    }

    #[test]
    fn test_duration_seconds() {
        let settings = ProjectSettings::default();
        assert!((settings.duration_seconds() - 10.0).abs() < 1e-12);
        assert!((settings.frame_to_seconds(45.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_schema_mentions_keyframes() {
        let schema = Project::json_schema();
        assert!(schema.to_string().contains("keyframes"));
    }
}
