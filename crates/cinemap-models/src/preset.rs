//! Camera presets offered to the operator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::CameraPose;

/// A named partial camera. Fields left as `None` keep the current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CameraPreset {
    pub name: String,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub zoom: Option<f64>,
    #[serde(default)]
    pub pitch: Option<f64>,
    #[serde(default)]
    pub bearing: Option<f64>,
    /// Keep the current location regardless of `lng`/`lat`
    #[serde(default)]
    pub use_current_location: bool,
}

impl CameraPreset {
    fn framing(name: &str, zoom: f64, pitch: f64, bearing: f64) -> Self {
        Self {
            name: name.to_string(),
            lng: None,
            lat: None,
            zoom: Some(zoom),
            pitch: Some(pitch),
            bearing: Some(bearing),
            use_current_location: true,
        }
    }

    fn located(name: &str, pose: CameraPose) -> Self {
        Self {
            name: name.to_string(),
            lng: Some(pose.lng),
            lat: Some(pose.lat),
            zoom: Some(pose.zoom),
            pitch: Some(pose.pitch),
            bearing: Some(pose.bearing),
            use_current_location: false,
        }
    }

    /// The presets shipped with the editor.
    pub fn builtin() -> Vec<CameraPreset> {
        vec![
            Self::located("Global View", CameraPose::new(0.0, 20.0, 1.5, 0.0, 0.0)),
            Self::framing("Cinematic Orbit", 13.0, 60.0, -45.0),
            Self::framing("Top-Down Analysis", 14.0, 0.0, 0.0),
            Self::framing("Low Flyover", 15.5, 70.0, 90.0),
            Self::located("Urban Reveal", CameraPose::new(-74.006, 40.7128, 15.5, 75.0, -20.0)),
        ]
    }

    /// Look up a built-in preset by name (case-insensitive).
    pub fn find(name: &str) -> Option<CameraPreset> {
        Self::builtin()
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Overlay this preset on the current camera.
    pub fn apply(&self, current: &CameraPose) -> CameraPose {
        let mut target = CameraPose {
            lng: self.lng.unwrap_or(current.lng),
            lat: self.lat.unwrap_or(current.lat),
            zoom: self.zoom.unwrap_or(current.zoom),
            pitch: self.pitch.unwrap_or(current.pitch),
            bearing: self.bearing.unwrap_or(current.bearing),
        };
        if self.use_current_location {
            target.lng = current.lng;
            target.lat = current.lat;
        }
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let names: Vec<String> = CameraPreset::builtin().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "Global View",
                "Cinematic Orbit",
                "Top-Down Analysis",
                "Low Flyover",
                "Urban Reveal",
            ]
        );
    }

    #[test]
    fn test_framing_preset_keeps_location() {
        let current = CameraPose::new(139.69, 35.68, 9.0, 10.0, 5.0);
        let target = CameraPreset::find("low flyover").unwrap().apply(&current);
        assert_eq!(target, CameraPose::new(139.69, 35.68, 15.5, 70.0, 90.0));
    }

    #[test]
    fn test_located_preset_moves_camera() {
        let current = CameraPose::new(139.69, 35.68, 9.0, 10.0, 5.0);
        let target = CameraPreset::find("Urban Reveal").unwrap().apply(&current);
        assert_eq!(target, CameraPose::new(-74.006, 40.7128, 15.5, 75.0, -20.0));
    }

    #[test]
    fn test_unknown_preset() {
        assert!(CameraPreset::find("Dolly Zoom").is_none());
    }
}
