//! Cinematic HUD readouts drawn over each frame.
//!
//! Only the values are computed here; layout and styling belong to whatever
//! composites the frame.

use cinemap_core::CameraPose;
use cinemap_models::ProjectSettings;
use serde::{Deserialize, Serialize};

/// Rough metres of altitude per zoom level shown in the telemetry panel.
pub const ALTITUDE_METERS_PER_ZOOM: f64 = 1500.0;

/// Pitch above which the low-altitude warning is shown.
pub const LOW_ALTITUDE_PITCH: f64 = 60.0;

/// Camera telemetry panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Telemetry {
    /// e.g. `48.8566°N 2.3522°E`
    pub coordinates: String,
    pub altitude_meters: f64,
    /// e.g. `21000m`
    pub altitude_label: String,
    pub pitch: f64,
    pub bearing: f64,
}

/// Steep-pitch warning banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AltitudeWarning {
    pub pitch: f64,
    pub message: String,
}

/// Everything the HUD shows for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOverlay {
    /// `SS:CC`, seconds and hundredths
    pub timecode: String,
    /// `Frame 0042`
    pub frame_label: String,
    /// Position in the composition, `frame / durationInFrames`
    pub progress: f64,
    /// Present when data counters are enabled and there is a camera
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<Telemetry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<AltitudeWarning>,
}

impl FrameOverlay {
    pub fn compute(frame: f64, pose: Option<&CameraPose>, settings: &ProjectSettings) -> Self {
        let telemetry = pose
            .filter(|_| settings.show_data_counters)
            .map(Telemetry::from_pose);

        let warning = pose
            .filter(|p| settings.show_warning_system && p.pitch > LOW_ALTITUDE_PITCH)
            .map(|p| AltitudeWarning {
                pitch: p.pitch,
                message: format!("LOW ALTITUDE: PITCH ANGLE CRITICAL ({:.1}°)", p.pitch),
            });

        Self {
            timecode: timecode(frame, settings.fps),
            frame_label: format!("Frame {:04}", frame.floor() as i64),
            progress: frame / settings.duration_in_frames.max(1) as f64,
            telemetry,
            warning,
        }
    }
}

impl Telemetry {
    pub fn from_pose(pose: &CameraPose) -> Self {
        let altitude_meters = pose.zoom * ALTITUDE_METERS_PER_ZOOM;
        Self {
            coordinates: format!("{:.4}°N {:.4}°E", pose.lat, pose.lng),
            altitude_meters,
            altitude_label: format!("{:.0}m", altitude_meters),
            pitch: pose.pitch,
            bearing: pose.bearing,
        }
    }
}

/// `SS:CC` timecode for a frame.
pub fn timecode(frame: f64, fps: u32) -> String {
    let fps = fps.max(1) as f64;
    let seconds = (frame / fps).floor();
    let hundredths = ((frame % fps) * (100.0 / fps)).floor();
    format!("{:02}:{:02}", seconds as i64, hundredths as i64)
}
