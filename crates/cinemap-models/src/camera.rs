//! Virtual camera pose over a map.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position and orientation of the map camera.
///
/// Angles are in degrees. Nothing here is range-checked: the authoring layer
/// is responsible for sane values and the interpolation engine passes
/// whatever it receives straight through its arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct CameraPose {
    /// Longitude in degrees
    pub lng: f64,
    /// Latitude in degrees
    pub lat: f64,
    /// Map zoom level (lower is higher altitude)
    pub zoom: f64,
    /// Tilt away from straight down, conventionally 0-85
    pub pitch: f64,
    /// Heading, conventionally 0-360 but not normalized
    pub bearing: f64,
}

impl CameraPose {
    /// Create a new camera pose.
    pub const fn new(lng: f64, lat: f64, zoom: f64, pitch: f64, bearing: f64) -> Self {
        Self {
            lng,
            lat,
            zoom,
            pitch,
            bearing,
        }
    }

    /// Top-down pose looking at a location.
    pub const fn looking_at(lng: f64, lat: f64, zoom: f64) -> Self {
        Self::new(lng, lat, zoom, 0.0, 0.0)
    }
}

impl fmt::Display for CameraPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4}°N {:.4}°E z{:.2} p{:.1}° b{:.1}°",
            self.lat, self.lng, self.zoom, self.pitch, self.bearing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        let pose = CameraPose::default();
        assert_eq!(pose, CameraPose::new(0.0, 0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_serde_field_names() {
        let pose = CameraPose::new(-74.006, 40.7128, 15.5, 75.0, -20.0);
        let json = serde_json::to_value(pose).unwrap();
        assert_eq!(json["lng"], -74.006);
        assert_eq!(json["lat"], 40.7128);
        assert_eq!(json["bearing"], -20.0);
    }

    #[test]
    fn test_display() {
        let pose = CameraPose::looking_at(2.3522, 48.8566, 12.0);
        assert_eq!(pose.to_string(), "48.8566°N 2.3522°E z12.00 p0.0° b0.0°");
    }
}
