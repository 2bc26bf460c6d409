//! Shared data models for cinemap.
//!
//! This crate provides Serde-serializable types for:
//! - Camera poses and easing kinds
//! - Keyframes and partial keyframe updates
//! - Project settings and the persisted project document
//! - Built-in camera presets and map styles

pub mod camera;
pub mod easing;
pub mod error;
pub mod keyframe;
pub mod map_style;
pub mod preset;
pub mod project;

// Re-export common types
pub use camera::CameraPose;
pub use easing::{EasingKind, EasingParseError};
pub use error::{ModelError, ModelResult};
pub use keyframe::{Keyframe, KeyframeId, KeyframePatch, DEFAULT_DURATION_TO_NEXT};
pub use map_style::MapStyle;
pub use preset::CameraPreset;
pub use project::{Project, ProjectSettings, Projection, ProjectionParseError};
