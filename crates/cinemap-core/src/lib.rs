//! Keyframe camera interpolation engine.
//!
//! This crate provides:
//! - Easing curves for shaping segment timing
//! - An always-sorted keyframe sequence
//! - The per-frame camera interpolation engine
//! - Editor state as an owned value with a pure reducer

pub mod easing;
pub mod editor;
pub mod error;
pub mod interpolation;
pub mod sequence;

pub use easing::{EasingCurve, EasingFunction, EasingKindExt};
pub use editor::{EditorAction, EditorMode, EditorState};
pub use error::{CoreError, CoreResult};
pub use interpolation::{
    interpolate, sorted_view, InterpolationConfig, Interpolator, DEFAULT_ZOOM_ARC_FACTOR,
};
pub use sequence::KeyframeSequence;

pub use cinemap_models::{CameraPose, EasingKind, Keyframe, KeyframeId, KeyframePatch};
