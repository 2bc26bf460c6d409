//! Keyframe definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{CameraPose, EasingKind};

/// Default spacing hint between captured shots (2s at 30fps).
pub const DEFAULT_DURATION_TO_NEXT: i64 = 60;

/// Unique identifier for a keyframe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct KeyframeId(pub String);

impl KeyframeId {
    /// Generate a new random keyframe ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for KeyframeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for KeyframeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for KeyframeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A camera shot anchored to a timeline frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    pub id: KeyframeId,

    /// Timeline position in frames
    pub frame: i64,

    pub camera: CameraPose,

    /// Spacing hint for the editor; not used by interpolation
    #[serde(default = "default_duration_to_next")]
    pub duration_to_next: i64,

    /// Shape of the segment leaving this keyframe
    #[serde(default)]
    pub easing: EasingKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn default_duration_to_next() -> i64 {
    DEFAULT_DURATION_TO_NEXT
}

impl Keyframe {
    /// Create a keyframe with a fresh id and default easing.
    pub fn new(frame: i64, camera: CameraPose) -> Self {
        Self {
            id: KeyframeId::new(),
            frame,
            camera,
            duration_to_next: DEFAULT_DURATION_TO_NEXT,
            easing: EasingKind::default(),
            label: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<KeyframeId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_easing(mut self, easing: EasingKind) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Apply a partial update in place.
    pub fn apply_patch(&mut self, patch: KeyframePatch) {
        if let Some(frame) = patch.frame {
            self.frame = frame;
        }
        if let Some(camera) = patch.camera {
            self.camera = camera;
        }
        if let Some(easing) = patch.easing {
            self.easing = easing;
        }
        if let Some(duration) = patch.duration_to_next {
            self.duration_to_next = duration;
        }
        if let Some(label) = patch.label {
            self.label = label;
        }
    }
}

/// Partial keyframe update. Absent fields are left untouched.
///
/// `label: Some(None)` clears the label; on the wire that is an explicit
/// `"label": null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyframePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraPose>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<EasingKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_to_next: Option<i64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "explicit_null"
    )]
    pub label: Option<Option<String>>,
}

fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl KeyframePatch {
    pub fn frame(frame: i64) -> Self {
        Self {
            frame: Some(frame),
            ..Default::default()
        }
    }

    pub fn easing(easing: EasingKind) -> Self {
        Self {
            easing: Some(easing),
            ..Default::default()
        }
    }

    /// Whether the patch moves the keyframe on the timeline.
    pub fn moves_frame(&self) -> bool {
        self.frame.is_some()
    }
}
