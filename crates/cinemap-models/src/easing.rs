//! Easing kind attached to a keyframe's outgoing segment.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Timing shape of the segment leaving a keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EasingKind {
    /// Constant speed
    Linear,
    /// Fast start, slow settle (cubic)
    EaseOut,
    /// Slow start and settle (cubic)
    #[default]
    EaseInOut,
    /// Extension point; behaves as ease-in-out unless a custom curve is installed
    Custom,
}

impl EasingKind {
    pub const ALL: &'static [EasingKind] = &[
        EasingKind::Linear,
        EasingKind::EaseOut,
        EasingKind::EaseInOut,
        EasingKind::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EasingKind::Linear => "linear",
            EasingKind::EaseOut => "ease-out",
            EasingKind::EaseInOut => "ease-in-out",
            EasingKind::Custom => "custom",
        }
    }
}

impl fmt::Display for EasingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EasingKind {
    type Err = EasingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(EasingKind::Linear),
            "ease-out" => Ok(EasingKind::EaseOut),
            "ease-in-out" => Ok(EasingKind::EaseInOut),
            "custom" => Ok(EasingKind::Custom),
            _ => Err(EasingParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown easing: {0}")]
pub struct EasingParseError(String);
