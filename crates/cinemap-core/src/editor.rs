//! Editor state and its reducer.
//!
//! `EditorState` is a plain owned value. Every change goes through
//! [`EditorState::apply`], which returns the next state and leaves the
//! current one untouched, so a failed action never half-applies.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use cinemap_models::{
    CameraPose, CameraPreset, EasingKind, Keyframe, KeyframeId, KeyframePatch, Project,
    ProjectSettings, Projection,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use validator::Validate;

use crate::error::{CoreError, CoreResult};
use crate::sequence::KeyframeSequence;

/// Whether the operator is authoring or watching the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Edit,
    Preview,
}

impl EditorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorMode::Edit => "edit",
            EditorMode::Preview => "preview",
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EditorMode {
    type Err = EditorModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "edit" => Ok(EditorMode::Edit),
            "preview" => Ok(EditorMode::Preview),
            _ => Err(EditorModeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown editor mode: {0}")]
pub struct EditorModeParseError(String);

/// A single editor operation.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    SetFps(u32),
    SetDimensions { width: u32, height: u32 },
    SetDuration(u32),
    SetCurrentTime(i64),
    SetPlaying(bool),
    SetCurrentCamera(CameraPose),
    SetMapStyle(String),
    SetProjection(Projection),
    SetOverlayData(Option<serde_json::Value>),
    SetShowDataCounters(bool),
    SetShowWarningSystem(bool),
    SetMode(EditorMode),
    AddKeyframe(Keyframe),
    UpdateKeyframe { id: KeyframeId, patch: KeyframePatch },
    RemoveKeyframe(KeyframeId),
    /// Record the live camera at the playhead.
    CaptureKeyframe,
    /// Move the playhead to a keyframe and fly the camera there.
    JumpToKeyframe(KeyframeId),
    ApplyPreset(CameraPreset),
    TriggerFlyTo(CameraPose),
    ClearFlyTo,
}

impl EditorAction {
    pub fn name(&self) -> &'static str {
        match self {
            EditorAction::SetFps(_) => "set_fps",
            EditorAction::SetDimensions { .. } => "set_dimensions",
            EditorAction::SetDuration(_) => "set_duration",
            EditorAction::SetCurrentTime(_) => "set_current_time",
            EditorAction::SetPlaying(_) => "set_playing",
            EditorAction::SetCurrentCamera(_) => "set_current_camera",
            EditorAction::SetMapStyle(_) => "set_map_style",
            EditorAction::SetProjection(_) => "set_projection",
            EditorAction::SetOverlayData(_) => "set_overlay_data",
            EditorAction::SetShowDataCounters(_) => "set_show_data_counters",
            EditorAction::SetShowWarningSystem(_) => "set_show_warning_system",
            EditorAction::SetMode(_) => "set_mode",
            EditorAction::AddKeyframe(_) => "add_keyframe",
            EditorAction::UpdateKeyframe { .. } => "update_keyframe",
            EditorAction::RemoveKeyframe(_) => "remove_keyframe",
            EditorAction::CaptureKeyframe => "capture_keyframe",
            EditorAction::JumpToKeyframe(_) => "jump_to_keyframe",
            EditorAction::ApplyPreset(_) => "apply_preset",
            EditorAction::TriggerFlyTo(_) => "trigger_fly_to",
            EditorAction::ClearFlyTo => "clear_fly_to",
        }
    }
}

/// Everything the editor tracks between actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub settings: ProjectSettings,
    pub current_camera: CameraPose,
    /// Playhead position in frames
    pub current_time: i64,
    pub is_playing: bool,
    pub mode: EditorMode,
    /// Pending camera move for the live map view
    pub fly_to_target: Option<CameraPose>,
    pub keyframes: KeyframeSequence,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            settings: ProjectSettings::default(),
            current_camera: CameraPose::default(),
            current_time: 0,
            is_playing: false,
            mode: EditorMode::Edit,
            fly_to_target: None,
            keyframes: KeyframeSequence::new(),
        }
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor state for a loaded project document.
    pub fn from_project(project: Project) -> CoreResult<Self> {
        validate_settings(&project.settings)?;
        Ok(Self {
            settings: project.settings,
            keyframes: KeyframeSequence::from_keyframes(project.keyframes),
            ..Self::default()
        })
    }

    /// The persisted document for this state.
    pub fn to_project(&self) -> Project {
        Project::new(self.settings.clone(), self.keyframes.as_slice().to_vec())
    }

    /// Ordered keyframes for the render pipeline.
    pub fn snapshot(&self) -> Arc<[Keyframe]> {
        self.keyframes.snapshot()
    }

    /// Apply `action`, returning the next state.
    pub fn apply(&self, action: EditorAction) -> CoreResult<EditorState> {
        debug!(action = action.name(), "Applying editor action");
        let mut next = self.clone();

        match action {
            EditorAction::SetFps(fps) => {
                next.settings.fps = fps;
                validate_settings(&next.settings)?;
            }
            EditorAction::SetDimensions { width, height } => {
                next.settings.width = width;
                next.settings.height = height;
                validate_settings(&next.settings)?;
            }
            EditorAction::SetDuration(frames) => {
                next.settings.duration_in_frames = frames;
                validate_settings(&next.settings)?;
            }
            EditorAction::SetMapStyle(style) => {
                next.settings.map_style = style;
                validate_settings(&next.settings)?;
            }
            EditorAction::SetProjection(projection) => next.settings.projection = projection,
            EditorAction::SetOverlayData(data) => next.settings.overlay_data = data,
            EditorAction::SetShowDataCounters(show) => next.settings.show_data_counters = show,
            EditorAction::SetShowWarningSystem(show) => next.settings.show_warning_system = show,
            EditorAction::SetCurrentTime(frame) => next.current_time = frame,
            EditorAction::SetPlaying(playing) => next.is_playing = playing,
            EditorAction::SetCurrentCamera(camera) => next.current_camera = camera,
            EditorAction::SetMode(mode) => next.mode = mode,
            EditorAction::AddKeyframe(keyframe) => next.keyframes.insert(keyframe),
            EditorAction::UpdateKeyframe { id, patch } => next.keyframes.update(&id, patch)?,
            EditorAction::RemoveKeyframe(id) => {
                next.keyframes.remove(&id);
            }
            EditorAction::CaptureKeyframe => {
                let keyframe = next.captured_keyframe();
                next.keyframes.insert(keyframe);
            }
            EditorAction::JumpToKeyframe(id) => {
                let keyframe = next
                    .keyframes
                    .get(&id)
                    .ok_or(CoreError::KeyframeNotFound(id))?;
                next.current_time = keyframe.frame;
                next.fly_to_target = Some(keyframe.camera);
            }
            EditorAction::ApplyPreset(preset) => {
                next.fly_to_target = Some(preset.apply(&next.current_camera));
            }
            EditorAction::TriggerFlyTo(target) => next.fly_to_target = Some(target),
            EditorAction::ClearFlyTo => next.fly_to_target = None,
        }

        Ok(next)
    }

    fn captured_keyframe(&self) -> Keyframe {
        Keyframe::new(self.current_time, self.current_camera)
            .with_easing(EasingKind::EaseInOut)
            .with_label(format!("Keyframe {}", self.keyframes.len() + 1))
    }
}

fn validate_settings(settings: &ProjectSettings) -> CoreResult<()> {
    settings
        .validate()
        .map_err(|e| CoreError::invalid_settings(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinemap_models::DEFAULT_DURATION_TO_NEXT;

    fn with_keyframes(frames: &[(&str, i64)]) -> EditorState {
        let mut state = EditorState::new();
        for (id, frame) in frames {
            let camera = CameraPose::looking_at(*frame as f64, 0.0, 10.0);
            state = state
                .apply(EditorAction::AddKeyframe(Keyframe::new(*frame, camera).with_id(*id)))
                .unwrap();
        }
        state
    }

    #[test]
    fn test_defaults() {
        let state = EditorState::new();
        assert_eq!(state.settings.fps, 30);
        assert_eq!(state.current_time, 0);
        assert!(!state.is_playing);
        assert_eq!(state.mode, EditorMode::Edit);
        assert!(state.fly_to_target.is_none());
        assert!(state.keyframes.is_empty());
    }

    #[test]
    fn test_settings_actions() {
        let state = EditorState::new()
            .apply(EditorAction::SetFps(60))
            .unwrap()
            .apply(EditorAction::SetDimensions { width: 1080, height: 1920 })
            .unwrap()
            .apply(EditorAction::SetDuration(900))
            .unwrap()
            .apply(EditorAction::SetProjection(Projection::Mercator))
            .unwrap()
            .apply(EditorAction::SetShowWarningSystem(false))
            .unwrap();
        assert_eq!(state.settings.fps, 60);
        assert_eq!((state.settings.width, state.settings.height), (1080, 1920));
        assert_eq!(state.settings.duration_in_frames, 900);
        assert_eq!(state.settings.projection, Projection::Mercator);
        assert!(!state.settings.show_warning_system);
    }

    #[test]
    fn test_invalid_settings_leave_state_untouched() {
        let state = EditorState::new();
        for action in [
            EditorAction::SetFps(0),
            EditorAction::SetDuration(0),
            EditorAction::SetDimensions { width: 0, height: 1080 },
            EditorAction::SetMapStyle(String::new()),
        ] {
            let err = state.apply(action).unwrap_err();
            assert!(matches!(err, CoreError::InvalidSettings(_)));
        }
        assert_eq!(state, EditorState::new());
    }

    #[test]
    fn test_capture_keyframe() {
        let camera = CameraPose::new(2.35, 48.85, 12.0, 45.0, 10.0);
        let state = EditorState::new()
            .apply(EditorAction::SetCurrentCamera(camera))
            .unwrap()
            .apply(EditorAction::SetCurrentTime(90))
            .unwrap()
            .apply(EditorAction::CaptureKeyframe)
            .unwrap()
            .apply(EditorAction::SetCurrentTime(30))
            .unwrap()
            .apply(EditorAction::CaptureKeyframe)
            .unwrap();

        let keyframes = state.keyframes.as_slice();
        assert_eq!(keyframes.len(), 2);
        assert_eq!(keyframes[0].frame, 30);
        assert_eq!(keyframes[0].label.as_deref(), Some("Keyframe 2"));
        assert_eq!(keyframes[1].frame, 90);
        assert_eq!(keyframes[1].label.as_deref(), Some("Keyframe 1"));
        assert_eq!(keyframes[1].camera, camera);
        assert_eq!(keyframes[1].easing, EasingKind::EaseInOut);
        assert_eq!(keyframes[1].duration_to_next, DEFAULT_DURATION_TO_NEXT);
        assert_ne!(keyframes[0].id, keyframes[1].id);
    }

    #[test]
    fn test_update_and_remove_keyframes() {
        let state = with_keyframes(&[("a", 0), ("b", 100)]);
        let state = state
            .apply(EditorAction::UpdateKeyframe {
                id: "a".into(),
                patch: KeyframePatch::frame(200),
            })
            .unwrap();
        let ids: Vec<&str> = state.keyframes.iter().map(|k| k.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        let state = state.apply(EditorAction::RemoveKeyframe("b".into())).unwrap();
        assert_eq!(state.keyframes.len(), 1);

        // Removing again is a no-op.
        let again = state.apply(EditorAction::RemoveKeyframe("b".into())).unwrap();
        assert_eq!(again, state);
    }

    #[test]
    fn test_update_missing_keyframe_fails() {
        let state = with_keyframes(&[("a", 0)]);
        let err = state
            .apply(EditorAction::UpdateKeyframe {
                id: "missing".into(),
                patch: KeyframePatch::frame(1),
            })
            .unwrap_err();
        assert!(matches!(err, CoreError::KeyframeNotFound(_)));
    }

    #[test]
    fn test_jump_to_keyframe() {
        let state = with_keyframes(&[("a", 0), ("b", 120)]);
        let state = state.apply(EditorAction::JumpToKeyframe("b".into())).unwrap();
        assert_eq!(state.current_time, 120);
        assert_eq!(state.fly_to_target, Some(CameraPose::looking_at(120.0, 0.0, 10.0)));

        let err = state
            .apply(EditorAction::JumpToKeyframe("nope".into()))
            .unwrap_err();
        assert!(matches!(err, CoreError::KeyframeNotFound(_)));
    }

    #[test]
    fn test_apply_preset_sets_fly_to() {
        let current = CameraPose::new(139.69, 35.68, 9.0, 10.0, 5.0);
        let preset = CameraPreset::find("Top-Down Analysis").unwrap();
        let state = EditorState::new()
            .apply(EditorAction::SetCurrentCamera(current))
            .unwrap()
            .apply(EditorAction::ApplyPreset(preset))
            .unwrap();
        assert_eq!(state.fly_to_target, Some(CameraPose::new(139.69, 35.68, 14.0, 0.0, 0.0)));
        // The live camera only moves once the map view completes the flight.
        assert_eq!(state.current_camera, current);

        let cleared = state.apply(EditorAction::ClearFlyTo).unwrap();
        assert!(cleared.fly_to_target.is_none());
    }

    #[test]
    fn test_project_round_trip() {
        let state = with_keyframes(&[("b", 50), ("a", 10)])
            .apply(EditorAction::SetFps(24))
            .unwrap();
        let project = state.to_project();
        assert_eq!(project.settings.fps, 24);
        assert_eq!(project.keyframes[0].id.as_str(), "a");

        let restored = EditorState::from_project(project).unwrap();
        assert_eq!(restored.keyframes, state.keyframes);
        assert_eq!(restored.settings, state.settings);
    }

    #[test]
    fn test_from_project_sorts_and_validates() {
        let project = Project::new(
            ProjectSettings::default(),
            vec![
                Keyframe::new(90, CameraPose::default()).with_id("late"),
                Keyframe::new(5, CameraPose::default()).with_id("early"),
            ],
        );
        let state = EditorState::from_project(project).unwrap();
        assert_eq!(state.snapshot()[0].id.as_str(), "early");

        let bad = Project::new(
            ProjectSettings {
                fps: 0,
                ..ProjectSettings::default()
            },
            Vec::new(),
        );
        assert!(matches!(
            EditorState::from_project(bad),
            Err(CoreError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Preview".parse::<EditorMode>().unwrap(), EditorMode::Preview);
        assert!("play".parse::<EditorMode>().is_err());
        let state = EditorState::new()
            .apply(EditorAction::SetMode(EditorMode::Preview))
            .unwrap();
        assert_eq!(state.mode.to_string(), "preview");
    }
}
