//! Render configuration.

use std::path::PathBuf;
use std::time::Duration;

use cinemap_core::{InterpolationConfig, Interpolator, DEFAULT_ZOOM_ARC_FACTOR};

/// Default camera track output path.
pub const DEFAULT_OUTPUT_PATH: &str = "camera_track.jsonl";

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Project document to render
    pub project_path: Option<PathBuf>,
    /// Camera track output (JSON lines)
    pub output_path: PathBuf,
    /// Camera samples per output frame, at least 1
    pub subframes: u32,
    /// How long to wait for a frame target to become ready
    pub ready_timeout: Duration,
    /// Zoom pull-back per degree travelled at mid-segment
    pub zoom_arc_factor: f64,
    /// Sampling threads (0 = one per core)
    pub workers: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            project_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            subframes: 1,
            ready_timeout: Duration::from_secs(10),
            zoom_arc_factor: DEFAULT_ZOOM_ARC_FACTOR,
            workers: 0,
        }
    }
}

impl RenderConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            project_path: std::env::var("CINEMAP_PROJECT").ok().map(PathBuf::from),
            output_path: std::env::var("CINEMAP_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            subframes: std::env::var("CINEMAP_SUBFRAMES")
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .unwrap_or(1)
                .max(1),
            ready_timeout: Duration::from_secs(
                std::env::var("CINEMAP_READY_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            zoom_arc_factor: std::env::var("CINEMAP_ZOOM_ARC_FACTOR")
                .ok()
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|f| f.is_finite())
                .unwrap_or(DEFAULT_ZOOM_ARC_FACTOR),
            workers: std::env::var("CINEMAP_WORKERS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Interpolation engine configured for this render.
    pub fn interpolator(&self) -> Interpolator {
        Interpolator::new(InterpolationConfig::default().with_zoom_arc_factor(self.zoom_arc_factor))
    }
}
