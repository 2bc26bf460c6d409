//! Parallel trajectory sampling.
//!
//! Resolves the camera for every output sample of a composition in one pass.
//! Samples are independent, so they are spread over the rayon pool; results
//! come back in timeline order.

use cinemap_core::{sorted_view, CameraPose, Interpolator, Keyframe};
use cinemap_models::ProjectSettings;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// Camera resolved for one timeline position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    /// Timeline position in (possibly fractional) frames
    pub frame: f64,
    /// `None` when the project has no keyframes
    pub pose: Option<CameraPose>,
}

/// Sample `0..duration_in_frames` in steps of `1 / subframes` on the
/// current rayon pool.
pub fn sample_trajectory(
    keyframes: &[Keyframe],
    settings: &ProjectSettings,
    subframes: u32,
    interpolator: &Interpolator,
) -> Vec<FrameSample> {
    let sorted = sorted_view(keyframes);
    let sorted: &[Keyframe] = &sorted;
    let subframes = subframes.max(1);
    let total = settings.duration_in_frames as usize * subframes as usize;

    (0..total)
        .into_par_iter()
        .map(|i| {
            let frame = i as f64 / subframes as f64;
            FrameSample {
                frame,
                pose: interpolator.interpolate(frame, sorted),
            }
        })
        .collect()
}

/// Like [`sample_trajectory`], on a dedicated pool of `workers` threads.
///
/// `workers == 0` uses the global pool.
pub fn sample_trajectory_with_workers(
    keyframes: &[Keyframe],
    settings: &ProjectSettings,
    subframes: u32,
    interpolator: &Interpolator,
    workers: usize,
) -> RenderResult<Vec<FrameSample>> {
    if workers == 0 {
        return Ok(sample_trajectory(keyframes, settings, subframes, interpolator));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("cinemap-sample-{}", i))
        .build()
        .map_err(|e| RenderError::config(format!("Failed to build sampling pool: {}", e)))?;

    Ok(pool.install(|| sample_trajectory(keyframes, settings, subframes, interpolator)))
}
