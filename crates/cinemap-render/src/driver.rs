//! Render driver.
//!
//! Samples the camera track for a project, then walks it frame by frame:
//! - Frames without a camera are presented straight away as placeholders
//! - Other frames wait for the target under a deadline; a target that
//!   misses it is logged and the frame is presented anyway
//! - Frames are presented strictly in timeline order

use std::sync::Arc;
use std::time::{Duration, Instant};

use cinemap_core::{Interpolator, Keyframe, KeyframeSequence};
use cinemap_models::Project;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::hud::FrameOverlay;
use crate::metrics;
use crate::target::{FrameTarget, RenderedFrame};
use crate::trajectory::{sample_trajectory_with_workers, FrameSample};

/// Outcome of a render run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSummary {
    /// Frames presented, placeholders included
    pub frames: usize,
    pub placeholders: usize,
    /// Frames whose readiness wait hit the deadline
    pub ready_timeouts: usize,
}

/// Drives a project's frames into a [`FrameTarget`].
#[derive(Debug, Clone)]
pub struct RenderDriver {
    interpolator: Interpolator,
    subframes: u32,
    ready_timeout: Duration,
    workers: usize,
}

impl Default for RenderDriver {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl RenderDriver {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            interpolator: config.interpolator(),
            subframes: config.subframes.max(1),
            ready_timeout: config.ready_timeout,
            workers: config.workers,
        }
    }

    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    pub fn with_ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }

    pub fn with_subframes(mut self, subframes: u32) -> Self {
        self.subframes = subframes.max(1);
        self
    }

    /// Render every sample of `project` into `target`, then finish it.
    pub async fn run<T>(&self, project: &Project, target: &mut T) -> RenderResult<RenderSummary>
    where
        T: FrameTarget + ?Sized,
    {
        let settings = &project.settings;
        let snapshot = KeyframeSequence::from_keyframes(project.keyframes.clone()).snapshot();

        info!(
            target_name = target.name(),
            keyframes = snapshot.len(),
            duration_in_frames = settings.duration_in_frames,
            fps = settings.fps,
            subframes = self.subframes,
            "Starting render"
        );
        if snapshot.is_empty() {
            warn!("Project has no keyframes; every frame will be a placeholder");
        }

        let started = Instant::now();
        let samples = self.sample(project, snapshot).await?;
        debug!(
            samples = samples.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Sampled camera track"
        );

        let mut summary = RenderSummary::default();
        for sample in samples {
            let rendered = RenderedFrame {
                frame: sample.frame,
                time_seconds: settings.frame_to_seconds(sample.frame),
                pose: sample.pose,
                overlay: FrameOverlay::compute(sample.frame, sample.pose.as_ref(), settings),
            };

            if rendered.is_placeholder() {
                target.present(&rendered).await?;
                summary.placeholders += 1;
                summary.frames += 1;
                metrics::record_placeholder(target.name());
                continue;
            }

            if !self.wait_ready(&*target, sample.frame).await? {
                summary.ready_timeouts += 1;
            }

            target.present(&rendered).await?;
            summary.frames += 1;
            metrics::record_frame_rendered(target.name());
        }

        target.finish().await?;

        info!(
            target_name = target.name(),
            frames = summary.frames,
            placeholders = summary.placeholders,
            ready_timeouts = summary.ready_timeouts,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Render complete"
        );
        Ok(summary)
    }

    async fn sample(
        &self,
        project: &Project,
        snapshot: Arc<[Keyframe]>,
    ) -> RenderResult<Vec<FrameSample>> {
        let settings = project.settings.clone();
        let interpolator = self.interpolator.clone();
        let subframes = self.subframes;
        let workers = self.workers;

        tokio::task::spawn_blocking(move || {
            sample_trajectory_with_workers(&snapshot, &settings, subframes, &interpolator, workers)
        })
        .await?
    }

    /// Returns `false` when the deadline expired.
    async fn wait_ready<T>(&self, target: &T, frame: f64) -> RenderResult<bool>
    where
        T: FrameTarget + ?Sized,
    {
        let started = Instant::now();
        match tokio::time::timeout(self.ready_timeout, target.wait_ready(frame)).await {
            Ok(result) => {
                result?;
                metrics::record_ready_wait(target.name(), started.elapsed().as_secs_f64());
                Ok(true)
            }
            Err(_) => {
                warn!(
                    target_name = target.name(),
                    frame,
                    timeout_secs = self.ready_timeout.as_secs_f64(),
                    "Frame target not ready before deadline, continuing"
                );
                metrics::record_ready_timeout(target.name());
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cinemap_core::CameraPose;
    use cinemap_models::ProjectSettings;

    #[derive(Default)]
    struct CountingTarget {
        presented: usize,
        finished: bool,
    }

    #[async_trait]
    impl FrameTarget for CountingTarget {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn present(&mut self, _frame: &RenderedFrame) -> RenderResult<()> {
            self.presented += 1;
            Ok(())
        }

        async fn finish(&mut self) -> RenderResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    fn project(duration_in_frames: u32, keyframes: Vec<Keyframe>) -> Project {
        Project::new(
            ProjectSettings {
                duration_in_frames,
                ..ProjectSettings::default()
            },
            keyframes,
        )
    }

    #[tokio::test]
    async fn test_run_counts_frames() {
        let project = project(
            20,
            vec![
                Keyframe::new(0, CameraPose::looking_at(0.0, 0.0, 5.0)),
                Keyframe::new(19, CameraPose::looking_at(1.0, 1.0, 6.0)),
            ],
        );
        let mut target = CountingTarget::default();
        let summary = RenderDriver::default().run(&project, &mut target).await.unwrap();
        assert_eq!(summary, RenderSummary { frames: 20, placeholders: 0, ready_timeouts: 0 });
        assert_eq!(target.presented, 20);
        assert!(target.finished);
    }

    #[tokio::test]
    async fn test_empty_project_renders_placeholders() {
        let mut target = CountingTarget::default();
        let summary = RenderDriver::default()
            .with_subframes(2)
            .run(&project(5, Vec::new()), &mut target)
            .await
            .unwrap();
        assert_eq!(summary.frames, 10);
        assert_eq!(summary.placeholders, 10);
        assert_eq!(target.presented, 10);
    }

    #[test]
    fn test_defaults_from_config() {
        let driver = RenderDriver::default();
        assert_eq!(driver.ready_timeout, Duration::from_secs(10));
        assert_eq!(driver.subframes, 1);

        let mut target = CountingTarget::default();
        let summary = tokio_test::block_on(driver.run(&project(1, Vec::new()), &mut target));
        tokio_test::assert_ok!(summary);
    }
}
