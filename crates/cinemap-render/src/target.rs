//! Frame targets: where resolved frames go.
//!
//! A target may need time before it can take a frame (a map view streaming
//! tiles, an encoder draining). The driver awaits [`FrameTarget::wait_ready`]
//! under a deadline before each [`FrameTarget::present`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cinemap_core::CameraPose;
use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use crate::error::RenderResult;
use crate::hud::FrameOverlay;

/// One resolved output sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedFrame {
    pub frame: f64,
    pub time_seconds: f64,
    /// `None` renders a "no camera" placeholder
    pub pose: Option<CameraPose>,
    pub overlay: FrameOverlay,
}

impl RenderedFrame {
    pub fn is_placeholder(&self) -> bool {
        self.pose.is_none()
    }
}

/// Sink for rendered frames.
#[async_trait]
pub trait FrameTarget: Send + Sync {
    /// Name for logging and metrics.
    fn name(&self) -> &'static str;

    /// Resolve once the target can take `frame`.
    ///
    /// The driver bounds this with its ready timeout.
    async fn wait_ready(&self, _frame: f64) -> RenderResult<()> {
        Ok(())
    }

    async fn present(&mut self, frame: &RenderedFrame) -> RenderResult<()>;

    /// Called once after the last frame.
    async fn finish(&mut self) -> RenderResult<()> {
        Ok(())
    }
}

/// Writes one JSON object per frame, one per line.
///
/// The resulting camera track can be replayed by an external renderer.
pub struct JsonLinesTarget {
    path: PathBuf,
    writer: BufWriter<File>,
    lines: u64,
}

impl JsonLinesTarget {
    /// Create (or truncate) the track file, creating parent directories.
    pub async fn create(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let file = File::create(&path).await?;
        debug!(path = %path.display(), "Opened camera track");
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            lines: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Frames written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }
}

#[async_trait]
impl FrameTarget for JsonLinesTarget {
    fn name(&self) -> &'static str {
        "json_lines"
    }

    async fn present(&mut self, frame: &RenderedFrame) -> RenderResult<()> {
        let mut line = serde_json::to_vec(frame)?;
        line.push(b'\n');
        self.writer.write_all(&line).await?;
        self.lines += 1;
        Ok(())
    }

    async fn finish(&mut self) -> RenderResult<()> {
        self.writer.flush().await?;
        debug!(path = %self.path.display(), lines = self.lines, "Flushed camera track");
        Ok(())
    }
}
