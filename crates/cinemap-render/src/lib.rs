//! Render pipeline for keyframed map camera tracks.
//!
//! This crate provides:
//! - Environment-driven render configuration and command line arguments
//! - Parallel per-frame trajectory sampling
//! - HUD readouts for each frame
//! - The frame target boundary and a JSON-lines camera track writer
//! - The render driver with its readiness deadline

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod hud;
pub mod metrics;
pub mod target;
pub mod trajectory;

pub use cli::Args;
pub use config::RenderConfig;
pub use driver::{RenderDriver, RenderSummary};
pub use error::{RenderError, RenderResult};
pub use hud::FrameOverlay;
pub use target::{FrameTarget, JsonLinesTarget, RenderedFrame};
pub use trajectory::{sample_trajectory, FrameSample};
