//! Render metrics.
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! embedding application installs a recorder.

use metrics::{counter, histogram};

/// Metric names as constants for consistency.
pub mod names {
    pub const FRAMES_RENDERED_TOTAL: &str = "cinemap_frames_rendered_total";
    pub const FRAMES_PLACEHOLDER_TOTAL: &str = "cinemap_frames_placeholder_total";
    pub const FRAME_READY_TIMEOUTS_TOTAL: &str = "cinemap_frame_ready_timeouts_total";
    pub const FRAME_READY_WAIT_SECONDS: &str = "cinemap_frame_ready_wait_seconds";
}

/// Record a frame handed to a target.
pub fn record_frame_rendered(target: &'static str) {
    counter!(names::FRAMES_RENDERED_TOTAL, "target" => target).increment(1);
}

/// Record a frame presented without a camera.
pub fn record_placeholder(target: &'static str) {
    counter!(names::FRAMES_PLACEHOLDER_TOTAL, "target" => target).increment(1);
}

/// Record a readiness wait that hit the deadline.
pub fn record_ready_timeout(target: &'static str) {
    counter!(names::FRAME_READY_TIMEOUTS_TOTAL, "target" => target).increment(1);
}

/// Record how long a target took to report readiness.
pub fn record_ready_wait(target: &'static str, duration_secs: f64) {
    histogram!(names::FRAME_READY_WAIT_SECONDS, "target" => target).record(duration_secs);
}
