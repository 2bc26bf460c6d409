//! Per-frame camera interpolation.
//!
//! Resolves the camera pose for any (possibly fractional) frame from an
//! unordered keyframe snapshot:
//! - Frames at or outside the keyframe range hold the first/last shot
//! - Inside the range, the bracketing pair is blended using the outgoing
//!   keyframe's easing
//! - Position and pitch are lerped in plain degree space (not geodesic)
//! - Bearing takes the shortest turn across the 0°/360° seam
//! - Zoom dips along a parabola proportional to the distance travelled, so
//!   long moves pull back mid-flight and settle at the target zoom
//!
//! Everything here is pure and allocation-free for sorted input, so a single
//! snapshot can be shared by any number of render workers.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use cinemap_models::{CameraPose, EasingKind, Keyframe};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::easing::{EasingCurve, EasingKindExt};

/// Zoom levels pulled back per degree of planar distance at mid-segment.
pub const DEFAULT_ZOOM_ARC_FACTOR: f64 = 0.15;

/// Tunables for the interpolation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpolationConfig {
    /// Scales planar degree distance into a zoom pull-back amount.
    /// 0 disables the arc.
    pub zoom_arc_factor: f64,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            zoom_arc_factor: DEFAULT_ZOOM_ARC_FACTOR,
        }
    }
}

impl InterpolationConfig {
    pub fn with_zoom_arc_factor(mut self, factor: f64) -> Self {
        self.zoom_arc_factor = factor;
        self
    }
}

/// Camera interpolation engine.
///
/// Holds configuration only; keyframes are supplied per call.
#[derive(Clone, Default)]
pub struct Interpolator {
    config: InterpolationConfig,
    custom_curve: Option<Arc<dyn EasingCurve>>,
}

impl fmt::Debug for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolator")
            .field("config", &self.config)
            .field("custom_curve", &self.custom_curve.is_some())
            .finish()
    }
}

impl Interpolator {
    pub fn new(config: InterpolationConfig) -> Self {
        Self {
            config,
            custom_curve: None,
        }
    }

    /// Install the curve used by `EasingKind::Custom` segments.
    ///
    /// Without one, custom segments ease in and out like `EaseInOut`.
    pub fn with_custom_curve(mut self, curve: impl EasingCurve + 'static) -> Self {
        self.custom_curve = Some(Arc::new(curve));
        self
    }

    pub fn config(&self) -> &InterpolationConfig {
        &self.config
    }

    /// Camera pose at `frame`, or `None` when there are no keyframes.
    pub fn interpolate(&self, frame: f64, keyframes: &[Keyframe]) -> Option<CameraPose> {
        if keyframes.is_empty() {
            return None;
        }

        let sorted = sorted_view(keyframes);
        let sorted: &[Keyframe] = &sorted;
        let first = &sorted[0];
        let last = &sorted[sorted.len() - 1];

        if frame <= first.frame as f64 {
            return Some(first.camera);
        }
        if frame >= last.frame as f64 {
            return Some(last.camera);
        }
        // Only reachable when `frame` compares false against everything (NaN).
        if sorted.len() == 1 {
            return Some(first.camera);
        }

        let (from, to) = bracket(sorted, frame);
        Some(self.blend(from, to, frame))
    }

    /// Blend the segment `from -> to` at `frame`.
    ///
    /// `frame` is expected inside `[from.frame, to.frame)`; values outside
    /// extrapolate. A zero-length segment yields `from.camera`.
    pub fn blend(&self, from: &Keyframe, to: &Keyframe, frame: f64) -> CameraPose {
        if to.frame == from.frame {
            trace!(keyframe_id = %from.id, frame = from.frame, "Zero-length segment");
            return from.camera;
        }

        let span = to.frame as f64 - from.frame as f64;
        let t = (frame - from.frame as f64) / span;
        let eased = self.ease(from.easing, t);

        let a = &from.camera;
        let b = &to.camera;

        let base_zoom = lerp(a.zoom, b.zoom, eased);
        let zoom_offset = planar_distance(a, b) * self.config.zoom_arc_factor;
        // Lower zoom is higher altitude: subtracting pulls the camera back.
        let zoom = base_zoom - arc_height(eased) * zoom_offset;

        CameraPose {
            lng: lerp(a.lng, b.lng, eased),
            lat: lerp(a.lat, b.lat, eased),
            zoom,
            pitch: lerp(a.pitch, b.pitch, eased),
            bearing: lerp_bearing(a.bearing, b.bearing, eased),
        }
    }

    /// Apply the easing for a segment of the given kind.
    pub fn ease(&self, kind: EasingKind, t: f64) -> f64 {
        match (kind, &self.custom_curve) {
            (EasingKind::Custom, Some(curve)) => curve.ease(t),
            _ => kind.apply(t),
        }
    }
}

/// Camera pose at `frame` with the default engine configuration.
pub fn interpolate(frame: f64, keyframes: &[Keyframe]) -> Option<CameraPose> {
    Interpolator::default().interpolate(frame, keyframes)
}

/// The adjacent pair `(A, B)` with `A.frame <= frame < B.frame`.
///
/// `sorted` must be ascending by frame with at least two entries. When frames
/// repeat, this matches a forward linear scan: `A` is the last keyframe at or
/// before `frame`. Frames that compare false against everything (NaN) fall
/// back to the first pair.
pub fn bracket(sorted: &[Keyframe], frame: f64) -> (&Keyframe, &Keyframe) {
    debug_assert!(sorted.len() >= 2);
    let upper = sorted
        .partition_point(|k| k.frame as f64 <= frame)
        .clamp(1, sorted.len() - 1);
    (&sorted[upper - 1], &sorted[upper])
}

/// `a·(1−t) + b·t`; exact at both ends.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Interpolate a heading along the shorter way round.
///
/// The turn is normalized into `[-180, 180)` before scaling, so 350° → 10°
/// goes through 0°, not 180°. The result is not wrapped.
#[inline]
pub fn lerp_bearing(a: f64, b: f64, t: f64) -> f64 {
    let delta = (b - a + 540.0).rem_euclid(360.0) - 180.0;
    a + delta * t
}

/// Euclidean distance in degree space between two camera locations.
#[inline]
pub fn planar_distance(a: &CameraPose, b: &CameraPose) -> f64 {
    let dx = b.lng - a.lng;
    let dy = b.lat - a.lat;
    (dx * dx + dy * dy).sqrt()
}

/// Parabola through 0 at both ends of a segment and 1 at its midpoint.
#[inline]
pub fn arc_height(t: f64) -> f64 {
    4.0 * t * (1.0 - t)
}

/// `keyframes` ascending by frame, borrowed when already in order.
///
/// Ties keep their input order.
pub fn sorted_view(keyframes: &[Keyframe]) -> Cow<'_, [Keyframe]> {
    if keyframes.windows(2).all(|w| w[0].frame <= w[1].frame) {
        Cow::Borrowed(keyframes)
    } else {
        let mut owned = keyframes.to_vec();
        owned.sort_by_key(|k| k.frame);
        Cow::Owned(owned)
    }
}
