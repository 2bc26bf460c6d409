//! Easing curves.
//!
//! Pure functions remapping normalized progress `t` (meaningful in `[0, 1]`)
//! to a new progress value. Inputs are not clamped.

use cinemap_models::EasingKind;

#[inline]
pub fn linear(t: f64) -> f64 {
    t
}

/// t²
#[inline]
pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

/// t·(2−t)
#[inline]
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

#[inline]
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// t³
#[inline]
pub fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

/// (t−1)³+1
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = t - 1.0;
    u * u * u + 1.0
}

#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        (t - 1.0) * u * u + 1.0
    }
}

/// A progress remapping curve.
///
/// This is the contract for custom curves plugged into the interpolator;
/// implementations must be pure.
pub trait EasingCurve: Send + Sync {
    fn ease(&self, t: f64) -> f64;
}

impl<F> EasingCurve for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn ease(&self, t: f64) -> f64 {
        self(t)
    }
}

/// Every curve in the library, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EasingFunction {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
}

impl EasingFunction {
    pub const ALL: &'static [EasingFunction] = &[
        EasingFunction::Linear,
        EasingFunction::EaseInQuad,
        EasingFunction::EaseOutQuad,
        EasingFunction::EaseInOutQuad,
        EasingFunction::EaseInCubic,
        EasingFunction::EaseOutCubic,
        EasingFunction::EaseInOutCubic,
    ];

    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            EasingFunction::Linear => linear(t),
            EasingFunction::EaseInQuad => ease_in_quad(t),
            EasingFunction::EaseOutQuad => ease_out_quad(t),
            EasingFunction::EaseInOutQuad => ease_in_out_quad(t),
            EasingFunction::EaseInCubic => ease_in_cubic(t),
            EasingFunction::EaseOutCubic => ease_out_cubic(t),
            EasingFunction::EaseInOutCubic => ease_in_out_cubic(t),
        }
    }
}

impl EasingCurve for EasingFunction {
    fn ease(&self, t: f64) -> f64 {
        self.apply(t)
    }
}

/// Curve selection for keyframe easing kinds.
pub trait EasingKindExt {
    /// The library curve used for a segment leaving a keyframe of this kind.
    fn function(&self) -> EasingFunction;

    #[inline]
    fn apply(&self, t: f64) -> f64 {
        self.function().apply(t)
    }
}

impl EasingKindExt for EasingKind {
    fn function(&self) -> EasingFunction {
        match self {
            EasingKind::Linear => EasingFunction::Linear,
            EasingKind::EaseOut => EasingFunction::EaseOutCubic,
            EasingKind::EaseInOut => EasingFunction::EaseInOutCubic,
            // No distinct curve yet; see Interpolator::with_custom_curve.
            EasingKind::Custom => EasingFunction::EaseInOutCubic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_easing_boundaries() {
        for easing in EasingFunction::ALL {
            assert!(easing.apply(0.0).abs() < EPS, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < EPS, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_symmetric_curves_hit_midpoint() {
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < EPS);
        assert!((linear(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_exact_formulas() {
        assert!((ease_in_quad(0.3) - 0.09).abs() < EPS);
        assert!((ease_out_quad(0.3) - 0.51).abs() < EPS);
        assert!((ease_in_cubic(0.5) - 0.125).abs() < EPS);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < EPS);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < EPS);
        assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < EPS);
        assert!((ease_in_out_quad(0.25) - 0.125).abs() < EPS);
        assert!((ease_in_out_quad(0.75) - 0.875).abs() < EPS);
    }

    #[test]
    fn test_not_clamped_outside_unit_range() {
        assert!((ease_in_quad(2.0) - 4.0).abs() < EPS);
        assert!((linear(-0.5) + 0.5).abs() < EPS);
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(EasingKind::Linear.function(), EasingFunction::Linear);
        assert_eq!(EasingKind::EaseOut.function(), EasingFunction::EaseOutCubic);
        assert_eq!(EasingKind::EaseInOut.function(), EasingFunction::EaseInOutCubic);
        assert_eq!(EasingKind::Custom.function(), EasingFunction::EaseInOutCubic);
        assert!((EasingKind::EaseOut.apply(0.5) - 0.875).abs() < EPS);
    }

    #[test]
    fn test_closure_is_a_curve() {
        let smoothstep = |t: f64| t * t * (3.0 - 2.0 * t);
        assert!((smoothstep.ease(0.5) - 0.5).abs() < EPS);
        assert!((EasingFunction::EaseInQuad.ease(0.5) - 0.25).abs() < EPS);
    }
}
