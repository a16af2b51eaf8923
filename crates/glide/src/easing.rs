//! Easing curves.
//!
//! An easing curve maps normalized progress `t ∈ [0, 1]` to an eased value in
//! the same range. Both curves here satisfy `f(0) = 0` and `f(1) = 1`.

/// Cubic ease-in-out.
///
/// Accelerates over the first half and decelerates over the second:
///
/// - `4t³` for `t < 0.5`
/// - `1 − (−2t + 2)³ / 2` otherwise
///
/// Input outside `[0, 1]` is clamped; NaN is treated as `0`.
///
/// # Example
///
/// ```rust
/// use glide::ease_in_out_cubic;
///
/// assert_eq!(ease_in_out_cubic(0.0), 0.0);
/// assert_eq!(ease_in_out_cubic(0.5), 0.5);
/// assert_eq!(ease_in_out_cubic(1.0), 1.0);
/// ```
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = clamp_unit(t);
    if t < 0.5 {
        4.0 * cube(t)
    } else {
        1.0 - cube(-2.0 * t + 2.0) / 2.0
    }
}

/// Selectable easing curve for a [`Tween`](crate::Tween).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// No easing: output equals clamped input.
    Linear,
    /// See [`ease_in_out_cubic`].
    #[default]
    InOutCubic,
}

impl Easing {
    /// Applies the curve to normalized progress `t`.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => clamp_unit(t),
            Self::InOutCubic => ease_in_out_cubic(t),
        }
    }
}

#[inline]
fn cube(x: f64) -> f64 {
    x * x * x
}

#[inline]
fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_boundaries() {
        assert!(approx_eq(ease_in_out_cubic(0.0), 0.0));
        assert!(approx_eq(ease_in_out_cubic(1.0), 1.0));
        assert!(approx_eq(ease_in_out_cubic(0.5), 0.5));
    }

    #[test]
    fn test_first_half_is_four_t_cubed() {
        for t in [0.1, 0.25, 0.3, 0.49] {
            assert!(approx_eq(ease_in_out_cubic(t), 4.0 * t * t * t), "t={t}");
        }
    }

    #[test]
    fn test_second_half_formula() {
        for t in [0.5, 0.6, 0.75, 0.9, 1.0] {
            let expected = 1.0 - (-2.0 * t + 2.0_f64).powi(3) / 2.0;
            assert!(approx_eq(ease_in_out_cubic(t), expected), "t={t}");
        }
    }

    #[test]
    fn test_continuous_at_midpoint() {
        let below = ease_in_out_cubic(0.5 - 1e-9);
        let at = ease_in_out_cubic(0.5);
        assert!((below - at).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert!(approx_eq(ease_in_out_cubic(-3.0), 0.0));
        assert!(approx_eq(ease_in_out_cubic(7.0), 1.0));
        assert!(approx_eq(ease_in_out_cubic(f64::NAN), 0.0));
    }

    #[test]
    fn test_linear() {
        assert!(approx_eq(Easing::Linear.apply(0.3), 0.3));
        assert!(approx_eq(Easing::Linear.apply(1.5), 1.0));
    }

    #[test]
    fn test_default_is_cubic() {
        assert_eq!(Easing::default(), Easing::InOutCubic);
        assert!(approx_eq(Easing::default().apply(0.25), 0.0625));
    }
}
