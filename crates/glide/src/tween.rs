//! Duration-bounded tweens driven by frame timestamps.

use crate::easing::Easing;

/// A single sampled frame of a [`Tween`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Interpolated value for this frame.
    pub value: f64,
    /// True once the tween's duration has fully elapsed.
    pub done: bool,
}

/// Interpolates from one value to another over a fixed duration.
///
/// The tween itself is stateless: callers feed it elapsed milliseconds, which
/// makes it safe to share between frame callbacks and trivial to test.
///
/// # Example
///
/// ```rust
/// use glide::Tween;
///
/// // Scroll back to the top from 900px
/// let tween = Tween::new(900.0, 0.0, 1000.0);
///
/// assert_eq!(tween.sample(0.0).value, 900.0);
/// assert_eq!(tween.sample(500.0).value, 450.0);
/// assert!(tween.sample(1000.0).done);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    /// Creates a tween using the default cubic ease-in-out curve.
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing: Easing::default(),
        }
    }

    /// Replaces the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start value.
    pub fn origin(&self) -> f64 {
        self.from
    }

    /// End value.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Total duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Normalized progress `min(elapsed / duration, 1)`.
    ///
    /// A non-positive duration counts as already complete; negative elapsed
    /// time counts as zero.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = if elapsed_ms.is_nan() { 0.0 } else { elapsed_ms.max(0.0) };
        (elapsed / self.duration_ms).min(1.0)
    }

    /// Samples the tween at `elapsed_ms` since its first frame.
    pub fn sample(&self, elapsed_ms: f64) -> Sample {
        let done = self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms;
        let value = if done {
            self.to
        } else {
            self.from + (self.to - self.from) * self.easing.apply(self.progress(elapsed_ms))
        };
        Sample { value, done }
    }
}

/// Converts frame timestamps into elapsed time since the first frame.
///
/// The first timestamp seen becomes the origin, mirroring how
/// `requestAnimationFrame` animations anchor on their first callback.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Clock {
    origin: Option<f64>,
}

impl Clock {
    /// Creates a clock with no origin yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns milliseconds elapsed since the first call.
    pub fn elapsed(&mut self, timestamp_ms: f64) -> f64 {
        let origin = *self.origin.get_or_insert(timestamp_ms);
        timestamp_ms - origin
    }

    /// True once a frame has been observed.
    pub fn started(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_progress_clamps() {
        let tween = Tween::new(0.0, 100.0, 1000.0);
        assert!(approx_eq(tween.progress(-50.0), 0.0));
        assert!(approx_eq(tween.progress(250.0), 0.25));
        assert!(approx_eq(tween.progress(5000.0), 1.0));
    }

    #[test]
    fn test_sample_eases() {
        let tween = Tween::new(0.0, 1000.0, 1000.0);
        // 4 * 0.25^3 = 0.0625
        assert!(approx_eq(tween.sample(250.0).value, 62.5));
        assert!(approx_eq(tween.sample(500.0).value, 500.0));
        assert!(!tween.sample(999.0).done);
    }

    #[test]
    fn test_final_frame_lands_on_target() {
        let tween = Tween::new(37.0, 4211.5, 1000.0);
        let last = tween.sample(1016.7);
        assert!(last.done);
        assert_eq!(last.value, 4211.5);
    }

    #[test]
    fn test_backwards_tween() {
        let tween = Tween::new(800.0, 0.0, 1000.0);
        assert!(approx_eq(tween.sample(500.0).value, 400.0));
        assert_eq!(tween.sample(1000.0).value, 0.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let tween = Tween::new(10.0, 20.0, 0.0);
        let sample = tween.sample(0.0);
        assert!(sample.done);
        assert_eq!(sample.value, 20.0);
    }

    #[test]
    fn test_linear_easing() {
        let tween = Tween::new(0.0, 10.0, 100.0).with_easing(Easing::Linear);
        assert!(approx_eq(tween.sample(30.0).value, 3.0));
    }

    #[test]
    fn test_clock_anchors_on_first_frame() {
        let mut clock = Clock::new();
        assert!(!clock.started());
        assert!(approx_eq(clock.elapsed(1234.5), 0.0));
        assert!(clock.started());
        assert!(approx_eq(clock.elapsed(1250.5), 16.0));
        assert!(approx_eq(clock.elapsed(2234.5), 1000.0));
    }
}
