#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::float_cmp)]

use glide::{AnimationSlot, Clock, Easing, Tween, ease_in_out_cubic};
use proptest::prelude::*;

// =============================================================================
// Easing curve properties
// =============================================================================

proptest! {
    #[test]
    fn easing_first_half_matches_formula(t in 0.0f64..0.5) {
        let expected = 4.0 * t * t * t;
        prop_assert!((ease_in_out_cubic(t) - expected).abs() < 1e-12);
    }

    #[test]
    fn easing_second_half_matches_formula(t in 0.5f64..=1.0) {
        let expected = 1.0 - (-2.0 * t + 2.0).powi(3) / 2.0;
        prop_assert!((ease_in_out_cubic(t) - expected).abs() < 1e-12);
    }

    #[test]
    fn easing_stays_in_unit_range(t in -10.0f64..10.0) {
        let v = ease_in_out_cubic(t);
        prop_assert!((0.0..=1.0).contains(&v), "t={} gave {}", t, v);
    }

    #[test]
    fn easing_is_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ease_in_out_cubic(lo) <= ease_in_out_cubic(hi) + 1e-15);
    }

    #[test]
    fn easing_is_symmetric(t in 0.0f64..=1.0) {
        let sum = ease_in_out_cubic(t) + ease_in_out_cubic(1.0 - t);
        prop_assert!((sum - 1.0).abs() < 1e-12, "t={} sum={}", t, sum);
    }
}

// =============================================================================
// Tween properties
// =============================================================================

proptest! {
    #[test]
    fn tween_value_between_endpoints(
        from in -5000.0f64..5000.0,
        to in -5000.0f64..5000.0,
        elapsed in 0.0f64..2000.0,
    ) {
        let tween = Tween::new(from, to, 1000.0);
        let v = tween.sample(elapsed).value;
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9, "v={} not in [{}, {}]", v, lo, hi);
    }

    #[test]
    fn tween_done_iff_duration_elapsed(elapsed in 0.0f64..3000.0, duration in 1.0f64..2000.0) {
        let tween = Tween::new(0.0, 1.0, duration);
        prop_assert_eq!(tween.sample(elapsed).done, elapsed >= duration);
    }

    #[test]
    fn tween_ends_exactly_on_target(
        from in -5000.0f64..5000.0,
        to in -5000.0f64..5000.0,
        overshoot in 0.0f64..500.0,
    ) {
        let tween = Tween::new(from, to, 1000.0);
        prop_assert_eq!(tween.sample(1000.0 + overshoot).value, to);
    }

    #[test]
    fn linear_tween_is_proportional(elapsed in 0.0f64..1000.0) {
        let tween = Tween::new(0.0, 1000.0, 1000.0).with_easing(Easing::Linear);
        prop_assert!((tween.sample(elapsed).value - elapsed).abs() < 1e-9);
    }

    #[test]
    fn clock_measures_from_first_frame(start in 0.0f64..1e7, deltas in prop::collection::vec(0.0f64..50.0, 1..60)) {
        let mut clock = Clock::new();
        prop_assert_eq!(clock.elapsed(start), 0.0);
        let mut now = start;
        for d in deltas {
            now += d;
            prop_assert!((clock.elapsed(now) - (now - start)).abs() < 1e-6);
        }
    }
}

// =============================================================================
// Slot properties
// =============================================================================

proptest! {
    #[test]
    fn only_latest_animation_is_current(starts in 1usize..50) {
        let mut slot = AnimationSlot::new();
        let tokens: Vec<_> = (0..starts).map(|_| slot.start()).collect();
        let current = tokens.iter().filter(|t| slot.is_current(**t)).count();
        prop_assert_eq!(current, 1);
        prop_assert!(slot.is_current(*tokens.last().unwrap()));
    }
}
