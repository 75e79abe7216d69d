//! Easing curves, interpolation, and eased timelines.

use crate::geometry::Point;
use crate::Color;
use serde::{Deserialize, Serialize};

/// Settling target for spring curves: the envelope decays to 1e-3 at `t = 1`.
const SPRING_SETTLE: f64 = 6.907_755_278_982_137; // ln(1000)

/// Lowest damping ratio a spring curve is evaluated with.
const MIN_DAMPING: f64 = 0.05;

// =============================================================================
// Easing
// =============================================================================

/// Easing functions over normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease out (slow end)
    EaseOut,
    /// Damped spring that settles at the end of the duration.
    ///
    /// `damping` is the damping ratio (below 1.0 overshoots),
    /// `initial_velocity` is in units of the full distance per duration.
    Spring {
        /// Damping ratio
        damping: f64,
        /// Initial velocity, normalized
        initial_velocity: f64,
    },
}

impl Easing {
    /// Spring curve used by the switch transition.
    pub const SWITCH: Self = Self::Spring {
        damping: 0.7,
        initial_velocity: 0.5,
    };

    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    ///
    /// The endpoints map exactly: `apply(0.0) == 0.0`, `apply(1.0) == 1.0`.
    /// Spring curves may leave [0, 1] in between.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Self::Linear => t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::Spring {
                damping,
                initial_velocity,
            } => Self::spring(t, damping, initial_velocity),
        }
    }

    fn spring(t: f64, damping: f64, v0: f64) -> f64 {
        let zeta = damping.max(MIN_DAMPING);
        if zeta < 1.0 {
            let omega = SPRING_SETTLE / zeta;
            let decay = zeta * omega;
            let omega_d = omega * zeta.mul_add(-zeta, 1.0).sqrt();
            let b = (decay - v0) / omega_d;
            let envelope = (-decay * t).exp();
            1.0 - envelope * b.mul_add((omega_d * t).sin(), (omega_d * t).cos())
        } else {
            // Critically damped or heavier: no oscillation.
            let omega = SPRING_SETTLE;
            1.0 - (-omega * t).exp() * (omega - v0).mul_add(t, 1.0)
        }
    }
}

// =============================================================================
// Interpolate
// =============================================================================

/// Trait for types that can be interpolated.
pub trait Interpolate {
    /// Interpolate between two values; `t` may leave [0, 1] for springs.
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (to - from).mul_add(t, *from)
    }
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (*to - *from).mul_add(t as Self, *from)
    }
}

impl Interpolate for Point {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

impl Interpolate for Color {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

// =============================================================================
// Timeline
// =============================================================================

/// Elapsed time over a fixed duration, read through an easing curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time in seconds
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl Timeline {
    /// Create a timeline at its start.
    ///
    /// A duration that is not a positive finite number runs as zero, so the
    /// timeline completes on its first advance.
    #[must_use]
    pub fn new(duration: f64, easing: Easing) -> Self {
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        Self {
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Linear progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Eased progress.
    #[must_use]
    pub fn eased(&self) -> f64 {
        self.easing.apply(self.progress())
    }

    /// Whether the timeline has run its full duration.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds; negative steps are ignored.
    pub fn advance(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Easing Tests
    // =========================================================================

    #[test]
    fn test_easing_linear() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Easing::EaseOut.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseOut.apply(3.0), 1.0);
    }

    #[test]
    fn test_easing_ease_out_is_ahead_of_linear() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    }

    #[test]
    fn test_switch_spring_endpoints_exact() {
        assert_eq!(Easing::SWITCH.apply(0.0), 0.0);
        assert_eq!(Easing::SWITCH.apply(1.0), 1.0);
    }

    #[test]
    fn test_switch_spring_settles_near_target() {
        let late = Easing::SWITCH.apply(0.95);
        assert!((late - 1.0).abs() < 0.01, "late value {late}");
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let wobbly = Easing::Spring {
            damping: 0.3,
            initial_velocity: 0.0,
        };
        let peak = (1..100)
            .map(|i| wobbly.apply(f64::from(i) / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "peak {peak}");
    }

    #[test]
    fn test_overdamped_spring_is_monotonic() {
        let stiff = Easing::Spring {
            damping: 1.5,
            initial_velocity: 0.0,
        };
        let samples: Vec<f64> = (0..=20).map(|i| stiff.apply(f64::from(i) / 20.0)).collect();
        assert!(samples.windows(2).all(|w| w[1] >= w[0]));
    }

    // =========================================================================
    // Interpolate Tests
    // =========================================================================

    #[test]
    fn test_interpolate_point() {
        let p = Point::interpolate(&Point::new(3.5, 3.5), &Point::new(33.5, 3.5), 0.5);
        assert_eq!(p, Point::new(18.5, 3.5));
    }

    #[test]
    fn test_interpolate_color() {
        let c = Color::interpolate(&Color::BLACK, &Color::WHITE, 1.0);
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn test_interpolate_f32_overshoot() {
        assert!((f32::interpolate(&0.0, &10.0, 1.1) - 11.0).abs() < 1e-5);
    }

    // =========================================================================
    // Timeline Tests
    // =========================================================================

    #[test]
    fn test_timeline_progress() {
        let mut tl = Timeline::new(0.5, Easing::Linear);
        assert_eq!(tl.progress(), 0.0);
        tl.advance(0.25);
        assert_eq!(tl.progress(), 0.5);
        assert!(!tl.is_complete());
        tl.advance(1.0);
        assert_eq!(tl.progress(), 1.0);
        assert!(tl.is_complete());
    }

    #[test]
    fn test_timeline_zero_duration_is_complete() {
        let tl = Timeline::new(0.0, Easing::SWITCH);
        assert!(tl.is_complete());
        assert_eq!(tl.eased(), 1.0);
    }

    #[test]
    fn test_timeline_non_finite_duration_runs_as_zero() {
        for duration in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            let mut tl = Timeline::new(duration, Easing::SWITCH);
            assert_eq!(tl.duration, 0.0);
            tl.advance(1.0 / 60.0);
            assert!(tl.is_complete(), "duration {duration}");
            assert_eq!(tl.eased(), 1.0);
        }
    }

    #[test]
    fn test_timeline_ignores_negative_dt() {
        let mut tl = Timeline::new(1.0, Easing::Linear);
        tl.advance(-5.0);
        assert_eq!(tl.elapsed, 0.0);
    }

    proptest! {
        #[test]
        fn prop_easing_endpoints(damping in 0.0f64..3.0, v0 in -2.0f64..2.0) {
            let e = Easing::Spring { damping, initial_velocity: v0 };
            prop_assert_eq!(e.apply(0.0), 0.0);
            prop_assert_eq!(e.apply(1.0), 1.0);
        }

        #[test]
        fn prop_spring_is_finite(t in 0.0f64..1.0, damping in 0.0f64..3.0) {
            let e = Easing::Spring { damping, initial_velocity: 0.5 };
            prop_assert!(e.apply(t).is_finite());
        }
    }
}
