//! State machine and animated transition for the switch.

use flipswitch_core::{AnimationId, Color, Interpolate};

/// Coarse widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchPhase {
    /// Geometry may be recomputed
    Idle {
        /// Logical value
        on: bool,
    },
    /// A transition owns the visuals; layout is suppressed
    Animating {
        /// Value the transition started from
        from: bool,
        /// Value the transition is heading to (already the logical value)
        to: bool,
    },
}

impl SwitchPhase {
    /// Whether a transition is in flight.
    #[must_use]
    pub const fn is_animating(self) -> bool {
        matches!(self, Self::Animating { .. })
    }
}

/// Message emitted when a user-driven transition completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The new switch state
    pub on: bool,
}

/// The properties a transition animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Thumb x origin
    pub thumb_x: f32,
    /// Thumb fill
    pub thumb_color: Color,
    /// Track fill
    pub background: Color,
    /// ON caption opacity
    pub label_on_opacity: f32,
    /// OFF caption opacity
    pub label_off_opacity: f32,
}

impl Interpolate for VisualState {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            thumb_x: f32::interpolate(&from.thumb_x, &to.thumb_x, t),
            thumb_color: Color::interpolate(&from.thumb_color, &to.thumb_color, t),
            background: Color::interpolate(&from.background, &to.background, t),
            // Opacity may not overshoot with the spring.
            label_on_opacity: f32::interpolate(&from.label_on_opacity, &to.label_on_opacity, t)
                .clamp(0.0, 1.0),
            label_off_opacity: f32::interpolate(
                &from.label_off_opacity,
                &to.label_off_opacity,
                t,
            )
            .clamp(0.0, 1.0),
        }
    }
}

/// An in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Transition {
    pub(crate) id: AnimationId,
    pub(crate) from_on: bool,
    pub(crate) from: VisualState,
    pub(crate) to: VisualState,
}

impl Transition {
    /// Visuals at eased progress `t`; exactly `to` at `t == 1.0`.
    pub(crate) fn sample(&self, t: f64) -> VisualState {
        if t >= 1.0 {
            self.to
        } else {
            VisualState::interpolate(&self.from, &self.to, t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_state() -> VisualState {
        VisualState {
            thumb_x: 33.5,
            thumb_color: Color::RED,
            background: Color::GREEN,
            label_on_opacity: 1.0,
            label_off_opacity: 0.0,
        }
    }

    fn off_state() -> VisualState {
        VisualState {
            thumb_x: 3.5,
            thumb_color: Color::WHITE,
            background: Color::BLACK,
            label_on_opacity: 0.0,
            label_off_opacity: 1.0,
        }
    }

    #[test]
    fn test_phase_is_animating() {
        assert!(!SwitchPhase::Idle { on: true }.is_animating());
        assert!(SwitchPhase::Animating {
            from: true,
            to: false
        }
        .is_animating());
    }

    #[test]
    fn test_sample_endpoints() {
        let t = Transition {
            id: 0,
            from_on: true,
            from: on_state(),
            to: off_state(),
        };
        assert_eq!(t.sample(0.0), on_state());
        assert_eq!(t.sample(1.0), off_state());
    }

    #[test]
    fn test_sample_midpoint_blends_labels() {
        let t = Transition {
            id: 0,
            from_on: true,
            from: on_state(),
            to: off_state(),
        };
        let mid = t.sample(0.5);
        assert_eq!(mid.thumb_x, 18.5);
        assert_eq!(mid.label_on_opacity, 0.5);
        assert_eq!(mid.label_off_opacity, 0.5);
    }

    #[test]
    fn test_overshoot_clamps_opacity_only() {
        let t = Transition {
            id: 0,
            from_on: true,
            from: on_state(),
            to: off_state(),
        };
        let over = t.sample(1.0 - f64::EPSILON).thumb_x;
        assert!((over - 3.5).abs() < 1e-4);

        let beyond = VisualState::interpolate(&on_state(), &off_state(), 1.2);
        assert!(beyond.thumb_x < 3.5);
        assert_eq!(beyond.label_on_opacity, 0.0);
        assert_eq!(beyond.label_off_opacity, 1.0);
    }
}
