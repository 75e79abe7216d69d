//! Input events delivered by the host.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Hosting surface resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

impl Event {
    /// Position of a pointer-down style event, if this is one.
    ///
    /// Only the primary mouse button and touch starts count.
    #[must_use]
    pub const fn press_position(&self) -> Option<Point> {
        match self {
            Self::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchStart { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left (primary) button
    Left,
    /// Right (secondary) button
    Right,
    /// Middle button
    Middle,
}

/// Touch point identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TouchId(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_position_left_click() {
        let e = Event::MouseDown {
            position: Point::new(1.0, 2.0),
            button: MouseButton::Left,
        };
        assert_eq!(e.press_position(), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_press_position_touch() {
        let e = Event::TouchStart {
            id: TouchId(7),
            position: Point::new(3.0, 4.0),
        };
        assert_eq!(e.press_position(), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_press_position_ignores_other_events() {
        let right = Event::MouseDown {
            position: Point::ORIGIN,
            button: MouseButton::Right,
        };
        assert_eq!(right.press_position(), None);
        assert_eq!(
            Event::MouseMove {
                position: Point::ORIGIN
            }
            .press_position(),
            None
        );
        assert_eq!(
            Event::Resize {
                width: 1.0,
                height: 1.0
            }
            .press_position(),
            None
        );
    }

    #[test]
    fn test_event_serde_roundtrip_touch_end() {
        let e = Event::TouchEnd {
            id: TouchId(1),
            position: Point::new(5.0, 5.0),
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
