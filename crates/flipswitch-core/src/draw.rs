//! Draw commands produced by painting.
//!
//! All rendering reduces to these primitives.

use crate::widget::TextStyle;
use crate::{Color, CornerRadius, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in points
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Box style for rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// A single recorded draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw text inside a frame
    Text {
        /// Text content
        content: String,
        /// Layout frame
        frame: Rect,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a rounded rectangle.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: CornerRadius, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a stroked rounded rectangle.
    #[must_use]
    pub const fn stroked_rect(bounds: Rect, radius: CornerRadius, stroke: StrokeStyle) -> Self {
        Self::Rect {
            bounds,
            radius,
            style: BoxStyle::stroke(stroke),
        }
    }

    /// Bounds covered by this command.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        match self {
            Self::Rect { bounds, .. } => *bounds,
            Self::Text { frame, .. } => *frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_rect_fills_without_stroke() {
        let cmd =
            DrawCommand::rounded_rect(Rect::new(0.0, 0.0, 4.0, 4.0), CornerRadius::ZERO, Color::RED);
        match cmd {
            DrawCommand::Rect { radius, style, .. } => {
                assert!(radius.is_zero());
                assert_eq!(style.fill, Some(Color::RED));
                assert_eq!(style.stroke, None);
            }
            DrawCommand::Text { .. } => panic!("Expected Rect"),
        }
    }

    #[test]
    fn test_stroked_rect_has_no_fill() {
        let stroke = StrokeStyle {
            color: Color::BLUE,
            width: 1.5,
        };
        let cmd = DrawCommand::stroked_rect(Rect::default(), CornerRadius::uniform(3.0), stroke);
        match cmd {
            DrawCommand::Rect { style, radius, .. } => {
                assert_eq!(style.fill, None);
                assert_eq!(style.stroke, Some(stroke));
                assert_eq!(radius, CornerRadius::uniform(3.0));
            }
            DrawCommand::Text { .. } => panic!("Expected Rect"),
        }
    }

    #[test]
    fn test_bounds_of_text() {
        let frame = Rect::new(1.0, 2.0, 3.0, 4.0);
        let cmd = DrawCommand::Text {
            content: "ON".to_string(),
            frame,
            style: TextStyle::default(),
        };
        assert_eq!(cmd.bounds(), frame);
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::rounded_rect(
            Rect::new(0.0, 0.0, 60.0, 30.0),
            CornerRadius::uniform(15.0),
            Color::GREEN,
        );
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"Rect\""));
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
