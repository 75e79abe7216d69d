//! Child visual elements owned by a switch.

use flipswitch_core::{Color, Font, Rect, TextAlign, TextStyle};
use serde::{Deserialize, Serialize};

/// Caption text shown on the on side.
pub const ON_TEXT: &str = "ON";

/// Caption text shown on the off side.
pub const OFF_TEXT: &str = "OFF";

/// The movable thumb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumb {
    /// Frame relative to the switch origin
    pub frame: Rect,
    /// Fill color
    pub color: Color,
    /// Corner radius
    pub corner_radius: f32,
    /// Whether the thumb itself receives input (never, the track does)
    pub interactive: bool,
}

impl Default for Thumb {
    fn default() -> Self {
        Self {
            frame: Rect::default(),
            color: Color::CLEAR,
            corner_radius: 0.0,
            interactive: false,
        }
    }
}

/// An ON/OFF caption.
///
/// Exposed to hosts for styling beyond font and color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Caption text
    pub text: String,
    /// Frame relative to the switch origin
    pub frame: Rect,
    /// Opacity in [0, 1]
    pub opacity: f32,
    /// Font
    pub font: Font,
    /// Text color
    pub text_color: Color,
    /// Horizontal alignment
    pub align: TextAlign,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: String::new(),
            frame: Rect::default(),
            opacity: 1.0,
            font: Font::default(),
            text_color: Color::BLACK,
            align: TextAlign::Left,
        }
    }
}

impl Label {
    /// Whether any part of the caption would be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && !self.text.is_empty()
    }

    /// Text style with opacity folded into the color alpha.
    #[must_use]
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            size: self.font.size,
            color: self
                .text_color
                .with_alpha(self.text_color.a * self.opacity.clamp(0.0, 1.0)),
            weight: self.font.weight,
            style: self.font.style,
            align: self.align,
        }
    }
}

/// Paint-order entry in a switch's child list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subview {
    /// The thumb
    Thumb,
    /// The ON caption
    LabelOn,
    /// The OFF caption
    LabelOff,
}
