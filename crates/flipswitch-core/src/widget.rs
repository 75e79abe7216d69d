//! Widget trait and related types.
//!
//! A widget is a capability, not a base class: the host owns the UI tree and
//! talks to each widget through [`Widget`], calling
//!
//! 1. **Measure**: compute intrinsic size given constraints
//! 2. **Layout**: deliver the widget's bounds (the bounds-changed callback)
//! 3. **Paint**: generate draw commands for rendering
//! 4. **Event**: route input, e.g. the interaction-begin press
//!
//! # Examples
//!
//! ```
//! use flipswitch_core::{TextStyle, FontWeight, TypeId};
//!
//! let style = TextStyle::default();
//! assert_eq!(style.size, 10.0);
//! assert_eq!(style.weight, FontWeight::Bold);
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{CornerRadius, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types (used for diffing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait implemented by UI controls.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Receive new bounds from the host.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events, optionally returning a message for the host.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Check if this widget is interactive (can receive focus/events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color);

    /// Stroke the outline of a rounded rectangle.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color, width: f32);

    /// Draw text aligned inside a frame.
    fn draw_text(&mut self, text: &str, frame: Rect, style: &TextStyle);

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the clip region.
    fn pop_clip(&mut self);
}

/// Text style for rendering.
///
/// Defaults to the switch caption style: bold 10pt white, centered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
    /// Font style
    pub style: FontStyle,
    /// Horizontal alignment inside the text frame
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 10.0,
            color: Color::WHITE,
            weight: FontWeight::Bold,
            style: FontStyle::Normal,
            align: TextAlign::Center,
        }
    }
}

/// Font description used by captions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Point size
    pub size: f32,
    /// Weight
    #[serde(default = "Font::default_weight")]
    pub weight: FontWeight,
    /// Upright or italic
    #[serde(default = "Font::default_style")]
    pub style: FontStyle,
}

impl Font {
    /// Bold system font at the given size.
    #[must_use]
    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
            style: FontStyle::Normal,
        }
    }

    /// Regular-weight font at the given size.
    #[must_use]
    pub const fn regular(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }

    const fn default_weight() -> FontWeight {
        FontWeight::Normal
    }

    const fn default_style() -> FontStyle {
        FontStyle::Normal
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::bold(10.0)
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Light (300)
    Light,
    /// Normal (400)
    Normal,
    /// Medium (500)
    Medium,
    /// Semibold (600)
    Semibold,
    /// Bold (700)
    Bold,
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Normal style
    Normal,
    /// Italic style
    Italic,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Left-aligned
    Left,
    /// Centered
    #[default]
    Center,
    /// Right-aligned
    Right,
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Push button
    Button,
    /// Checkbox
    Checkbox,
    /// On/off switch
    Switch,
    /// Static text
    Label,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id_distinguishes_types() {
        assert_eq!(TypeId::of::<u8>(), TypeId::of::<u8>());
        assert_ne!(TypeId::of::<u8>(), TypeId::of::<u16>());
    }

    #[test]
    fn test_font_default_is_bold_ten() {
        let f = Font::default();
        assert_eq!(f.size, 10.0);
        assert_eq!(f.weight, FontWeight::Bold);
        assert_eq!(f.style, FontStyle::Normal);
    }

    #[test]
    fn test_font_deserialize_defaults_weight() {
        let f: Font = serde_json::from_str(r#"{"size": 12.0}"#).unwrap();
        assert_eq!(f, Font::regular(12.0));
    }

    #[test]
    fn test_text_style_default() {
        let s = TextStyle::default();
        assert_eq!(s.color, Color::WHITE);
        assert_eq!(s.align, TextAlign::Center);
    }

    #[test]
    fn test_accessible_role_default() {
        assert_eq!(AccessibleRole::default(), AccessibleRole::Generic);
    }
}
