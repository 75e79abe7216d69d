//! Appearance and behavior settings for [`Switch`](crate::Switch).

use flipswitch_core::{Color, Font, Size};
use serde::{Deserialize, Deserializer, Serialize};

/// Spacing between the thumb and the track border.
pub const PADDING: f32 = 2.0;

/// Width of the track border.
pub const BORDER_WIDTH: f32 = 1.5;

/// Default transition length in seconds.
pub const DEFAULT_ANIMATION_DURATION: f64 = 0.5;

/// Value a radius multiple takes when written out of range.
pub const FALLBACK_RADIUS_MULTIPLE: f32 = 0.5;

/// Normalize a corner radius multiple.
///
/// Anything outside `[0.0, 0.5]` (including NaN) becomes `0.5`, not the
/// nearest bound: `-1.0` maps to `0.5`.
#[must_use]
pub fn clamp_radius_multiple(value: f32) -> f32 {
    if (0.0..=FALLBACK_RADIUS_MULTIPLE).contains(&value) {
        value
    } else {
        FALLBACK_RADIUS_MULTIPLE
    }
}

fn deserialize_radius_multiple<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    f32::deserialize(deserializer).map(clamp_radius_multiple)
}

/// Resolved switch configuration.
///
/// Radius multiples are private so every write goes through the clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Track fill when on
    pub on_tint_color: Color,
    /// Track fill when off
    pub off_tint_color: Color,
    /// Thumb fill when on; also the border color
    pub on_thumb_tint_color: Color,
    /// Thumb fill when off
    pub off_thumb_tint_color: Color,
    #[serde(deserialize_with = "deserialize_radius_multiple")]
    corner_radius_multiple: f32,
    #[serde(deserialize_with = "deserialize_radius_multiple")]
    thumb_corner_radius_multiple: f32,
    /// Explicit thumb size; zero means a square derived from the height
    pub thumb_size: Size,
    /// Whether the ON/OFF captions are shown
    pub labels_are_enabled: bool,
    /// Caption font
    pub font: Font,
    /// Caption color
    pub text_color: Color,
    /// Transition length in seconds
    pub animation_duration: f64,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            on_tint_color: Color::CLEAR,
            off_tint_color: Color::CLEAR,
            on_thumb_tint_color: Color::RED,
            off_thumb_tint_color: Color::WHITE,
            corner_radius_multiple: FALLBACK_RADIUS_MULTIPLE,
            thumb_corner_radius_multiple: FALLBACK_RADIUS_MULTIPLE,
            thumb_size: Size::ZERO,
            labels_are_enabled: true,
            font: Font::bold(10.0),
            text_color: Color::WHITE,
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

impl SwitchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the track color for the on state.
    #[must_use]
    pub const fn on_tint_color(mut self, color: Color) -> Self {
        self.on_tint_color = color;
        self
    }

    /// Set the track color for the off state.
    #[must_use]
    pub const fn off_tint_color(mut self, color: Color) -> Self {
        self.off_tint_color = color;
        self
    }

    /// Set the thumb color for the on state.
    #[must_use]
    pub const fn on_thumb_tint_color(mut self, color: Color) -> Self {
        self.on_thumb_tint_color = color;
        self
    }

    /// Set the thumb color for the off state.
    #[must_use]
    pub const fn off_thumb_tint_color(mut self, color: Color) -> Self {
        self.off_thumb_tint_color = color;
        self
    }

    /// Set the track corner radius multiple (clamped).
    #[must_use]
    pub fn corner_radius_multiple(mut self, multiple: f32) -> Self {
        self.set_corner_radius_multiple(multiple);
        self
    }

    /// Set the thumb corner radius multiple (clamped).
    #[must_use]
    pub fn thumb_corner_radius_multiple(mut self, multiple: f32) -> Self {
        self.set_thumb_corner_radius_multiple(multiple);
        self
    }

    /// Set an explicit thumb size.
    #[must_use]
    pub const fn thumb_size(mut self, size: Size) -> Self {
        self.thumb_size = size;
        self
    }

    /// Show or hide the captions.
    #[must_use]
    pub const fn labels_enabled(mut self, enabled: bool) -> Self {
        self.labels_are_enabled = enabled;
        self
    }

    /// Set the caption font.
    #[must_use]
    pub const fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the caption color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the transition length in seconds.
    #[must_use]
    pub const fn animation_duration(mut self, seconds: f64) -> Self {
        self.animation_duration = seconds;
        self
    }

    /// Write the track corner radius multiple.
    pub fn set_corner_radius_multiple(&mut self, multiple: f32) {
        self.corner_radius_multiple = clamp_radius_multiple(multiple);
    }

    /// Write the thumb corner radius multiple.
    pub fn set_thumb_corner_radius_multiple(&mut self, multiple: f32) {
        self.thumb_corner_radius_multiple = clamp_radius_multiple(multiple);
    }

    /// Track corner radius as a fraction of the height.
    #[must_use]
    pub const fn get_corner_radius_multiple(&self) -> f32 {
        self.corner_radius_multiple
    }

    /// Thumb corner radius as a fraction of the thumb height.
    #[must_use]
    pub const fn get_thumb_corner_radius_multiple(&self) -> f32 {
        self.thumb_corner_radius_multiple
    }

    /// Track color for a state.
    #[must_use]
    pub const fn tint_for(&self, on: bool) -> Color {
        if on {
            self.on_tint_color
        } else {
            self.off_tint_color
        }
    }

    /// Thumb color for a state.
    #[must_use]
    pub const fn thumb_tint_for(&self, on: bool) -> Color {
        if on {
            self.on_thumb_tint_color
        } else {
            self.off_thumb_tint_color
        }
    }
}
