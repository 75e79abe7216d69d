//! Switch geometry as a pure function of bounds, configuration and state.
//!
//! All positions are relative to the switch's own origin.

use crate::config::{SwitchConfig, BORDER_WIDTH, PADDING};
use flipswitch_core::{Color, Point, Rect, Size};

/// Geometry produced by one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchLayout {
    /// Track corner radius
    pub corner_radius: f32,
    /// Track fill for the current state
    pub background: Color,
    /// Side of the derived square thumb; also drives the thumb travel
    pub thumb_height: f32,
    /// Thumb origin when on
    pub on_point: Point,
    /// Thumb origin when off
    pub off_point: Point,
    /// Thumb frame for the current state
    pub thumb_frame: Rect,
    /// Thumb corner radius
    pub thumb_corner_radius: f32,
    /// Caption frames `(on, off)`, present only when labels are enabled
    pub label_frames: Option<(Rect, Rect)>,
}

/// Compute the switch geometry for a bounds size.
///
/// Degenerate sizes never panic; extents that would go negative are zero.
#[must_use]
pub fn compute(size: Size, config: &SwitchConfig, is_on: bool) -> SwitchLayout {
    let (width, height) = (size.width, size.height);

    let thumb_height = 2.0f32
        .mul_add(-BORDER_WIDTH, 2.0f32.mul_add(-PADDING, height))
        .max(0.0);
    let thumb_size = if config.thumb_size.is_zero() {
        Size::square(thumb_height)
    } else {
        config.thumb_size.non_negative()
    };

    let y = (height - thumb_height) / 2.0;
    let on_point = Point::new(width - thumb_height - PADDING - BORDER_WIDTH, y);
    let off_point = Point::new(PADDING + BORDER_WIDTH, y);

    SwitchLayout {
        corner_radius: height * config.get_corner_radius_multiple(),
        background: config.tint_for(is_on),
        thumb_height,
        on_point,
        off_point,
        thumb_frame: Rect::from_origin_size(
            if is_on { on_point } else { off_point },
            thumb_size,
        ),
        thumb_corner_radius: thumb_height * config.get_thumb_corner_radius_multiple(),
        label_frames: config
            .labels_are_enabled
            .then(|| label_frames(width, height)),
    }
}

/// Caption frames: ON on the left half, OFF on the right half.
#[must_use]
pub fn label_frames(width: f32, height: f32) -> (Rect, Rect) {
    let label_width = (width / 2.0 - PADDING).max(0.0);
    let height = height.max(0.0);
    (
        Rect::new(PADDING / 2.0 + BORDER_WIDTH, 0.0, label_width, height),
        Rect::new(width / 2.0 + PADDING / 2.0, 0.0, label_width, height),
    )
}
