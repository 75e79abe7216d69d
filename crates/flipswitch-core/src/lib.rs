//! Core types and traits for the flipswitch widget.
//!
//! This crate provides the foundational types the switch is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`]
//! - Capability traits: [`Widget`], [`Canvas`], [`AnimationScheduler`]
//! - Animation: [`Easing`], [`Interpolate`], [`FrameClock`]

pub mod animation;
pub mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod scheduler;
pub mod widget;

pub use animation::{Easing, Interpolate, Timeline};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::{Event, MouseButton, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use scheduler::{AnimationId, AnimationRequest, AnimationScheduler, Frame, FrameClock};
pub use widget::{
    AccessibleRole, Canvas, Font, FontStyle, FontWeight, LayoutResult, TextAlign, TextStyle,
    TypeId, Widget,
};
