//! Animated ON/OFF switch widget.

pub mod config;
pub mod element;
pub mod layout;
pub mod switch;
pub mod transition;

pub use config::{
    clamp_radius_multiple, SwitchConfig, BORDER_WIDTH, DEFAULT_ANIMATION_DURATION,
    FALLBACK_RADIUS_MULTIPLE, PADDING,
};
pub use element::{Label, Subview, Thumb, OFF_TEXT, ON_TEXT};
pub use layout::SwitchLayout;
pub use switch::Switch;
pub use transition::{SwitchChanged, SwitchPhase, VisualState};
