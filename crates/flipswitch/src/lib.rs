//! Flipswitch: an animated ON/OFF toggle switch.
//!
//! The widget owns its state machine, layout and transition; the host
//! supplies bounds, input events, a canvas and frame ticks.
//!
//! ```
//! use flipswitch::widgets::{Switch, SwitchChanged};
//! use flipswitch::{Rect, Widget};
//!
//! let mut switch = Switch::new();
//! switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));
//! assert!(switch.begin_interaction());
//!
//! let mut changed = None;
//! while changed.is_none() {
//!     changed = switch.advance(1.0 / 60.0);
//! }
//! assert_eq!(changed, Some(SwitchChanged { on: false }));
//! ```

pub use flipswitch_core::*;
pub use flipswitch_widgets as widgets;
pub use flipswitch_yaml as yaml;
