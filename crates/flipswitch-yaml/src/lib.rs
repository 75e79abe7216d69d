//! YAML manifests for the flipswitch widget.
//!
//! ```yaml
//! on_tint: "#34c759"
//! off_tint: "#e5e5ea"
//! labels: true
//! font: { size: 10, weight: bold }
//! animation_duration: 0.5
//! on: true
//! ```

mod error;
mod manifest;

pub use error::ManifestError;
pub use manifest::{FontManifest, SwitchManifest};
