//! Switch manifest schema and resolution into a [`SwitchConfig`].

use crate::error::ManifestError;
use flipswitch_core::{AnimationScheduler, Color, Font, FontStyle, FontWeight, Size};
use flipswitch_widgets::{clamp_radius_multiple, Switch, SwitchConfig};
use serde::{Deserialize, Serialize};

/// Caption font as written in a manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontManifest {
    /// Point size (default 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    /// Weight (default bold)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
}

/// A switch described in YAML.
///
/// Every field is optional; anything missing keeps the widget default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchManifest {
    /// Track color when on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_tint: Option<String>,
    /// Track color when off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_tint: Option<String>,
    /// Thumb color when on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_thumb_tint: Option<String>,
    /// Thumb color when off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_thumb_tint: Option<String>,
    /// Track corner radius multiple
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius_multiple: Option<f32>,
    /// Thumb corner radius multiple
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_corner_radius_multiple: Option<f32>,
    /// Explicit thumb size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_size: Option<Size>,
    /// Show the ON/OFF captions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<bool>,
    /// Caption font
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontManifest>,
    /// Caption color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Transition length in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<f64>,
    /// Initial state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
}

impl SwitchManifest {
    /// Parse manifest from YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or contains unknown fields.
    pub fn from_yaml(yaml: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Serialize manifest to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ManifestError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Describe an existing configuration, with every field spelled out.
    #[must_use]
    pub fn from_config(config: &SwitchConfig, on: bool) -> Self {
        Self {
            on_tint: Some(config.on_tint_color.to_hex_with_alpha()),
            off_tint: Some(config.off_tint_color.to_hex_with_alpha()),
            on_thumb_tint: Some(config.on_thumb_tint_color.to_hex_with_alpha()),
            off_thumb_tint: Some(config.off_thumb_tint_color.to_hex_with_alpha()),
            corner_radius_multiple: Some(config.get_corner_radius_multiple()),
            thumb_corner_radius_multiple: Some(config.get_thumb_corner_radius_multiple()),
            thumb_size: Some(config.thumb_size),
            labels: Some(config.labels_are_enabled),
            font: Some(FontManifest {
                size: Some(config.font.size),
                weight: Some(config.font.weight),
            }),
            text_color: Some(config.text_color.to_hex_with_alpha()),
            animation_duration: Some(config.animation_duration),
            on: Some(on),
        }
    }

    /// Initial switch state; on unless the manifest says otherwise.
    #[must_use]
    pub fn initial_state(&self) -> bool {
        self.on.unwrap_or(true)
    }

    /// Resolve into a widget configuration.
    ///
    /// Out-of-range radius multiples are not errors: they become `0.5`, as
    /// the widget's own setters do.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidValue`] for malformed colors, a
    /// negative or non-finite duration, or a non-positive font size.
    pub fn resolve(&self) -> Result<SwitchConfig, ManifestError> {
        let mut config = SwitchConfig::default();

        if let Some(hex) = &self.on_tint {
            config.on_tint_color = parse_color("on_tint", hex)?;
        }
        if let Some(hex) = &self.off_tint {
            config.off_tint_color = parse_color("off_tint", hex)?;
        }
        if let Some(hex) = &self.on_thumb_tint {
            config.on_thumb_tint_color = parse_color("on_thumb_tint", hex)?;
        }
        if let Some(hex) = &self.off_thumb_tint {
            config.off_thumb_tint_color = parse_color("off_thumb_tint", hex)?;
        }
        if let Some(hex) = &self.text_color {
            config.text_color = parse_color("text_color", hex)?;
        }

        if let Some(multiple) = self.corner_radius_multiple {
            warn_if_clamped("corner_radius_multiple", multiple);
            config.set_corner_radius_multiple(multiple);
        }
        if let Some(multiple) = self.thumb_corner_radius_multiple {
            warn_if_clamped("thumb_corner_radius_multiple", multiple);
            config.set_thumb_corner_radius_multiple(multiple);
        }

        if let Some(size) = self.thumb_size {
            config.thumb_size = size;
        }
        if let Some(labels) = self.labels {
            config.labels_are_enabled = labels;
        }
        if let Some(font) = self.font {
            config.font = resolve_font(font)?;
        }
        if let Some(duration) = self.animation_duration {
            if !duration.is_finite() || duration < 0.0 {
                return Err(ManifestError::invalid(
                    "animation_duration",
                    format!("expected a non-negative number of seconds, got {duration}"),
                ));
            }
            config.animation_duration = duration;
        }

        Ok(config)
    }

    /// Build a switch driven by the default frame clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest does not resolve.
    pub fn build_switch(&self) -> Result<Switch, ManifestError> {
        self.build_switch_with(flipswitch_core::FrameClock::new())
    }

    /// Build a switch driven by the given scheduler.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest does not resolve.
    pub fn build_switch_with<S: AnimationScheduler>(
        &self,
        scheduler: S,
    ) -> Result<Switch<S>, ManifestError> {
        let config = self.resolve()?;
        log::debug!("manifest: building switch (on = {})", self.initial_state());
        Ok(Switch::with_scheduler(scheduler)
            .with_config(config)
            .on(self.initial_state()))
    }
}

fn parse_color(field: &str, hex: &str) -> Result<Color, ManifestError> {
    Color::from_hex(hex).map_err(|e| ManifestError::invalid(field, format!("'{hex}': {e}")))
}

fn warn_if_clamped(field: &str, multiple: f32) {
    let clamped = clamp_radius_multiple(multiple);
    if clamped.to_bits() != multiple.to_bits() {
        log::warn!("manifest: {field} = {multiple} is outside [0, 0.5], using {clamped}");
    }
}

fn resolve_font(font: FontManifest) -> Result<Font, ManifestError> {
    let default = Font::default();
    let size = font.size.unwrap_or(default.size);
    if !size.is_finite() || size <= 0.0 {
        return Err(ManifestError::invalid(
            "font.size",
            format!("expected a positive point size, got {size}"),
        ));
    }
    Ok(Font {
        size,
        weight: font.weight.unwrap_or(default.weight),
        style: FontStyle::Normal,
    })
}
