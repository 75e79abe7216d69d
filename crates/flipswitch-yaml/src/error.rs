//! Error types for switch manifests.

use thiserror::Error;

/// Errors that can occur while loading a switch manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Malformed YAML or a field of the wrong type.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A well-formed value the widget cannot use.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

impl ManifestError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_value_display() {
        let err = ManifestError::invalid("animation_duration", "must not be negative");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'animation_duration': must not be negative"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_yaml_error_from() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("[1, 2").unwrap_err();
        let err: ManifestError = yaml_err.into();
        assert!(matches!(err, ManifestError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML error"));
        assert!(err.source().is_some());
    }
}
