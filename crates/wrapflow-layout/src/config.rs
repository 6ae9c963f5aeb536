//! Flow configuration.
//!
//! Every field is optional with a sensible default, so a config can be built
//! in code, deserialized from a partial JSON document, or left at
//! [`FlowConfig::default`].
//!
//! ```
//! use wrapflow_layout::{Alignment, FitContent, FlowConfig};
//!
//! let config = FlowConfig::from_json(r#"{ "alignment": "top_leading", "spacing": 8.0 }"#)
//!     .unwrap();
//! assert_eq!(config.alignment, Alignment::TopLeading);
//! assert_eq!(config.spacing, Some(8.0));
//! assert_eq!(config.line_spacing, None);
//! assert_eq!(config.fit_content, FitContent::empty());
//! ```

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::alignment::Alignment;

bitflags! {
    /// Axes on which the reported size hugs the content.
    ///
    /// An axis without its flag fills the proposal: when the proposal
    /// specifies that axis, the reported extent is at least the proposed one.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FitContent: u8 {
        /// The packing axis (row width for a horizontal flow).
        const PRIMARY = 0b01;
        /// The line-stacking axis (total height for a horizontal flow).
        const CROSS = 0b10;
    }
}

/// Configuration surface of a [`Flow`](crate::Flow).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowConfig {
    /// Where lines and items sit within their slack.
    pub alignment: Alignment,
    /// Gap between neighbors in a line. `None` negotiates per pair.
    pub spacing: Option<f64>,
    /// Gap between consecutive lines. `None` negotiates per pair.
    pub line_spacing: Option<f64>,
    /// Axes that shrink to content instead of filling the proposal.
    pub fit_content: FitContent,
    /// Require exact key equality, not just a hash match, for cache hits.
    pub strict_cache_keys: bool,
}

impl FlowConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, FlowConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|err| FlowConfigError::Parse {
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that spacing overrides are finite and non-negative.
    pub fn validate(&self) -> Result<(), FlowConfigError> {
        for (field, value) in [("spacing", self.spacing), ("line_spacing", self.line_spacing)] {
            match value {
                Some(value) if !(value.is_finite() && value >= 0.0) => {
                    return Err(FlowConfigError::InvalidSpacing { field, value });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Clamp a spacing value supplied through a builder into a usable one.
pub(crate) fn sanitize_spacing(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Errors produced while loading or validating a [`FlowConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum FlowConfigError {
    /// A spacing override was negative, NaN, or infinite.
    InvalidSpacing { field: &'static str, value: f64 },
    /// The configuration document could not be parsed.
    Parse { message: String },
}

impl fmt::Display for FlowConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpacing { field, value } => {
                write!(f, "{field} must be finite and non-negative (got {value})")
            }
            Self::Parse { message } => write!(f, "invalid flow configuration: {message}"),
        }
    }
}

impl std::error::Error for FlowConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FlowConfig::default();
        assert_eq!(config.alignment, Alignment::Center);
        assert_eq!(config.spacing, None);
        assert_eq!(config.line_spacing, None);
        assert!(config.fit_content.is_empty());
        assert!(!config.strict_cache_keys);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn negative_spacing_is_rejected() {
        let config = FlowConfig {
            line_spacing: Some(-1.0),
            ..FlowConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(FlowConfigError::InvalidSpacing {
                field: "line_spacing",
                value: -1.0
            })
        );
    }

    #[test]
    fn nan_spacing_is_rejected() {
        let config = FlowConfig {
            spacing: Some(f64::NAN),
            ..FlowConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FlowConfigError::InvalidSpacing { field: "spacing", .. })
        ));
    }

    #[test]
    fn from_json_reads_fit_content_flags() {
        let config =
            FlowConfig::from_json(r#"{ "fit_content": "PRIMARY | CROSS", "strict_cache_keys": true }"#)
                .unwrap();
        assert_eq!(config.fit_content, FitContent::all());
        assert!(config.strict_cache_keys);
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let err = FlowConfig::from_json(r#"{ "gap": 4 }"#).unwrap_err();
        assert!(matches!(err, FlowConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid flow configuration"));
    }

    #[test]
    fn from_json_validates() {
        let err = FlowConfig::from_json(r#"{ "spacing": -2.0 }"#).unwrap_err();
        assert_eq!(err.to_string(), "spacing must be finite and non-negative (got -2)");
    }

    #[test]
    fn sanitize_spacing_clamps() {
        assert_eq!(sanitize_spacing(-3.0), 0.0);
        assert_eq!(sanitize_spacing(f64::NAN), 0.0);
        assert_eq!(sanitize_spacing(f64::INFINITY), 0.0);
        assert_eq!(sanitize_spacing(4.5), 4.5);
    }
}
