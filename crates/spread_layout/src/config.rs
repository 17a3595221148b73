//! Layout engine configuration
//!
//! Defaults reproduce the fixed constants of the editor. Every field can be
//! overridden from a partial JSON document.

use crate::{LayoutError, Result, DEFAULT_PHOTO_SPACING, SAFE_MARGIN};
use serde::{Deserialize, Serialize};

/// Tunable parameters of the layout generators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Inset from every canvas edge
    pub safe_margin: f32,
    /// Gap between neighbouring slots
    pub spacing: f32,
    /// The shorter safe side is divided into this many grid cells
    pub grid_divisions: u32,
    /// Probability that a photo gets the large size class
    pub large_probability: f32,
    /// A uniform draw above this value makes a photo horizontal
    pub horizontal_threshold: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            safe_margin: SAFE_MARGIN,
            spacing: DEFAULT_PHOTO_SPACING,
            grid_divisions: 6,
            large_probability: 0.3,
            horizontal_threshold: 0.4,
        }
    }
}

impl LayoutConfig {
    /// Same defaults with a different slot spacing
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.safe_margin.is_finite() || self.safe_margin < 0.0 {
            return Err(LayoutError::InvalidArgument(format!(
                "safe margin must be a non-negative number, got {}",
                self.safe_margin
            )));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(LayoutError::InvalidArgument(format!(
                "spacing must be a non-negative number, got {}",
                self.spacing
            )));
        }
        if self.grid_divisions == 0 {
            return Err(LayoutError::InvalidArgument(
                "grid divisions must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("large probability", self.large_probability),
            ("horizontal threshold", self.horizontal_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(LayoutError::InvalidArgument(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = LayoutConfig::default();
        assert_eq!(config.safe_margin, 5.0);
        assert_eq!(config.spacing, 5.0);
        assert_eq!(config.grid_divisions, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config: LayoutConfig = serde_json::from_str(r#"{"spacing": 8.0}"#).unwrap();
        assert_eq!(config.spacing, 8.0);
        assert_eq!(config.safe_margin, SAFE_MARGIN);
        assert_eq!(config.large_probability, 0.3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = LayoutConfig::default().with_spacing(-1.0);
        assert!(matches!(config.validate(), Err(LayoutError::InvalidArgument(_))));

        let config = LayoutConfig {
            grid_divisions: 0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LayoutConfig {
            large_probability: 1.5,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LayoutConfig {
            safe_margin: f32::NAN,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
