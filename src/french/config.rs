//! Spacing configuration
//!
//! Everything here has a typographically sound default, so an empty JSON
//! object is a valid configuration.

use super::errors::ConfigError;
use super::glue::{GlueRatios, OverrideSkip, SpacingClass};
use crate::models::LanguageTag;
use serde::{Deserialize, Serialize};

/// Paragraph-level settings shared by both French passes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingConfig {
    /// Language number glyphs must carry to be treated as French
    pub french_language: LanguageTag,

    /// Ratios before `! ? ;`
    pub thin: GlueRatios,

    /// Ratios before `:`
    pub thick: GlueRatios,

    /// Ratios inside `« »`
    pub guillemet: GlueRatios,

    /// Interword skip set on the paragraph, if any
    pub override_skip: Option<OverrideSkip>,

    /// Run the euphonic-elision pass after punctuation spacing
    pub euphonic_elision: bool,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            french_language: LanguageTag::FRENCH,
            thin: GlueRatios::THIN,
            thick: GlueRatios::THICK,
            guillemet: GlueRatios::GUILLEMET,
            override_skip: None,
            euphonic_elision: true,
        }
    }
}

impl SpacingConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SpacingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for class in [SpacingClass::Thin, SpacingClass::Thick, SpacingClass::Guillemet] {
            self.ratios(class)
                .validate()
                .map_err(|e| ConfigError::InvalidRatio { class: class.name(), reason: e.to_string() })?;
        }
        if let Some(skip) = &self.override_skip {
            if !skip.is_well_formed() {
                return Err(ConfigError::InvalidOverrideSkip(format!(
                    "width {}, stretch {}, shrink {} must be non-negative numbers",
                    skip.width, skip.stretch, skip.shrink
                )));
            }
        }
        Ok(())
    }

    pub fn ratios(&self, class: SpacingClass) -> &GlueRatios {
        match class {
            SpacingClass::Thin => &self.thin,
            SpacingClass::Thick => &self.thick,
            SpacingClass::Guillemet => &self.guillemet,
        }
    }

    pub fn is_french(&self, language: LanguageTag) -> bool {
        language == self.french_language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = SpacingConfig::from_json("{}").unwrap();
        assert_eq!(config, SpacingConfig::default());
        assert!(config.euphonic_elision);
        assert_eq!(config.guillemet, GlueRatios::GUILLEMET);
    }

    #[test]
    fn test_custom_ratios_and_skip() {
        let json = r#"{
            "frenchLanguage": 12,
            "thin": { "factor": 0.25 },
            "overrideSkip": { "width": 4.0, "stretch": 1.0, "shrink": 0.5 },
            "euphonicElision": false
        }"#;
        let config = SpacingConfig::from_json(json).unwrap();

        assert_eq!(config.french_language, LanguageTag(12));
        assert_eq!(config.thin, GlueRatios::new(0.25, 0.0, 0.0));
        assert_eq!(config.thick, GlueRatios::THICK);
        assert_eq!(config.override_skip, Some(OverrideSkip::new(4.0, 1.0, 0.5)));
        assert!(!config.euphonic_elision);
        assert!(config.is_french(LanguageTag(12)));
        assert!(!config.is_french(LanguageTag::FRENCH));
    }

    #[test]
    fn test_rejects_bad_ratios() {
        let err = SpacingConfig::from_json(r#"{ "thick": { "stretch": 1.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRatio { class: "thick", .. }));

        let err = SpacingConfig::from_json(r#"{ "guillemet": { "factor": -0.8 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRatio { class: "guillemet", .. }));
    }

    #[test]
    fn test_rejects_bad_override_and_json() {
        let err = SpacingConfig::from_json(r#"{ "overrideSkip": { "width": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOverrideSkip(_)));

        let err = SpacingConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
