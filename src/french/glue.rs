//! Glue synthesis for French punctuation spaces
//!
//! A French space is the font's interword space scaled by a ratio triple, or,
//! when the paragraph sets an interword skip of its own, that skip's width
//! scaled by the ratio factor.

use super::chars::{NARROW_NBSP, NBSP};
use super::errors::SpacingError;
use crate::fonts::{FontMetricCache, FontMetricsProvider};
use crate::models::{AttributeSet, FontId, Glue};
use serde::{Deserialize, Serialize};

/// Scale factors applied to a font's space width, stretch and shrink
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GlueRatios {
    #[serde(default)]
    pub factor: Option<f32>,
    #[serde(default)]
    pub stretch: f32,
    #[serde(default)]
    pub shrink: f32,
}

impl GlueRatios {
    /// Before `! ? ;`
    pub const THIN: GlueRatios = GlueRatios { factor: Some(0.5), stretch: 0.0, shrink: 0.0 };
    /// Before `:`
    pub const THICK: GlueRatios = GlueRatios { factor: Some(1.0), stretch: 1.0, shrink: 1.0 };
    /// Inside `« »`
    pub const GUILLEMET: GlueRatios = GlueRatios { factor: Some(0.8), stretch: 0.3, shrink: 0.8 };

    pub fn new(factor: f32, stretch: f32, shrink: f32) -> Self {
        Self { factor: Some(factor), stretch, shrink }
    }

    /// The width factor, if it is a usable number
    fn checked_factor(&self) -> Result<f32, SpacingError> {
        match self.factor {
            None => Err(SpacingError::InvalidRatio("factor is unset".to_string())),
            Some(f) if !f.is_finite() => {
                Err(SpacingError::InvalidRatio(format!("factor {} is not a number", f)))
            }
            Some(f) if f < 0.0 => Err(SpacingError::InvalidRatio(format!("factor {} is negative", f))),
            Some(f) => Ok(f),
        }
    }

    /// Check the whole triple: factor usable, stretch and shrink finite and non-negative
    pub fn validate(&self) -> Result<(), SpacingError> {
        self.checked_factor()?;
        for (name, value) in [("stretch", self.stretch), ("shrink", self.shrink)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SpacingError::InvalidRatio(format!("{} {} is not a non-negative number", name, value)));
            }
        }
        Ok(())
    }
}

/// Which French space a punctuation mark calls for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpacingClass {
    /// `! ? ;`
    Thin,
    /// `:`
    Thick,
    /// `«` and `»`
    Guillemet,
}

impl SpacingClass {
    /// Fixed no-break space character used instead of scaled glue
    pub fn fixed_space(self) -> char {
        match self {
            SpacingClass::Thin => NARROW_NBSP,
            SpacingClass::Thick | SpacingClass::Guillemet => NBSP,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpacingClass::Thin => "thin",
            SpacingClass::Thick => "thick",
            SpacingClass::Guillemet => "guillemet",
        }
    }
}

/// Paragraph-level interword skip that takes precedence over font metrics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct OverrideSkip {
    pub width: f32,
    #[serde(default)]
    pub stretch: f32,
    #[serde(default)]
    pub shrink: f32,
}

impl OverrideSkip {
    pub fn new(width: f32, stretch: f32, shrink: f32) -> Self {
        Self { width, stretch, shrink }
    }

    /// An override is only in force when its width is positive
    pub fn is_active(&self) -> bool {
        self.width > 0.0
    }

    pub fn is_well_formed(&self) -> bool {
        [self.width, self.stretch, self.shrink]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Builds French spaces for glyphs of a given font
pub struct GlueSynthesizer<'a, P> {
    cache: &'a mut FontMetricCache<P>,
    override_skip: Option<OverrideSkip>,
}

impl<'a, P: FontMetricsProvider> GlueSynthesizer<'a, P> {
    pub fn new(cache: &'a mut FontMetricCache<P>, override_skip: Option<OverrideSkip>) -> Self {
        let override_skip = override_skip.filter(|skip| {
            if !skip.is_well_formed() {
                log::warn!("Ignoring malformed override skip {:?}", skip);
            }
            skip.is_well_formed() && skip.is_active()
        });
        Self { cache, override_skip }
    }

    /// Glue for `font` scaled by `ratios`, or the reason it cannot be built
    pub fn try_make_glue(
        &mut self,
        font: FontId,
        ratios: &GlueRatios,
        attributes: AttributeSet,
    ) -> Result<Glue, SpacingError> {
        if !font.is_valid() {
            return Err(SpacingError::InvalidFont(font.0));
        }
        let factor = ratios.checked_factor()?;

        if let Some(skip) = self.override_skip {
            return Ok(Glue::new(factor * skip.width, skip.stretch, skip.shrink).with_attributes(attributes));
        }

        ratios.validate()?;
        let metrics = self
            .cache
            .lookup(font)
            .ok_or(SpacingError::MissingFontMetrics(font))?;

        Ok(Glue::new(
            factor * metrics.space_width,
            ratios.stretch * metrics.space_stretch,
            ratios.shrink * metrics.space_shrink,
        )
        .with_attributes(attributes))
    }

    /// Same as `try_make_glue`, with every failure meaning "no glue"
    pub fn make_glue(&mut self, font: FontId, ratios: &GlueRatios, attributes: AttributeSet) -> Option<Glue> {
        self.try_make_glue(font, ratios, attributes)
            .map_err(|e| log::debug!("No French space for font {}: {}", font.0, e))
            .ok()
    }
}
