//! Error types for French spacing
//!
//! None of these escape the passes: a synthesis failure means "insert
//! nothing here" and the traversal moves on. Configuration errors surface at
//! load time only.

use crate::models::FontId;
use thiserror::Error;

/// Why a glue could not be synthesized for a glyph
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpacingError {
    /// Glyph carries the null font
    #[error("Invalid font id {0}")]
    InvalidFont(u32),

    /// Font declares no interword space
    #[error("Font {0:?} has no interword space metrics")]
    MissingFontMetrics(FontId),

    /// Ratio factor absent, non-numeric or negative
    #[error("Invalid glue ratio: {0}")]
    InvalidRatio(String),
}

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid spacing configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid ratios for {class} spacing: {reason}")]
    InvalidRatio { class: &'static str, reason: String },

    #[error("Invalid override skip: {0}")]
    InvalidOverrideSkip(String),
}
