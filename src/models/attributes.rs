//! Per-node feature flags
//!
//! The host's run-configuration logic attaches these to every node it builds,
//! so mixed-language paragraphs can carry different rules per run.

use serde::{Deserialize, Serialize};

const SPACING_ENABLED: u8 = 0x01;
const FIXED_NBSP_GLYPH: u8 = 0x02;
const AUTO_COLON_SPACE: u8 = 0x04;
const AUTO_GUILLEMET_SPACE: u8 = 0x08;

/// Bit field of French spacing features for one run
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct AttributeSet {
    pub flags: u8,
}

impl AttributeSet {
    /// Flags for a run with every French spacing feature on, in glue mode
    pub fn french_defaults() -> Self {
        Self { flags: SPACING_ENABLED | AUTO_COLON_SPACE | AUTO_GUILLEMET_SPACE }
    }

    fn get(&self, bit: u8) -> bool {
        self.flags & bit != 0
    }

    fn set(&mut self, bit: u8, on: bool) {
        if on {
            self.flags |= bit;
        } else {
            self.flags &= !bit;
        }
    }

    /// Check if French punctuation spacing applies to this run
    pub fn spacing_enabled(&self) -> bool {
        self.get(SPACING_ENABLED)
    }

    pub fn set_spacing_enabled(&mut self, on: bool) {
        self.set(SPACING_ENABLED, on);
    }

    /// Check if a fixed non-breaking space character replaces scaled glue
    pub fn use_fixed_nbsp_glyph(&self) -> bool {
        self.get(FIXED_NBSP_GLYPH)
    }

    pub fn set_use_fixed_nbsp_glyph(&mut self, on: bool) {
        self.set(FIXED_NBSP_GLYPH, on);
    }

    /// Check if a thick space is added automatically before a colon
    pub fn auto_colon_space(&self) -> bool {
        self.get(AUTO_COLON_SPACE)
    }

    pub fn set_auto_colon_space(&mut self, on: bool) {
        self.set(AUTO_COLON_SPACE, on);
    }

    /// Check if spaces are added automatically inside guillemets
    pub fn auto_guillemet_space(&self) -> bool {
        self.get(AUTO_GUILLEMET_SPACE)
    }

    pub fn set_auto_guillemet_space(&mut self, on: bool) {
        self.set(AUTO_GUILLEMET_SPACE, on);
    }
}
