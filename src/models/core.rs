//! Core data structures for paragraph node streams
//!
//! A paragraph arrives from the host pipeline as a sequence of positioned
//! content nodes. This module defines the closed set of node kinds the French
//! passes know about; anything else travels through as `ContentNode::Other`.

use serde::{Deserialize, Serialize};

pub use super::attributes::AttributeSet;

/// Penalty value that forbids a line break at its position
pub const INF_PENALTY: i32 = 10000;

/// Host-assigned font identifier
///
/// Id 0 is the null font and never carries metrics.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct FontId(pub u32);

impl FontId {
    pub const NULL: FontId = FontId(0);

    /// Check if this id refers to a real font
    pub fn is_valid(self) -> bool {
        self.0 > 0
    }
}

/// Host-assigned language number (as stored on glyphs by the hyphenation setup)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct LanguageTag(pub u16);

impl LanguageTag {
    /// Language number the host reserves for French unless configured otherwise
    pub const FRENCH: LanguageTag = LanguageTag(1);
    pub const UNTAGGED: LanguageTag = LanguageTag(0);
}

impl Default for LanguageTag {
    fn default() -> Self {
        LanguageTag::UNTAGGED
    }
}

/// A single character set in a given font
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Glyph {
    pub char: char,
    pub font: FontId,
    #[serde(default)]
    pub language: LanguageTag,
    #[serde(default)]
    pub attributes: AttributeSet,
}

impl Glyph {
    pub fn new(char: char, font: FontId, language: LanguageTag, attributes: AttributeSet) -> Self {
        Self { char, font, language, attributes }
    }

    /// Copy of this glyph's font, language and attributes with another character
    pub fn with_char(&self, char: char) -> Self {
        Self { char, ..self.clone() }
    }
}

/// Breakable, elastic space
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Glue {
    pub width: f32,
    #[serde(default)]
    pub stretch: f32,
    #[serde(default)]
    pub shrink: f32,
    #[serde(default)]
    pub attributes: AttributeSet,
}

impl Glue {
    pub fn new(width: f32, stretch: f32, shrink: f32) -> Self {
        Self { width, stretch, shrink, attributes: AttributeSet::default() }
    }

    pub fn with_attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Fixed, non-breakable adjustment
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Kern {
    pub width: f32,
}

/// Break-cost marker
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Penalty {
    pub value: i32,
}

impl Penalty {
    pub fn is_no_break(&self) -> bool {
        self.value >= INF_PENALTY
    }
}

/// Origin of a discretionary break
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiscretionarySubtype {
    /// Inserted by a `\discretionary`-style command
    Discretionary,
    /// Inserted by an explicit `\-`
    Explicit,
    /// Inserted automatically after a hyphen character
    Automatic,
    /// Found by the hyphenation patterns
    Regular,
}

/// Candidate hyphenation point
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscretionaryBreak {
    pub subtype: DiscretionarySubtype,
    #[serde(default)]
    pub penalty: i32,
}

impl DiscretionaryBreak {
    pub fn new(subtype: DiscretionarySubtype, penalty: i32) -> Self {
        Self { subtype, penalty }
    }
}

/// Kind of an opaque sub-assembly
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BoxSubtype {
    Unknown,
    Line,
    Box,
    /// Paragraph indentation box; marks the start of a run
    Indent,
}

/// One element of a paragraph's linear representation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentNode {
    Glyph(Glyph),
    Glue(Glue),
    Kern(Kern),
    Penalty(Penalty),
    #[serde(rename = "disc")]
    DiscretionaryBreak(DiscretionaryBreak),
    Box { subtype: BoxSubtype },
    Other,
}

impl ContentNode {
    pub fn glyph(char: char, font: FontId, language: LanguageTag, attributes: AttributeSet) -> Self {
        ContentNode::Glyph(Glyph::new(char, font, language, attributes))
    }

    pub fn glue(width: f32, stretch: f32, shrink: f32) -> Self {
        ContentNode::Glue(Glue::new(width, stretch, shrink))
    }

    pub fn kern(width: f32) -> Self {
        ContentNode::Kern(Kern { width })
    }

    pub fn penalty(value: i32) -> Self {
        ContentNode::Penalty(Penalty { value })
    }

    /// Fresh penalty forbidding a break
    pub fn no_break() -> Self {
        ContentNode::penalty(INF_PENALTY)
    }

    pub fn discretionary(subtype: DiscretionarySubtype) -> Self {
        ContentNode::DiscretionaryBreak(DiscretionaryBreak::new(subtype, 0))
    }

    pub fn as_glyph(&self) -> Option<&Glyph> {
        match self {
            ContentNode::Glyph(glyph) => Some(glyph),
            _ => None,
        }
    }

    pub fn as_glue(&self) -> Option<&Glue> {
        match self {
            ContentNode::Glue(glue) => Some(glue),
            _ => None,
        }
    }

    pub fn is_glue(&self) -> bool {
        matches!(self, ContentNode::Glue(_))
    }

    pub fn is_penalty(&self) -> bool {
        matches!(self, ContentNode::Penalty(_))
    }

    /// Check if this is a penalty that forbids breaking
    pub fn is_no_break(&self) -> bool {
        matches!(self, ContentNode::Penalty(p) if p.is_no_break())
    }

    pub fn is_zero_kern(&self) -> bool {
        matches!(self, ContentNode::Kern(k) if k.width == 0.0)
    }
}
