//! Quick paragraph construction from text
//!
//! Hosts normally hand over fully laid-out streams; this builder produces the
//! same shape from plain text for tests and native callers:
//!
//! - ASCII space: interword glue from the run's font metrics
//! - `~`: tie, i.e. a no-break penalty followed by interword glue
//! - `-`: explicit hyphen, emitted as an automatic discretionary break the
//!   way a hyphenator leaves it
//! - anything else: a glyph in the current run

use crate::fonts::FontMetrics;
use crate::models::{
    AttributeSet, BoxSubtype, ContentNode, DiscretionarySubtype, FontId, Glue, LanguageTag,
    NodeList,
};

/// Font, language and features of a run of text
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunStyle {
    pub font: FontId,
    pub language: LanguageTag,
    pub attributes: AttributeSet,
    pub space: FontMetrics,
}

impl RunStyle {
    /// French run with every spacing feature on
    pub fn french(font: FontId, space: FontMetrics) -> Self {
        Self {
            font,
            language: LanguageTag::FRENCH,
            attributes: AttributeSet::french_defaults(),
            space,
        }
    }

    pub fn with_language(mut self, language: LanguageTag) -> Self {
        self.language = language;
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Accumulates nodes for one paragraph
#[derive(Debug, Clone)]
pub struct ParagraphBuilder {
    nodes: Vec<ContentNode>,
    style: RunStyle,
}

impl ParagraphBuilder {
    pub fn new(style: RunStyle) -> Self {
        Self { nodes: Vec::new(), style }
    }

    /// Switch to another run style for the text that follows
    pub fn style(mut self, style: RunStyle) -> Self {
        self.style = style;
        self
    }

    fn interword_glue(&self) -> ContentNode {
        let space = self.style.space;
        ContentNode::Glue(
            Glue::new(space.space_width, space.space_stretch, space.space_shrink)
                .with_attributes(self.style.attributes),
        )
    }

    /// Append text in the current style
    pub fn text(mut self, text: &str) -> Self {
        for ch in text.chars() {
            match ch {
                ' ' => {
                    let glue = self.interword_glue();
                    self.nodes.push(glue);
                }
                '~' => {
                    let glue = self.interword_glue();
                    self.nodes.push(ContentNode::no_break());
                    self.nodes.push(glue);
                }
                '-' => self.nodes.push(ContentNode::discretionary(DiscretionarySubtype::Automatic)),
                c => {
                    let glyph = self.glyph(c);
                    self.nodes.push(glyph);
                }
            }
        }
        self
    }

    fn glyph(&self, c: char) -> ContentNode {
        ContentNode::glyph(c, self.style.font, self.style.language, self.style.attributes)
    }

    /// Paragraph indentation box (opens a run)
    pub fn indent(self) -> Self {
        self.node(ContentNode::Box { subtype: BoxSubtype::Indent })
    }

    pub fn glue(self, width: f32, stretch: f32, shrink: f32) -> Self {
        self.node(ContentNode::glue(width, stretch, shrink))
    }

    pub fn kern(self, width: f32) -> Self {
        self.node(ContentNode::kern(width))
    }

    pub fn penalty(self, value: i32) -> Self {
        self.node(ContentNode::penalty(value))
    }

    pub fn discretionary(self, subtype: DiscretionarySubtype) -> Self {
        self.node(ContentNode::discretionary(subtype))
    }

    pub fn node(mut self, node: ContentNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn into_nodes(self) -> Vec<ContentNode> {
        self.nodes
    }

    pub fn build(self) -> NodeList {
        NodeList::from_nodes(self.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> RunStyle {
        RunStyle::french(FontId(1), FontMetrics::new(10.0, 3.0, 2.0))
    }

    #[test]
    fn test_text_mapping() {
        let nodes = ParagraphBuilder::new(style()).text("a b~c-d").into_nodes();

        assert_eq!(nodes.len(), 8);
        assert_eq!(nodes[0].as_glyph().map(|g| g.char), Some('a'));
        assert_eq!(nodes[1].as_glue().map(|g| g.width), Some(10.0));
        assert!(nodes[3].is_no_break());
        assert!(nodes[4].is_glue());
        assert_eq!(nodes[6], ContentNode::discretionary(DiscretionarySubtype::Automatic));
        assert_eq!(nodes[7].as_glyph().map(|g| g.char), Some('d'));
    }

    #[test]
    fn test_style_switch() {
        let english = style().with_language(LanguageTag(2));
        let nodes = ParagraphBuilder::new(style())
            .text("a")
            .style(english)
            .text("b")
            .into_nodes();

        assert_eq!(nodes[0].as_glyph().unwrap().language, LanguageTag::FRENCH);
        assert_eq!(nodes[1].as_glyph().unwrap().language, LanguageTag(2));
    }

    #[test]
    fn test_build_links() {
        let list = ParagraphBuilder::new(style()).indent().text("oui !").kern(0.0).build();
        assert_eq!(list.len(), 7);
        assert!(list.check_links().is_ok());
    }
}
