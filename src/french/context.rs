//! Neighbour lookup around a punctuation glyph
//!
//! Earlier passes (generic kerning in particular) leave penalty/glue pairs and
//! zero-width kerns around punctuation. The right-hand scan removes that noise
//! so the spacing decision sees the real next token, but leaves alone the
//! no-break space an earlier run gave to the next punctuation mark.

use super::chars::is_left_spaced_punct;
use super::config::SpacingConfig;
use crate::models::{BoxSubtype, ContentNode, NodeId, NodeList};

/// Widest glue still considered tight: one scaled point (1/65536 pt)
///
/// A glue this narrow acts like a kern, not like an interword space.
pub const TIGHT_GLUE_WIDTH: f32 = 1.0 / 65536.0;

/// What sits next to a glyph, as far as spacing is concerned
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Neighbor {
    /// Nothing, or a box that opens a run
    Boundary,
    Glyph(char),
    Glue { id: NodeId, width: f32 },
    Discretionary,
    /// Kern, penalty, plain box or opaque node
    Other,
}

impl Neighbor {
    pub fn char(&self) -> Option<char> {
        match self {
            Neighbor::Glyph(c) => Some(*c),
            _ => None,
        }
    }

    pub fn is_tight_glue(&self) -> bool {
        matches!(self, Neighbor::Glue { width, .. } if *width <= TIGHT_GLUE_WIDTH)
    }

    /// The glue node, when it is a real interword space
    pub fn genuine_glue(&self) -> Option<NodeId> {
        match self {
            Neighbor::Glue { id, width } if *width > TIGHT_GLUE_WIDTH => Some(*id),
            _ => None,
        }
    }

    /// Check if this neighbour rules out adding a space automatically
    ///
    /// `null_context` names the characters after (or before) which no space
    /// is wanted.
    pub fn suppresses_auto(&self, null_context: fn(char) -> bool) -> bool {
        match self {
            Neighbor::Boundary => true,
            Neighbor::Glyph(c) => null_context(*c),
            Neighbor::Glue { .. } => self.is_tight_glue(),
            Neighbor::Discretionary | Neighbor::Other => false,
        }
    }
}

fn classify(list: &NodeList, id: Option<NodeId>) -> Neighbor {
    let Some(id) = id else {
        return Neighbor::Boundary;
    };
    match list.get(id) {
        None => Neighbor::Boundary,
        Some(ContentNode::Glyph(glyph)) => Neighbor::Glyph(glyph.char),
        Some(ContentNode::Glue(glue)) => Neighbor::Glue { id, width: glue.width },
        Some(ContentNode::DiscretionaryBreak(_)) => Neighbor::Discretionary,
        Some(ContentNode::Box { subtype: BoxSubtype::Indent }) => Neighbor::Boundary,
        Some(_) => Neighbor::Other,
    }
}

/// Classify the node before `node`
pub fn left_context(list: &NodeList, node: NodeId) -> Neighbor {
    classify(list, list.prev(node))
}

/// Classify the node after `node`, removing penalty/glue noise first
///
/// A penalty directly followed by a glue is dropped. A zero-width kern is
/// looked through, and a penalty/glue pair behind it is dropped as well.
/// A no-break pair in front of French left-spaced punctuation is that
/// glyph's own space and stays.
pub fn right_context(list: &mut NodeList, node: NodeId, config: &SpacingConfig) -> Neighbor {
    drop_penalty_glue_after(list, node, config);

    let mut next = list.next(node);
    if let Some(kern) = next.filter(|&id| list.get(id).map_or(false, ContentNode::is_zero_kern)) {
        drop_penalty_glue_after(list, kern, config);
        next = list.next(kern);
    }
    classify(list, next)
}

/// Remove a `[Penalty, Glue]` pair directly after `anchor`
fn drop_penalty_glue_after(list: &mut NodeList, anchor: NodeId, config: &SpacingConfig) -> bool {
    let Some(penalty) = list.next(anchor).filter(|&id| list.get(id).map_or(false, ContentNode::is_penalty))
    else {
        return false;
    };
    let Some(glue) = list.next(penalty).filter(|&id| list.get(id).map_or(false, ContentNode::is_glue))
    else {
        return false;
    };
    let bound_to_punct = list.get(penalty).map_or(false, ContentNode::is_no_break)
        && matches!(
            list.next(glue).and_then(|id| list.get(id)),
            Some(ContentNode::Glyph(g)) if config.is_french(g.language) && is_left_spaced_punct(g.char)
        );
    if bound_to_punct {
        return false;
    }

    list.remove(penalty);
    list.remove(glue);
    log::trace!("Dropped penalty/glue pair after node {}", anchor.0);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttributeSet, DiscretionarySubtype, FontId, LanguageTag};

    fn glyph(c: char) -> ContentNode {
        ContentNode::glyph(c, FontId(1), LanguageTag::FRENCH, AttributeSet::default())
    }

    fn ids(list: &NodeList) -> Vec<NodeId> {
        list.ids().collect()
    }

    #[test]
    fn test_left_context_kinds() {
        let list = NodeList::from_nodes(vec![
            ContentNode::Box { subtype: BoxSubtype::Indent },
            glyph('a'),
            ContentNode::glue(3.0, 1.0, 1.0),
            glyph('b'),
            ContentNode::glue(0.0, 0.0, 0.0),
            glyph('c'),
            ContentNode::kern(1.0),
            glyph('d'),
        ]);
        let ids = ids(&list);

        assert_eq!(left_context(&list, ids[0]), Neighbor::Boundary);
        assert_eq!(left_context(&list, ids[1]), Neighbor::Boundary);
        assert_eq!(left_context(&list, ids[2]), Neighbor::Glyph('a'));
        assert_eq!(left_context(&list, ids[3]).genuine_glue(), Some(ids[2]));
        assert!(left_context(&list, ids[5]).is_tight_glue());
        assert_eq!(left_context(&list, ids[7]), Neighbor::Other);
    }

    #[test]
    fn test_tight_threshold_is_one_scaled_point() {
        let at = Neighbor::Glue { id: NodeId(0), width: TIGHT_GLUE_WIDTH };
        let above = Neighbor::Glue { id: NodeId(0), width: 2.0 * TIGHT_GLUE_WIDTH };

        assert!(at.is_tight_glue());
        assert_eq!(at.genuine_glue(), None);
        assert!(!above.is_tight_glue());
        assert_eq!(above.genuine_glue(), Some(NodeId(0)));
    }

    #[test]
    fn test_right_context_drops_penalty_glue() {
        let mut list = NodeList::from_nodes(vec![
            glyph('»'),
            ContentNode::penalty(10000),
            ContentNode::glue(3.0, 1.0, 1.0),
            glyph('x'),
        ]);
        let start = ids(&list);

        assert_eq!(right_context(&mut list, start[0], &SpacingConfig::default()), Neighbor::Glyph('x'));
        assert_eq!(list.len(), 2);
        assert!(list.check_links().is_ok());
    }

    #[test]
    fn test_right_context_looks_through_zero_kern() {
        let mut list = NodeList::from_nodes(vec![
            glyph(':'),
            ContentNode::kern(0.0),
            ContentNode::penalty(0),
            ContentNode::glue(3.0, 1.0, 1.0),
            ContentNode::discretionary(DiscretionarySubtype::Automatic),
        ]);
        let start = ids(&list);

        assert_eq!(right_context(&mut list, start[0], &SpacingConfig::default()), Neighbor::Discretionary);
        assert_eq!(list.len(), 3);
        assert!(list.get(start[1]).is_some());
        assert!(list.check_links().is_ok());
    }

    #[test]
    fn test_right_context_keeps_lone_penalty_and_real_kern() {
        let mut list = NodeList::from_nodes(vec![glyph('»'), ContentNode::penalty(50), glyph('x')]);
        let start = ids(&list);
        assert_eq!(right_context(&mut list, start[0], &SpacingConfig::default()), Neighbor::Other);
        assert_eq!(list.len(), 3);

        let mut list = NodeList::from_nodes(vec![glyph('»'), ContentNode::kern(0.5), glyph('x')]);
        let start = ids(&list);
        assert_eq!(right_context(&mut list, start[0], &SpacingConfig::default()), Neighbor::Other);

        let mut list = NodeList::from_nodes(vec![glyph('»')]);
        let start = ids(&list);
        assert_eq!(right_context(&mut list, start[0], &SpacingConfig::default()), Neighbor::Boundary);
    }

    #[test]
    fn test_suppresses_auto() {
        fn parens(c: char) -> bool {
            c == '('
        }
        assert!(Neighbor::Boundary.suppresses_auto(parens));
        assert!(Neighbor::Glyph('(').suppresses_auto(parens));
        assert!(!Neighbor::Glyph('e').suppresses_auto(parens));
        assert!(!Neighbor::Other.suppresses_auto(parens));
        assert!(Neighbor::Glue { id: NodeId(0), width: 0.0 }.suppresses_auto(parens));
    }

    #[test]
    fn test_right_context_keeps_space_bound_to_next_punct() {
        let config = SpacingConfig::default();
        let mut list = NodeList::from_nodes(vec![
            glyph(':'),
            ContentNode::no_break(),
            ContentNode::glue(8.0, 0.9, 1.6),
            glyph('«'),
        ]);
        let start = ids(&list);

        assert_eq!(right_context(&mut list, start[0], &config), Neighbor::Other);
        assert_eq!(list.len(), 4);

        // The same pair before a non-French guillemet is noise
        let mut list = NodeList::from_nodes(vec![
            glyph(':'),
            ContentNode::no_break(),
            ContentNode::glue(8.0, 0.9, 1.6),
            ContentNode::glyph('«', FontId(1), LanguageTag(2), AttributeSet::default()),
        ]);
        let start = ids(&list);

        assert_eq!(right_context(&mut list, start[0], &config), Neighbor::Glyph('«'));
        assert_eq!(list.len(), 2);
        assert!(list.check_links().is_ok());
    }
}
