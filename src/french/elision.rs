//! Euphonic "t" protection
//!
//! In inverted constructs such as `a-t-il` or `va-t-elle`, the liaison `t`
//! sits between two hyphens. Each hyphen is followed by an automatic
//! discretionary break; a break after the `t` would strand `-t-` at the end
//! of a line, so that second break is forbidden.

use super::config::SpacingConfig;
use crate::models::{ContentNode, DiscretionarySubtype, NodeId, NodeList, INF_PENALTY};

fn is_automatic_break(node: Option<&ContentNode>) -> bool {
    matches!(
        node,
        Some(ContentNode::DiscretionaryBreak(disc)) if disc.subtype == DiscretionarySubtype::Automatic
    )
}

fn is_french_t(node: Option<&ContentNode>, config: &SpacingConfig) -> bool {
    matches!(
        node,
        Some(ContentNode::Glyph(glyph)) if matches!(glyph.char, 't' | 'T') && config.is_french(glyph.language)
    )
}

/// Forbid the break after an elided `t` sandwiched between automatic breaks
///
/// Only penalties change; the head is returned for symmetry with the
/// punctuation pass.
pub fn apply_euphonic_elision(list: &mut NodeList, config: &SpacingConfig) -> Option<NodeId> {
    let mut cursor = list.head();

    while let Some(id) = cursor {
        cursor = list.next(id);
        if !is_automatic_break(list.get(id)) {
            continue;
        }

        let Some(t) = cursor.filter(|&t| is_french_t(list.get(t), config)) else {
            continue;
        };
        let Some(second) = list.next(t).filter(|&d| is_automatic_break(list.get(d))) else {
            continue;
        };

        if let Some(ContentNode::DiscretionaryBreak(disc)) = list.get_mut(second) {
            disc.penalty = INF_PENALTY;
            log::trace!("Forbade break after euphonic t (node {})", second.0);
        }
    }

    list.head()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttributeSet, DiscretionaryBreak, FontId, LanguageTag};

    fn disc(subtype: DiscretionarySubtype) -> ContentNode {
        ContentNode::DiscretionaryBreak(DiscretionaryBreak::new(subtype, 50))
    }

    fn letter(c: char, language: LanguageTag) -> ContentNode {
        ContentNode::glyph(c, FontId(1), language, AttributeSet::default())
    }

    fn penalties(list: &NodeList) -> Vec<i32> {
        list.iter()
            .filter_map(|node| match node {
                ContentNode::DiscretionaryBreak(d) => Some(d.penalty),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_french_t_between_breaks() {
        let mut list = NodeList::from_nodes(vec![
            letter('a', LanguageTag::FRENCH),
            disc(DiscretionarySubtype::Automatic),
            letter('t', LanguageTag::FRENCH),
            disc(DiscretionarySubtype::Automatic),
            letter('i', LanguageTag::FRENCH),
        ]);
        let head = list.head();

        assert_eq!(apply_euphonic_elision(&mut list, &SpacingConfig::default()), head);
        assert_eq!(penalties(&list), vec![50, INF_PENALTY]);
    }

    #[test]
    fn test_capital_t() {
        let mut list = NodeList::from_nodes(vec![
            disc(DiscretionarySubtype::Automatic),
            letter('T', LanguageTag::FRENCH),
            disc(DiscretionarySubtype::Automatic),
        ]);
        apply_euphonic_elision(&mut list, &SpacingConfig::default());
        assert_eq!(penalties(&list), vec![50, INF_PENALTY]);
    }

    #[test]
    fn test_non_french_t_untouched() {
        let mut list = NodeList::from_nodes(vec![
            disc(DiscretionarySubtype::Automatic),
            letter('t', LanguageTag(7)),
            disc(DiscretionarySubtype::Automatic),
        ]);
        apply_euphonic_elision(&mut list, &SpacingConfig::default());
        assert_eq!(penalties(&list), vec![50, 50]);
    }

    #[test]
    fn test_other_subtypes_and_letters_untouched() {
        let mut list = NodeList::from_nodes(vec![
            disc(DiscretionarySubtype::Regular),
            letter('t', LanguageTag::FRENCH),
            disc(DiscretionarySubtype::Automatic),
            letter('s', LanguageTag::FRENCH),
            disc(DiscretionarySubtype::Automatic),
            letter('t', LanguageTag::FRENCH),
            disc(DiscretionarySubtype::Explicit),
        ]);
        apply_euphonic_elision(&mut list, &SpacingConfig::default());
        assert_eq!(penalties(&list), vec![50, 50, 50, 50]);
        assert_eq!(list.len(), 7);
    }
}
