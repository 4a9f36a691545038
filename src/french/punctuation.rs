//! French punctuation spacing pass
//!
//! Walks the paragraph once, left to right. For each French glyph that is
//! high punctuation (`! ? ; :`) or a guillemet, decides whether an
//! unbreakable space belongs next to it and splices one in, replacing an
//! ordinary interword space that the author typed there.
//!
//! The inserted unit is either a single fixed no-break space glyph or a
//! `[Penalty(10000), Glue]` pair (`[Glue, Penalty(10000)]` after `»`). It is
//! built completely before the list is touched, so a glyph whose space cannot
//! be synthesized is left exactly as it was.

use super::chars::{
    is_guillemet_null_context, is_left_spaced_punct, is_null_context, is_right_spaced_punct,
    is_thick_space_punct, LEFT_GUILLEMET,
};
use super::config::SpacingConfig;
use super::context::{left_context, right_context, Neighbor};
use super::glue::{GlueSynthesizer, SpacingClass};
use crate::fonts::{FontMetricCache, FontMetricsProvider};
use crate::models::{ContentNode, Glyph, NodeId, NodeList};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Apply French punctuation spacing to a whole paragraph
///
/// Returns the list's head after the pass; it moves when the first node of
/// the paragraph was replaced or preceded by an insertion.
pub fn apply_punctuation_spacing<P: FontMetricsProvider>(
    list: &mut NodeList,
    cache: &mut FontMetricCache<P>,
    config: &SpacingConfig,
) -> Option<NodeId> {
    let mut synth = GlueSynthesizer::new(cache, config.override_skip);
    let mut cursor = list.head();

    while let Some(id) = cursor {
        if let Some(glyph) = spacing_candidate(list, id, config) {
            if is_left_spaced_punct(glyph.char) {
                space_left(list, &mut synth, config, id, &glyph);
            } else if is_right_spaced_punct(glyph.char) {
                space_right(list, &mut synth, config, id, &glyph);
            }
        }
        // Insertions after `id` are glue, penalties or a no-break space,
        // none of which is a candidate, so stepping onto them is harmless.
        cursor = list.next(id);
    }

    list.head()
}

/// The glyph at `id`, if it is French punctuation this pass may act on
fn spacing_candidate(list: &NodeList, id: NodeId, config: &SpacingConfig) -> Option<Glyph> {
    match list.get(id) {
        Some(ContentNode::Glyph(glyph))
            if config.is_french(glyph.language)
                && glyph.attributes.spacing_enabled()
                && glyph.font.is_valid()
                && (is_left_spaced_punct(glyph.char) || is_right_spaced_punct(glyph.char)) =>
        {
            Some(glyph.clone())
        }
        _ => None,
    }
}

fn space_left<P: FontMetricsProvider>(
    list: &mut NodeList,
    synth: &mut GlueSynthesizer<'_, P>,
    config: &SpacingConfig,
    id: NodeId,
    glyph: &Glyph,
) {
    let class = if glyph.char == LEFT_GUILLEMET {
        SpacingClass::Guillemet
    } else if is_thick_space_punct(glyph.char) {
        SpacingClass::Thick
    } else {
        SpacingClass::Thin
    };

    let before = left_context(list, id);
    let replaced = before.genuine_glue();

    let auto = match class {
        SpacingClass::Thin => !before.suppresses_auto(is_null_context),
        SpacingClass::Thick => {
            // `dit:-t-` style: a colon glued to what follows gets no space
            let after = right_context(list, id, config);
            glyph.attributes.auto_colon_space()
                && !before.suppresses_auto(is_null_context)
                && !matches!(after, Neighbor::Glyph(_) | Neighbor::Discretionary)
        }
        SpacingClass::Guillemet => {
            glyph.attributes.auto_guillemet_space() && !before.suppresses_auto(is_guillemet_null_context)
        }
    };

    if replaced.is_none() && !auto {
        return;
    }
    let Some(nodes) = spacing_nodes(synth, config, class, glyph, Side::Left) else {
        return;
    };

    if let Some(glue) = replaced {
        remove_typed_space(list, glue, Side::Left);
    }
    for node in nodes {
        list.insert_before(id, node);
    }
    log::trace!(
        "{} space before {:?} (node {}, {})",
        class.name(),
        glyph.char,
        id.0,
        if replaced.is_some() { "replaced" } else { "auto" }
    );
}

fn space_right<P: FontMetricsProvider>(
    list: &mut NodeList,
    synth: &mut GlueSynthesizer<'_, P>,
    config: &SpacingConfig,
    id: NodeId,
    glyph: &Glyph,
) {
    let after = right_context(list, id, config);
    let replaced = after.genuine_glue();
    let auto =
        glyph.attributes.auto_guillemet_space() && !after.suppresses_auto(is_guillemet_null_context);

    if replaced.is_none() && !auto {
        return;
    }
    let Some(nodes) = spacing_nodes(synth, config, SpacingClass::Guillemet, glyph, Side::Right) else {
        return;
    };

    if let Some(glue) = replaced {
        remove_typed_space(list, glue, Side::Right);
    }
    let mut anchor = id;
    for node in nodes {
        match list.insert_after(anchor, node) {
            Some(inserted) => anchor = inserted,
            None => break,
        }
    }
    log::trace!(
        "guillemet space after {:?} (node {}, {})",
        glyph.char,
        id.0,
        if replaced.is_some() { "replaced" } else { "auto" }
    );
}

/// Fresh nodes making up one unbreakable space, in list order
fn spacing_nodes<P: FontMetricsProvider>(
    synth: &mut GlueSynthesizer<'_, P>,
    config: &SpacingConfig,
    class: SpacingClass,
    glyph: &Glyph,
    side: Side,
) -> Option<Vec<ContentNode>> {
    if glyph.attributes.use_fixed_nbsp_glyph() {
        return Some(vec![ContentNode::Glyph(glyph.with_char(class.fixed_space()))]);
    }

    let glue = synth.make_glue(glyph.font, config.ratios(class), glyph.attributes)?;
    let glue = ContentNode::Glue(glue);
    Some(match side {
        Side::Left => vec![ContentNode::no_break(), glue],
        Side::Right => vec![glue, ContentNode::no_break()],
    })
}

/// Remove an interword space next to punctuation
///
/// A no-break penalty on the far side of the glue belongs to it (`~` typed by
/// the author, or a space inserted by an earlier run of this pass) and goes
/// too.
fn remove_typed_space(list: &mut NodeList, glue: NodeId, side: Side) {
    let bound = match side {
        Side::Left => list.prev(glue),
        Side::Right => list.next(glue),
    };
    if let Some(penalty) = bound.filter(|&id| list.get(id).map_or(false, ContentNode::is_no_break)) {
        list.remove(penalty);
    }
    list.remove(glue);
}
