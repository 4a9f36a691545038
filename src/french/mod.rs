//! French typographic rules for paragraph node streams
//!
//! ## Modules
//!
//! - `chars`: punctuation classes and null-context sets
//! - `glue`: ratio triples and glue synthesis
//! - `context`: neighbour lookup and noise canonicalization
//! - `punctuation`: the spacing pass
//! - `elision`: the euphonic "t" pass
//! - `config`: paragraph-level settings
//! - `errors`: error types

pub mod chars;
pub mod config;
pub mod context;
pub mod elision;
pub mod errors;
pub mod glue;
pub mod punctuation;

pub use config::SpacingConfig;
pub use context::{left_context, right_context, Neighbor, TIGHT_GLUE_WIDTH};
pub use elision::apply_euphonic_elision;
pub use errors::{ConfigError, SpacingError};
pub use glue::{GlueRatios, GlueSynthesizer, OverrideSkip, SpacingClass};
pub use punctuation::apply_punctuation_spacing;

use crate::fonts::{FontMetricCache, FontMetricsProvider};
use crate::models::{NodeId, NodeList};

/// Run punctuation spacing, then (if enabled) euphonic-elision protection
///
/// This is the hook a host calls once per paragraph after generic kerning.
pub fn apply_french_rules<P: FontMetricsProvider>(
    list: &mut NodeList,
    cache: &mut FontMetricCache<P>,
    config: &SpacingConfig,
) -> Option<NodeId> {
    let head = apply_punctuation_spacing(list, cache, config);
    if config.euphonic_elision {
        return apply_euphonic_elision(list, config);
    }
    head
}
