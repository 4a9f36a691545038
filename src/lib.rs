//! French Typography WASM Module
//!
//! Locale-specific inline spacing for a document layout engine. Given a
//! finished paragraph as a linked stream of content nodes, the passes in
//! `french` rewrite it in place: unbreakable, width-adjusted spaces around
//! `! ? ; :` and guillemets, and no line break after an elided liaison "t".

pub mod api;
pub mod fonts;
pub mod french;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use fonts::{FontMetricCache, FontMetrics, FontMetricsProvider, StaticFontTable};
pub use french::{apply_euphonic_elision, apply_french_rules, apply_punctuation_spacing, SpacingConfig};
pub use models::{
    AttributeSet, BoxSubtype, ContentNode, DiscretionaryBreak, DiscretionarySubtype, FontId, Glue,
    Glyph, Kern, LanguageTag, NodeId, NodeList, Penalty, INF_PENALTY,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console")]
    {
        console_error_panic_hook::set_once();
        // Already initialised when the host reloads the module
        let _ = console_log::init_with_level(log::Level::Debug);
    }

    log::info!("French typography WASM module initialized");
}
