//! WASM API for French spacing
//!
//! The host registers its fonts once, then hands over one paragraph at a time
//! as an array of nodes and gets the rewritten array back. Font metrics live
//! in a process-wide registry; font ids are immutable once registered, so the
//! cache in front of it never needs invalidating.

use super::helpers::{deserialize, deserialize_or_default, serialize, ApiError};
use crate::fonts::{FontMetricCache, FontMetrics, StaticFontTable};
use crate::french::{apply_euphonic_elision, apply_french_rules, SpacingConfig};
use crate::models::{ContentNode, FontId, NodeList};
use lazy_static::lazy_static;
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;

// Process-wide font registry with its metric cache
lazy_static! {
    static ref FONTS: Mutex<FontMetricCache<StaticFontTable>> =
        Mutex::new(FontMetricCache::new(StaticFontTable::new()));
}

fn lock_fonts() -> Result<MutexGuard<'static, FontMetricCache<StaticFontTable>>, ApiError> {
    FONTS.lock().map_err(|_| ApiError::LockPoisoned)
}

/// Declare a font's interword-space metrics
///
/// Each id can be registered once; a second registration is rejected so
/// cached lookups stay valid.
pub fn register_font_metrics(font: FontId, metrics: FontMetrics) -> Result<(), ApiError> {
    if !font.is_valid() || !metrics.is_well_formed() {
        return Err(ApiError::InvalidMetrics(font.0));
    }
    let mut fonts = lock_fonts()?;
    if !fonts.provider_mut().register(font, metrics) {
        return Err(ApiError::FontAlreadyRegistered(font.0));
    }
    // Paragraphs set before registration may have cached a miss
    fonts.declare(font, metrics);
    log::info!("Registered font {}: {:?}", font.0, metrics);
    Ok(())
}

/// Run both French passes over a paragraph, using the registered fonts
pub fn process_nodes(nodes: Vec<ContentNode>, config: &SpacingConfig) -> Result<Vec<ContentNode>, ApiError> {
    let mut list = NodeList::from_nodes(nodes);
    let input_len = list.len();
    {
        let mut fonts = lock_fonts()?;
        apply_french_rules(&mut list, &mut *fonts, config);
    }
    log::debug!("French spacing: {} nodes in, {} out", input_len, list.len());
    Ok(list.to_vec())
}

/// Run only the euphonic-elision pass over a paragraph
pub fn elide_nodes(nodes: Vec<ContentNode>, config: &SpacingConfig) -> Vec<ContentNode> {
    let mut list = NodeList::from_nodes(nodes);
    apply_euphonic_elision(&mut list, config);
    list.to_vec()
}

/// JSON-in, JSON-out form of `process_nodes`
///
/// `config_json` of `None` means the default configuration.
pub fn process_nodes_json(nodes_json: &str, config_json: Option<&str>) -> Result<String, ApiError> {
    let nodes: Vec<ContentNode> = serde_json::from_str(nodes_json)?;
    let config = match config_json {
        Some(json) => SpacingConfig::from_json(json)?,
        None => SpacingConfig::default(),
    };
    let output = process_nodes(nodes, &config)?;
    Ok(serde_json::to_string(&output)?)
}

// ============================================================================
// JavaScript bindings
// ============================================================================

/// Register a font's interword space (width, stretch, shrink in points)
#[wasm_bindgen(js_name = registerFont)]
pub fn register_font(font_id: u32, width: f32, stretch: f32, shrink: f32) -> Result<(), JsValue> {
    register_font_metrics(FontId(font_id), FontMetrics::new(width, stretch, shrink))?;
    Ok(())
}

/// Apply French punctuation spacing (and euphonic elision unless disabled)
///
/// # Parameters
/// - `nodes_js`: array of content nodes, e.g. `{ type: "glyph", char: "!", font: 1, language: 1, attributes: 1 }`
/// - `config_js`: optional spacing configuration (camelCase keys)
///
/// # Returns
/// The rewritten array of content nodes
#[wasm_bindgen(js_name = applyFrenchSpacing)]
pub fn apply_french_spacing(nodes_js: JsValue, config_js: JsValue) -> Result<JsValue, JsValue> {
    let nodes: Vec<ContentNode> = deserialize(nodes_js, "Node deserialization error")?;
    let config: SpacingConfig = deserialize_or_default(config_js, "Config deserialization error")?;
    config.validate().map_err(ApiError::from)?;

    log::info!("applyFrenchSpacing called: {} nodes", nodes.len());
    let output = process_nodes(nodes, &config)?;
    serialize(&output, "Node serialization error")
}

/// Apply only the euphonic-elision pass
#[wasm_bindgen(js_name = applyEuphonicElision)]
pub fn apply_euphonic_elision_js(nodes_js: JsValue, config_js: JsValue) -> Result<JsValue, JsValue> {
    let nodes: Vec<ContentNode> = deserialize(nodes_js, "Node deserialization error")?;
    let config: SpacingConfig = deserialize_or_default(config_js, "Config deserialization error")?;

    log::info!("applyEuphonicElision called: {} nodes", nodes.len());
    serialize(&elide_nodes(nodes, &config), "Node serialization error")
}
