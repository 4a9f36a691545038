//! Interword-space metrics per font
//!
//! The font subsystem is reached through `FontMetricsProvider`. The cache in
//! front of it is append-only: font ids are immutable once the host assigns
//! them, so an entry (hit or miss) never goes stale.

use crate::models::FontId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Interword-space parameters of a font, in points
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FontMetrics {
    pub space_width: f32,
    pub space_stretch: f32,
    pub space_shrink: f32,
}

impl FontMetrics {
    pub fn new(space_width: f32, space_stretch: f32, space_shrink: f32) -> Self {
        Self { space_width, space_stretch, space_shrink }
    }

    /// Check that every component is a finite, non-negative number
    pub fn is_well_formed(&self) -> bool {
        [self.space_width, self.space_stretch, self.space_shrink]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Source of font metrics (the host's font subsystem)
pub trait FontMetricsProvider {
    /// Metrics of the font's interword space, or `None` when it declares none
    fn space_metrics(&self, font: FontId) -> Option<FontMetrics>;
}

impl<F> FontMetricsProvider for F
where
    F: Fn(FontId) -> Option<FontMetrics>,
{
    fn space_metrics(&self, font: FontId) -> Option<FontMetrics> {
        self(font)
    }
}

/// Provider backed by a table the host fills in up front
#[derive(Debug, Clone, Default)]
pub struct StaticFontTable {
    fonts: HashMap<FontId, FontMetrics>,
}

impl StaticFontTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a font's metrics
    ///
    /// Returns `false` without touching the table if the id is already taken.
    pub fn register(&mut self, font: FontId, metrics: FontMetrics) -> bool {
        if self.fonts.contains_key(&font) {
            return false;
        }
        self.fonts.insert(font, metrics);
        true
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl FontMetricsProvider for StaticFontTable {
    fn space_metrics(&self, font: FontId) -> Option<FontMetrics> {
        self.fonts.get(&font).copied()
    }
}

/// Memoizing front for a `FontMetricsProvider`
#[derive(Debug, Clone)]
pub struct FontMetricCache<P> {
    provider: P,
    entries: HashMap<FontId, Option<FontMetrics>>,
}

impl<P: FontMetricsProvider> FontMetricCache<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, entries: HashMap::new() }
    }

    /// Cached metrics for `font`, querying the provider on first access
    pub fn lookup(&mut self, font: FontId) -> Option<FontMetrics> {
        if !font.is_valid() {
            return None;
        }
        if let Some(entry) = self.entries.get(&font) {
            return *entry;
        }

        let metrics = self.provider.space_metrics(font).filter(|m| {
            if !m.is_well_formed() {
                log::warn!("Ignoring malformed space metrics for font {}: {:?}", font.0, m);
            }
            m.is_well_formed()
        });
        if metrics.is_none() {
            log::debug!("Font {} declares no interword space", font.0);
        }

        self.entries.insert(font, metrics);
        metrics
    }

    /// Number of fonts looked up so far (hits and misses)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the provider, for hosts that declare fonts late
    ///
    /// A font whose miss is already cached stays a miss until it is passed
    /// to `declare` as well.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Record metrics for a font the host declares after the first lookups
    ///
    /// A cached miss becomes a hit. A cached hit is never overwritten, and
    /// malformed metrics are refused; both return `false`. Fonts not looked
    /// up yet are left to the provider.
    pub fn declare(&mut self, font: FontId, metrics: FontMetrics) -> bool {
        if !font.is_valid() || !metrics.is_well_formed() {
            return false;
        }
        match self.entries.get_mut(&font) {
            Some(Some(_)) => false,
            Some(entry) => {
                log::debug!("Font {} declared after a cached miss", font.0);
                *entry = Some(metrics);
                true
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_provider_queried_once_per_font() {
        let calls = Cell::new(0);
        let provider = |font: FontId| {
            calls.set(calls.get() + 1);
            (font == FontId(1)).then(|| FontMetrics::new(10.0, 3.0, 2.0))
        };
        let mut cache = FontMetricCache::new(provider);

        assert_eq!(cache.lookup(FontId(1)), Some(FontMetrics::new(10.0, 3.0, 2.0)));
        assert_eq!(cache.lookup(FontId(1)), Some(FontMetrics::new(10.0, 3.0, 2.0)));
        assert_eq!(calls.get(), 1);

        // Misses are memoized too
        assert_eq!(cache.lookup(FontId(7)), None);
        assert_eq!(cache.lookup(FontId(7)), None);
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_null_font_never_reaches_provider() {
        let calls = Cell::new(0);
        let mut cache = FontMetricCache::new(|_: FontId| {
            calls.set(calls.get() + 1);
            Some(FontMetrics::new(1.0, 1.0, 1.0))
        });

        assert_eq!(cache.lookup(FontId::NULL), None);
        assert_eq!(calls.get(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_malformed_metrics_are_a_miss() {
        let mut cache =
            FontMetricCache::new(|_: FontId| Some(FontMetrics::new(-4.0, 1.0, 1.0)));
        assert_eq!(cache.lookup(FontId(2)), None);

        let mut cache =
            FontMetricCache::new(|_: FontId| Some(FontMetrics::new(4.0, f32::NAN, 1.0)));
        assert_eq!(cache.lookup(FontId(2)), None);
    }

    #[test]
    fn test_declare_fills_cached_miss() {
        let mut cache = FontMetricCache::new(StaticFontTable::new());
        let metrics = FontMetrics::new(10.0, 3.0, 2.0);

        assert_eq!(cache.lookup(FontId(3)), None);
        assert!(cache.provider_mut().register(FontId(3), metrics));
        assert_eq!(cache.lookup(FontId(3)), None);

        assert!(cache.declare(FontId(3), metrics));
        assert_eq!(cache.lookup(FontId(3)), Some(metrics));

        // Hits are final
        assert!(!cache.declare(FontId(3), FontMetrics::new(99.0, 0.0, 0.0)));
        assert_eq!(cache.lookup(FontId(3)), Some(metrics));
    }

    #[test]
    fn test_declare_before_lookup_and_bad_input() {
        let mut cache = FontMetricCache::new(|_: FontId| -> Option<FontMetrics> { None });

        assert!(cache.declare(FontId(4), FontMetrics::new(1.0, 0.0, 0.0)));
        assert!(cache.is_empty());
        assert!(!cache.declare(FontId::NULL, FontMetrics::new(1.0, 0.0, 0.0)));

        assert_eq!(cache.lookup(FontId(5)), None);
        assert!(!cache.declare(FontId(5), FontMetrics::new(-1.0, 0.0, 0.0)));
        assert_eq!(cache.lookup(FontId(5)), None);
    }

    #[test]
    fn test_static_table_is_append_only() {
        let mut table = StaticFontTable::new();
        assert!(table.register(FontId(1), FontMetrics::new(10.0, 3.0, 2.0)));
        assert!(!table.register(FontId(1), FontMetrics::new(99.0, 0.0, 0.0)));
        assert_eq!(table.space_metrics(FontId(1)), Some(FontMetrics::new(10.0, 3.0, 2.0)));
        assert_eq!(table.len(), 1);
    }
}
