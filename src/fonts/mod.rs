//! Font collaborators: metric providers and the metric cache

pub mod metric_cache;

pub use metric_cache::{FontMetricCache, FontMetrics, FontMetricsProvider, StaticFontTable};
