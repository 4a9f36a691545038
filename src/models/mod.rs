//! Paragraph node model
//!
//! - `core`: content node kinds and identifiers
//! - `attributes`: per-run French feature flags
//! - `list`: arena-backed doubly-linked node list

pub mod attributes;
pub mod core;
pub mod list;

pub use self::attributes::AttributeSet;
pub use self::core::*;
pub use self::list::{Ids, NodeId, NodeList};
