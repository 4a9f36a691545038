//! Utility modules
//!
//! - `builder`: paragraph streams from plain text

pub mod builder;

pub use builder::{ParagraphBuilder, RunStyle};
