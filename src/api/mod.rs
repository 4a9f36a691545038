//! French spacing WASM API
//!
//! # Module Structure
//!
//! - `helpers`: API error type and JavaScript serialization glue
//! - `core`: font registration and the paragraph entry points

pub mod core;
pub mod helpers;

pub use self::core::*;
pub use helpers::ApiError;
