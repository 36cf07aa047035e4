//! Common utilities module
//!
//! Shared error type used by every stage of the heightmap pipeline.

pub mod error;

pub use error::{ConversionError, Result};
