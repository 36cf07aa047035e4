//! Grid indexing module
//!
//! Derives the raster geometry from a sample set: the sorted distinct
//! coordinates on each axis, and the elevation range used for quantization.

pub mod axis;
pub mod elevation;

pub use axis::{CoordinateAxis, GridIndex};
pub use elevation::ElevationRange;
