//! Rasterization module
//!
//! Places quantized elevations on an 8-bit grayscale grid.

mod rasterizer;
pub mod types;

pub use rasterizer::rasterize;
pub use types::Raster;
