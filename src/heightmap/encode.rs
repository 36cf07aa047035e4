//! Image encoding module
//!
//! Serializes rasters as lossless single-channel 8-bit images (PNG or TIFF)
//! and holds the conversion configuration.

mod writer;
mod png_writer;
mod tiff_writer;
pub mod types;

pub use writer::{RasterWriter, writer_for};
pub use png_writer::PngRasterWriter;
pub use tiff_writer::TiffRasterWriter;
pub use types::{OutputFormat, TiffCompression, ConversionConfig, ConversionConfigBuilder};
