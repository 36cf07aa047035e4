//! Pipeline conversions module
//!
//! Orchestrates parse, index, normalize, rasterize and encode for one
//! input dataset.

mod paths;
mod xyz_to_image;

pub use paths::{INPUT_EXTENSION, output_path_for, validate_input_path};
pub use xyz_to_image::{ConversionSummary, XyzToImagePipeline};
