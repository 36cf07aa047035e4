//! Heightmap conversion pipeline
//!
//! Turns XYZ elevation samples into a grayscale raster image. Each stage
//! has its own module: sample reading, grid indexing, rasterization and
//! image encoding, tied together by the conversion pipeline.

pub mod xyz;
pub mod grid;
pub mod raster;
pub mod encode;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use xyz::{
    Sample,
    SampleReader,
    XyzTextReader,
};

pub use grid::{
    CoordinateAxis,
    ElevationRange,
    GridIndex,
};

pub use raster::{
    Raster,
    rasterize,
};

pub use encode::{
    OutputFormat,
    TiffCompression,
    ConversionConfig,
    ConversionConfigBuilder,
    RasterWriter,
    PngRasterWriter,
    TiffRasterWriter,
};

pub use conversions::{
    ConversionSummary,
    XyzToImagePipeline,
    output_path_for,
    validate_input_path,
};
