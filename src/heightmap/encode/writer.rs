use std::io::Write;
use crate::heightmap::common::error::{Result, ConversionError};
use crate::heightmap::encode::png_writer::PngRasterWriter;
use crate::heightmap::encode::tiff_writer::TiffRasterWriter;
use crate::heightmap::encode::types::{ConversionConfig, OutputFormat};
use crate::heightmap::raster::types::Raster;

pub trait RasterWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}

/// Default writer for an output format.
pub fn writer_for(format: OutputFormat) -> Box<dyn RasterWriter> {
    match format {
        OutputFormat::Png => Box::new(PngRasterWriter),
        OutputFormat::Tiff => Box::new(TiffRasterWriter),
    }
}

impl<W: RasterWriter + ?Sized> RasterWriter for Box<W> {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        (**self).write_raster(raster, output, config)
    }
}

/// Image dimensions as the `u32` pair encoders expect.
pub(crate) fn encoder_dimensions(raster: &Raster) -> Result<(u32, u32)> {
    let invalid = || ConversionError::InvalidDimensions(raster.width, raster.height);
    let width = u32::try_from(raster.width).map_err(|_| invalid())?;
    let height = u32::try_from(raster.height).map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}
