use std::io::Write;
use image::{ExtendedColorType, ImageEncoder};
use image::codecs::png::PngEncoder;
use tracing::debug;
use crate::heightmap::common::error::{Result, ConversionError};
use crate::heightmap::encode::types::ConversionConfig;
use crate::heightmap::encode::writer::{RasterWriter, encoder_dimensions};
use crate::heightmap::raster::types::Raster;

pub struct PngRasterWriter;

impl RasterWriter for PngRasterWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write, _config: &ConversionConfig) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", raster.width, raster.height);

        let (width, height) = encoder_dimensions(raster)?;

        PngEncoder::new(&mut *output)
            .write_image(&raster.data, width, height, ExtendedColorType::L8)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.flush()?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
