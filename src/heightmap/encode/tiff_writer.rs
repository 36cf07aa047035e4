use std::io::Write;
use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder, colortype};
use tracing::debug;
use crate::heightmap::common::error::{Result, ConversionError};
use crate::heightmap::encode::types::{ConversionConfig, TiffCompression};
use crate::heightmap::encode::writer::{RasterWriter, encoder_dimensions};
use crate::heightmap::raster::types::Raster;

pub struct TiffRasterWriter;

impl RasterWriter for TiffRasterWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", raster.width, raster.height);

        let (width, height) = encoder_dimensions(raster)?;

        // TiffEncoder needs Seek; encode in memory first.
        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        let mut encoder = TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?
            .with_compression(compression);

        encoder
            .write_image::<colortype::Gray8>(width, height, &raster.data)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;
        output.flush()?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
