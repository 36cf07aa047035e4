use tracing::{debug, info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::heightmap::{
    common::error::{ConversionError, Result},
    encode::{ConversionConfig, RasterWriter, writer_for},
    grid::{ElevationRange, GridIndex},
    raster::rasterize,
    xyz::{SampleReader, XyzTextReader},
};

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub width: usize,
    pub height: usize,
    pub sample_count: usize,
    pub elevation: ElevationRange,
}

impl ConversionSummary {
    pub fn scale(&self) -> f64 {
        self.elevation.scale()
    }
}

pub struct XyzToImagePipeline<R: SampleReader, W: RasterWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl XyzToImagePipeline<XyzTextReader, Box<dyn RasterWriter>> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: XyzTextReader,
            writer: writer_for(config.format),
            config,
        }
    }
}

impl<R: SampleReader, W: RasterWriter> XyzToImagePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Runs the whole pipeline in memory and writes the encoded image to `output`.
    ///
    /// Nothing is written to `output` unless every stage before encoding succeeds.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<ConversionSummary> {
        let samples = {
            let _span = tracing::info_span!("parse_samples").entered();
            self.reader.read_samples(input_data)?
        };

        if samples.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        let grid = {
            let _span = tracing::info_span!("index_grid", samples = samples.len()).entered();
            GridIndex::from_samples(&samples)?
        };
        self.validate_dimensions(grid.width(), grid.height())?;

        let elevation = {
            let _span = tracing::info_span!("normalize_elevation").entered();
            ElevationRange::from_samples(&samples)?
        };

        info!(
            "Image size: {}x{}, Z range: {} to {}",
            grid.width(),
            grid.height(),
            elevation.min,
            elevation.max
        );
        info!("Z normalization factor: {} levels per unit", elevation.scale());

        let raster = {
            let _span = tracing::info_span!(
                "rasterize",
                width = grid.width(),
                height = grid.height()
            ).entered();
            rasterize(&samples, &grid, &elevation)?
        };

        {
            let _span = tracing::info_span!("encode_image", format = ?self.config.format).entered();
            self.writer.write_raster(&raster, output, &self.config)?;
        }

        Ok(ConversionSummary {
            width: raster.width,
            height: raster.height,
            sample_count: samples.len(),
            elevation,
        })
    }

    /// Converts `input_path` and stores the image at `output_path`.
    ///
    /// The image is fully encoded before the destination is touched. With
    /// `atomic_write` the bytes go to a temporary file next to the
    /// destination which is then renamed into place.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<ConversionSummary> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        let summary = self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("persist_output", bytes = encoded.len()).entered();
            self.persist(output_path, &encoded)?;
        }

        info!("Saved {}", output_path.display());
        Ok(summary)
    }

    fn persist(&self, output_path: &Path, encoded: &[u8]) -> Result<()> {
        let write_error =
            |e: std::io::Error| ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e));

        if !self.config.atomic_write {
            let mut output_file = std::fs::File::create(output_path).map_err(write_error)?;
            output_file.write_all(encoded).map_err(write_error)?;
            return Ok(());
        }

        let directory = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = tempfile::Builder::new();
        // Temp files default to 0600; request 0666 so the umask decides, as with File::create.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }

        let mut staged = builder.tempfile_in(directory).map_err(write_error)?;
        debug!("Staging output at {}", staged.path().display());
        staged.write_all(encoded).map_err(write_error)?;
        staged.as_file().sync_all().map_err(write_error)?;
        staged.persist(output_path).map_err(|e| write_error(e.error))?;

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}
