//! Conversion configuration types

/// Lossless container the raster is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// PNG, 8-bit grayscale (default)
    #[default]
    Png,
    /// Baseline TIFF, 8-bit grayscale
    Tiff,
}

impl OutputFormat {
    /// File extension used when deriving the output path.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Tiff => "tif",
        }
    }
}

/// TIFF compression methods. Ignored for PNG output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

/// Configuration for XYZ to image conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Output container
    pub format: OutputFormat,
    /// Compression method for TIFF output
    pub compression: TiffCompression,
    /// Whether to reject empty or oversized rasters before allocating them
    pub validate_dimensions: bool,
    /// Largest allowed width or height when validating
    pub max_dimension: Option<usize>,
    /// Encode into a temporary file and rename it over the destination
    pub atomic_write: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            compression: TiffCompression::None,
            validate_dimensions: true,
            max_dimension: None,
            atomic_write: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    format: Option<OutputFormat>,
    compression: Option<TiffCompression>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    atomic_write: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn atomic_write(mut self, enable: bool) -> Self {
        self.atomic_write = Some(enable);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            format: self.format.unwrap_or(default.format),
            compression: self.compression.unwrap_or(default.compression),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            atomic_write: self.atomic_write.unwrap_or(default.atomic_write),
        }
    }
}
