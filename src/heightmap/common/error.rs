use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Unsupported input file: {0} (expected a .xyz file)")]
    UnsupportedFormat(String),

    #[error("Malformed sample on line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidEncoding(String),

    #[error("Input contains no samples")]
    EmptyInput,

    #[error("Sample at x={x}, y={y} does not lie on the grid")]
    SampleOutsideGrid { x: f64, y: f64 },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConversionError {
    /// True for errors caused by the content of the input rather than the filesystem.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedLine { .. }
                | Self::InvalidEncoding(_)
                | Self::EmptyInput
                | Self::InvalidDimensions(..)
        )
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
