use std::path::{Path, PathBuf};
use crate::heightmap::common::error::{Result, ConversionError};
use crate::heightmap::encode::OutputFormat;

/// Extension of elevation input files, compared case-insensitively.
pub const INPUT_EXTENSION: &str = "xyz";

pub fn validate_input_path(path: &Path) -> Result<()> {
    let is_xyz = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION));

    if is_xyz {
        Ok(())
    } else {
        Err(ConversionError::UnsupportedFormat(path.display().to_string()))
    }
}

/// Input path with its extension swapped for the image extension.
pub fn output_path_for(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_extension_is_case_insensitive() {
        assert!(validate_input_path(Path::new("dgm1_33_412_5654.xyz")).is_ok());
        assert!(validate_input_path(Path::new("data/TILE.XYZ")).is_ok());
        assert!(validate_input_path(Path::new("tile.Xyz")).is_ok());
    }

    #[test]
    fn test_other_extensions_are_rejected() {
        for path in ["input.txt", "input", "input.xyz.bak", ".xyz"] {
            let err = validate_input_path(Path::new(path)).unwrap_err();
            assert!(matches!(err, ConversionError::UnsupportedFormat(_)), "{path}");
        }
    }

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            output_path_for(Path::new("data/tile.XYZ"), OutputFormat::Png),
            PathBuf::from("data/tile.png")
        );
        assert_eq!(
            output_path_for(Path::new("a.b.xyz"), OutputFormat::Tiff),
            PathBuf::from("a.b.tif")
        );
    }
}
