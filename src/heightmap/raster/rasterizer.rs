use tracing::debug;
use crate::heightmap::common::error::Result;
use crate::heightmap::grid::{ElevationRange, GridIndex};
use crate::heightmap::raster::types::Raster;
use crate::heightmap::xyz::types::Sample;

/// Writes every sample into a fresh raster.
///
/// Rows are flipped so the smallest y ends up on the bottom row. Samples
/// are applied in input order, so when two samples share a cell the later
/// one wins. Cells without a sample stay 0.
pub fn rasterize(samples: &[Sample], grid: &GridIndex, elevation: &ElevationRange) -> Result<Raster> {
    let mut raster = Raster::new(grid.width(), grid.height());
    let bottom_row = raster.height - 1;

    for sample in samples {
        let (column, row) = grid.cell_of(sample)?;
        raster.set(column, bottom_row - row, elevation.quantize(sample.z));
    }

    debug!("Rasterized {} samples into {}x{}", samples.len(), raster.width, raster.height);
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heightmap::common::error::ConversionError;

    fn build(samples: &[Sample]) -> Raster {
        let grid = GridIndex::from_samples(samples).unwrap();
        let elevation = ElevationRange::from_samples(samples).unwrap();
        rasterize(samples, &grid, &elevation).unwrap()
    }

    #[test]
    fn test_two_by_two_grid_is_flipped() {
        let raster = build(&[
            Sample::new(0.0, 0.0, 10.0),
            Sample::new(1.0, 0.0, 20.0),
            Sample::new(0.0, 1.0, 30.0),
            Sample::new(1.0, 1.0, 40.0),
        ]);

        assert_eq!((raster.width, raster.height), (2, 2));
        assert_eq!(raster.data, vec![170, 255, 0, 85]);
    }

    #[test]
    fn test_missing_cells_stay_black() {
        let raster = build(&[
            Sample::new(0.0, 0.0, 0.0),
            Sample::new(2.0, 2.0, 51.0),
            Sample::new(1.0, 1.0, 25.0),
        ]);

        assert_eq!((raster.width, raster.height), (3, 3));
        // top row holds y=2
        assert_eq!(raster.get(2, 0), Some(255));
        assert_eq!(raster.get(1, 1), Some(125));
        assert_eq!(raster.get(0, 2), Some(0));
        assert_eq!(raster.get(0, 0), Some(0));
        assert_eq!(raster.get(2, 2), Some(0));
        assert_eq!(raster.data.iter().filter(|&&v| v != 0).count(), 2);
    }

    #[test]
    fn test_last_write_wins_on_duplicate_cell() {
        let raster = build(&[
            Sample::new(0.0, 0.0, 0.0),
            Sample::new(1.0, 0.0, 51.0),
            Sample::new(0.0, 0.0, 51.0),
            Sample::new(0.0, 0.0, 25.0),
        ]);

        assert_eq!(raster.get(0, 0), Some(125));
        assert_eq!(raster.get(1, 0), Some(255));
    }

    #[test]
    fn test_single_sample_is_single_black_pixel() {
        let raster = build(&[Sample::new(3.0, 4.0, 99.0)]);
        assert_eq!(raster.data, vec![0]);
    }

    #[test]
    fn test_samples_off_grid_are_rejected() {
        let grid = GridIndex::from_samples(&[Sample::new(0.0, 0.0, 0.0)]).unwrap();
        let elevation = ElevationRange { min: 0.0, max: 0.0 };
        let err = rasterize(&[Sample::new(0.0, 9.0, 0.0)], &grid, &elevation).unwrap_err();
        assert!(matches!(err, ConversionError::SampleOutsideGrid { .. }));
    }
}
