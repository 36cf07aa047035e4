//! Coordinate axes and the value-to-index mapping.

use tracing::debug;
use crate::heightmap::common::error::{Result, ConversionError};
use crate::heightmap::xyz::types::Sample;

/// Sorted set of distinct coordinate values on one axis.
///
/// A value's index is its rank in ascending order, so the mapping from
/// value to index is strictly monotonic.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateAxis {
    values: Vec<f64>,
}

impl CoordinateAxis {
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        // `+ 0.0` folds -0.0 into 0.0 so both spellings share one column.
        let mut values: Vec<f64> = values.into_iter().map(|v| v + 0.0).collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Rank of `value` among the axis coordinates, if it is one of them.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        let value = value + 0.0;
        self.values.binary_search_by(|probe| probe.total_cmp(&value)).ok()
    }
}

/// The x and y axes of a sample set. Width and height of the raster
/// are the axis lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct GridIndex {
    pub x_axis: CoordinateAxis,
    pub y_axis: CoordinateAxis,
}

impl GridIndex {
    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        if samples.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        let x_axis = CoordinateAxis::from_values(samples.iter().map(|s| s.x));
        let y_axis = CoordinateAxis::from_values(samples.iter().map(|s| s.y));

        debug!(
            "Indexed {} samples onto {} columns and {} rows",
            samples.len(),
            x_axis.len(),
            y_axis.len()
        );

        Ok(Self { x_axis, y_axis })
    }

    pub fn width(&self) -> usize {
        self.x_axis.len()
    }

    pub fn height(&self) -> usize {
        self.y_axis.len()
    }

    /// Column and unflipped row of a sample.
    pub fn cell_of(&self, sample: &Sample) -> Result<(usize, usize)> {
        match (self.x_axis.index_of(sample.x), self.y_axis.index_of(sample.y)) {
            (Some(column), Some(row)) => Ok((column, row)),
            _ => Err(ConversionError::SampleOutsideGrid { x: sample.x, y: sample.y }),
        }
    }
}
