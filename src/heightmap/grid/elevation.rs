//! Elevation normalization.
//!
//! Maps `[z_min, z_max]` linearly onto `[0, 255]`. The span is floored at
//! 1.0 so a flat dataset does not divide by zero. Quantization truncates
//! toward zero and is clamped, so values never wrap.

use crate::heightmap::common::error::{Result, ConversionError};
use crate::heightmap::xyz::types::Sample;

/// Smallest span used as the divisor.
const MIN_SPAN: f64 = 1.0;

/// Highest intensity of an 8-bit channel.
const MAX_INTENSITY: f64 = u8::MAX as f64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationRange {
    pub min: f64,
    pub max: f64,
}

impl ElevationRange {
    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        let mut iter = samples.iter();
        let first = iter.next().ok_or(ConversionError::EmptyInput)?;

        let (min, max) = iter.fold((first.z, first.z), |(min, max), s| {
            (min.min(s.z), max.max(s.z))
        });

        Ok(Self { min, max })
    }

    /// `max(1.0, max - min)`.
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(MIN_SPAN)
    }

    /// Intensity steps per elevation unit.
    pub fn scale(&self) -> f64 {
        MAX_INTENSITY / self.span()
    }

    pub fn quantize(&self, z: f64) -> u8 {
        let level = ((z - self.min) * self.scale()).clamp(0.0, MAX_INTENSITY);
        level as u8
    }
}
