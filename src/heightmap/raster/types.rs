//! Raster types

/// Single-channel 8-bit image, row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Intensities, `width * height` bytes
    pub data: Vec<u8>,
}

impl Raster {
    /// All-black raster.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height],
        }
    }

    pub fn get(&self, column: usize, row: usize) -> Option<u8> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.data.get(row * self.width + column).copied()
    }

    pub fn set(&mut self, column: usize, row: usize, value: u8) {
        debug_assert!(column < self.width && row < self.height);
        self.data[row * self.width + column] = value;
    }
}
