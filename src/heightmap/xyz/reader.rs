use crate::heightmap::common::error::Result;
use crate::heightmap::xyz::types::Sample;

pub trait SampleReader {
    fn read_samples(&self, data: &[u8]) -> Result<Vec<Sample>>;
}
