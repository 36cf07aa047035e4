//! XYZ sample reading module
//!
//! Parses plain-text elevation samples, one `x y z` triplet per line.

mod reader;
mod text_reader;
pub mod types;

pub use reader::SampleReader;
pub use text_reader::XyzTextReader;
pub use types::Sample;
