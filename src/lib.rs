pub mod heightmap;
pub mod logger;
