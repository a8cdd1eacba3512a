pub mod color_map;
pub mod file_io;
pub mod image_utils;
pub mod interpolation;
pub mod ppm;
pub mod stopwatch;
