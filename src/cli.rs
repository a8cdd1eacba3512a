pub mod args;
pub mod gradient_swatch;
pub mod render;
