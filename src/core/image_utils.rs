use image::Rgb;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::path::Path;

#[derive(Clone, Debug)]
/**
 * Used to map from image space into the "regular" domain used to generate the fractals.
 * The `n` pixels span the half-open interval [x0, x1): pixel 0 lands exactly on `x0`,
 * and pixel `n` (one past the end) would land on `x1`.
 */
pub struct LinearPixelMap {
    offset: f64,
    span: f64,
    count: f64,
}

impl LinearPixelMap {
    pub fn new(n: u32, x0: f64, x1: f64) -> LinearPixelMap {
        assert!(n > 0);
        LinearPixelMap {
            offset: x0,
            span: x1 - x0,
            count: n as f64,
        }
    }

    /// Square view centered on the origin: [-half_width, half_width).
    pub fn new_centered(n: u32, half_width: f64) -> LinearPixelMap {
        LinearPixelMap::new(n, -half_width, half_width)
    }

    // Map from pixel (integer) to point (float)
    pub fn map(&self, index: u32) -> f64 {
        self.span * (index as f64) / self.count + self.offset
    }
}

/**
 * Square grid of colors, stored row-major: the pixel at column `i` and row `j`
 * lives at flat index `j * resolution + i`.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    resolution: u32,
    pixels: Vec<Rgb<u8>>,
}

impl PixelBuffer {
    pub fn new(resolution: u32, pixels: Vec<Rgb<u8>>) -> PixelBuffer {
        assert_eq!(
            pixels.len(),
            (resolution as usize) * (resolution as usize),
            "pixel count does not match resolution"
        );
        PixelBuffer { resolution, pixels }
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn pixels(&self) -> &[Rgb<u8>] {
        &self.pixels
    }

    pub fn get(&self, i: u32, j: u32) -> Rgb<u8> {
        self.pixels[(j as usize) * (self.resolution as usize) + (i as usize)]
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, Rgb<u8>> {
        self.pixels.chunks(self.resolution as usize)
    }

    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.resolution, self.resolution, |x, y| self.get(x, y))
    }
}

/**
 * Evaluates `pixel_renderer(i, j)` for every column `i` and row `j` of a square grid.
 * Rows are computed in parallel and gathered in order, so the result is identical to
 * a sequential row-major sweep.
 */
pub fn generate_pixel_buffer<F>(resolution: u32, pixel_renderer: F) -> PixelBuffer
where
    F: Fn(u32, u32) -> Rgb<u8> + Sync,
{
    let pixel_renderer = &pixel_renderer;
    let pixels: Vec<Rgb<u8>> = (0..resolution)
        .into_par_iter()
        .flat_map_iter(|j| (0..resolution).map(move |i| pixel_renderer(i, j)))
        .collect();
    PixelBuffer::new(resolution, pixels)
}

pub fn write_image_to_file<F, T, E>(filename: &Path, save_lambda: F) -> Result<T, E>
where
    F: FnOnce(&Path) -> Result<T, E>,
    E: std::fmt::Display,
{
    let result = save_lambda(filename);
    match &result {
        Ok(_) => log::info!("Wrote image file to: {}", filename.display()),
        Err(err) => log::error!("Unable to write image file {}: {}", filename.display(), err),
    }
    result
}
