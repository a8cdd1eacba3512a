use image::Rgb;
use num::complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::core::{
    color_map::make_gradient,
    image_utils::{generate_pixel_buffer, LinearPixelMap, PixelBuffer},
    interpolation::LinearInterpolator,
};

use super::{escape_time::escape_count, polynomial::ComplexPolynomial};

/// Selects how iteration counts are turned into colors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub enum ColorRule {
    /// Red channel ramp: `floor(255 * count / limit)`, black for points in the set.
    #[default]
    RedRamp,
    /// Color table interpolated through `waypoints_rgb`, with one entry per count.
    /// Points in the set are drawn with `terminal_color_rgb`.
    Gradient {
        waypoints_rgb: Vec<[u8; 3]>,
        #[serde(default)]
        terminal_color_rgb: [u8; 3],
    },
}

/// Precomputed state needed to color a single iteration count.
#[derive(Clone, Debug)]
pub enum FrameColorizer {
    RedRamp {
        iteration_limit: u32,
    },
    Gradient {
        table: Vec<Rgb<u8>>,
        terminal_color: Rgb<u8>,
    },
}

impl FrameColorizer {
    pub fn new(color_rule: &ColorRule, iteration_limit: u32) -> FrameColorizer {
        assert!(iteration_limit >= 1, "iteration limit must be positive");
        match color_rule {
            ColorRule::RedRamp => FrameColorizer::RedRamp { iteration_limit },
            ColorRule::Gradient {
                waypoints_rgb,
                terminal_color_rgb,
            } => FrameColorizer::Gradient {
                table: make_gradient(waypoints_rgb, iteration_limit as usize, LinearInterpolator),
                terminal_color: Rgb(*terminal_color_rgb),
            },
        }
    }

    pub fn color(&self, count: u32) -> Rgb<u8> {
        match self {
            FrameColorizer::RedRamp { iteration_limit } => {
                Rgb([red_ramp_intensity(count, *iteration_limit), 0, 0])
            }
            FrameColorizer::Gradient {
                table,
                terminal_color,
            } => {
                if count as usize >= table.len() {
                    *terminal_color
                } else {
                    table[count as usize]
                }
            }
        }
    }
}

/// Points in the set are black. A count of one (the point started outside of the view
/// radius) is drawn as if it had survived two iterations, so that regions clipped by
/// the escape radius blend in with their surroundings instead of showing up as black.
pub fn red_ramp_intensity(count: u32, iteration_limit: u32) -> u8 {
    let limit = iteration_limit as f64;
    let ratio = if count == iteration_limit {
        0.0
    } else if count == 1 {
        2.0 / limit
    } else {
        count as f64 / limit
    };
    (ratio * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Maps pixel `(i, j)` to `(2 eps i / n - eps, 2 eps j / n - eps)`.
pub struct FramePixelMapper {
    map: LinearPixelMap,
}

impl FramePixelMapper {
    pub fn new(resolution: u32, epsilon: f64) -> FramePixelMapper {
        FramePixelMapper {
            map: LinearPixelMap::new_centered(resolution, epsilon),
        }
    }

    pub fn map(&self, i: u32, j: u32) -> Complex64 {
        Complex64::new(self.map.map(i), self.map.map(j))
    }
}

/// Classifies every pixel of the square view [-eps, eps]^2, using `epsilon` as the
/// escape radius as well.
pub fn escape_counts(
    polynomial: &ComplexPolynomial,
    epsilon: f64,
    resolution: u32,
    iteration_limit: u32,
) -> Vec<u32> {
    let mapper = FramePixelMapper::new(resolution, epsilon);
    let mut counts = Vec::with_capacity((resolution as usize) * (resolution as usize));
    for j in 0..resolution {
        for i in 0..resolution {
            counts.push(escape_count(
                mapper.map(i, j),
                polynomial,
                epsilon,
                iteration_limit,
            ));
        }
    }
    counts
}

/// Renders one frame. Rows are rendered in parallel; the output is row-major.
pub fn rasterize_frame(
    polynomial: &ComplexPolynomial,
    epsilon: f64,
    resolution: u32,
    iteration_limit: u32,
    colorizer: &FrameColorizer,
) -> PixelBuffer {
    assert!(epsilon > 0.0, "epsilon must be positive, got {}", epsilon);
    let mapper = FramePixelMapper::new(resolution, epsilon);
    generate_pixel_buffer(resolution, |i, j| {
        let count = escape_count(mapper.map(i, j), polynomial, epsilon, iteration_limit);
        colorizer.color(count)
    })
}
