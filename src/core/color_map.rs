use image::Rgb;
use iter_num_tools::lin_space;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::core::interpolation::{InterpolationKeyframe, Interpolator, KeyframeInterpolator};

/**
 * Represents a single "keyframe" of the color map, pairing a
 * "query" with the color that should be produced at that query point.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorMapKeyFrame {
    pub query: f32,       // specify location of this color within the map; on [0,1]
    pub rgb_raw: [u8; 3], // [R, G, B]
}

pub trait ColorMapper {
    fn compute_pixel(&self, query: f32) -> Rgb<u8>;
}

/**
 * Simple implementation of a "piecewise linear" color map, where the colors
 * are represented by simple linear interpolation in RGB color space.
 */
pub struct ColorMap<F>
where
    F: Interpolator<f32, Vector3<f32>>,
{
    interpolator: KeyframeInterpolator<f32, Vector3<f32>, F>,
}

impl<F> ColorMap<F>
where
    F: Interpolator<f32, Vector3<f32>>,
{
    pub fn new(keyframes: &[ColorMapKeyFrame], interpolator: F) -> Self {
        let internal_keyframes: Vec<InterpolationKeyframe<f32, Vector3<f32>>> = keyframes
            .iter()
            .map(|kf| InterpolationKeyframe {
                input: kf.query,
                output: Vector3::new(
                    kf.rgb_raw[0] as f32,
                    kf.rgb_raw[1] as f32,
                    kf.rgb_raw[2] as f32,
                ),
            })
            .collect();

        Self {
            interpolator: KeyframeInterpolator::new(internal_keyframes, interpolator),
        }
    }
}

impl<F> ColorMapper for ColorMap<F>
where
    F: Interpolator<f32, Vector3<f32>>,
{
    fn compute_pixel(&self, query: f32) -> Rgb<u8> {
        let color: Vector3<f32> = self.interpolator.evaluate(query);
        Rgb([
            color[0].round().clamp(0.0, 255.0) as u8,
            color[1].round().clamp(0.0, 255.0) as u8,
            color[2].round().clamp(0.0, 255.0) as u8,
        ])
    }
}

/**
 * Spreads a list of colors uniformly over the query domain [0, 1].
 */
pub fn uniform_keyframes(waypoints_rgb: &[[u8; 3]]) -> Vec<ColorMapKeyFrame> {
    lin_space(0.0..=1.0, waypoints_rgb.len())
        .zip(waypoints_rgb)
        .map(|(query, rgb_raw)| ColorMapKeyFrame {
            query,
            rgb_raw: *rgb_raw,
        })
        .collect()
}

/**
 * Builds a color table with `step_count` entries by sampling a piecewise
 * linear map through `waypoints_rgb` at evenly spaced queries. The first
 * entry is the first waypoint and the last entry is the last waypoint.
 */
pub fn make_gradient<F>(
    waypoints_rgb: &[[u8; 3]],
    step_count: usize,
    interpolator: F,
) -> Vec<Rgb<u8>>
where
    F: Interpolator<f32, Vector3<f32>>,
{
    assert!(!waypoints_rgb.is_empty(), "gradient needs at least one color");
    if waypoints_rgb.len() == 1 || step_count <= 1 {
        return vec![Rgb(waypoints_rgb[0]); step_count];
    }
    let color_map = ColorMap::new(&uniform_keyframes(waypoints_rgb), interpolator);
    lin_space(0.0..=1.0, step_count)
        .map(|query| color_map.compute_pixel(query))
        .collect()
}
