use serde::{Deserialize, Serialize};

use crate::core::{
    color_map::make_gradient,
    file_io::{serialize_to_json, FilePrefix},
    image_utils::write_image_to_file,
    interpolation::LinearInterpolator,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GradientSwatchParams {
    /// [width, height] of the swatch image.
    pub resolution: [u32; 2],
    pub waypoints_rgb: Vec<[u8; 3]>,
    /// Number of entries in the color table (the iteration limit, when rendering).
    pub step_count: usize,
}

/// Each column of the swatch shows the table entry at the matching fraction of its length.
pub fn gradient_swatch_image(params: &GradientSwatchParams) -> image::RgbImage {
    assert!(params.step_count > 0, "step count must be positive");
    let table = make_gradient(&params.waypoints_rgb, params.step_count, LinearInterpolator);
    let [width, height] = params.resolution;
    image::RgbImage::from_fn(width, height, |x, _| {
        let index = (x as usize * table.len()) / (width as usize);
        table[index.min(table.len() - 1)]
    })
}

pub fn generate_gradient_swatch(
    params_path: &str,
    file_prefix: FilePrefix,
) -> Result<(), Box<dyn std::error::Error>> {
    let params: GradientSwatchParams =
        serde_json::from_str(&std::fs::read_to_string(params_path)?)?;

    serialize_to_json(file_prefix.full_path_with_suffix(".json"), &params)?;

    let imgbuf = gradient_swatch_image(&params);
    write_image_to_file(&file_prefix.full_path_with_suffix(".png"), |f| imgbuf.save(f))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_gradient_swatch_columns() {
        let params = GradientSwatchParams {
            resolution: [8, 3],
            waypoints_rgb: vec![[0, 0, 0], [255, 255, 255]],
            step_count: 2,
        };
        let swatch = gradient_swatch_image(&params);
        assert_eq!(swatch.dimensions(), (8, 3));
        assert_eq!(*swatch.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*swatch.get_pixel(3, 2), Rgb([0, 0, 0]));
        assert_eq!(*swatch.get_pixel(4, 1), Rgb([255, 255, 255]));
        assert_eq!(*swatch.get_pixel(7, 0), Rgb([255, 255, 255]));
    }
}
