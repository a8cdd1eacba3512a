use serde::{Deserialize, Serialize};

use crate::core::{
    file_io::{serialize_to_json, FilePrefix},
    image_utils::{write_image_to_file, PixelBuffer},
    ppm::write_ppm_file,
    stopwatch::Stopwatch,
};

use super::{
    epsilon::{frame_epsilons, EpsilonMode},
    escape_time::ConvergenceParams,
    julia_frame::{rasterize_frame, ColorRule, FrameColorizer},
    polynomial::{ComplexPolynomial, PolynomialPath, PolynomialPathParams},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain-text "P3" pixmap.
    #[default]
    Ppm,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Ppm => "ppm",
            OutputFormat::Png => "png",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JuliaSeriesParams {
    pub path: PolynomialPathParams,
    pub time_domain: [f64; 2],
    pub frame_count: u32,
    /// Pixels per side of every (square) frame.
    pub resolution: u32,
    #[serde(default)]
    pub convergence: ConvergenceParams,
    #[serde(default)]
    pub epsilon_mode: EpsilonMode,
    #[serde(default)]
    pub color_rule: ColorRule,
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// One rendered image of the series.
#[derive(Clone, Debug)]
pub struct JuliaFrame {
    pub index: usize,
    pub time: f64,
    pub polynomial: ComplexPolynomial,
    pub epsilon: f64,
    pub pixels: PixelBuffer,
}

/// `t_k = t0 + k * (t1 - t0) / n` for `k = 1..=n`.
///
/// The first sample is one step past `t0` and the last one lands on `t1`. Shifting the
/// samples to start at `t0` would change the content of every frame.
pub fn sample_times(time_domain: [f64; 2], frame_count: u32) -> Vec<f64> {
    assert!(frame_count > 0, "frame count must be positive");
    let [t0, t1] = time_domain;
    let step = (t1 - t0) / frame_count as f64;
    (1..=frame_count).map(|k| t0 + k as f64 * step).collect()
}

/// Renders every frame of the series and hands each one to `frame_sink`, in order.
///
/// All escape radii are computed before the first frame is rasterized (the
/// sequence-stable mode needs all of them). Frames are then rasterized one at a time
/// so that only a single pixel buffer is alive at once.
#[allow(clippy::too_many_arguments)]
pub fn render_series<P, S, E>(
    path: &P,
    time_domain: [f64; 2],
    frame_count: u32,
    resolution: u32,
    convergence: &ConvergenceParams,
    epsilon_mode: EpsilonMode,
    color_rule: &ColorRule,
    mut frame_sink: S,
) -> Result<(), E>
where
    P: PolynomialPath,
    S: FnMut(JuliaFrame) -> Result<(), E>,
{
    assert!(resolution > 0, "resolution must be positive");
    let times = sample_times(time_domain, frame_count);
    let polynomials: Vec<ComplexPolynomial> =
        times.iter().map(|t| path.polynomial_at(*t)).collect();

    let epsilons = frame_epsilons(
        &polynomials,
        epsilon_mode,
        resolution,
        convergence.angular_sample_count,
        convergence.iteration_limit,
    );

    let colorizer = FrameColorizer::new(color_rule, convergence.iteration_limit);

    for (index, ((time, polynomial), epsilon)) in times
        .into_iter()
        .zip(polynomials)
        .zip(epsilons)
        .enumerate()
    {
        let pixels = rasterize_frame(
            &polynomial,
            epsilon,
            resolution,
            convergence.iteration_limit,
            &colorizer,
        );
        log::info!(
            "Rendered frame {} of {} (t = {:.6}, epsilon = {:.6})",
            index + 1,
            frame_count,
            time,
            epsilon
        );
        frame_sink(JuliaFrame {
            index,
            time,
            polynomial,
            epsilon,
            pixels,
        })?;
    }
    Ok(())
}

/// Renders the series described by `params`, writing `images/julia_<index>.<ext>` under
/// the prefix directory, along with a copy of the parameters and timing diagnostics.
pub fn render_julia_series(
    params: &JuliaSeriesParams,
    file_prefix: FilePrefix,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stopwatch = Stopwatch::new("Julia Series Render Stopwatch".to_owned());

    serialize_to_json(file_prefix.full_path_with_suffix(".json"), params)?;
    let image_directory = file_prefix.create_sub_directory("images")?;

    stopwatch.record_split("basic setup".to_owned());

    render_series(
        &params.path,
        params.time_domain,
        params.frame_count,
        params.resolution,
        &params.convergence,
        params.epsilon_mode,
        &params.color_rule,
        |frame: JuliaFrame| -> Result<(), Box<dyn std::error::Error>> {
            let image_path = image_directory.join(format!(
                "julia_{}.{}",
                frame.index,
                params.output_format.extension()
            ));
            match params.output_format {
                OutputFormat::Ppm => {
                    write_image_to_file(&image_path, |f| write_ppm_file(&frame.pixels, f))?
                }
                OutputFormat::Png => {
                    write_image_to_file(&image_path, |f| frame.pixels.to_image().save(f))?
                }
            }
            Ok(())
        },
    )?;

    stopwatch.record_split(format!("render {} frames", params.frame_count));

    let mut diagnostics_file = file_prefix.create_file_with_suffix("_diagnostics.txt")?;
    stopwatch.display(&mut diagnostics_file)?;

    Ok(())
}
