use crate::core::file_io::FilePrefix;
use crate::fractals::julia_series::{render_julia_series, JuliaSeriesParams};

pub fn read_params_file(
    params_path: &str,
) -> Result<JuliaSeriesParams, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(params_path)?;
    Ok(serde_json::from_str(&text)?)
}

pub fn render_fractal(
    params: &JuliaSeriesParams,
    file_prefix: FilePrefix,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!(
        "Rendering {} frames at {}x{} ({:?}, {:?})",
        params.frame_count,
        params.resolution,
        params.resolution,
        params.path,
        params.epsilon_mode
    );
    render_julia_series(params, file_prefix)
}
