use clap::Parser;
use julia_series::cli::args::{CommandsEnum, JuliaSeriesArgs};
use julia_series::cli::gradient_swatch::generate_gradient_swatch;
use julia_series::cli::render::{read_params_file, render_fractal};
use julia_series::core::file_io::{
    build_output_path_with_date_time, extract_base_name, maybe_date_time_string, FilePrefix,
};

fn build_file_prefix(
    params_path: &str,
    project: &str,
    date_time_out: bool,
) -> std::io::Result<FilePrefix> {
    Ok(FilePrefix {
        directory_path: build_output_path_with_date_time(
            params_path,
            project,
            &maybe_date_time_string(date_time_out),
        )?,
        file_base: extract_base_name(params_path).to_owned(),
    })
}

fn run(args: JuliaSeriesArgs) -> Result<(), Box<dyn std::error::Error>> {
    match &args.command {
        Some(CommandsEnum::Render(params)) => {
            let fractal_params = read_params_file(&params.params_path)?;
            let file_prefix =
                build_file_prefix(&params.params_path, "render", params.date_time_out)?;
            render_fractal(&fractal_params, file_prefix)
        }
        Some(CommandsEnum::GradientSwatch(params)) => {
            let file_prefix =
                build_file_prefix(&params.params_path, "gradient_swatch", params.date_time_out)?;
            generate_gradient_swatch(&params.params_path, file_prefix)
        }
        None => {
            log::warn!("Default command (nothing specified!)");
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = JuliaSeriesArgs::parse();
    if let Err(err) = run(args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
