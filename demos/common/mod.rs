use std::path::PathBuf;

use julia_series::{
    cli::{gradient_swatch::generate_gradient_swatch, render::{read_params_file, render_fractal}},
    core::file_io::FilePrefix,
};

pub fn build_output_path(project: &str) -> PathBuf {
    let directory_path: PathBuf = ["out", project].iter().collect();
    std::fs::create_dir_all(&directory_path).unwrap();
    directory_path
}

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[allow(dead_code)]
pub fn render_example_from_string(example_name: &str) {
    init_logging();
    let params_name = String::from("demos/") + example_name + "/params.json";
    let params = read_params_file(&params_name).unwrap();

    render_fractal(
        &params,
        FilePrefix {
            directory_path: build_output_path(example_name),
            file_base: String::from("result"),
        },
    )
    .unwrap();
}

#[allow(dead_code)]
pub fn gradient_swatch_example_from_string(example_name: &str) {
    init_logging();
    let params_name = String::from("demos/") + example_name + "/params.json";

    generate_gradient_swatch(
        &params_name,
        FilePrefix {
            directory_path: build_output_path(example_name),
            file_base: String::from("result"),
        },
    )
    .unwrap();
}
