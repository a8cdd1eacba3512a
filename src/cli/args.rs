use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct JuliaSeriesArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Render every frame of a Julia set series.
    Render(ParameterFilePath),
    /// Render the color table of a gradient as a horizontal strip.
    GradientSwatch(ParameterFilePath),
}

#[derive(Debug, Args)]
pub struct ParameterFilePath {
    pub params_path: String,

    /// Write the outputs into a date-time stamped sub directory.
    #[clap(long, short)]
    pub date_time_out: bool,
}
