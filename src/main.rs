use anyhow::Result;
use colordu::config::Config;
use colordu::constants::{DEFAULT_LOG_FILTER, LOG_ENV};
use colordu::io::{du, render::Renderer};
use colordu::pipeline::Colorizer;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let renderer = config.renderer();
    if renderer == Renderer::Ansi {
        // COLORDU_COLOR=always wins over NO_COLOR
        crossterm::style::force_color_output(true);
    }
    let colorizer = Colorizer::new(config.scheme, renderer);
    du::run(&config.du_args, &colorizer)
}
