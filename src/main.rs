//! Modelcard - model card thumbnail CLI.

mod cli;
mod color;
mod composite;
mod config;
mod error;
mod font;
mod logo;
mod output;
mod params;
mod render;
mod text;

use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::CardError;
use crate::params::{build_render_config, check_inputs};
use crate::render::render;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        match e {
            CardError::MissingInput { .. } => println!("Error: {e}"),
            _ => eprintln!("Error: {e}"),
        }
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level).format_timestamp(None).init();
}

fn run(cli: &Cli) -> Result<(), CardError> {
    check_inputs(&cli.background, &cli.logo)?;

    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(CardError::Config)?;
    log::debug!("config: {}", config_path.display());

    let render_config = build_render_config(cli, &config)?;

    let report = render(&render_config)?;
    log::debug!(
        "rendered {}x{}, logo at {:?}, title at {:?}",
        report.size.0,
        report.size.1,
        report.logo_origin,
        report.title_origin
    );
    println!("Image saved to {}", report.output.display());

    Ok(())
}
