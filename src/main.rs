//! assetkit - build-asset tools for the desktop app bundle.

mod cli;
mod error;
mod image;
mod logger;
mod native;
mod project;
mod utils;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use project::ProjectPaths;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let detail = err
                .chain()
                .skip(1)
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(": ");
            logger::status_error(&err.to_string(), &detail);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let paths = ProjectPaths::discover(cli.root.as_deref());
    debug!("project"; "root: {}", paths.root().display());

    match &cli.command {
        Commands::Background { output, mascot } => {
            cli::background::run(&paths, output.as_deref(), mascot.as_deref())
        }
        Commands::TrayIcon { source } => cli::tray::run(&paths, source.as_deref()),
        Commands::AppIcon {
            source,
            skip_native,
            pty,
        } => cli::icon::run(&paths, source, *skip_native, *pty),
    }
}
