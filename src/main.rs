use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use relver::cli::orchestration::run_command;
use relver::cli::Cli;
use relver::{config, logging, ui};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(&cli.global) {
        eprintln!("{}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&ui::format_error_chain(e.chain()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.global.config.as_deref())
        .context("Error loading config")?;

    let output = run_command(&cli.command, &config)?;

    for warning in &output.warnings {
        ui::display_version_warning(warning);
    }

    if let Some(path) = &output.written {
        ui::display_success(&format!("Wrote {} to {}", output.value, path.display()));
    }

    let format = cli.global.format.unwrap_or(config.output.format);
    let variable = cli
        .global
        .variable
        .as_deref()
        .unwrap_or_else(|| cli.command.default_variable());
    ui::emit(&output.value, format, variable)?;

    Ok(())
}
