mod cli;
mod config;
mod controls;
mod error;
mod logging;
mod monitor;
mod watch;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use crossbeam_channel::{unbounded, Receiver};

use crate::cli::{Cli, Command};
use crate::config::{load_config, Settings};
use crate::error::AppError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if logging::setup(logging::level(cli.verbose, cli.trace), cli.no_color).is_err() {
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let file = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Controls => {
            controls::print_controls();
            Ok(())
        }
        Command::Watch { device } => {
            let settings = Settings::resolve(&file, device, None)?;
            watch::run(&settings, &stop_signal()?)
        }
        Command::State { device, tick_ms } => {
            let settings = Settings::resolve(&file, device, tick_ms)?;
            monitor::run(&settings, &stop_signal()?)
        }
    }
}

/// Ctrl+C fires the returned receiver. The listener thread is left blocked
/// in its read and goes away with the process.
fn stop_signal() -> Result<Receiver<()>, AppError> {
    let (stop_tx, stop_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })?;
    Ok(stop_rx)
}
