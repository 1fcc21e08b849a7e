use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Log every dispatched callback.
    Watch {
        /// Joystick device to read
        #[clap(short, long)]
        device: Option<PathBuf>,
    },
    /// Render the live pad state at a fixed interval.
    State {
        /// Joystick device to read
        #[clap(short, long)]
        device: Option<PathBuf>,
        /// Render interval in milliseconds
        #[clap(short, long)]
        tick_ms: Option<u64>,
    },
    /// List the logical controls and the record that reaches them.
    Controls,
}

/// Decode a joystick event stream and show what it dispatches.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Also log read loop transitions and dropped records
    #[arg(long)]
    pub trace: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to a YAML config file (defaults to ./jsmon.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_state_with_overrides() {
        let cli = Cli::try_parse_from(["jsmon", "-v", "state", "-d", "/dev/input/js1", "--tick-ms", "50"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Command::State {
                device: Some(PathBuf::from("/dev/input/js1")),
                tick_ms: Some(50),
            }
        );
    }

    #[test]
    fn parses_watch_with_config() {
        let cli = Cli::try_parse_from(["jsmon", "--config", "pad.yaml", "--no-color", "watch"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pad.yaml")));
        assert!(cli.no_color);
        assert_eq!(cli.command, Command::Watch { device: None });
    }

    #[test]
    fn requires_a_command() {
        assert!(Cli::try_parse_from(["jsmon"]).is_err());
    }
}
