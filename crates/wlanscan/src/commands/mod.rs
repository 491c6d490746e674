//! Command dispatch: bridges CLI args -> core snapshot/classifiers -> output formatting.

pub mod classify;
pub mod config_cmd;
pub mod groups;
pub mod networks;
pub mod util;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a snapshot or classification command to its handler.
pub fn dispatch(cmd: Command, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Networks(args) => networks::handle(&args, settings),
        Command::Groups(args) => groups::handle(&args, settings),
        Command::Classify(args) => classify::handle(args, settings),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
