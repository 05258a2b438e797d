//! Command-line interface for powerhell
//!
//! ## Module Structure
//!
//! - `args`: CLI argument definitions and parsing structures (clap)
//! - `run`: Main entry point and command dispatch
//! - `commands`: Command implementations

pub mod args;
mod commands;
mod run;

pub use args::{Cli, Commands, build_cli, parse_arguments};
pub use commands::CommandError;
pub use run::run;
