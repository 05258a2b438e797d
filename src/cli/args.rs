//! CLI argument definitions and parsing structures
//!
//! This module defines the command-line interface structure using clap,
//! including the main `Cli` struct and the subcommand enum.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use powerhell_encoding::{ArgumentStyle, Arguments, InvocationForm};

/// powerhell - encode commands for remote PowerShell
#[derive(Parser, Debug)]
#[command(name = "powerhell")]
#[command(about = "Encode commands and arguments for remote PowerShell execution")]
#[command(long_about = r#"
powerhell turns a command plus named arguments into an invocation a remote
PowerShell interpreter can run: a flag-style command line, a variable-assignment
script, or an -EncodedCommand payload (base64 of UTF-16LE text).

EXAMPLES:
  # Flag-style command line
  powerhell encode Get-Thing -a Name=X -a Verbose

  # Variable-assignment script, encoded for -EncodedCommand
  powerhell --style variables encode Get-Thing -a Name="O'Brien" --encoded

  # Argv token list as JSON
  powerhell --form argv encode Get-Thing -a Name=X --json

  # Recover the script from an encoded payload
  powerhell decode RwBlAHQALQBUAGgAaQBuAGcA

  # Run through a locally installed interpreter
  powerhell --interpreter pwsh run Get-Date --power-shell

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  Config file is discovered by searching upward from CWD for .powerhell/config.toml
  Use --config to specify an explicit config file path
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Argument style: parameters-dash, parameters-slash, or variables
    #[arg(long, global = true)]
    pub style: Option<ArgumentStyle>,

    /// Interpreter named in encoded invocations (default: powershell)
    #[arg(long, global = true)]
    pub interpreter: Option<String>,

    /// Invocation form: line or argv
    #[arg(long, global = true)]
    pub form: Option<InvocationForm>,

    /// Local command timeout in seconds (default: 300)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the invocation for a command
    Encode {
        /// Command text
        command: String,

        /// Named argument, NAME or NAME=VALUE (repeatable, order kept)
        #[arg(short = 'a', long = "arg", value_name = "NAME[=VALUE]")]
        args: Vec<String>,

        /// Produce an -EncodedCommand invocation
        #[arg(long)]
        encoded: bool,

        /// Print argv tokens one per line (same as --form argv)
        #[arg(long)]
        list: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode an -EncodedCommand payload back to script text
    Decode {
        /// Base64 payload
        payload: String,
    },

    /// Run a command through a local interpreter
    Run {
        /// Command text
        command: String,

        /// Named argument, NAME or NAME=VALUE (repeatable, order kept)
        #[arg(short = 'a', long = "arg", value_name = "NAME[=VALUE]")]
        args: Vec<String>,

        /// Run as a PowerShell script through -EncodedCommand
        #[arg(long)]
        power_shell: bool,
    },

    /// Show effective configuration with sources
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse repeated `NAME[=VALUE]` flags into [`Arguments`].
///
/// Splits on the first `=`, so values may contain `=`. `NAME=` gives an empty
/// value; a bare `NAME` gives a flag without value.
///
/// # Errors
///
/// Returns a message when a name is empty.
pub fn parse_arguments(raw: &[String]) -> Result<Arguments, String> {
    let mut arguments = Arguments::new();
    for item in raw {
        let (name, value) = match item.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (item.as_str(), None),
        };
        if name.is_empty() {
            return Err(format!("Argument '{item}' has an empty name"));
        }
        arguments.insert(name, value);
    }
    Ok(arguments)
}

/// Build the clap command (for completions and tests).
#[must_use]
pub fn build_cli() -> clap::Command {
    <Cli as clap::CommandFactory>::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_parse_arguments_keeps_order() {
        let args = parse_arguments(&strings(&["Name=X", "Verbose", "Id=5"])).unwrap();
        let names: Vec<_> = args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Name", "Verbose", "Id"]);
        assert_eq!(args.get("Verbose").unwrap().value, None);
    }

    #[test]
    fn test_parse_arguments_splits_on_first_equals() {
        let args = parse_arguments(&strings(&["Filter=a=b", "Empty="])).unwrap();
        assert_eq!(args.get("Filter").unwrap().value.as_deref(), Some("a=b"));
        assert_eq!(args.get("Empty").unwrap().value.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_arguments_rejects_empty_name() {
        assert!(parse_arguments(&strings(&["=X"])).is_err());
    }

    #[test]
    fn test_style_parses_from_flag() {
        let cli = Cli::try_parse_from(["powerhell", "--style", "variables", "config"]).unwrap();
        assert_eq!(cli.style, Some(ArgumentStyle::Variables));

        let cli = Cli::try_parse_from(["powerhell", "--style", "dash", "config"]).unwrap();
        assert_eq!(cli.style, Some(ArgumentStyle::ParametersDash));

        assert!(Cli::try_parse_from(["powerhell", "--style", "tilde", "config"]).is_err());
    }

    #[test]
    fn test_encode_subcommand_collects_args() {
        let cli = Cli::try_parse_from([
            "powerhell", "encode", "Get-Thing", "-a", "Name=X", "--arg", "Verbose", "--encoded",
        ])
        .unwrap();
        match cli.command {
            Commands::Encode {
                command,
                args,
                encoded,
                list,
                json,
            } => {
                assert_eq!(command, "Get-Thing");
                assert_eq!(args, ["Name=X", "Verbose"]);
                assert!(encoded);
                assert!(!list);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
