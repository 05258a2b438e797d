//! powerhell - encode commands for remote PowerShell and classify transport faults
//!
//! powerhell turns a command name plus named arguments into an invocation that a
//! remote PowerShell interpreter can run, and turns transport failures into two
//! error kinds callers can act on.
//!
//! # Quick Start (Library)
//!
//! ```rust
//! use powerhell::{ArgumentStyle, Arguments, CommandEncoder, decode_encoded_command};
//!
//! let args = Arguments::new().arg("Name", "O'Brien").flag("Verbose");
//!
//! // Flag style: values are passed through unquoted
//! let line = CommandEncoder::new().encode_to_string("Get-Thing", Some(&args));
//! assert_eq!(line, "Get-Thing -Name O'Brien -Verbose");
//!
//! // Variables style: values are single-quoted inside the script
//! let encoder = CommandEncoder::new().with_argument_style(ArgumentStyle::Variables);
//! let line = encoder.to_encoded_command_string("Get-Thing", Some(&args));
//! let payload = line.strip_prefix("powershell -EncodedCommand ").unwrap();
//! assert_eq!(
//!     decode_encoded_command(payload).unwrap(),
//!     "$Name = 'O''Brien'; $Verbose = ; Get-Thing"
//! );
//! ```
//!
//! # Running Commands
//!
//! Implement [`RemoteShellTransport`] for your transport and wrap it in a
//! [`PowerHellClient`]. Every fault the transport raises reaches the caller as a
//! [`PowerHellError`]: `Security` when the remote side is looping on
//! authorization, `Communication` otherwise.
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! powerhell encode Get-Thing -a Name=X -a Verbose
//! powerhell --style variables encode Get-Thing -a Name=X --encoded
//! powerhell decode RwBlAHQALQBUAGgAaQBuAGcA
//! powerhell config
//! ```

pub mod cli;

pub use powerhell_config::{CliArgs, Config, ConfigSource};
pub use powerhell_encoding::{
    Argument, ArgumentEmission, ArgumentStyle, Arguments, CommandEncoder, ENCODED_COMMAND_FLAG,
    EncodedInvocation, EncodingError, InvocationForm, POWERSHELL_COMMAND, decode_encoded_command,
    encode_utf16_base64, quote_single,
};
pub use powerhell_fault::{AUTHORIZATION_LOOP_MARKER, PowerHellError, TransportFault, classify};
pub use powerhell_runner::{
    CommandOutput, ExecutionHooks, LocalShellTransport, PowerHellClient, RemoteShellTransport,
    TracingHooks,
};
pub use powerhell_utils::exit_codes::ExitCode;
