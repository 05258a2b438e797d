//! Command encoding for remote PowerShell execution
//!
//! Turns a command name plus named arguments into something a remote interpreter
//! can run:
//!
//! - a command line or argv token list in flag style (`-Name value`),
//! - a variable-assignment script (`$Name = 'value'; Command`),
//! - an `-EncodedCommand` invocation whose payload is base64 of UTF-16LE text.
//!
//! All functions here are pure and synchronous. Identical inputs always produce
//! byte-identical output, and argument order is exactly the caller's order.

pub mod arguments;
pub mod encoded_command;
pub mod encoder;
pub mod error;
pub mod invocation;
pub mod quoting;
pub mod style;

pub use arguments::{Argument, Arguments};
pub use encoded_command::{decode_encoded_command, encode_utf16_base64};
pub use encoder::{CommandEncoder, ENCODED_COMMAND_FLAG, POWERSHELL_COMMAND};
pub use error::EncodingError;
pub use invocation::{EncodedInvocation, InvocationForm};
pub use quoting::quote_single;
pub use style::{ArgumentEmission, ArgumentStyle};
