//! JSON emit functions for CLI output

use anyhow::{Context, Result};
use serde::Serialize;

use powerhell_encoding::{ArgumentStyle, EncodedInvocation};

/// Output of `powerhell encode --json`
#[derive(Debug, Serialize)]
pub struct EncodeOutput<'a> {
    pub command: &'a str,
    pub argument_style: ArgumentStyle,
    pub encoded: bool,
    pub invocation: &'a EncodedInvocation,
}

/// Emit encode output as pretty JSON
pub fn emit_encode_json(output: &EncodeOutput<'_>) -> Result<String> {
    serde_json::to_string_pretty(output).context("Failed to emit encode JSON")
}

/// Emit effective configuration as pretty JSON
pub fn emit_config_json<T: Serialize>(output: &T) -> Result<String> {
    serde_json::to_string_pretty(output).context("Failed to emit config JSON")
}
