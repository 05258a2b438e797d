use anyhow::{Context, Result};

use powerhell_encoding::decode_encoded_command;

/// Print the script text carried by an `-EncodedCommand` payload.
pub fn execute_decode_command(payload: &str) -> Result<()> {
    let script = decode_encoded_command(payload).context("Payload is not a valid encoded command")?;
    println!("{script}");
    Ok(())
}
