//! `-EncodedCommand` payloads
//!
//! PowerShell accepts a whole script as one argument when it is given as base64
//! text of its UTF-16LE bytes. The outer command line then never needs quoting,
//! because nothing re-tokenizes the payload. Values embedded in the script itself
//! still rely on [`quote_single`](crate::quote_single).

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use tracing::trace;

use crate::arguments::Arguments;
use crate::encoder::{CommandEncoder, ENCODED_COMMAND_FLAG};
use crate::error::EncodingError;

/// Encode script text as base64 of its UTF-16LE bytes (padded, no line breaks).
#[must_use]
pub fn encode_utf16_base64(script: &str) -> String {
    let bytes: Vec<u8> = script.encode_utf16().flat_map(u16::to_le_bytes).collect();
    BASE64_STANDARD.encode(bytes)
}

/// Recover script text from an encoded-command payload.
///
/// # Errors
///
/// Returns [`EncodingError`] when the payload is not base64, has an odd byte
/// count, or holds unpaired UTF-16 surrogates.
pub fn decode_encoded_command(payload: &str) -> Result<String, EncodingError> {
    let bytes = BASE64_STANDARD.decode(payload.trim())?;
    if bytes.len() % 2 != 0 {
        return Err(EncodingError::OddByteCount { len: bytes.len() });
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    Ok(String::from_utf16(&units)?)
}

impl CommandEncoder {
    /// `<interpreter> -EncodedCommand <base64>` for the composed script.
    ///
    /// ```rust
    /// use powerhell_encoding::{CommandEncoder, decode_encoded_command};
    ///
    /// let line = CommandEncoder::new().to_encoded_command_string("Get-Thing", None);
    /// let payload = line.strip_prefix("powershell -EncodedCommand ").unwrap();
    /// assert_eq!(decode_encoded_command(payload).unwrap(), "Get-Thing");
    /// ```
    #[must_use]
    pub fn to_encoded_command_string(
        &self,
        command: &str,
        arguments: Option<&Arguments>,
    ) -> String {
        let script = self.create_script_with_arguments(command, arguments);
        trace!(script = %script, "Encoding PowerShell script");
        format!(
            "{} {} {}",
            self.interpreter(),
            ENCODED_COMMAND_FLAG,
            encode_utf16_base64(&script)
        )
    }

    /// `[interpreter, -EncodedCommand, base64]` for the composed script.
    ///
    /// Absent arguments yield only `[interpreter]`.
    #[must_use]
    pub fn to_encoded_command_list(
        &self,
        command: &str,
        arguments: Option<&Arguments>,
    ) -> Vec<String> {
        let mut tokens = vec![self.interpreter().to_string()];
        if arguments.is_none() {
            return tokens;
        }

        let script = self.create_script_with_arguments(command, arguments);
        trace!(script = %script, "Encoding PowerShell script");
        tokens.push(ENCODED_COMMAND_FLAG.to_string());
        tokens.push(encode_utf16_base64(&script));
        tokens
    }
}
