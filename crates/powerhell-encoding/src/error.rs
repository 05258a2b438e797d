//! Error types for decoding encoded commands

use thiserror::Error;

/// Failures reading an `-EncodedCommand` payload back into script text.
///
/// Encoding never fails; only the reverse direction can.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Encoded command is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Encoded command has {len} bytes; UTF-16LE needs an even count")]
    OddByteCount { len: usize },

    #[error("Encoded command is not valid UTF-16LE: {0}")]
    Utf16(#[from] std::string::FromUtf16Error),
}
