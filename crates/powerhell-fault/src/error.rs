//! Domain errors returned in place of raw transport faults

use thiserror::Error;

use crate::fault::TransportFault;

/// The two error kinds callers see after a transport failure.
///
/// | Variant | Meaning | Retry |
/// |---------|---------|-------|
/// | `Security` | The remote side rejected us (authorization redirect loop) | no |
/// | `Communication` | Anything else: timeouts, resets, malformed replies | caller's choice |
///
/// The originating [`TransportFault`] is kept as the error source.
#[derive(Error, Debug)]
pub enum PowerHellError {
    #[error("Security error: {message}")]
    Security {
        message: String,
        #[source]
        fault: TransportFault,
    },

    #[error("Communication error: {message}")]
    Communication {
        message: String,
        #[source]
        fault: TransportFault,
    },
}

impl PowerHellError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Security { message, .. } | Self::Communication { message, .. } => message,
        }
    }

    #[must_use]
    pub fn fault(&self) -> &TransportFault {
        match self {
            Self::Security { fault, .. } | Self::Communication { fault, .. } => fault,
        }
    }

    #[must_use]
    pub const fn is_security(&self) -> bool {
        matches!(self, Self::Security { .. })
    }

    /// Security errors are policy problems and are never worth retrying.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Communication { .. })
    }

    /// A short hint for the person reading the error.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::Security { .. } => {
                "Check the credentials and authentication scheme accepted by the remote host"
            }
            Self::Communication { .. } => {
                "Check that the remote host is reachable and its remote shell service is running"
            }
        }
    }
}
