//! Opaque failures raised by a remote shell transport

use std::error::Error;
use std::fmt;

type Cause = Box<dyn Error + Send + Sync + 'static>;

/// A failure surfaced by the transport.
///
/// Carries little structure: a message and, optionally, one nested cause.
#[derive(Debug)]
pub struct TransportFault {
    message: String,
    cause: Option<Cause>,
}

impl TransportFault {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Build a fault wrapping a lower-level cause.
    ///
    /// ```rust
    /// use powerhell_fault::TransportFault;
    /// use std::io;
    ///
    /// let fault = TransportFault::with_cause(
    ///     "Could not send Message.",
    ///     io::Error::other("connection reset"),
    /// );
    /// assert_eq!(fault.message(), "Could not send Message.");
    /// assert!(fault.cause().is_some());
    /// ```
    #[must_use]
    pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for TransportFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for TransportFault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

impl From<std::io::Error> for TransportFault {
    fn from(err: std::io::Error) -> Self {
        Self::with_cause(err.to_string(), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_fault_without_cause() {
        let fault = TransportFault::new("boom");
        assert_eq!(fault.message(), "boom");
        assert_eq!(fault.to_string(), "boom");
        assert!(fault.cause().is_none());
        assert!(fault.source().is_none());
    }

    #[test]
    fn test_fault_source_is_cause() {
        let fault = TransportFault::with_cause("outer", io::Error::other("inner"));
        assert_eq!(fault.source().unwrap().to_string(), "inner");
    }

    #[test]
    fn test_string_cause() {
        let fault = TransportFault::with_cause("outer", "plain text cause");
        assert_eq!(fault.cause().unwrap().to_string(), "plain text cause");
        assert!(fault.cause().unwrap().downcast_ref::<io::Error>().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let fault = TransportFault::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert_eq!(fault.message(), "no such file");
        assert!(fault.cause().unwrap().downcast_ref::<io::Error>().is_some());
    }
}
