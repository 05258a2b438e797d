//! Reclassification of transport faults
//!
//! The transport reports almost everything as one opaque fault type, so the
//! only signal available is text: an authorization redirect loop shows up as an
//! I/O error cause carrying [`AUTHORIZATION_LOOP_MARKER`]. Everything else is a
//! communication failure. Keep the heuristic behind [`classify`] so a structured
//! check can replace it without touching callers.

use std::io;

use crate::error::PowerHellError;
use crate::fault::TransportFault;

/// Text the transport puts in the cause of an authorization redirect loop.
pub const AUTHORIZATION_LOOP_MARKER: &str = "Authorization loop detected";

/// Convert a transport fault into a domain error.
///
/// Returns [`PowerHellError::Security`] with the cause's message when the
/// fault's direct cause is an I/O error mentioning [`AUTHORIZATION_LOOP_MARKER`].
/// Otherwise returns [`PowerHellError::Communication`] with
/// `"<context>: <fault message>"`. Only one level of cause is inspected.
///
/// ```rust
/// use powerhell_fault::{TransportFault, classify};
///
/// let err = classify("Error executing command", TransportFault::new("timed out"));
/// assert!(err.is_retryable());
/// assert_eq!(err.message(), "Error executing command: timed out");
/// ```
#[must_use]
pub fn classify(context: &str, fault: TransportFault) -> PowerHellError {
    if let Some(message) = authorization_loop_message(&fault) {
        return PowerHellError::Security { message, fault };
    }

    PowerHellError::Communication {
        message: format!("{context}: {}", fault.message()),
        fault,
    }
}

fn authorization_loop_message(fault: &TransportFault) -> Option<String> {
    let cause = fault.cause()?.downcast_ref::<io::Error>()?;
    let message = cause.to_string();
    message
        .contains(AUTHORIZATION_LOOP_MARKER)
        .then_some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_loop_is_security() {
        let fault = TransportFault::with_cause(
            "Could not send Message.",
            io::Error::other(
                "Authorization loop detected on Conduit \"{http://x}WinRmPort.http-conduit\"",
            ),
        );
        let err = classify("Error executing Get-Thing", fault);

        assert!(err.is_security());
        assert!(err.message().starts_with(AUTHORIZATION_LOOP_MARKER));
        assert_eq!(err.fault().message(), "Could not send Message.");
    }

    #[test]
    fn test_no_cause_is_communication() {
        let err = classify(
            "Error executing Get-Thing",
            TransportFault::new("Connection refused"),
        );
        assert!(!err.is_security());
        assert_eq!(err.message(), "Error executing Get-Thing: Connection refused");
    }

    #[test]
    fn test_io_cause_without_marker_is_communication() {
        let fault =
            TransportFault::with_cause("Could not send Message.", io::Error::other("reset"));
        let err = classify("ctx", fault);
        assert!(matches!(err, PowerHellError::Communication { .. }));
        assert_eq!(err.message(), "ctx: Could not send Message.");
    }

    #[test]
    fn test_marker_in_non_io_cause_is_communication() {
        let fault = TransportFault::with_cause("outer", "Authorization loop detected");
        let err = classify("ctx", fault);
        assert!(matches!(err, PowerHellError::Communication { .. }));
    }

    #[test]
    fn test_marker_only_in_outer_message_is_communication() {
        let fault = TransportFault::new("Authorization loop detected");
        let err = classify("ctx", fault);
        assert!(matches!(err, PowerHellError::Communication { .. }));
        assert_eq!(err.message(), "ctx: Authorization loop detected");
    }

    #[test]
    fn test_marker_match_is_case_sensitive() {
        let fault =
            TransportFault::with_cause("outer", io::Error::other("authorization LOOP detected"));
        assert!(!classify("ctx", fault).is_security());
    }

    proptest::proptest! {
        #[test]
        fn prop_communication_message_keeps_context_prefix(
            context in "[ -~]{0,24}",
            message in "[ -~]{0,24}",
        ) {
            let err = classify(&context, TransportFault::new(message.clone()));
            proptest::prop_assert!(!err.is_security());
            proptest::prop_assert_eq!(err.message(), format!("{context}: {message}"));
        }
    }
}
