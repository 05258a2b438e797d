//! The remote shell transport contract
//!
//! The transport is an external collaborator: it opens sessions, authenticates
//! and streams output. This crate only needs it to accept an
//! [`EncodedInvocation`] and either return output or raise a [`TransportFault`].

use powerhell_encoding::EncodedInvocation;
use powerhell_fault::TransportFault;

/// Output of a command that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Exit code (None if the process was killed by a signal)
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    #[must_use]
    pub fn new(stdout: Vec<u8>, stderr: Vec<u8>, exit_code: Option<i32>) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }

    /// Get stdout as a UTF-8 string, lossy conversion.
    #[must_use]
    pub fn stdout_string(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    /// Get stderr as a UTF-8 string, lossy conversion.
    #[must_use]
    pub fn stderr_string(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Submits encoded invocations to a remote interpreter.
///
/// A command that runs and exits non-zero is still `Ok`; only failures of the
/// channel itself are faults.
///
/// # Example
///
/// ```rust
/// use powerhell_encoding::EncodedInvocation;
/// use powerhell_fault::TransportFault;
/// use powerhell_runner::{CommandOutput, RemoteShellTransport};
///
/// struct Echo;
///
/// impl RemoteShellTransport for Echo {
///     fn execute(&self, invocation: &EncodedInvocation) -> Result<CommandOutput, TransportFault> {
///         Ok(CommandOutput::new(invocation.to_string().into_bytes(), Vec::new(), Some(0)))
///     }
/// }
///
/// let out = Echo.execute(&EncodedInvocation::Line("Get-Date".into())).unwrap();
/// assert_eq!(out.stdout_string(), "Get-Date");
/// ```
pub trait RemoteShellTransport {
    /// # Errors
    ///
    /// Returns a [`TransportFault`] when the command could not be delivered or
    /// its result could not be read back.
    fn execute(&self, invocation: &EncodedInvocation) -> Result<CommandOutput, TransportFault>;
}

impl<T: RemoteShellTransport + ?Sized> RemoteShellTransport for &T {
    fn execute(&self, invocation: &EncodedInvocation) -> Result<CommandOutput, TransportFault> {
        (**self).execute(invocation)
    }
}
