//! Exit codes for the powerhell CLI
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | | Operation completed successfully |
//! | 1 | `INTERNAL` | General/internal failure |
//! | 2 | `CLI_ARGS` | Invalid CLI arguments or configuration |
//! | 3 | `SECURITY` | The remote side rejected the session |
//! | 4 | `COMMUNICATION` | The transport failed |
//! | 5 | `REMOTE_FAILURE` | The command ran and exited non-zero |

use powerhell_fault::PowerHellError;

/// Process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Internal error - general failure
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - invalid arguments or configuration
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// Security error - authorization failure reported by the transport
    pub const SECURITY: ExitCode = ExitCode(3);

    /// Communication error - any other transport failure
    pub const COMMUNICATION: ExitCode = ExitCode(4);

    /// The command itself exited non-zero
    pub const REMOTE_FAILURE: ExitCode = ExitCode(5);

    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl From<&PowerHellError> for ExitCode {
    fn from(error: &PowerHellError) -> Self {
        match error {
            PowerHellError::Security { .. } => ExitCode::SECURITY,
            PowerHellError::Communication { .. } => ExitCode::COMMUNICATION,
        }
    }
}
