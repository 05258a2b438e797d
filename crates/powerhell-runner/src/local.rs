use std::io;
use std::process::Stdio;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use powerhell_encoding::EncodedInvocation;
use powerhell_fault::TransportFault;
use tracing::debug;

use crate::command_spec::CommandSpec;
use crate::transport::{CommandOutput, RemoteShellTransport};

/// Default time a local command may run before it is killed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

// ============================================================================
// LocalShellTransport - run invocations as local processes
// ============================================================================

/// Transport that runs invocations on this machine.
///
/// Handy where PowerShell is installed locally and for exercising the encoder
/// end to end. Argv invocations are spawned argv-style; line invocations go
/// through the platform shell (see [`CommandSpec::from_invocation`]).
///
/// Failures to spawn or wait, and timeouts, are raised as [`TransportFault`]s
/// whose cause is the underlying `io::Error`.
#[derive(Debug, Clone, Copy)]
pub struct LocalShellTransport {
    timeout: Duration,
}

impl Default for LocalShellTransport {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl LocalShellTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn run(&self, cmd: &CommandSpec) -> Result<CommandOutput, TransportFault> {
        let mut command = cmd.to_command();
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let program = cmd.program.to_string_lossy().into_owned();
        let child = command.spawn().map_err(|e| {
            TransportFault::with_cause(format!("Failed to spawn process '{program}'"), e)
        })?;

        let (tx, rx) = mpsc::channel();
        let child_id = child.id();
        let handle = thread::spawn(move || {
            let _ = tx.send(child.wait_with_output());
        });

        match rx.recv_timeout(self.timeout) {
            Ok(output_result) => {
                let _ = handle.join();
                let output = output_result.map_err(|e| {
                    TransportFault::with_cause(format!("Failed to wait for process '{program}'"), e)
                })?;
                Ok(CommandOutput::new(
                    output.stdout,
                    output.stderr,
                    output.status.code(),
                ))
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                terminate_process(child_id);
                let _ = handle.join();
                Err(TransportFault::with_cause(
                    format!(
                        "Process '{program}' timed out after {} seconds",
                        self.timeout.as_secs()
                    ),
                    io::Error::new(io::ErrorKind::TimedOut, "local command timed out"),
                ))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(TransportFault::new(
                "Process monitoring thread terminated unexpectedly",
            )),
        }
    }
}

impl RemoteShellTransport for LocalShellTransport {
    fn execute(&self, invocation: &EncodedInvocation) -> Result<CommandOutput, TransportFault> {
        let cmd = CommandSpec::from_invocation(invocation)
            .ok_or_else(|| TransportFault::new("Cannot execute an empty argv invocation"))?;
        debug!(
            program = %cmd.program.to_string_lossy(),
            form = %invocation.form(),
            "Running invocation locally"
        );
        self.run(&cmd)
    }
}

/// Terminate a process by its PID.
///
/// On Unix, sends SIGKILL to the process.
/// On Windows, uses TerminateProcess.
fn terminate_process(pid: u32) {
    #[cfg(unix)]
    {
        // SAFETY: kill() takes no pointers; a stale pid only yields ESRCH.
        unsafe {
            libc::kill(pid as i32, libc::SIGKILL);
        }
    }

    #[cfg(windows)]
    {
        use windows::Win32::Foundation::CloseHandle;
        use windows::Win32::System::Threading::{OpenProcess, PROCESS_TERMINATE, TerminateProcess};

        unsafe {
            if let Ok(handle) = OpenProcess(PROCESS_TERMINATE, false, pid) {
                let _ = TerminateProcess(handle, 1);
                let _ = CloseHandle(handle);
            }
        }
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = pid;
    }
}
