use std::ffi::OsString;
use std::process::Command;

use powerhell_encoding::EncodedInvocation;

// ============================================================================
// CommandSpec - argv-style process specification
// ============================================================================

/// Specification for a local process.
///
/// Arguments are kept as discrete `OsString` elements and handed to
/// `Command::args`, so an encoded-command payload or a value with spaces stays
/// one argument.
///
/// # Example
///
/// ```rust
/// use powerhell_runner::CommandSpec;
/// use std::ffi::OsString;
///
/// let cmd = CommandSpec::new("powershell")
///     .arg("-NoProfile")
///     .args(["-EncodedCommand", "RwBlAHQALQBEAGEAdABlAA=="]);
///
/// assert_eq!(cmd.program, OsString::from("powershell"));
/// assert_eq!(cmd.args.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandSpec {
    /// The program to execute
    pub program: OsString,
    /// Arguments as discrete elements (NOT shell strings)
    pub args: Vec<OsString>,
}

impl CommandSpec {
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Build a spec for an encoded invocation.
    ///
    /// Argv invocations map one token to one argument. Line invocations are
    /// handed to the platform shell (`cmd /C` on Windows, `sh -c` elsewhere)
    /// as a single argument. Returns `None` for an empty argv list.
    #[must_use]
    pub fn from_invocation(invocation: &EncodedInvocation) -> Option<Self> {
        match invocation {
            EncodedInvocation::Argv(tokens) => {
                let (program, rest) = tokens.split_first()?;
                Some(Self::new(program).args(rest))
            }
            EncodedInvocation::Line(line) => {
                let (shell, flag) = platform_shell();
                Some(Self::new(shell).arg(flag).arg(line))
            }
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Convert this `CommandSpec` into a `std::process::Command`.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Shell and its "run this string" flag for line invocations.
#[must_use]
pub fn platform_shell() -> (&'static str, &'static str) {
    if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}
