//! Running encoded PowerShell invocations through a transport
//!
//! [`RemoteShellTransport`] is the only contract with the outside world. The
//! [`PowerHellClient`] encodes, calls the transport, and classifies faults;
//! [`LocalShellTransport`] runs invocations as local processes.

pub mod client;
pub mod command_spec;
pub mod hooks;
pub mod local;
pub mod transport;

pub use client::PowerHellClient;
pub use command_spec::{CommandSpec, platform_shell};
pub use hooks::{ExecutionHooks, TracingHooks};
pub use local::{DEFAULT_TIMEOUT, LocalShellTransport};
pub use transport::{CommandOutput, RemoteShellTransport};
