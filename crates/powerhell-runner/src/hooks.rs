//! Observability hooks around transport calls
//!
//! Hooks run in [`PowerHellClient`](crate::PowerHellClient) around the transport
//! call, never inside the encoders.

use std::time::Duration;
use tracing::{debug, trace};

/// Callbacks invoked around a transport call.
pub trait ExecutionHooks: Send + Sync {
    /// A chunk of payload or output, labelled with `prefix` (e.g. `"stdout:"`).
    fn on_data(&self, prefix: &str, data: &str);

    /// The transport call for `command_line` finished after `elapsed`.
    fn on_execution(&self, command_line: &str, elapsed: Duration);
}

/// Hooks that log through `tracing`.
///
/// Data is logged at TRACE and only when non-empty; timings at DEBUG.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHooks;

impl ExecutionHooks for TracingHooks {
    fn on_data(&self, prefix: &str, data: &str) {
        if !data.is_empty() {
            trace!("{prefix} {data}");
        }
    }

    fn on_execution(&self, command_line: &str, elapsed: Duration) {
        debug!(
            duration_ms = %elapsed.as_millis(),
            "Command {} run time: {} ms",
            command_line,
            elapsed.as_millis()
        );
    }
}
