//! CLI command implementations (facade).
//!
//! `run.rs` dispatches here; implementations live in `commands/*`.

mod common;
mod config;
mod decode;
mod encode;
mod json_emit;
mod run_cmd;

pub use common::CommandError;
pub use config::execute_config_command;
pub use decode::execute_decode_command;
pub use encode::execute_encode_command;
pub use run_cmd::execute_run_command;
