//! Configuration for powerhell
//!
//! Values are resolved with precedence CLI > config file > built-in defaults.
//! The config file is `.powerhell/config.toml`, found by walking up from the
//! working directory until a repository root is reached.
//!
//! ```toml
//! [encoding]
//! argument_style = "variables"
//! interpreter = "pwsh"
//!
//! [runner]
//! invocation_form = "argv"
//! timeout_secs = 120
//!
//! [logging]
//! verbose = true
//! ```

mod discovery;
mod model;
mod sources;
mod validation;

pub use model::{
    CliArgs, Config, ConfigError, ConfigSource, DEFAULT_TIMEOUT_SECS, EncodingConfig,
    LoggingConfig, RunnerConfig,
};
