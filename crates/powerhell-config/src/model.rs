use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use powerhell_encoding::{ArgumentStyle, CommandEncoder, InvocationForm, POWERSHELL_COMMAND};
use serde::{Deserialize, Serialize};

/// Default local command timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    /// Value provided via CLI argument (highest precedence).
    Cli,
    /// Value loaded from the configuration file.
    Config,
    /// Built-in default value (lowest precedence).
    Default,
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// `[encoding]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EncodingConfig {
    /// Unset means flag style with `-`
    pub argument_style: Option<ArgumentStyle>,
    pub interpreter: Option<String>,
}

/// `[runner]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunnerConfig {
    pub invocation_form: Option<InvocationForm>,
    pub timeout_secs: Option<u64>,
}

/// `[logging]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

/// Overrides supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub argument_style: Option<ArgumentStyle>,
    pub interpreter: Option<String>,
    pub invocation_form: Option<InvocationForm>,
    pub timeout_secs: Option<u64>,
    pub verbose: Option<bool>,
}

/// Resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub encoding: EncodingConfig,
    pub runner: RunnerConfig,
    pub logging: LoggingConfig,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
    pub(crate) source_attribution: HashMap<String, ConfigSource>,
}

impl Config {
    /// Source of `key`, `Default` when the key was never set.
    #[must_use]
    pub fn source_of(&self, key: &str) -> ConfigSource {
        self.source_attribution
            .get(key)
            .copied()
            .unwrap_or(ConfigSource::Default)
    }

    #[must_use]
    pub fn interpreter(&self) -> &str {
        self.encoding.interpreter.as_deref().unwrap_or(POWERSHELL_COMMAND)
    }

    #[must_use]
    pub fn invocation_form(&self) -> InvocationForm {
        self.runner.invocation_form.unwrap_or_default()
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.runner.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    /// Encoder configured with the resolved style and interpreter.
    #[must_use]
    pub fn command_encoder(&self) -> CommandEncoder {
        let mut encoder = CommandEncoder::new().with_interpreter(self.interpreter());
        encoder.set_argument_style(self.encoding.argument_style);
        encoder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.interpreter(), "powershell");
        assert_eq!(config.invocation_form(), InvocationForm::Line);
        assert_eq!(config.timeout(), Duration::from_secs(300));
        assert!(!config.verbose());
        assert_eq!(config.source_of("interpreter"), ConfigSource::Default);
    }

    #[test]
    fn test_command_encoder_carries_style_and_interpreter() {
        let config = Config {
            encoding: EncodingConfig {
                argument_style: Some(ArgumentStyle::Variables),
                interpreter: Some("pwsh".to_string()),
            },
            ..Config::default()
        };
        let encoder = config.command_encoder();
        assert_eq!(encoder.argument_style(), Some(ArgumentStyle::Variables));
        assert_eq!(encoder.interpreter(), "pwsh");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "timeout_secs".to_string(),
            reason: "must be greater than 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'timeout_secs': must be greater than 0"
        );
    }
}
