use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::model::{CliArgs, Config, ConfigSource, EncodingConfig, LoggingConfig, RunnerConfig};

/// Directory holding the config file
pub(crate) const CONFIG_DIR: &str = ".powerhell";
/// Config file name inside [`CONFIG_DIR`]
pub(crate) const CONFIG_FILE: &str = "config.toml";

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfig {
    encoding: Option<EncodingConfig>,
    runner: Option<RunnerConfig>,
    logging: Option<LoggingConfig>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > file > defaults
    ///
    /// Uses the current working directory for discovery when no explicit path
    /// is given in `cli_args`.
    ///
    /// # Errors
    ///
    /// Fails when the config file cannot be read or parsed, or when a resolved
    /// value is invalid.
    pub fn discover(cli_args: &CliArgs) -> Result<Self> {
        let start_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::discover_from(&start_dir, cli_args)
    }

    /// Discover and load configuration starting from a specific directory.
    ///
    /// # Errors
    ///
    /// See [`Config::discover`].
    pub fn discover_from(start_dir: &Path, cli_args: &CliArgs) -> Result<Self> {
        let mut config = Self::default();
        let mut source_attribution = HashMap::new();

        let config_path = match &cli_args.config_path {
            Some(explicit_path) => Some(explicit_path.clone()),
            None => Self::discover_config_file_from(start_dir),
        };

        if let Some(path) = &config_path {
            let file_config = Self::load_config_file(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?;

            if let Some(encoding) = file_config.encoding {
                if encoding.argument_style.is_some() {
                    config.encoding.argument_style = encoding.argument_style;
                    source_attribution.insert("argument_style".to_string(), ConfigSource::Config);
                }
                if encoding.interpreter.is_some() {
                    config.encoding.interpreter = encoding.interpreter;
                    source_attribution.insert("interpreter".to_string(), ConfigSource::Config);
                }
            }
            if let Some(runner) = file_config.runner {
                if runner.invocation_form.is_some() {
                    config.runner.invocation_form = runner.invocation_form;
                    source_attribution.insert("invocation_form".to_string(), ConfigSource::Config);
                }
                if runner.timeout_secs.is_some() {
                    config.runner.timeout_secs = runner.timeout_secs;
                    source_attribution.insert("timeout_secs".to_string(), ConfigSource::Config);
                }
            }
            if let Some(logging) = file_config.logging
                && logging.verbose.is_some()
            {
                config.logging.verbose = logging.verbose;
                source_attribution.insert("verbose".to_string(), ConfigSource::Config);
            }
        }

        // CLI overrides everything
        if cli_args.argument_style.is_some() {
            config.encoding.argument_style = cli_args.argument_style;
            source_attribution.insert("argument_style".to_string(), ConfigSource::Cli);
        }
        if let Some(interpreter) = &cli_args.interpreter {
            config.encoding.interpreter = Some(interpreter.clone());
            source_attribution.insert("interpreter".to_string(), ConfigSource::Cli);
        }
        if cli_args.invocation_form.is_some() {
            config.runner.invocation_form = cli_args.invocation_form;
            source_attribution.insert("invocation_form".to_string(), ConfigSource::Cli);
        }
        if cli_args.timeout_secs.is_some() {
            config.runner.timeout_secs = cli_args.timeout_secs;
            source_attribution.insert("timeout_secs".to_string(), ConfigSource::Cli);
        }
        if cli_args.verbose.is_some() {
            config.logging.verbose = cli_args.verbose;
            source_attribution.insert("verbose".to_string(), ConfigSource::Cli);
        }

        config.config_path = config_path;
        config.source_attribution = source_attribution;
        config.validate()?;
        Ok(config)
    }

    /// Find `.powerhell/config.toml` in `start_dir` or one of its parents.
    ///
    /// The search stops at the first repository root (`.git`, `.hg`, `.svn`).
    #[must_use]
    pub fn discover_config_file_from(start_dir: &Path) -> Option<PathBuf> {
        let mut current_dir = Some(start_dir);

        while let Some(dir) = current_dir {
            let config_path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
            if config_path.is_file() {
                return Some(config_path);
            }

            if dir.join(".git").exists() || dir.join(".hg").exists() || dir.join(".svn").exists() {
                break;
            }

            current_dir = dir.parent();
        }

        None
    }

    fn load_config_file(path: &Path) -> Result<TomlConfig> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config file: {}", path.display())),
            // Explicitly named but missing: fall back to defaults
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TomlConfig::default()),
            Err(e) => Err(anyhow::anyhow!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            )),
        }
    }
}
