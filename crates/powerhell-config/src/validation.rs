use crate::model::{Config, ConfigError};

impl Config {
    /// Validate resolved values
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let Some(interpreter) = &self.encoding.interpreter
            && interpreter.trim().is_empty()
        {
            return Err(ConfigError::InvalidValue {
                key: "interpreter".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.runner.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
