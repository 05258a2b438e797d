use std::collections::BTreeMap;

use crate::model::{Config, ConfigSource};

fn source_label(source: ConfigSource) -> &'static str {
    match source {
        ConfigSource::Cli => "cli",
        ConfigSource::Config => "config",
        ConfigSource::Default => "default",
    }
}

impl Config {
    /// Effective configuration as `key -> (value, source)`.
    #[must_use]
    pub fn effective_config(&self) -> BTreeMap<String, (String, String)> {
        let mut config = BTreeMap::new();

        let mut add_config = |key: &str, value: String| {
            let source = source_label(self.source_of(key)).to_string();
            config.insert(key.to_string(), (value, source));
        };

        add_config(
            "argument_style",
            self.encoding
                .argument_style
                .unwrap_or_default()
                .to_string(),
        );
        add_config("interpreter", self.interpreter().to_string());
        add_config("invocation_form", self.invocation_form().to_string());
        add_config("timeout_secs", self.timeout().as_secs().to_string());
        add_config("verbose", self.verbose().to_string());

        config
    }
}
