use anyhow::Result;
use serde::Serialize;

use powerhell_config::Config;

use super::json_emit::emit_config_json;

#[derive(Serialize)]
struct ConfigEntry<'a> {
    key: &'a str,
    value: &'a str,
    source: &'a str,
}

#[derive(Serialize)]
struct ConfigOutput<'a> {
    config_file: Option<String>,
    values: Vec<ConfigEntry<'a>>,
}

/// Print the effective configuration and where each value came from.
pub fn execute_config_command(config: &Config, json: bool) -> Result<()> {
    let effective = config.effective_config();
    let config_file = config
        .config_path
        .as_ref()
        .map(|path| path.display().to_string());

    if json {
        let output = ConfigOutput {
            config_file,
            values: effective
                .iter()
                .map(|(key, (value, source))| ConfigEntry {
                    key,
                    value,
                    source,
                })
                .collect(),
        };
        println!("{}", emit_config_json(&output)?);
        return Ok(());
    }

    println!("Effective configuration:");
    println!("  Config file: {}", config_file.as_deref().unwrap_or("none"));
    for (key, (value, source)) in &effective {
        println!("  {key} = {value} ({source})");
    }
    Ok(())
}
