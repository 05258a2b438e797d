//! Helpers shared by command handlers

use powerhell_config::Config;
use powerhell_encoding::Arguments;
use powerhell_runner::{LocalShellTransport, PowerHellClient};

use crate::cli::args::parse_arguments;

/// Failures raised by the command handlers themselves.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),

    #[error("Command exited with {}", describe_exit(.code))]
    RemoteExit { code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Parse `-a` flags; no flags means the arguments are absent.
pub fn arguments_from_flags(raw: &[String]) -> Result<Option<Arguments>, CommandError> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_arguments(raw).map(Some).map_err(CommandError::Usage)
}

/// Client over the local transport, configured from `config`.
pub fn local_client(config: &Config) -> PowerHellClient<LocalShellTransport> {
    PowerHellClient::new(LocalShellTransport::with_timeout(config.timeout()))
        .with_encoder(config.command_encoder())
        .with_invocation_form(config.invocation_form())
        .with_tracing_hooks()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_means_absent() {
        assert_eq!(arguments_from_flags(&[]).unwrap(), None);
    }

    #[test]
    fn test_flags_parse_in_order() {
        let raw = vec!["Name=X".to_string(), "Verbose".to_string()];
        let args = arguments_from_flags(&raw).unwrap().unwrap();
        assert_eq!(args.len(), 2);
        assert_eq!(args.get("Name").unwrap().value.as_deref(), Some("X"));
    }

    #[test]
    fn test_remote_exit_display() {
        assert_eq!(
            CommandError::RemoteExit { code: Some(3) }.to_string(),
            "Command exited with code 3"
        );
        assert!(
            CommandError::RemoteExit { code: None }
                .to_string()
                .contains("signal")
        );
    }

    #[test]
    fn test_local_client_uses_config() {
        let client = local_client(&Config::default());
        assert_eq!(client.encoder().interpreter(), "powershell");
        assert_eq!(client.transport().timeout().as_secs(), 300);
    }
}
