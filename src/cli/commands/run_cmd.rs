use std::io::Write;

use anyhow::{Context, Result};

use powerhell_config::Config;

use super::common::{CommandError, arguments_from_flags, local_client};

/// Run `command` through the local transport and relay its output.
///
/// Transport faults surface as `PowerHellError`; a command that ran but
/// exited non-zero surfaces as [`CommandError::RemoteExit`]. Encoded runs
/// always carry the payload, even without `-a` flags.
pub fn execute_run_command(
    config: &Config,
    command: &str,
    raw_args: &[String],
    power_shell: bool,
) -> Result<()> {
    let arguments = arguments_from_flags(raw_args)?;
    let client = local_client(config);

    let output = if power_shell {
        let arguments = arguments.unwrap_or_default();
        client.run_power_shell_command(command, Some(&arguments))?
    } else {
        client.run_command(command, arguments.as_ref())?
    };

    std::io::stdout()
        .write_all(&output.stdout)
        .context("Failed to write command stdout")?;
    std::io::stderr()
        .write_all(&output.stderr)
        .context("Failed to write command stderr")?;

    if !output.success() {
        return Err(CommandError::RemoteExit {
            code: output.exit_code,
        }
        .into());
    }
    Ok(())
}
