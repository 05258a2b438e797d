use anyhow::Result;

use powerhell_config::Config;
use powerhell_encoding::{EncodedInvocation, InvocationForm};
use tracing::debug;

use super::common::{arguments_from_flags, local_client};
use super::json_emit::{EncodeOutput, emit_encode_json};

/// Print the invocation for `command` without running it.
pub fn execute_encode_command(
    config: &Config,
    command: &str,
    raw_args: &[String],
    encoded: bool,
    list: bool,
    json: bool,
) -> Result<()> {
    let arguments = arguments_from_flags(raw_args)?;
    let form = if list {
        InvocationForm::Argv
    } else {
        config.invocation_form()
    };
    let client = local_client(config).with_invocation_form(form);

    let invocation = if encoded {
        let arguments = arguments.unwrap_or_default();
        client.encode_power_shell_command(command, Some(&arguments))
    } else {
        client.encode_command(command, arguments.as_ref())
    };
    debug!(form = %invocation.form(), encoded, "Encoded invocation");

    if json {
        let output = EncodeOutput {
            command,
            argument_style: client.argument_style().unwrap_or_default(),
            encoded,
            invocation: &invocation,
        };
        println!("{}", emit_encode_json(&output)?);
        return Ok(());
    }

    match &invocation {
        EncodedInvocation::Line(line) => println!("{line}"),
        EncodedInvocation::Argv(tokens) => {
            for token in tokens {
                println!("{token}");
            }
        }
    }
    Ok(())
}
