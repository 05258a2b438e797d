//! Client wrapper tying the encoder, a transport and the fault classifier together

use std::sync::Arc;
use std::time::Instant;

use powerhell_encoding::{
    ArgumentStyle, Arguments, CommandEncoder, ENCODED_COMMAND_FLAG, EncodedInvocation,
    InvocationForm,
};
use powerhell_fault::{PowerHellError, TransportFault, classify};
use powerhell_utils::redaction::redact_for_logging;
use tracing::warn;

use crate::hooks::{ExecutionHooks, TracingHooks};
use crate::transport::{CommandOutput, RemoteShellTransport};

/// Runs commands through a [`RemoteShellTransport`].
///
/// Every fault raised by the transport is converted with [`classify`], so
/// callers only ever see [`PowerHellError`].
///
/// [`InvocationForm::Line`] uses the string encoders and
/// [`InvocationForm::Argv`] the list encoders.
pub struct PowerHellClient<T> {
    transport: T,
    encoder: CommandEncoder,
    form: InvocationForm,
    hooks: Option<Arc<dyn ExecutionHooks>>,
}

impl<T: RemoteShellTransport> PowerHellClient<T> {
    /// Client with the default encoder, line form, and no hooks.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            encoder: CommandEncoder::new(),
            form: InvocationForm::Line,
            hooks: None,
        }
    }

    #[must_use]
    pub fn with_encoder(mut self, encoder: CommandEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    #[must_use]
    pub fn with_invocation_form(mut self, form: InvocationForm) -> Self {
        self.form = form;
        self
    }

    #[must_use]
    pub fn with_hooks(mut self, hooks: Arc<dyn ExecutionHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Log timings and output through `tracing`.
    #[must_use]
    pub fn with_tracing_hooks(self) -> Self {
        self.with_hooks(Arc::new(TracingHooks))
    }

    #[must_use]
    pub fn encoder(&self) -> &CommandEncoder {
        &self.encoder
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub const fn invocation_form(&self) -> InvocationForm {
        self.form
    }

    #[must_use]
    pub const fn argument_style(&self) -> Option<ArgumentStyle> {
        self.encoder.argument_style()
    }

    pub fn set_argument_style(&mut self, style: Option<ArgumentStyle>) {
        self.encoder.set_argument_style(style);
    }

    /// Plain invocation of `command` in the configured form.
    #[must_use]
    pub fn encode_command(
        &self,
        command: &str,
        arguments: Option<&Arguments>,
    ) -> EncodedInvocation {
        match self.form {
            InvocationForm::Line => {
                EncodedInvocation::Line(self.encoder.encode_to_string(command, arguments))
            }
            InvocationForm::Argv => {
                EncodedInvocation::Argv(self.encoder.encode_to_list(command, arguments))
            }
        }
    }

    /// `-EncodedCommand` invocation of `command` in the configured form.
    #[must_use]
    pub fn encode_power_shell_command(
        &self,
        command: &str,
        arguments: Option<&Arguments>,
    ) -> EncodedInvocation {
        match self.form {
            InvocationForm::Line => EncodedInvocation::Line(
                self.encoder.to_encoded_command_string(command, arguments),
            ),
            InvocationForm::Argv => EncodedInvocation::Argv(
                self.encoder.to_encoded_command_list(command, arguments),
            ),
        }
    }

    /// Run `command` as a plain invocation.
    ///
    /// # Errors
    ///
    /// Returns [`PowerHellError`] when the transport raises a fault.
    pub fn run_command(
        &self,
        command: &str,
        arguments: Option<&Arguments>,
    ) -> Result<CommandOutput, PowerHellError> {
        let invocation = self.encode_command(command, arguments);
        self.execute(&invocation)
    }

    /// Run `command` as a PowerShell script through `-EncodedCommand`.
    ///
    /// # Errors
    ///
    /// Returns [`PowerHellError`] when the transport raises a fault.
    pub fn run_power_shell_command(
        &self,
        command: &str,
        arguments: Option<&Arguments>,
    ) -> Result<CommandOutput, PowerHellError> {
        let invocation = self.encode_power_shell_command(command, arguments);
        self.execute(&invocation)
    }

    fn execute(&self, invocation: &EncodedInvocation) -> Result<CommandOutput, PowerHellError> {
        let command_line = invocation.to_string();
        if let Some(hooks) = &self.hooks {
            hooks.on_data("Executing:", &command_line);
        }

        let started = Instant::now();
        let result = self.transport.execute(invocation);
        if let Some(hooks) = &self.hooks {
            hooks.on_execution(&command_line, started.elapsed());
        }

        match result {
            Ok(output) => {
                if let Some(hooks) = &self.hooks {
                    hooks.on_data("stdout:", &output.stdout_string());
                    hooks.on_data("stderr:", &output.stderr_string());
                }
                Ok(output)
            }
            Err(fault) => Err(fail(&command_line, fault)),
        }
    }
}

fn fail(command_line: &str, fault: TransportFault) -> PowerHellError {
    let error = classify(&format!("Error executing command {command_line}"), fault);
    warn!(
        command = %loggable_command(command_line),
        security = error.is_security(),
        error = %redact_for_logging(error.message()),
        "Remote command failed"
    );
    error
}

/// Redact `command_line` for logs, leaving any `-EncodedCommand` payload intact.
fn loggable_command(command_line: &str) -> String {
    match command_line.split_once(ENCODED_COMMAND_FLAG) {
        Some((head, payload)) => {
            format!("{}{ENCODED_COMMAND_FLAG}{payload}", redact_for_logging(head))
        }
        None => redact_for_logging(command_line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records invocations and replies with a canned result.
    struct ScriptedTransport {
        seen: Mutex<Vec<EncodedInvocation>>,
        reply: fn() -> Result<CommandOutput, TransportFault>,
    }

    impl ScriptedTransport {
        fn ok() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                reply: || Ok(CommandOutput::new(b"done".to_vec(), Vec::new(), Some(0))),
            }
        }

        fn failing(reply: fn() -> Result<CommandOutput, TransportFault>) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                reply,
            }
        }

        fn last(&self) -> EncodedInvocation {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl RemoteShellTransport for ScriptedTransport {
        fn execute(
            &self,
            invocation: &EncodedInvocation,
        ) -> Result<CommandOutput, TransportFault> {
            self.seen.lock().unwrap().push(invocation.clone());
            (self.reply)()
        }
    }

    #[derive(Default)]
    struct RecordingHooks {
        data: Mutex<Vec<(String, String)>>,
        executions: Mutex<Vec<String>>,
    }

    impl ExecutionHooks for RecordingHooks {
        fn on_data(&self, prefix: &str, data: &str) {
            self.data
                .lock()
                .unwrap()
                .push((prefix.to_string(), data.to_string()));
        }

        fn on_execution(&self, command_line: &str, _elapsed: Duration) {
            self.executions
                .lock()
                .unwrap()
                .push(command_line.to_string());
        }
    }

    fn args() -> Arguments {
        Arguments::new().arg("Name", "X").flag("Verbose")
    }

    #[test]
    fn test_run_command_line_form() {
        let client = PowerHellClient::new(ScriptedTransport::ok());
        let output = client.run_command("Get-Thing", Some(&args())).unwrap();

        assert_eq!(output.stdout_string(), "done");
        assert_eq!(
            client.transport().last(),
            EncodedInvocation::Line("Get-Thing -Name X -Verbose".into())
        );
    }

    #[test]
    fn test_run_command_argv_form() {
        let client = PowerHellClient::new(ScriptedTransport::ok())
            .with_invocation_form(InvocationForm::Argv);
        client.run_command("Get-Thing", Some(&args())).unwrap();

        assert_eq!(
            client.transport().last(),
            EncodedInvocation::Argv(vec![
                "Get-Thing".into(),
                "-Name".into(),
                "X".into(),
                "-Verbose".into()
            ])
        );
    }

    #[test]
    fn test_run_power_shell_command_line_form() {
        let client = PowerHellClient::new(ScriptedTransport::ok());
        client.run_power_shell_command("Get-Thing", None).unwrap();

        assert_eq!(
            client.transport().last(),
            EncodedInvocation::Line(
                "powershell -EncodedCommand RwBlAHQALQBUAGgAaQBuAGcA".into()
            )
        );
    }

    #[test]
    fn test_run_power_shell_command_argv_form_without_arguments() {
        let client = PowerHellClient::new(ScriptedTransport::ok())
            .with_invocation_form(InvocationForm::Argv);
        client.run_power_shell_command("Get-Thing", None).unwrap();

        assert_eq!(
            client.transport().last(),
            EncodedInvocation::Argv(vec!["powershell".into()])
        );
    }

    #[test]
    fn test_set_argument_style_affects_next_call() {
        let mut client = PowerHellClient::new(ScriptedTransport::ok());
        assert_eq!(client.argument_style(), None);

        client.set_argument_style(Some(ArgumentStyle::Variables));
        client.run_command("Get-Thing", Some(&args())).unwrap();

        assert_eq!(client.argument_style(), Some(ArgumentStyle::Variables));
        assert_eq!(
            client.transport().last(),
            EncodedInvocation::Line("$Name = 'X'; $Verbose = ; Get-Thing".into())
        );
    }

    #[test]
    fn test_fault_becomes_communication_error() {
        let client = PowerHellClient::new(ScriptedTransport::failing(|| {
            Err(TransportFault::new("Connection refused"))
        }));
        let err = client.run_command("Get-Thing", None).unwrap_err();

        assert!(err.is_retryable());
        assert_eq!(
            err.message(),
            "Error executing command Get-Thing: Connection refused"
        );
    }

    #[test]
    fn test_authorization_loop_becomes_security_error() {
        let client = PowerHellClient::new(ScriptedTransport::failing(|| {
            Err(TransportFault::with_cause(
                "Could not send Message.",
                io::Error::other("Authorization loop detected on Conduit"),
            ))
        }));
        let err = client.run_power_shell_command("Get-Thing", None).unwrap_err();

        assert!(err.is_security());
        assert_eq!(err.message(), "Authorization loop detected on Conduit");
    }

    #[test]
    fn test_hooks_see_payload_timing_and_output() {
        let hooks = Arc::new(RecordingHooks::default());
        let client = PowerHellClient::new(ScriptedTransport::ok()).with_hooks(hooks.clone());
        client.run_command("Get-Thing", Some(&args())).unwrap();

        assert_eq!(
            *hooks.executions.lock().unwrap(),
            ["Get-Thing -Name X -Verbose"]
        );
        let data = hooks.data.lock().unwrap();
        assert_eq!(data[0].0, "Executing:");
        assert_eq!(data[1], ("stdout:".to_string(), "done".to_string()));
        assert_eq!(data[2], ("stderr:".to_string(), String::new()));
    }

    #[test]
    fn test_hooks_see_timing_on_fault() {
        let hooks = Arc::new(RecordingHooks::default());
        let client = PowerHellClient::new(ScriptedTransport::failing(|| {
            Err(TransportFault::new("reset"))
        }))
        .with_hooks(hooks.clone());
        let _ = client.run_command("Get-Thing", None);

        assert_eq!(hooks.executions.lock().unwrap().len(), 1);
        assert_eq!(hooks.data.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_loggable_command_keeps_encoded_payload() {
        let line = CommandEncoder::new()
            .to_encoded_command_string("Get-Thing -Name X -Verbose", Some(&args()));
        let payload = line.rsplit(' ').next().unwrap();
        assert!(payload.len() > 32);
        assert_eq!(loggable_command(&line), line);

        let tokens = CommandEncoder::new().to_encoded_command_list("Get-Thing", Some(&args()));
        let argv = EncodedInvocation::Argv(tokens).to_string();
        assert_eq!(loggable_command(&argv), argv);
    }

    #[test]
    fn test_loggable_command_redacts_plain_secrets() {
        let logged = loggable_command("Connect-Host -Password=hunter2secret");
        assert!(logged.starts_with("Connect-Host -"));
        assert!(!logged.contains("hunter2secret"));
    }

    #[test]
    fn test_tracing_hooks_attach() {
        let client = PowerHellClient::new(ScriptedTransport::ok()).with_tracing_hooks();
        assert!(client.run_command("Get-Thing", None).is_ok());
    }
}
