//! Argument encoding and script composition
//!
//! [`CommandEncoder`] turns a command name plus [`Arguments`] into either a
//! command line or an argv-style token list. With [`ArgumentStyle::Variables`]
//! the string form becomes a small script that assigns every argument to a
//! variable and then runs the bare command:
//!
//! ```text
//! Get-Thing -Name X -Verbose            (flag style)
//! $Name = 'X'; $Id = '5'; Get-Thing     (variables style)
//! ```
//!
//! Flag-style values are written raw; callers pass values that are already safe
//! for the target shell. Variable-style values are quoted with [`quote_single`].

use crate::arguments::Arguments;
use crate::quoting::quote_single;
use crate::style::{ArgumentEmission, ArgumentStyle};

/// Interpreter started for encoded commands.
pub const POWERSHELL_COMMAND: &str = "powershell";

/// Flag that tells the interpreter the next argument is an encoded script.
pub const ENCODED_COMMAND_FLAG: &str = "-EncodedCommand";

/// Encodes commands for one configured argument style.
///
/// The style is read on every call, so [`set_argument_style`](Self::set_argument_style)
/// takes effect for the next call. No style means flag style with a `-` prefix.
///
/// # Example
///
/// ```rust
/// use powerhell_encoding::{ArgumentStyle, Arguments, CommandEncoder};
///
/// let args = Arguments::new().arg("Name", "X").arg("Id", 5);
///
/// let encoder = CommandEncoder::new();
/// assert_eq!(
///     encoder.encode_to_string("Get-Thing", Some(&args)),
///     "Get-Thing -Name X -Id 5"
/// );
///
/// let encoder = CommandEncoder::new().with_argument_style(ArgumentStyle::Variables);
/// assert_eq!(
///     encoder.encode_to_string("Get-Thing", Some(&args)),
///     "$Name = 'X'; $Id = '5'; Get-Thing"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEncoder {
    argument_style: Option<ArgumentStyle>,
    interpreter: String,
}

impl Default for CommandEncoder {
    fn default() -> Self {
        Self {
            argument_style: None,
            interpreter: POWERSHELL_COMMAND.to_string(),
        }
    }
}

impl CommandEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_argument_style(mut self, style: ArgumentStyle) -> Self {
        self.argument_style = Some(style);
        self
    }

    /// Use a different interpreter for encoded commands (e.g. `pwsh`).
    #[must_use]
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    #[must_use]
    pub const fn argument_style(&self) -> Option<ArgumentStyle> {
        self.argument_style
    }

    pub fn set_argument_style(&mut self, style: Option<ArgumentStyle>) {
        self.argument_style = style;
    }

    #[must_use]
    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// Prefix for argument names under the configured style.
    #[must_use]
    pub fn param_prefix(&self) -> &'static str {
        self.argument_style.unwrap_or_default().prefix()
    }

    fn uses_variables(&self) -> bool {
        self.argument_style
            .is_some_and(|style| style.emission() == ArgumentEmission::VariableAssignment)
    }

    /// Encode a command and its arguments as a single command line.
    ///
    /// Absent arguments return the command unchanged. Under the variables style
    /// this delegates to [`encode_variables_and_command`](Self::encode_variables_and_command).
    #[must_use]
    pub fn encode_to_string(&self, command: &str, arguments: Option<&Arguments>) -> String {
        let Some(arguments) = arguments else {
            return command.to_string();
        };
        if self.uses_variables() {
            return self.encode_variables_and_command(command, Some(arguments));
        }

        let prefix = self.param_prefix();
        let mut line = String::from(command);
        for argument in arguments {
            line.push(' ');
            line.push_str(prefix);
            line.push_str(&argument.name);
            if let Some(value) = &argument.value {
                line.push(' ');
                line.push_str(value);
            }
        }
        line
    }

    /// Encode a command and its arguments as argv-style tokens.
    ///
    /// Always emits flag-style tokens (`prefix+name`, then the value if present),
    /// whatever the configured style. Absent arguments yield `[command]`.
    #[must_use]
    pub fn encode_to_list(&self, command: &str, arguments: Option<&Arguments>) -> Vec<String> {
        let mut tokens = vec![command.to_string()];
        let Some(arguments) = arguments else {
            return tokens;
        };

        let prefix = self.param_prefix();
        for argument in arguments {
            tokens.push(format!("{prefix}{}", argument.name));
            if let Some(value) = &argument.value {
                tokens.push(value.clone());
            }
        }
        tokens
    }

    /// Compose `$Name = 'value'; ... ; command`.
    ///
    /// Statements follow argument order and the command always comes last.
    /// Argument names are emitted verbatim. A flag with no value is assigned
    /// nothing (`$Verbose = ; `), following [`quote_single`].
    #[must_use]
    pub fn encode_variables_and_command(
        &self,
        command: &str,
        arguments: Option<&Arguments>,
    ) -> String {
        let Some(arguments) = arguments else {
            return command.to_string();
        };

        let prefix = self.param_prefix();
        let mut script = String::new();
        for argument in arguments {
            script.push_str(prefix);
            script.push_str(&argument.name);
            script.push_str(" = ");
            script.push_str(&quote_single(argument.value.as_deref()));
            script.push_str("; ");
        }
        script.push_str(command);
        script
    }

    /// The script that an encoded command carries.
    #[must_use]
    pub fn create_script_with_arguments(
        &self,
        command: &str,
        arguments: Option<&Arguments>,
    ) -> String {
        match arguments {
            None => command.to_string(),
            Some(_) if self.uses_variables() => {
                self.encode_variables_and_command(command, arguments)
            }
            Some(_) => self.encode_to_string(command, arguments),
        }
    }
}
