//! Argument styles for PowerShell invocations

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// How a style emits a named argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentEmission {
    /// `Command -Name value`
    Flag,
    /// `$Name = 'value'; Command`
    VariableAssignment,
}

/// Convention used to pass named values to the target command.
///
/// The set is closed; each variant carries the prefix written in front of the
/// argument name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
pub enum ArgumentStyle {
    /// Flag-style arguments with a dash prefix (`-Name value`)
    #[default]
    #[serde(alias = "dash")]
    #[strum(to_string = "parameters-dash", serialize = "dash")]
    ParametersDash,
    /// Flag-style arguments with a slash prefix (`/Name value`)
    #[serde(alias = "slash")]
    #[strum(to_string = "parameters-slash", serialize = "slash")]
    ParametersSlash,
    /// Variables assigned before the command runs (`$Name = 'value'; Command`)
    #[strum(to_string = "variables")]
    Variables,
}

impl ArgumentStyle {
    /// Every style, in declaration order.
    pub const ALL: [Self; 3] = [Self::ParametersDash, Self::ParametersSlash, Self::Variables];

    /// Prefix written in front of argument names.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::ParametersDash => "-",
            Self::ParametersSlash => "/",
            Self::Variables => "$",
        }
    }

    #[must_use]
    pub const fn emission(&self) -> ArgumentEmission {
        match self {
            Self::ParametersDash | Self::ParametersSlash => ArgumentEmission::Flag,
            Self::Variables => ArgumentEmission::VariableAssignment,
        }
    }

    /// Convert the style to its canonical name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
