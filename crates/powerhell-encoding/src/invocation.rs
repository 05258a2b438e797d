//! Encoder output handed to the transport

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

/// Which representation the encoder entry points produce.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InvocationForm {
    /// A single command line
    #[default]
    Line,
    /// An argv-style token list
    Argv,
}

/// A command ready to be submitted to a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", content = "value", rename_all = "lowercase")]
pub enum EncodedInvocation {
    Line(String),
    Argv(Vec<String>),
}

impl EncodedInvocation {
    #[must_use]
    pub const fn form(&self) -> InvocationForm {
        match self {
            Self::Line(_) => InvocationForm::Line,
            Self::Argv(_) => InvocationForm::Argv,
        }
    }
}

impl fmt::Display for EncodedInvocation {
    /// Renders argv lists space-joined; used for logs only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(line) => f.write_str(line),
            Self::Argv(tokens) => f.write_str(&tokens.join(" ")),
        }
    }
}
