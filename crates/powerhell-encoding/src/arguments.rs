//! Named command arguments
//!
//! [`Arguments`] is an insertion-ordered mapping from argument name to an optional
//! value. Values are captured through `Display` when they are inserted, so the
//! encoder only ever sees their text form. A `None` value is a flag without a
//! value (`-Verbose`).

use std::fmt::Display;

/// A single named argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub value: Option<String>,
}

/// Insertion-ordered argument mapping.
///
/// Iteration order is the order in which names were first inserted. Inserting a
/// name that already exists replaces its value and keeps its position.
///
/// # Example
///
/// ```rust
/// use powerhell_encoding::Arguments;
///
/// let args = Arguments::new()
///     .arg("Name", "X")
///     .arg("Id", 5)
///     .flag("Verbose");
///
/// let names: Vec<&str> = args.iter().map(|a| a.name.as_str()).collect();
/// assert_eq!(names, ["Name", "Id", "Verbose"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    entries: Vec<Argument>,
}

impl Arguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a valued argument.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, Some(value.to_string()));
        self
    }

    /// Add a flag with no value.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.insert(name, None);
        self
    }

    /// Insert or replace an argument.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Argument { name, value }),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.entries.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}
