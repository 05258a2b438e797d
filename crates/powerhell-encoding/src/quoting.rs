//! Single-quote literals for PowerShell scripts
//!
//! Only valid inside scripts that use single-quoted string literals exclusively.
//! Do not reuse for double-quoted contexts: `$` and backticks are left alone.

/// Quote a value as a PowerShell single-quoted literal.
///
/// Embedded single quotes are doubled. An absent value yields the empty string
/// with no quote marks at all.
///
/// ```rust
/// use powerhell_encoding::quote_single;
///
/// assert_eq!(quote_single(Some("O'Brien")), "'O''Brien'");
/// assert_eq!(quote_single(None), "");
/// ```
#[must_use]
pub fn quote_single(value: Option<&str>) -> String {
    match value {
        Some(text) => format!("'{}'", text.replace('\'', "''")),
        None => String::new(),
    }
}
