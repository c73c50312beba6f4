//! Secret configuration values.

use std::fmt;

/// A configuration value that must never be printed.
///
/// `Debug` and `Display` both render [`Password::HIDDEN`]; the raw text is
/// only reachable through [`Password::value`].
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Placeholder shown wherever the value would otherwise be formatted.
    pub const HIDDEN: &'static str = "[hidden]";

    pub fn new(value: impl Into<String>) -> Self {
        Password(value.into())
    }

    /// The raw secret text.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Password(value)
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Password(value.to_owned())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::HIDDEN)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::HIDDEN)
    }
}
