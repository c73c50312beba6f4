//! Login module entries and the parsed configuration that owns them.

use std::collections::BTreeMap;
use std::fmt;

use crate::{ControlFlag, JaasError};

/// One declared login module: its name, control flag and options.
///
/// Option values often hold credentials, so `Debug` prints keys only.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry {
    login_module: String,
    control_flag: ControlFlag,
    options: BTreeMap<String, String>,
}

impl Entry {
    /// Create an entry.
    ///
    /// Fails with [`JaasError::MissingLoginModule`] if `login_module` is empty.
    pub fn new(
        login_module: impl Into<String>,
        control_flag: ControlFlag,
        options: BTreeMap<String, String>,
    ) -> Result<Self, JaasError> {
        let login_module = login_module.into();
        if login_module.is_empty() {
            return Err(JaasError::MissingLoginModule);
        }
        Ok(Entry {
            login_module,
            control_flag,
            options,
        })
    }

    pub fn login_module(&self) -> &str {
        &self.login_module
    }

    pub fn control_flag(&self) -> ControlFlag {
        self.control_flag
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Look up a single option value.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("login_module", &self.login_module)
            .field("control_flag", &self.control_flag)
            .field("options", &self.options.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A non-empty, immutable list of entries bound to a login context name.
///
/// Only the parser constructs this, and only once every entry is complete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedConfig {
    context_name: String,
    entries: Vec<Entry>,
}

impl ParsedConfig {
    pub(crate) fn new(context_name: String, entries: Vec<Entry>) -> Self {
        debug_assert!(!entries.is_empty(), "parsed config must hold an entry");
        ParsedConfig {
            context_name,
            entries,
        }
    }

    pub fn context_name(&self) -> &str {
        &self.context_name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Return the entries if `context_name` matches exactly.
    pub fn lookup(&self, context_name: &str) -> Option<&[Entry]> {
        (self.context_name == context_name).then_some(self.entries.as_slice())
    }
}
