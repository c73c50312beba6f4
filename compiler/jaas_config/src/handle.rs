//! Configuration handles: one lookup surface over two sources.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use jaas_parse::{Entry, ParsedConfig};

/// An externally provided login configuration store.
///
/// Consulted when no inline configuration was supplied.
pub trait AmbientConfiguration: Send + Sync {
    /// Entries registered under `context_name`, if any.
    fn lookup(&self, context_name: &str) -> Option<&[Entry]>;
}

/// An in-memory ambient store keyed by context name.
#[derive(Clone, Debug, Default)]
pub struct StaticConfiguration {
    contexts: BTreeMap<String, Vec<Entry>>,
}

impl StaticConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entries` under `context_name`, replacing any previous set.
    #[must_use]
    pub fn with_context(mut self, context_name: impl Into<String>, entries: Vec<Entry>) -> Self {
        self.contexts.insert(context_name.into(), entries);
        self
    }
}

impl AmbientConfiguration for StaticConfiguration {
    fn lookup(&self, context_name: &str) -> Option<&[Entry]> {
        self.contexts.get(context_name).map(Vec::as_slice)
    }
}

/// The login configuration a caller should consult.
#[derive(Clone)]
pub enum ConfigurationHandle {
    /// Delegates every lookup to the ambient store.
    Ambient(Arc<dyn AmbientConfiguration>),
    /// Answers only for the context name the inline configuration is bound to.
    Parsed(ParsedConfig),
}

impl ConfigurationHandle {
    /// Entries for `context_name`.
    ///
    /// A parsed handle matches its bound context name exactly and returns
    /// `None` for every other name.
    pub fn lookup(&self, context_name: &str) -> Option<&[Entry]> {
        match self {
            ConfigurationHandle::Ambient(store) => store.lookup(context_name),
            ConfigurationHandle::Parsed(config) => config.lookup(context_name),
        }
    }

    pub fn is_ambient(&self) -> bool {
        matches!(self, ConfigurationHandle::Ambient(_))
    }

    /// The inline configuration, if this handle wraps one.
    pub fn parsed(&self) -> Option<&ParsedConfig> {
        match self {
            ConfigurationHandle::Parsed(config) => Some(config),
            ConfigurationHandle::Ambient(_) => None,
        }
    }
}

impl fmt::Debug for ConfigurationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationHandle::Ambient(_) => f.write_str("Ambient"),
            ConfigurationHandle::Parsed(config) => f
                .debug_struct("Parsed")
                .field("context_name", &config.context_name())
                .field("entries", &config.entries().len())
                .finish(),
        }
    }
}
