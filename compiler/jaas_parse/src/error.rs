//! Parse error types.
//!
//! Every error here is fatal at configuration-build time. Grammar errors
//! carry at most the token text needed to point at the problem (a flag word
//! or an option key); option values never appear in messages.

use thiserror::Error;

/// Errors raised while building a login configuration from a string.
#[derive(Debug, Error)]
pub enum JaasError {
    /// An entry has no login module name.
    #[error("Login module not specified in jaas config")]
    MissingLoginModule,

    /// The input ended right after a login module name.
    #[error("Login module control flag not specified in jaas config")]
    MissingControlFlag,

    /// The control flag is not one of the four recognized keywords.
    #[error("Invalid login module control flag '{0}'")]
    InvalidControlFlag(String),

    /// An option key is not followed by `=` and a value.
    #[error("Value not specified for key '{0}' in jaas config")]
    MissingValueForKey(String),

    /// Punctuation appeared where an option key was expected.
    #[error("Option key expected in jaas config, found '{0}'")]
    ExpectedOptionKey(char),

    /// The input ended before the entry's closing `;`.
    #[error("Configuration entry not terminated by semi-colon")]
    UnterminatedEntry,

    /// The input contained no entries at all.
    #[error("Login module not specified in jaas config: no entries found")]
    NoLoginModuleSpecified,

    /// Reading streamed input failed before any grammar was checked.
    #[error("Unexpected exception while parsing Jaas configuration: {0}")]
    UnderlyingIo(#[from] std::io::Error),
}

impl JaasError {
    /// Check whether this is a grammar error rather than an I/O failure.
    pub fn is_grammar_error(&self) -> bool {
        !matches!(self, JaasError::UnderlyingIo(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages_name_the_offending_token() {
        assert_eq!(
            JaasError::InvalidControlFlag("bogus".into()).to_string(),
            "Invalid login module control flag 'bogus'"
        );
        assert_eq!(
            JaasError::MissingValueForKey("debug".into()).to_string(),
            "Value not specified for key 'debug' in jaas config"
        );
        assert_eq!(
            JaasError::ExpectedOptionKey(':').to_string(),
            "Option key expected in jaas config, found ':'"
        );
    }

    #[test]
    fn test_io_failure_is_not_a_grammar_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err = JaasError::from(io);
        assert!(!err.is_grammar_error());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_grammar_errors_are_grammar_errors() {
        for err in [
            JaasError::MissingLoginModule,
            JaasError::MissingControlFlag,
            JaasError::InvalidControlFlag("x".into()),
            JaasError::MissingValueForKey("k".into()),
            JaasError::ExpectedOptionKey('{'),
            JaasError::UnterminatedEntry,
            JaasError::NoLoginModuleSpecified,
        ] {
            assert!(err.is_grammar_error(), "{err:?}");
        }
    }
}
