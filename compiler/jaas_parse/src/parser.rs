//! Entry grammar and the top-level aggregator.
//!
//! ```text
//! config      := entry+
//! entry       := moduleName flagWord (optionPair)* ';'
//! optionPair  := key '=' value
//! ```

use std::collections::BTreeMap;
use std::io::Read;

use jaas_lexer::TokenKind;
use tracing::{debug, trace};

use crate::{ControlFlag, Cursor, Entry, JaasError, ParsedConfig};

/// Parse one entry, consuming tokens through its terminating `;`.
pub fn parse_entry(cursor: &mut Cursor<'_>) -> Result<Entry, JaasError> {
    let login_module = match cursor.bump().kind {
        TokenKind::Word(name) if !name.is_empty() => name,
        TokenKind::Word(_) | TokenKind::Symbol(_) | TokenKind::EndOfInput => {
            return Err(JaasError::MissingLoginModule);
        }
    };

    let control_flag = match cursor.bump().kind {
        TokenKind::Word(flag) => ControlFlag::resolve(&flag)?,
        TokenKind::Symbol(';') | TokenKind::EndOfInput => {
            return Err(JaasError::MissingControlFlag);
        }
        TokenKind::Symbol(other) => return Err(JaasError::InvalidControlFlag(other.to_string())),
    };

    let mut options = BTreeMap::new();
    loop {
        let key = match cursor.bump().kind {
            TokenKind::Symbol(';') => break,
            TokenKind::EndOfInput => return Err(JaasError::UnterminatedEntry),
            TokenKind::Symbol(other) => return Err(JaasError::ExpectedOptionKey(other)),
            TokenKind::Word(key) => key,
        };
        if !cursor.bump().kind.is_symbol('=') {
            return Err(JaasError::MissingValueForKey(key));
        }
        let TokenKind::Word(value) = cursor.bump().kind else {
            return Err(JaasError::MissingValueForKey(key));
        };
        // Duplicate keys: last write wins.
        options.insert(key, value);
    }

    trace!(
        module = %login_module,
        flag = %control_flag,
        options = options.len(),
        "parsed entry"
    );
    Entry::new(login_module, control_flag, options)
}

/// Parse entries until the input is exhausted.
///
/// Fails with [`JaasError::NoLoginModuleSpecified`] if there were none.
pub fn parse_all(cursor: &mut Cursor<'_>) -> Result<Vec<Entry>, JaasError> {
    let mut entries = Vec::new();
    while !cursor.is_at_end() {
        entries.push(parse_entry(cursor)?);
    }
    if entries.is_empty() {
        return Err(JaasError::NoLoginModuleSpecified);
    }
    Ok(entries)
}

/// Parse a configuration string and bind its entries to `context_name`.
#[tracing::instrument(level = "debug", skip_all, fields(context = %context_name.as_ref()))]
pub fn parse_config(
    source: &str,
    context_name: impl AsRef<str>,
) -> Result<ParsedConfig, JaasError> {
    let mut cursor = Cursor::new(source);
    let entries = parse_all(&mut cursor)?;
    debug!(entries = entries.len(), "login configuration parsed");
    Ok(ParsedConfig::new(context_name.as_ref().to_owned(), entries))
}

/// Read streamed configuration text fully, then parse it.
///
/// Read failures (including invalid UTF-8) surface as
/// [`JaasError::UnderlyingIo`], never as grammar errors.
pub fn parse_reader<R: Read>(
    mut reader: R,
    context_name: impl AsRef<str>,
) -> Result<ParsedConfig, JaasError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse_config(&source, context_name)
}
