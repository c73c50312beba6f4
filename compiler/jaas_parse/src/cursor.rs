//! Token cursor with one token of lookahead.

use jaas_lexer::{Token, Tokenizer};
use tracing::trace;

/// Cursor over a lazily tokenized configuration string.
///
/// The aggregator peeks to decide whether another entry starts; the entry
/// parser only ever consumes.
pub struct Cursor<'src> {
    tokenizer: Tokenizer<'src>,
    lookahead: Option<Token>,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Cursor {
            tokenizer: Tokenizer::new(source),
            lookahead: None,
        }
    }

    /// Get the next token without consuming it.
    pub fn peek(&mut self) -> &Token {
        self.lookahead.get_or_insert_with(|| self.tokenizer.next_token())
    }

    /// Consume and return the next token.
    pub fn bump(&mut self) -> Token {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.tokenizer.next_token(),
        };
        trace!(span = %token.span, "bump");
        token
    }

    /// Check whether only end of input remains.
    pub fn is_at_end(&mut self) -> bool {
        self.peek().kind.is_end()
    }
}
