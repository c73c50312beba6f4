//! Token types produced by the [`Tokenizer`](crate::Tokenizer).

use crate::Span;

/// A token with its source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Token kinds.
///
/// Quoted strings are folded into [`TokenKind::Word`] with their delimiters
/// removed and escapes decoded, so the grammar never distinguishes the two.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A bare word or the contents of a quoted string.
    Word(String),
    /// A single punctuation character (`=`, `;`, or anything else that
    /// cannot start a word, quote or comment).
    Symbol(char),
    /// The input is exhausted. Returned on every request once reached.
    EndOfInput,
}

impl TokenKind {
    /// Returns the word text, if this is a word.
    #[inline]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            TokenKind::Word(text) => Some(text),
            TokenKind::Symbol(_) | TokenKind::EndOfInput => None,
        }
    }

    /// Check whether this is the given symbol.
    #[inline]
    pub fn is_symbol(&self, symbol: char) -> bool {
        matches!(self, TokenKind::Symbol(c) if *c == symbol)
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, TokenKind::EndOfInput)
    }
}
