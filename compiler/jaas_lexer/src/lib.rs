//! Tokenizer for inline login-module configuration strings.
//!
//! A configuration string declares one or more login modules:
//!
//! ```text
//! com.example.Login required username="alice" debug=true; // note
//! ```
//!
//! The tokenizer turns that text into a lazy stream of [`Token`]s. Words may
//! contain letters, digits and `-`, `_`, `$`, `.`; quoted strings collapse
//! into a single word; `//` and `/* */` comments and whitespace are trivia.
//! Everything else is a single-character symbol.
//!
//! The stream is single-pass. Once the input is exhausted, every further
//! request returns [`TokenKind::EndOfInput`]. Re-tokenizing requires a fresh
//! [`Tokenizer`].

mod span;
mod token;
mod unescape;


pub use span::Span;
pub use token::{Token, TokenKind};

use logos::Logos;

/// Raw token from logos (before quote decoding).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\x0C]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", skip_block_comment)]
    BlockComment,

    #[token("=")]
    Eq,

    #[token(";")]
    Semicolon,

    // Unterminated quotes stop at the end of the line.
    #[regex(r#""([^"\\\n]|\\[^\n])*"?"#)]
    DoubleQuoted,

    #[regex(r"'([^'\\\n]|\\[^\n])*'?")]
    SingleQuoted,

    #[regex(r"[A-Za-z0-9_$.\-]+")]
    Word,
}

/// Advance past the end of a block comment, or to end of input if the
/// comment is never closed.
fn skip_block_comment(lex: &mut logos::Lexer<RawToken>) {
    let rest = lex.remainder();
    let consumed = rest.find("*/").map_or(rest.len(), |pos| pos + 2);
    lex.bump(consumed);
}

/// Lazy tokenizer over an in-memory configuration string.
pub struct Tokenizer<'src> {
    raw: logos::Lexer<'src, RawToken>,
}

impl<'src> Tokenizer<'src> {
    /// Create a tokenizer positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Tokenizer {
            raw: RawToken::lexer(source),
        }
    }

    /// Produce the next token, skipping comments and whitespace.
    ///
    /// Returns [`TokenKind::EndOfInput`] once the source is exhausted, and
    /// keeps returning it on every later call.
    pub fn next_token(&mut self) -> Token {
        loop {
            let Some(result) = self.raw.next() else {
                let end = Span::from_range(self.raw.source().len()..self.raw.source().len());
                return Token::new(TokenKind::EndOfInput, end);
            };
            let span = Span::from_range(self.raw.span());
            let slice = self.raw.slice();

            let kind = match result {
                Ok(RawToken::LineComment | RawToken::BlockComment) => continue,
                Ok(RawToken::Eq) => TokenKind::Symbol('='),
                Ok(RawToken::Semicolon) => TokenKind::Symbol(';'),
                Ok(RawToken::Word) => TokenKind::Word(slice.to_owned()),
                Ok(RawToken::DoubleQuoted) => TokenKind::Word(unescape::unquote(slice, '"')),
                Ok(RawToken::SingleQuoted) => TokenKind::Word(unescape::unquote(slice, '\'')),
                // Anything logos cannot start a token with is ordinary punctuation.
                Err(()) => match slice.chars().next() {
                    Some(c) => TokenKind::Symbol(c),
                    None => continue,
                },
            };
            return Token::new(kind, span);
        }
    }
}

/// Iterates tokens up to, but not including, [`TokenKind::EndOfInput`].
impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind.is_end() {
            None
        } else {
            Some(token)
        }
    }
}
