//! The `lex` command: show the token stream of a configuration string.

use jaas_lexer::{TokenKind, Tokenizer};
use jaas_parse::JaasError;

use super::read_input;

/// Lex a file and return one line per token.
pub fn lex_file(path: &str) -> Result<Vec<String>, JaasError> {
    let source = read_input(path)?;
    Ok(render_tokens(&source))
}

/// Render the token stream, ending with the end-of-input token.
///
/// Word text is replaced by its length; it may be a secret.
pub fn render_tokens(source: &str) -> Vec<String> {
    let mut tokenizer = Tokenizer::new(source);
    let mut lines = Vec::new();
    loop {
        let token = tokenizer.next_token();
        let kind = match &token.kind {
            TokenKind::Word(text) => format!("Word({} bytes)", text.len()),
            TokenKind::Symbol(c) => format!("Symbol({c:?})"),
            TokenKind::EndOfInput => "EndOfInput".to_owned(),
        };
        lines.push(format!("  {kind} @ {}", token.span));
        if token.kind.is_end() {
            return lines;
        }
    }
}
