//! Quoted string decoding.
//!
//! Escape handling follows the classic stream-tokenizer rules used by
//! login configuration files: the C control escapes, up to three octal
//! digits, and a backslash before any other character yields that character.

/// Strip the delimiters from a quoted slice and decode its escapes.
///
/// The closing delimiter is optional: an unterminated quote runs to the end
/// of the line, and the lexer hands over whatever it matched.
pub(crate) fn unquote(slice: &str, quote: char) -> String {
    let inner = slice.strip_prefix(quote).unwrap_or(slice);
    let inner = strip_closing(inner, quote);
    unescape(inner)
}

/// Remove a trailing delimiter unless it is itself escaped (`"abc\"`).
fn strip_closing(inner: &str, quote: char) -> &str {
    let Some(body) = inner.strip_suffix(quote) else {
        return inner;
    };
    let trailing_backslashes = body.chars().rev().take_while(|&c| c == '\\').count();
    if trailing_backslashes % 2 == 0 {
        body
    } else {
        inner
    }
}

fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('a') => result.push('\u{07}'),
            Some('b') => result.push('\u{08}'),
            Some('f') => result.push('\u{0C}'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('v') => result.push('\u{0B}'),
            Some(first @ '0'..='7') => {
                // Three digits only when the value still fits a byte.
                let max_digits = if first <= '3' { 3 } else { 2 };
                let mut value = first.to_digit(8).unwrap_or(0);
                for _ in 1..max_digits {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                result.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }

    result
}
