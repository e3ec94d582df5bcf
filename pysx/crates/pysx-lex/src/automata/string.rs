//! String literal automaton.

use crate::automata::Candidate;
use crate::cursor::Cursor;
use crate::token::TokenKind;

/// Accepts a single- or double-quoted string literal, both delimiters
/// included in the lexeme.
///
/// A backslash makes the following character literal, so an escaped
/// delimiter does not close the string; the literal may span lines.
/// Returns `None` when the input ends before the closing delimiter, which
/// the scanner reports as a lexical error at the opening quote.
pub fn try_accept(cursor: &Cursor) -> Option<Candidate> {
    let delim = cursor.peek(0);
    if delim != '"' && delim != '\'' {
        return None;
    }

    let mut lexeme = String::new();
    lexeme.push(delim);
    let mut offset = delim.len_utf8();
    let mut escaped = false;

    while cursor.has(offset) {
        let c = cursor.peek(offset);
        lexeme.push(c);
        offset += c.len_utf8();

        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == delim {
            return Some(Candidate {
                kind: TokenKind::Cadena,
                lexeme,
                line: cursor.line(),
                col: cursor.column(),
                len: offset,
            });
        }
    }

    None
}
