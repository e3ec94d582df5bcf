//! Identifier and reserved-word automaton.

use crate::automata::Candidate;
use crate::cursor::Cursor;
use crate::token::{TokenKind, KEYWORDS};

/// True for characters that can start an identifier: ASCII letters and `_`.
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// True for characters that can continue an identifier.
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Accepts a letter or underscore followed by letters, digits, and
/// underscores. If the lexeme is a reserved word, the candidate carries
/// that word's kind; otherwise it is a plain identifier.
pub fn try_accept(cursor: &Cursor) -> Option<Candidate> {
    if !is_ident_start(cursor.peek(0)) {
        return None;
    }

    let mut lexeme = String::new();
    let mut offset = 0;
    while is_ident_continue(cursor.peek(offset)) {
        lexeme.push(cursor.peek(offset));
        offset += 1;
    }

    let kind = match KEYWORDS.get(lexeme.as_str()) {
        Some(&kw) => TokenKind::Kw(kw),
        None => TokenKind::Id,
    };

    Some(Candidate {
        kind,
        lexeme,
        line: cursor.line(),
        col: cursor.column(),
        len: offset,
    })
}
