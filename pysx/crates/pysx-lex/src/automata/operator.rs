//! Operator automaton: greedy maximal munch over the operator table.

use crate::automata::Candidate;
use crate::cursor::Cursor;
use crate::token::{TokenKind, OPERATORS};

/// Accepts the longest operator starting at the cursor.
///
/// Two-character lexemes are tried before one-character lexemes, so `<=`
/// never lexes as `<` `=`, and an infix sign is taken here before the
/// integer automaton ever sees it.
pub fn try_accept(cursor: &Cursor) -> Option<Candidate> {
    let c0 = cursor.peek(0);
    let c1 = cursor.peek(1);

    if c0.is_ascii() && c1.is_ascii() && c1 != '\0' {
        let two: String = [c0, c1].iter().collect();
        if let Some(&op) = OPERATORS.get(two.as_str()) {
            return Some(Candidate {
                kind: TokenKind::Op(op),
                lexeme: two,
                line: cursor.line(),
                col: cursor.column(),
                len: 2,
            });
        }
    }

    if !c0.is_ascii() {
        return None;
    }
    let one = c0.to_string();
    OPERATORS.get(one.as_str()).map(|&op| Candidate {
        kind: TokenKind::Op(op),
        lexeme: one,
        line: cursor.line(),
        col: cursor.column(),
        len: 1,
    })
}
