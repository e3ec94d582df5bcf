//! Scanner: drives the automata over the cursor.
//!
//! Whitespace (including newlines) is skipped, `#` starts a comment that
//! runs to the end of the line, and every remaining position must be
//! claimed by one of the automata or the scan fails with a lexical error.
//! The scan consumes the whole input before any parsing happens.

use pysx_util::Diagnostic;

use crate::automata::{self, Candidate};
use crate::cursor::Cursor;
use crate::token::Token;

/// One-shot tokenizer for a source text.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Tokenizes the whole input and appends the synthetic end marker.
    ///
    /// The end marker sits on the last token's line, one column past the
    /// last token's first character, or at (1,1) for empty input.
    pub fn scan(mut self) -> Result<Vec<Token>, Diagnostic> {
        let mut tokens = Vec::new();

        while !self.cursor.is_at_end() {
            let c = self.cursor.current();
            if c.is_whitespace() {
                self.skip_whitespace();
                continue;
            }
            if c == '#' {
                self.skip_comment();
                continue;
            }

            match self.next_candidate() {
                Some(candidate) => {
                    let target = self.cursor.position() + candidate.len;
                    self.cursor.advance_to(target);
                    tokens.push(Token::from(candidate));
                }
                None => return Err(Diagnostic::lexical(self.cursor.span())),
            }
        }

        let (line, col) = tokens
            .last()
            .map(|last| (last.line, last.col + 1))
            .unwrap_or((1, 1));
        tokens.push(Token::eof(line, col));

        Ok(tokens)
    }

    /// Tries the automata in priority order: string, operator, identifier,
    /// integer. The first acceptance wins.
    fn next_candidate(&self) -> Option<Candidate> {
        automata::string::try_accept(&self.cursor)
            .or_else(|| automata::operator::try_accept(&self.cursor))
            .or_else(|| automata::identifier::try_accept(&self.cursor))
            .or_else(|| automata::integer::try_accept(&self.cursor))
    }

    fn skip_whitespace(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current().is_whitespace() {
            self.cursor.advance();
        }
    }

    /// Skips `#` up to, but not including, the next newline.
    fn skip_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current() != '\n' {
            self.cursor.advance();
        }
    }
}
