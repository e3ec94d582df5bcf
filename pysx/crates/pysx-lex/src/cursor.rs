//! Character cursor for traversing source code.
//!
//! The cursor keeps a byte position plus 1-based line/column counters
//! while walking the source. Columns are visual: a newline resets the
//! column to 1, a tab advances it by four, anything else by one. The
//! parser later judges indentation against these columns, which is what
//! makes tabs and spaces interchangeable for block structure.

use pysx_util::Span;

/// A cursor over source text with bounded lookahead.
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, visual).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character starting `offset` bytes past the cursor, or
    /// `'\0'` when that position is past the end of the source.
    ///
    /// Pure: may be called any number of times without consuming input.
    #[inline]
    pub fn peek(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Returns the character at the cursor position.
    #[inline]
    pub fn current(&self) -> char {
        self.peek(0)
    }

    /// Returns true if `offset` bytes ahead is still inside the source.
    #[inline]
    pub fn has(&self, offset: usize) -> bool {
        self.position + offset < self.source.len()
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Advances the cursor one character, updating line and column.
    ///
    /// Does nothing at the end of the source.
    pub fn advance(&mut self) {
        let Some(c) = self.source[self.position..].chars().next() else {
            return;
        };
        self.position += c.len_utf8();
        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            '\t' => self.column += 4,
            _ => self.column += 1,
        }
    }

    /// Consumes characters until the cursor reaches the byte position
    /// `target`, which must have been derived from this cursor.
    pub fn advance_to(&mut self, target: usize) {
        while self.position < target && !self.is_at_end() {
            self.advance();
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current position as a [`Span`].
    pub fn span(&self) -> Span {
        Span::new(self.line, self.column)
    }
}
