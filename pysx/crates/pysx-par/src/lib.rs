//! pysx-par - Syntactic analyzer.
//!
//! A single-token-lookahead recursive-descent recognizer over the scanned
//! token stream. The grammar carries no indent/dedent tokens; block
//! structure is reconstructed from the absolute column of each token
//! against a stack of active body columns (the `indent` module). The
//! parser never backtracks and aborts on the first diagnostic.
//!
//! It is a recognizer only: nothing is built, the result of a parse is
//! either `Ok(())` or the single diagnostic that stopped it.

mod expr;
mod indent;
pub mod reference;
mod stmt;

#[cfg(test)]
mod edge_cases;

use pysx_lex::{Kw, Op, Token, TokenKind};
use pysx_util::Diagnostic;

/// Result of every grammar rule.
pub type ParseResult<T> = Result<T, Diagnostic>;

/// Recursive-descent recognizer over a scanned token stream.
pub struct Parser {
    tokens: Vec<Token>,
    /// Cursor into `tokens`; only ever moves forward.
    pos: usize,
    /// Columns of the active block bodies, strictly increasing. The bottom
    /// entry is column 1 and is never popped on a successful parse.
    indent_stack: Vec<u32>,
    /// Line of the token that started the current statement or clause.
    last_stmt_line: u32,
}

impl Parser {
    /// Creates a parser over `tokens`, appending an end marker if the
    /// scanner did not already provide one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |t| !t.is_eof()) {
            let (line, col) = tokens
                .last()
                .map(|last| (last.line, last.col + 1))
                .unwrap_or((1, 1));
            tokens.push(Token::eof(line, col));
        }
        let first_line = tokens[0].line;
        Self {
            tokens,
            pos: 0,
            indent_stack: vec![1],
            last_stmt_line: first_line,
        }
    }

    /// Runs `programa = { sentencia } EOF`.
    pub fn parse(&mut self) -> ParseResult<()> {
        while !self.current().is_eof() {
            self.statement()?;
        }
        Ok(())
    }

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Moves to the next token; parks on the end marker forever.
    pub(crate) fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    /// Consumes the current token when `pred` holds, otherwise fails with
    /// the supplied expected labels.
    pub(crate) fn expect(
        &mut self,
        pred: impl Fn(&Token) -> bool,
        expected: &[&str],
    ) -> ParseResult<()> {
        if pred(self.current()) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    pub(crate) fn expect_op(&mut self, op: Op, shown: &str) -> ParseResult<()> {
        self.expect(|t| t.is_op(op), &[shown])
    }

    pub(crate) fn expect_kw(&mut self, kw: Kw) -> ParseResult<()> {
        self.expect(|t| t.is_kw(kw), &[kw.as_str()])
    }

    pub(crate) fn expect_id(&mut self, shown: &str) -> ParseResult<()> {
        self.expect(|t| t.kind == TokenKind::Id, &[shown])
    }

    /// Token-mismatch diagnostic at the current token.
    pub(crate) fn unexpected(&self, expected: &[&str]) -> Diagnostic {
        let tok = self.current();
        Diagnostic::unexpected(tok.span(), tok.found_label(), expected)
    }

    /// Indentation diagnostic at the current token.
    pub(crate) fn indentation_fault(&self) -> Diagnostic {
        Diagnostic::indentation(self.current().span())
    }
}

#[cfg(test)]
pub(crate) fn parse_source(source: &str) -> ParseResult<()> {
    let tokens = pysx_lex::Scanner::new(source)
        .scan()
        .expect("test source should lex");
    Parser::new(tokens).parse()
}
