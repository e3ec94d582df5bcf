//! Statement parsing: dispatch, simple statements, and compound heads.

use pysx_lex::{Kw, Op, TokenKind};

use crate::{ParseResult, Parser};

impl Parser {
    /// Parses one statement at the current position.
    ///
    /// Compound heads are selected by the current keyword; everything else
    /// is a simple statement.
    pub(crate) fn statement(&mut self) -> ParseResult<()> {
        self.align_new_statement()?;

        match self.current().kind {
            TokenKind::Kw(Kw::Def) => self.def_statement(),
            TokenKind::Kw(Kw::If) => self.if_statement(),
            TokenKind::Kw(Kw::While) => self.while_statement(),
            TokenKind::Kw(Kw::For) => self.for_statement(),
            _ => self.simple_statement(),
        }
    }

    fn simple_statement(&mut self) -> ParseResult<()> {
        match self.current().kind {
            TokenKind::Kw(Kw::Pass | Kw::Break | Kw::Continue) => {
                self.advance();
                Ok(())
            }
            TokenKind::Kw(Kw::Return) => self.return_statement(),
            TokenKind::Kw(Kw::Print) => self.print_statement(),
            _ => self.expression_statement(),
        }
    }

    /// `return` takes an expression only when one starts on the same
    /// physical line as the keyword.
    fn return_statement(&mut self) -> ParseResult<()> {
        self.advance();
        if !self.current().is_eof() && self.current().line == self.last_stmt_line {
            self.expression()?;
        }
        Ok(())
    }

    /// `print ( [argumentos] )`; `print` is a statement, never an atom.
    fn print_statement(&mut self) -> ParseResult<()> {
        self.advance();
        self.expect_op(Op::LParen, "(")?;
        if !self.current().is_op(Op::RParen) {
            self.arguments()?;
        }
        self.expect_op(Op::RParen, ")")
    }

    /// `lista_expresiones { '=' lista_expresiones }`. Chains like
    /// `a = b = c` are accepted without distinguishing targets from
    /// values; this is a recognizer, not a checker.
    fn expression_statement(&mut self) -> ParseResult<()> {
        self.expression_list()?;
        while self.current().is_op(Op::Assign) {
            self.advance();
            self.expression_list()?;
        }
        Ok(())
    }

    /// `def id ( [parametros] ) : bloque`
    fn def_statement(&mut self) -> ParseResult<()> {
        self.advance();
        self.expect_id("identificador")?;
        self.expect_op(Op::LParen, "(")?;
        if !self.current().is_op(Op::RParen) {
            self.parameters()?;
        }
        self.expect_op(Op::RParen, ")")?;
        self.expect_op(Op::Colon, ":")?;
        self.require_indent_after_colon()?;
        self.block()
    }

    /// `parametro (',' parametro)*`, trailing comma tolerated before `)`.
    fn parameters(&mut self) -> ParseResult<()> {
        self.parameter()?;
        while self.current().is_op(Op::Comma) {
            self.advance();
            if self.current().is_op(Op::RParen) {
                break;
            }
            self.parameter()?;
        }
        Ok(())
    }

    fn parameter(&mut self) -> ParseResult<()> {
        self.expect_id("identificador")?;
        if self.current().is_op(Op::Colon) {
            self.advance();
            self.annotation()?;
        }
        Ok(())
    }

    /// Annotation: a bare identifier or `[` identifier `]`. A comma inside
    /// the brackets reports the closing bracket as the expectation.
    fn annotation(&mut self) -> ParseResult<()> {
        if self.current().is_op(Op::LBracket) {
            self.advance();
            self.expect_id("tipo/identificador")?;
            if self.current().is_op(Op::Comma) {
                return Err(self.unexpected(&["]"]));
            }
            self.expect_op(Op::RBracket, "]")
        } else {
            self.expect_id("tipo/identificador")
        }
    }

    /// `if expr : bloque { elif expr : bloque } [ else : bloque ]`
    ///
    /// An `elif`/`else` clause belongs to this `if` only when it sits at
    /// the same column as the `if` itself; consuming one restarts the
    /// statement marker at its line.
    fn if_statement(&mut self) -> ParseResult<()> {
        let head_col = self.current().col;
        self.advance();
        self.expression()?;
        self.expect_op(Op::Colon, ":")?;
        self.require_indent_after_colon()?;
        self.block()?;

        while self.current().is_kw(Kw::Elif) && self.current().col == head_col {
            self.last_stmt_line = self.current().line;
            self.advance();
            self.expression()?;
            self.expect_op(Op::Colon, ":")?;
            self.require_indent_after_colon()?;
            self.block()?;
        }

        if self.current().is_kw(Kw::Else) && self.current().col == head_col {
            self.last_stmt_line = self.current().line;
            self.advance();
            self.expect_op(Op::Colon, ":")?;
            self.require_indent_after_colon()?;
            self.block()?;
        }

        Ok(())
    }

    /// `while expr : bloque`
    fn while_statement(&mut self) -> ParseResult<()> {
        self.advance();
        self.expression()?;
        self.expect_op(Op::Colon, ":")?;
        self.require_indent_after_colon()?;
        self.block()
    }

    /// `for id in expr : bloque`; the loop target is a single identifier.
    fn for_statement(&mut self) -> ParseResult<()> {
        self.advance();
        self.expect_id("identificador")?;
        self.expect_kw(Kw::In)?;
        self.expression()?;
        self.expect_op(Op::Colon, ":")?;
        self.require_indent_after_colon()?;
        self.block()
    }
}
