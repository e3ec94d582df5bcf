//! Expression recognition: the precedence cascade, postfix trailers, and
//! call argument lists with generator comprehensions.
//!
//! # Precedence (lowest to highest)
//!
//! | Level | Rule | Operators |
//! |-------|------|-----------|
//! | 1 | or | `or` |
//! | 2 | and | `and` |
//! | 3 | not | `not` (prefix) |
//! | 4 | comparison | `==` `!=` `<` `>` `<=` `>=` `in` `is` |
//! | 5 | additive | `+` `-` |
//! | 6 | multiplicative | `*` `/` `%` |
//! | 7 | sign | unary `+` `-` |
//! | 8 | postfix | `(...)` `[...]` `.id` trailers |
//! | 9 | atom | literals, names, `(...)`, lists, lambda |
//!
//! There is no power operator: `**` lexes as two `*` tokens and fails in
//! the cascade, so no right-associative step exists.

use pysx_lex::{Kw, Op, TokenKind};

use crate::{ParseResult, Parser};

/// Expected-set reported when no atom alternative applies.
const ATOM_EXPECTED: &[&str] = &[
    "id", "num", "cadena", "(", "[", "lambda", "True", "False", "None",
];

impl Parser {
    /// `expresion (',' expresion)*`, one side of an assignment.
    pub(crate) fn expression_list(&mut self) -> ParseResult<()> {
        self.expression()?;
        while self.current().is_op(Op::Comma) {
            self.advance();
            self.expression()?;
        }
        Ok(())
    }

    pub(crate) fn expression(&mut self) -> ParseResult<()> {
        self.or_expr()
    }

    fn or_expr(&mut self) -> ParseResult<()> {
        self.and_expr()?;
        while self.current().is_kw(Kw::Or) {
            self.advance();
            self.and_expr()?;
        }
        Ok(())
    }

    fn and_expr(&mut self) -> ParseResult<()> {
        self.not_expr()?;
        while self.current().is_kw(Kw::And) {
            self.advance();
            self.not_expr()?;
        }
        Ok(())
    }

    fn not_expr(&mut self) -> ParseResult<()> {
        if self.current().is_kw(Kw::Not) {
            self.advance();
            self.not_expr()
        } else {
            self.comparison()
        }
    }

    fn comparison(&mut self) -> ParseResult<()> {
        self.additive()?;
        while self.at_comparison_op() {
            self.advance();
            self.additive()?;
        }
        Ok(())
    }

    fn at_comparison_op(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::Op(Op::EqEq | Op::NotEq | Op::Lt | Op::Gt | Op::LtEq | Op::GtEq)
                | TokenKind::Kw(Kw::In | Kw::Is)
        )
    }

    fn additive(&mut self) -> ParseResult<()> {
        self.term()?;
        while matches!(self.current().kind, TokenKind::Op(Op::Plus | Op::Minus)) {
            self.advance();
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> ParseResult<()> {
        self.factor()?;
        while matches!(
            self.current().kind,
            TokenKind::Op(Op::Star | Op::Slash | Op::Percent)
        ) {
            self.advance();
            self.factor()?;
        }
        Ok(())
    }

    /// Unary sign. The scanner never folds an infix sign into a literal,
    /// so every sign in expression position lands here.
    fn factor(&mut self) -> ParseResult<()> {
        if matches!(self.current().kind, TokenKind::Op(Op::Plus | Op::Minus)) {
            self.advance();
            self.factor()
        } else {
            self.postfix()
        }
    }

    /// An atom followed by any run of call, subscript, and attribute
    /// trailers, consumed greedily left to right.
    fn postfix(&mut self) -> ParseResult<()> {
        self.atom()?;
        loop {
            match self.current().kind {
                TokenKind::Op(Op::LParen) => {
                    self.advance();
                    if !self.current().is_op(Op::RParen) {
                        self.arguments()?;
                    }
                    self.expect_op(Op::RParen, ")")?;
                }
                TokenKind::Op(Op::LBracket) => {
                    self.advance();
                    self.expression()?;
                    self.expect_op(Op::RBracket, "]")?;
                }
                TokenKind::Op(Op::Dot) => {
                    self.advance();
                    self.expect_id("identificador")?;
                }
                _ => return Ok(()),
            }
        }
    }

    fn atom(&mut self) -> ParseResult<()> {
        match self.current().kind {
            TokenKind::Id
            | TokenKind::Entero
            | TokenKind::Cadena
            | TokenKind::Kw(Kw::True | Kw::False | Kw::None) => {
                self.advance();
                Ok(())
            }
            TokenKind::Op(Op::LParen) => {
                self.advance();
                if self.current().is_op(Op::RParen) {
                    self.advance();
                    return Ok(());
                }
                self.expression()?;
                self.expect_op(Op::RParen, ")")
            }
            TokenKind::Op(Op::LBracket) => self.list_literal(),
            TokenKind::Kw(Kw::Lambda) => self.lambda(),
            _ => Err(self.unexpected(ATOM_EXPECTED)),
        }
    }

    /// `[ (expr (',' expr)* [','])? ]`. Comprehensions are not an atom
    /// form, so a `for` here surfaces as an unexpected token.
    fn list_literal(&mut self) -> ParseResult<()> {
        self.advance();
        if !self.current().is_op(Op::RBracket) {
            self.expression()?;
            while self.current().is_op(Op::Comma) {
                self.advance();
                if self.current().is_op(Op::RBracket) {
                    break;
                }
                self.expression()?;
            }
        }
        self.expect_op(Op::RBracket, "]")
    }

    /// Call arguments: a comma-separated expression list with a trailing
    /// comma tolerated, or a generator comprehension once a `for` follows
    /// an expression.
    pub(crate) fn arguments(&mut self) -> ParseResult<()> {
        self.expression()?;
        if self.current().is_kw(Kw::For) {
            return self.comprehension();
        }
        while self.current().is_op(Op::Comma) {
            self.advance();
            if self.current().is_op(Op::RParen) {
                return Ok(());
            }
            self.expression()?;
            if self.current().is_kw(Kw::For) {
                return self.comprehension();
            }
        }
        if !matches!(self.current().kind, TokenKind::Op(Op::RParen | Op::Comma)) {
            return Err(self.unexpected(&[")", ","]));
        }
        Ok(())
    }

    /// One or more `for id in expr { if expr }` clauses. No comma may
    /// follow a comprehension; only the closing parenthesis ends it.
    fn comprehension(&mut self) -> ParseResult<()> {
        while self.current().is_kw(Kw::For) {
            self.advance();
            self.expect_id("identificador")?;
            self.expect_kw(Kw::In)?;
            self.expression()?;
            while self.current().is_kw(Kw::If) {
                self.advance();
                self.expression()?;
            }
        }
        if !self.current().is_op(Op::RParen) {
            return Err(self.unexpected(&[")"]));
        }
        Ok(())
    }

    /// `lambda [id (',' id)*] : expresion`
    fn lambda(&mut self) -> ParseResult<()> {
        self.advance();
        if !self.current().is_op(Op::Colon) {
            self.expect_id("identificador")?;
            while self.current().is_op(Op::Comma) {
                self.advance();
                self.expect_id("identificador")?;
            }
        }
        self.expect_op(Op::Colon, ":")?;
        self.expression()
    }
}
