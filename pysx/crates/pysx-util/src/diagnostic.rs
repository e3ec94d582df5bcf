//! Diagnostics emitted by the scanner and the parser.
//!
//! The analyzer writes at most one diagnostic per run, in one of three
//! fixed forms. The `Display` implementations below render those forms
//! byte for byte; nothing else in the workspace formats error text.

use thiserror::Error;

use crate::span::Span;

/// Message written when the whole input parses.
pub const SUCCESS_MESSAGE: &str = "El analisis sintactico ha finalizado exitosamente.";

/// A fatal analysis failure.
///
/// All three variants abort the run on first occurrence; there is no
/// recovery and no second diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// No automaton accepted at a non-whitespace, non-comment position, or
    /// a string literal ran out of input before its closing delimiter.
    #[error(">>> Error léxico(linea:{line},posicion:{col})")]
    Lexical { line: u32, col: u32 },

    /// The current token matched neither the expected kinds nor lexemes.
    #[error("<{line},{col}> Error sintactico: se encontro: \"{found}\"; se esperaba: {}.", quote_list(.expected))]
    UnexpectedToken {
        line: u32,
        col: u32,
        found: String,
        expected: Vec<String>,
    },

    /// A compound body failed to start on a new, more indented line, or a
    /// dedent would have emptied the indentation stack.
    #[error("<{line},{col}>Error sintactico: falla de indentacion")]
    Indentation { line: u32, col: u32 },
}

impl Diagnostic {
    /// Lexical error at `span`.
    pub fn lexical(span: Span) -> Self {
        Self::Lexical {
            line: span.line,
            col: span.col,
        }
    }

    /// Token mismatch at `span`: `found` is the offending lexeme (or `EOF`),
    /// `expected` the labels supplied by the failing production.
    pub fn unexpected(span: Span, found: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnexpectedToken {
            line: span.line,
            col: span.col,
            found: found.into(),
            expected: expected.iter().map(|e| (*e).to_string()).collect(),
        }
    }

    /// Indentation fault at `span`.
    pub fn indentation(span: Span) -> Self {
        Self::Indentation {
            line: span.line,
            col: span.col,
        }
    }

    /// Position the diagnostic points at.
    pub fn span(&self) -> Span {
        match *self {
            Self::Lexical { line, col }
            | Self::UnexpectedToken { line, col, .. }
            | Self::Indentation { line, col } => Span::new(line, col),
        }
    }
}

fn quote_list(expected: &[String]) -> String {
    expected
        .iter()
        .map(|e| format!("\"{e}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
