//! pysx-lex - Lexical analyzer.
//!
//! The scanner walks the source through a position-tracking [`Cursor`] and
//! delegates recognition to four independent automata (string, operator,
//! identifier/keyword, integer), trying them in that fixed priority order
//! at every non-whitespace, non-comment position. Automata only look
//! ahead; the scanner performs all consumption, so each automaton reports
//! how many bytes its candidate covers.
//!
//! The produced token stream is immutable, ends in a synthetic end-of-
//! input marker, and carries the 1-based line/column of every token's
//! first character; the parser reconstructs block structure from those
//! columns alone.

pub mod automata;
pub mod cursor;
pub mod scanner;
pub mod token;

pub use cursor::Cursor;
pub use scanner::Scanner;
pub use token::{Kw, Op, Token, TokenKind};
