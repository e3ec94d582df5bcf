//! Column-based indentation discipline.
//!
//! The token stream carries no indent/dedent markers, so block structure
//! is recovered from the absolute column of each statement's first token
//! against a stack of active body columns. Three primitives cover it:
//! realign at a statement head, open a body after a `:`, and read a body.

use crate::{ParseResult, Parser};

impl Parser {
    /// Realigns the indentation stack at the head of a statement.
    ///
    /// On a new line, every stack entry deeper than the current column is
    /// dedented away and the statement marker moves to the current line.
    /// Emptying the stack is an indentation fault.
    pub(crate) fn align_new_statement(&mut self) -> ParseResult<()> {
        if self.current().line > self.last_stmt_line {
            let col = self.current().col;
            while self.indent_stack.last().is_some_and(|&top| col < top) {
                self.indent_stack.pop();
                if self.indent_stack.is_empty() {
                    return Err(self.indentation_fault());
                }
            }
            self.last_stmt_line = self.current().line;
        }
        Ok(())
    }

    /// Opens a block body after the `:` of a compound statement.
    ///
    /// The body's first token must sit on a later line than the statement
    /// head and strictly deeper than the enclosing column; that column
    /// becomes the new stack top and the statement marker moves to it.
    pub(crate) fn require_indent_after_colon(&mut self) -> ParseResult<()> {
        let line = self.current().line;
        let col = self.current().col;

        if line == self.last_stmt_line {
            return Err(self.indentation_fault());
        }
        if self.indent_stack.last().is_some_and(|&top| col <= top) {
            return Err(self.indentation_fault());
        }

        self.indent_stack.push(col);
        self.last_stmt_line = line;
        Ok(())
    }

    /// Reads the statements of one block body, then closes it.
    ///
    /// The body is every consecutive statement whose column equals the
    /// column pushed by [`Self::require_indent_after_colon`]; the end of
    /// input or a shallower token ends it. At least one statement has
    /// already been guaranteed by the column check above.
    pub(crate) fn block(&mut self) -> ParseResult<()> {
        let Some(&body_col) = self.indent_stack.last() else {
            return Err(self.indentation_fault());
        };

        while !self.current().is_eof() && self.current().col == body_col {
            self.statement()?;
            if self.current().is_eof() || self.current().col < body_col {
                break;
            }
        }

        if self.indent_stack.last() == Some(&body_col) {
            self.indent_stack.pop();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_source;
    use pysx_util::{Diagnostic, Span};

    #[test]
    fn test_body_must_be_on_new_line() {
        let err = parse_source("if x: pass\n").unwrap_err();
        assert_eq!(err, Diagnostic::indentation(Span::new(1, 7)));
    }

    #[test]
    fn test_body_must_be_deeper_than_enclosing_column() {
        let err = parse_source("if x:\nprint(x)\n").unwrap_err();
        assert_eq!(err, Diagnostic::indentation(Span::new(2, 1)));
    }

    #[test]
    fn test_empty_body_at_end_of_input() {
        let err = parse_source("while x:\n").unwrap_err();
        assert!(matches!(err, Diagnostic::Indentation { .. }));
    }

    #[test]
    fn test_nested_blocks_and_full_dedent() {
        let source = "\
def f(x):
    if x:
        return 1
    return 2
y = 3
";
        assert_eq!(parse_source(source), Ok(()));
    }

    #[test]
    fn test_dedent_to_intermediate_level() {
        let source = "\
if a:
    if b:
        x = 1
    y = 2
z = 3
";
        assert_eq!(parse_source(source), Ok(()));
    }

    #[test]
    fn test_tabs_and_spaces_mix_when_columns_align() {
        // tab = 4 visual columns, so "\t" and "    " open the same body
        let source = "if a:\n\tx = 1\n    y = 2\n";
        assert_eq!(parse_source(source), Ok(()));
    }

    #[test]
    fn test_body_shallower_than_head_is_a_fault() {
        let source = "def f():\n    if x:\n  pass\n";
        let err = parse_source(source).unwrap_err();
        assert_eq!(err, Diagnostic::indentation(Span::new(3, 3)));
    }

    #[test]
    fn test_second_statement_joins_body_column() {
        let source = "while a:\n    x = 1\n    y = 2\n";
        assert_eq!(parse_source(source), Ok(()));
    }

    #[test]
    fn test_stack_survives_sibling_compounds() {
        let source = "\
if a:
    x = 1
if b:
    y = 2
";
        assert_eq!(parse_source(source), Ok(()));
    }
}
