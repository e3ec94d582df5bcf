//! Edge case tests for pysx-par

use crate::parse_source;
use pysx_util::{Diagnostic, Span};

#[test]
fn test_edge_deeply_nested_blocks() {
    let source = "\
if a:
    if b:
        if c:
            if d:
                x = 1
            y = 2
        z = 3
w = 4
";
    assert_eq!(parse_source(source), Ok(()));
}

#[test]
fn test_edge_long_trailer_chain() {
    let chain = "a".to_string() + &".b(c)[d]".repeat(50) + "\n";
    assert_eq!(parse_source(&chain), Ok(()));
}

#[test]
fn test_edge_long_assignment_chain() {
    let source = format!("{}1\n", "x = ".repeat(60));
    assert_eq!(parse_source(&source), Ok(()));
}

#[test]
fn test_edge_statements_share_a_line() {
    // nothing in the subset forces a newline between simple statements
    assert_eq!(parse_source("x = 1 y = 2\n"), Ok(()));
}

#[test]
fn test_edge_blank_and_comment_lines_between_body_statements() {
    let source = "\
def f():
    x = 1

    # comentario
    y = 2
";
    assert_eq!(parse_source(source), Ok(()));
}

#[test]
fn test_edge_over_indented_statement_after_block_is_accepted() {
    // the block loop only checks equality against the body column; a
    // deeper statement simply ends the block and parses at top level
    let source = "\
if a:
    x = 1
        y = 2
";
    assert_eq!(parse_source(source), Ok(()));
}

#[test]
fn test_edge_def_colon_missing() {
    let err = parse_source("def f(x)\n    pass\n").unwrap_err();
    assert_eq!(err, Diagnostic::unexpected(Span::new(2, 5), "pass", &[":"]));
}

#[test]
fn test_edge_if_without_colon() {
    let err = parse_source("if x\n    pass\n").unwrap_err();
    assert_eq!(err, Diagnostic::unexpected(Span::new(2, 5), "pass", &[":"]));
}

#[test]
fn test_edge_eof_inside_call() {
    let err = parse_source("x = f(a,").unwrap_err();
    assert_eq!(err.span(), Span::new(1, 9));
    assert!(matches!(err, Diagnostic::UnexpectedToken { .. }));
}

#[test]
fn test_edge_lambda_inside_arguments_with_comprehension_guard() {
    assert_eq!(
        parse_source("x = aplicar(e * 2 for e in xs if filtro(e))\n"),
        Ok(())
    );
}

#[test]
fn test_edge_subscript_of_call_of_attribute() {
    assert_eq!(parse_source("v = tabla.filas(2)[n - 1]\n"), Ok(()));
}

#[test]
fn test_edge_lambda_body_swallows_rest_of_expression() {
    assert_eq!(parse_source("f = lambda n: n % 2 == 0\n"), Ok(()));
}

#[test]
fn test_edge_return_inside_nested_function() {
    let source = "\
def externa(a):
    def interna(b):
        return b * 2
    return interna(a)
";
    assert_eq!(parse_source(source), Ok(()));
}

#[test]
fn test_edge_scenario_suite() {
    // the canonical acceptance scenarios, end to end at the parser level
    assert_eq!(parse_source("def f(x):\n    return x+1\n"), Ok(()));
    assert_eq!(parse_source("def f(x,):\n    return x\n"), Ok(()));
    assert_eq!(parse_source("print(f(a, b, c))\n"), Ok(()));
    assert_eq!(parse_source("for i in range(10):\n    print(i)\n"), Ok(()));
    assert_eq!(parse_source("x = [1, 2, 3,]\n"), Ok(()));
}
