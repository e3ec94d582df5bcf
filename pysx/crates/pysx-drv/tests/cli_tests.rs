//! CLI end-to-end tests
//!
//! These run the compiled `pysx` binary against real files and check the
//! report contents and exit codes for every failure class.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Path to the pysx binary.
fn pysx_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pysx"))
}

/// Writes `source` into the temp dir and runs the analyzer over it,
/// returning the report contents and the exit code.
fn run_analyzer(dir: &Path, source: &str) -> (String, i32) {
    let input = dir.join("entrada.py");
    let output = dir.join("salida.txt");
    fs::write(&input, source).expect("write input");

    let assert = Command::new(pysx_bin())
        .arg(&input)
        .arg(&output)
        .assert();
    let code = assert.get_output().status.code().expect("exit code");

    let contents = fs::read_to_string(&output).expect("read report");
    (contents, code)
}

#[test]
fn test_success_report_with_reference_block() {
    let dir = TempDir::new().expect("tempdir");
    let (report, code) = run_analyzer(dir.path(), "def f(x):\n    return x+1\n");

    assert_eq!(code, 0);
    assert!(report.starts_with("El analisis sintactico ha finalizado exitosamente.\n"));
    assert!(report.contains("PRIMEROS:"));
    assert!(report.contains("SIGUIENTES:"));
    assert!(report.contains("PREDICCION"));
    assert!(report.contains("definicion_funcion : { def }"));
}

#[test]
fn test_trailing_comma_in_parameters_is_accepted() {
    let dir = TempDir::new().expect("tempdir");
    let (report, code) = run_analyzer(dir.path(), "def f(x,):\n    return x\n");
    assert_eq!(code, 0);
    assert!(report.starts_with("El analisis sintactico ha finalizado exitosamente."));
}

#[test]
fn test_nested_call_in_print_is_accepted() {
    let dir = TempDir::new().expect("tempdir");
    let (_, code) = run_analyzer(dir.path(), "print(f(a, b, c))\n");
    assert_eq!(code, 0);
}

#[test]
fn test_for_over_range_is_accepted() {
    let dir = TempDir::new().expect("tempdir");
    let (_, code) = run_analyzer(dir.path(), "for i in range(10):\n    print(i)\n");
    assert_eq!(code, 0);
}

#[test]
fn test_list_literal_with_trailing_comma_is_accepted() {
    let dir = TempDir::new().expect("tempdir");
    let (_, code) = run_analyzer(dir.path(), "x = [1, 2, 3,]\n");
    assert_eq!(code, 0);
}

#[test]
fn test_annotation_comma_reports_expected_bracket() {
    let dir = TempDir::new().expect("tempdir");
    let (report, code) = run_analyzer(dir.path(), "def f(x:[int,str]):\n    return x\n");
    assert_eq!(code, 1);
    assert_eq!(
        report,
        "<1,13> Error sintactico: se encontro: \",\"; se esperaba: \"]\".\n"
    );
}

#[test]
fn test_unindented_body_reports_indentation_fault() {
    let dir = TempDir::new().expect("tempdir");
    let (report, code) = run_analyzer(dir.path(), "if x:\nprint(x)\n");
    assert_eq!(code, 1);
    assert_eq!(report, "<2,1>Error sintactico: falla de indentacion\n");
}

#[test]
fn test_unterminated_string_reports_lexical_error() {
    let dir = TempDir::new().expect("tempdir");
    let (report, code) = run_analyzer(dir.path(), "a = \"unterminated\n");
    assert_eq!(code, 1);
    assert_eq!(report, ">>> Error léxico(linea:1,posicion:5)\n");
}

#[test]
fn test_list_comprehension_reports_error_at_for() {
    let dir = TempDir::new().expect("tempdir");
    let (report, code) = run_analyzer(dir.path(), "y = [e for e in xs if e > 0]\n");
    assert_eq!(code, 1);
    assert_eq!(
        report,
        "<1,8> Error sintactico: se encontro: \"for\"; se esperaba: \"]\".\n"
    );
}

#[test]
fn test_error_report_is_a_single_line() {
    let dir = TempDir::new().expect("tempdir");
    let (report, _) = run_analyzer(dir.path(), "x = )\ny = )\n");
    assert_eq!(report.lines().count(), 1);
}

#[test]
fn test_reruns_are_byte_identical() {
    let dir = TempDir::new().expect("tempdir");
    let source = "for i in range(10):\n    print(i)\n";
    let (first, _) = run_analyzer(dir.path(), source);
    let (second, _) = run_analyzer(dir.path(), source);
    assert_eq!(first, second);
}

#[test]
fn test_missing_arguments_is_a_usage_error() {
    Command::new(pysx_bin())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage").or(predicate::str::contains("error")));
}

#[test]
fn test_missing_output_argument_is_a_usage_error() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("entrada.py");
    fs::write(&input, "pass\n").expect("write input");

    Command::new(pysx_bin()).arg(&input).assert().failure().code(2);
}

#[test]
fn test_unreadable_input_fails_without_report() {
    let dir = TempDir::new().expect("tempdir");
    let output = dir.path().join("salida.txt");

    Command::new(pysx_bin())
        .arg(dir.path().join("no_existe.py"))
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no se pudo leer"));

    assert!(!output.exists());
}

#[test]
fn test_empty_input_parses_successfully() {
    let dir = TempDir::new().expect("tempdir");
    let (report, code) = run_analyzer(dir.path(), "");
    assert_eq!(code, 0);
    assert!(report.starts_with("El analisis sintactico ha finalizado exitosamente."));
}
