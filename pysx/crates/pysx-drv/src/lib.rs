//! pysx-drv - Analyzer driver.
//!
//! The driver is the outer shell around the two analysis phases: it
//! parses the command line, reads the source file, runs the scanner and
//! the parser in order, and writes the report file. The whole pipeline is
//! single-threaded and synchronous; a lexical error preempts parsing
//! entirely, and the first diagnostic of either phase ends the run.
//!
//! Exit codes: 0 for a successful parse, 1 for any lexical or syntactic
//! error (and for I/O failures), 2 for command-line usage errors.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pysx_lex::Scanner;
use pysx_par::{reference, Parser};
use pysx_util::SUCCESS_MESSAGE;

/// Analizador lexico y sintactico para un subconjunto de Python.
#[derive(ClapParser, Debug)]
#[command(name = "pysx", version)]
#[command(about = "Analizador lexico y sintactico para un subconjunto de Python")]
pub struct Cli {
    /// Archivo de entrada a analizar
    pub entrada: PathBuf,

    /// Archivo de salida para el reporte
    pub salida: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses the command line and runs the analyzer.
///
/// Returns the process exit code; clap itself exits with code 2 on usage
/// errors before this function ever sees them.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = fs::read_to_string(&cli.entrada)
        .with_context(|| format!("no se pudo leer {}", cli.entrada.display()))?;
    debug!(bytes = source.len(), "archivo de entrada leido");

    let report = analyze(&source);

    fs::write(&cli.salida, report.contents.as_bytes())
        .with_context(|| format!("no se pudo escribir {}", cli.salida.display()))?;
    debug!(exit_code = report.exit_code, "reporte escrito");

    Ok(report.exit_code)
}

/// Outcome of one analysis: the full report file plus the exit code.
#[derive(Debug)]
pub struct Report {
    pub contents: String,
    pub exit_code: i32,
}

/// Runs both phases over `source` and renders the report.
///
/// On success the report is the success line followed by the reference
/// tables; on failure it is the single diagnostic line.
pub fn analyze(source: &str) -> Report {
    let tokens = match Scanner::new(source).scan() {
        Ok(tokens) => tokens,
        Err(diag) => {
            debug!("analisis lexico fallido");
            return Report {
                contents: format!("{diag}\n"),
                exit_code: 1,
            };
        }
    };
    debug!(count = tokens.len(), "tokens producidos");

    match Parser::new(tokens).parse() {
        Ok(()) => Report {
            contents: format!("{SUCCESS_MESSAGE}\n\n{}", reference::render()),
            exit_code: 0,
        },
        Err(diag) => Report {
            contents: format!("{diag}\n"),
            exit_code: 1,
        },
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_success_report() {
        let report = analyze("def f(x):\n    return x+1\n");
        assert_eq!(report.exit_code, 0);
        assert!(report.contents.starts_with(SUCCESS_MESSAGE));
        assert!(report.contents.contains("PRIMEROS:"));
        assert!(report.contents.contains("SIGUIENTES:"));
        assert!(report.contents.contains("PREDICCION"));
    }

    #[test]
    fn test_analyze_syntactic_error_is_single_line() {
        let report = analyze("def f(x:[int,str]):\n    return x\n");
        assert_eq!(report.exit_code, 1);
        assert_eq!(
            report.contents,
            "<1,13> Error sintactico: se encontro: \",\"; se esperaba: \"]\".\n"
        );
    }

    #[test]
    fn test_analyze_lexical_error_preempts_parsing() {
        let report = analyze("a = \"unterminated\n");
        assert_eq!(report.exit_code, 1);
        assert_eq!(report.contents, ">>> Error léxico(linea:1,posicion:5)\n");
    }

    #[test]
    fn test_analyze_indentation_error() {
        let report = analyze("if x:\nprint(x)\n");
        assert_eq!(report.exit_code, 1);
        assert_eq!(
            report.contents,
            "<2,1>Error sintactico: falla de indentacion\n"
        );
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let a = analyze("for i in range(10):\n    print(i)\n");
        let b = analyze("for i in range(10):\n    print(i)\n");
        assert_eq!(a.contents, b.contents);
        assert_eq!(a.exit_code, b.exit_code);
    }
}
