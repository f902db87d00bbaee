//! javalex-drv - Driver and token sink for the javalex analyzer.
//!
//! The core crate only returns a token sequence; this crate is the external
//! consumer. It reads a source file (or falls back to an embedded sample
//! program), runs the scanner, and renders each token as
//! `<lexeme, category-name>` on its own line.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use javalex_lex::{scan, TokenSequence};
use javalex_util::{Handler, UtilError};

/// The sample program scanned when no input file is given.
pub const SAMPLE_PROGRAM: &str = r#"import java.util.Scanner;
public class HelloWorld {
    public static void main(String[] args) {
        // This is a single-line comment
        Scanner scanner = new Scanner(System.in);
        System.out.println("Enter a number:");
        int number = scanner.nextInt();
        /* This is a
           multiline comment */
        System.out.println(number);
        scanner.close();
    }
}
"#;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "javalex",
    about = "Lexical analyzer for Java-like source text",
    version
)]
pub struct Cli {
    /// Source file to scan; the embedded sample program when omitted.
    pub input: Option<PathBuf>,

    /// Also print collected diagnostics to stderr.
    #[arg(long)]
    pub diagnostics: bool,
}

/// Entry point used by the `javalex` binary.
pub fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli, &mut std::io::stdout().lock())
}

/// Scans the requested input and renders the token list to `out`.
///
/// Lexical errors never fail the run; they appear as error tokens in the
/// output (and on stderr with `--diagnostics`). Only I/O problems propagate.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let source = match &cli.input {
        Some(path) => fs::read_to_string(path).map_err(|source| UtilError::Io {
            path: path.display().to_string(),
            source,
        })?,
        None => SAMPLE_PROGRAM.to_string(),
    };

    let handler = Handler::new();
    let tokens = scan(&source, &handler);
    render_tokens(&tokens, out)?;

    if cli.diagnostics {
        for diagnostic in handler.diagnostics() {
            eprintln!("{}", diagnostic);
        }
    }
    Ok(())
}

/// Writes each token as `<lexeme, category-name>` on its own line.
pub fn render_tokens(tokens: &TokenSequence, out: &mut impl Write) -> Result<()> {
    for token in tokens {
        writeln!(out, "{}", token).context("failed to write token list")?;
    }
    Ok(())
}
