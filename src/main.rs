//! Pseudopy CLI - Pseudopseudocode to Python translator

use anyhow::{Context, Result};
use clap::Parser;
use pseudopy::diagnostics;
use std::path::PathBuf;

/// Pseudopy - Pseudopseudocode to Python translator
#[derive(Parser, Debug)]
#[command(name = "ppy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Translate Pseudopseudocode to Python", long_about = None)]
struct Cli {
    /// Input Pseudopseudocode file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output Python file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Show debug information
    #[arg(short, long)]
    debug: bool,

    /// Check only (don't write output)
    #[arg(short, long)]
    check: bool,

    /// Emit JSON diagnostics to stderr (on failure only)
    #[arg(long)]
    diag_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        println!("[DEBUG] Input: {:?}", cli.input);
        println!("[DEBUG] Output: {:?}", cli.output);
    }

    let source = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    if cli.debug {
        println!("[DEBUG] Source length: {} bytes", source.len());
    }

    let python_code = match pseudopy::try_translate_source(&source) {
        Ok(code) => code,
        Err(err) => {
            let diags = diagnostics::from_error(&err, Some(&cli.input));
            // The marker string counts as output and still lands in the
            // destination file.
            if !cli.check {
                std::fs::write(&cli.output, err.to_string())
                    .with_context(|| format!("failed to write {}", cli.output.display()))?;
            }
            print!("{}", diags.to_text());
            if cli.diag_json {
                eprintln!("{}", diags.to_json());
            }
            std::process::exit(1);
        }
    };

    if cli.debug {
        println!("[DEBUG] Generated Python code:");
        println!("{python_code}");
    }

    if cli.check {
        println!("✅ Translation successful!");
        return Ok(());
    }

    std::fs::write(&cli.output, &python_code)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!("✅ Translated to: {:?}", cli.output);

    Ok(())
}
