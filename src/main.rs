use std::{
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use cool_scanner::{
    lexer::tokens::TokenKind,
    listing::{write_listing, ListingOptions},
};
use tracing::Level;

/// Scans source files and prints one token per line.
#[derive(Parser, Debug)]
#[command(version, about = "A scanner for a small keyword-driven language")]
struct Args {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Do not print BLANK tokens
    #[arg(long)]
    skip_blanks: bool,

    /// Skip unrecognised characters and keep scanning
    #[arg(long)]
    recover: bool,

    /// Print only tokens of this kind (repeatable), e.g. `--kind INT_CONST`
    #[arg(long = "kind", value_name = "LABEL")]
    kinds: Vec<TokenKind>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Scans one file and prints its listing. Returns the number of errors met.
fn scan_file(path: &Path, options: &ListingOptions) -> anyhow::Result<usize> {
    let file_contents =
        read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path.to_string_lossy().to_string();

    let errors = write_listing(
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        &file_contents,
        &file_name,
        options,
    )
    .with_context(|| format!("failed to write listing for {}", file_name))?;

    Ok(errors)
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = ListingOptions {
        skip_blanks: args.skip_blanks,
        recover: args.recover,
        kinds: args.kinds.clone(),
    };

    let mut failed = false;

    for path in &args.files {
        let errors = scan_file(path, &options)?;

        if errors > 0 {
            failed = true;
            if !args.recover {
                break;
            }
        }
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
