//! CLI tool to inspect how collver source files are split and tokenized.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use collver::{DEFAULT_PRELUDE, LexOptions, lex_file, read_source, split_lines};

#[derive(Parser)]
#[command(name = "collver")]
#[command(version, about = "Front end for the collver stack language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a source file and print the token stream
    Lex {
        /// The source file to tokenize
        input: PathBuf,

        /// Library named by the implicit leading include
        #[arg(long, default_value = DEFAULT_PRELUDE)]
        prelude: String,

        /// Ignore everything after `//` outside of strings
        #[arg(long)]
        line_comments: bool,

        /// Translate `\n` and `\r` inside strings
        #[arg(long)]
        escapes: bool,

        /// Print tokens as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print the lines of a source file with their row numbers
    Lines {
        /// The source file to split
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Lex {
            input,
            prelude,
            line_comments,
            escapes,
            json,
        } => {
            let options = LexOptions::new()
                .prelude(prelude)
                .line_comments(line_comments)
                .escapes(escapes);
            lex_command(&input, &options, json)
        }
        Commands::Lines { input } => lines_command(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn lex_command(input: &Path, options: &LexOptions, json: bool) -> Result<()> {
    log::info!("Lexing {}", input.display());
    let lexed = lex_file(input, options)?;

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &lexed.tokens)
            .context("failed to write tokens as JSON")?;
        writeln!(out)?;
    } else {
        for token in &lexed.tokens {
            writeln!(out, "{token}")?;
        }
    }
    Ok(())
}

fn lines_command(input: &Path) -> Result<()> {
    let bytes = read_source(input)?;
    let lines = split_lines(&bytes);

    let mut out = io::stdout().lock();
    for (row, line) in lines.iter().enumerate() {
        writeln!(out, "{:>5} | {}", row + 1, String::from_utf8_lossy(line))?;
    }
    Ok(())
}
