//! Culprit devtools
//!
//! Developer tooling for the culprit diagnostics workspace.

mod check_docs;
mod scan;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use culprit_core::{Console, DiagnosticError, DiagnosticRenderer, init_tracing};

#[derive(Parser)]
#[command(name = "culprit-devtools")]
#[command(about = "Developer tooling for the culprit diagnostics workspace")]
#[command(version = culprit_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print detailed information while running
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every diagnostic code in the source has a documentation entry
    CheckDocs {
        /// Path to the source code file or directory
        source: PathBuf,

        /// Path to the documentation file or directory serving as the error index
        #[arg(value_name = "ERROR_INDEX")]
        docs_index: PathBuf,

        /// Do not fail on documentation headings with no matching code
        #[arg(long)]
        no_fail_on_extra: bool,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let console = if cli.no_color {
        Console::no_colors()
    } else {
        Console::new()
    };

    match cli.command {
        Commands::CheckDocs {
            source,
            docs_index,
            no_fail_on_extra,
        } => run_check_docs(
            &source,
            &docs_index,
            cli.verbose,
            !no_fail_on_extra,
            cli.no_color,
            &console,
        ),
    }
}

fn run_check_docs(
    source: &Path,
    docs_index: &Path,
    verbose: bool,
    fail_on_extra: bool,
    no_color: bool,
    console: &Console,
) -> ExitCode {
    if !source.exists() {
        eprintln!("Source {} does not exist.", source.display());
        return ExitCode::FAILURE;
    }
    if source.is_file() && source.extension().is_none_or(|ext| ext != "rs") {
        eprintln!("Source {} is not a Rust file.", source.display());
        return ExitCode::FAILURE;
    }

    if !docs_index.exists() {
        eprintln!("Error index {} does not exist.", docs_index.display());
        return ExitCode::FAILURE;
    }
    if docs_index.is_file() && docs_index.extension().is_none_or(|ext| ext != "md") {
        eprintln!("Error index {} is not a Markdown file.", docs_index.display());
        return ExitCode::FAILURE;
    }

    match check_docs::check(source, docs_index, verbose, fail_on_extra, console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            match error.downcast_ref::<DiagnosticError>() {
                Some(failure) => {
                    let renderer = if no_color {
                        DiagnosticRenderer::no_colors()
                    } else {
                        DiagnosticRenderer::new()
                    };
                    eprint!("{}", renderer.render(failure.diagnostic()));
                }
                None => eprintln!("{error:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
