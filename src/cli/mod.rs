//! The Versa Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions. It is the only place that exits the process.

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::args::{AstFormat, Command, VersaArgs};
use crate::codegen::{Dialect, BUILTIN_DIALECTS};
use crate::config;
use crate::engine::{print_error, ExecutionPipeline};
use crate::VersaError;

pub mod args;
pub mod output;

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = VersaArgs::parse();

    match args.command {
        Command::Tokens { file } => {
            let source = read_file_or_exit(&file);
            let tokens = ExecutionPipeline::tokenize_source(&source).unwrap_or_else(exit_with);
            output::print_tokens(&tokens);
        }

        Command::Ast { file, format } => {
            let source = read_file_or_exit(&file);
            match format {
                AstFormat::Json => {
                    let json = ExecutionPipeline::ast_json(&source).unwrap_or_else(exit_with);
                    println!("{}", json);
                }
                AstFormat::Sexpr => {
                    let ast = ExecutionPipeline::parse_source(&source).unwrap_or_else(exit_with);
                    output::print_sexpr(&ast);
                }
            }
        }

        Command::Compile {
            path,
            target,
            dialect_file,
        } => {
            let dialect = config::resolve_dialect(&target, dialect_file.as_deref())
                .unwrap_or_else(exit_with);
            compile_path(&path, &dialect);
        }

        Command::Dialects => output::print_dialects(BUILTIN_DIALECTS),
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

/// Compiles one file, or every source file under a directory. In directory
/// mode every file is attempted and the run fails if any file failed.
fn compile_path(path: &Path, dialect: &Dialect) {
    if path.is_file() {
        let source = read_file_or_exit(path);
        let rendered = ExecutionPipeline::compile_source(&source, dialect).unwrap_or_else(exit_with);
        println!("{}", rendered);
        return;
    }

    let files = ExecutionPipeline::discover_source_files(path).unwrap_or_else(exit_with);
    let mut failed = 0;
    for file in &files {
        output::print_header(file);
        match compile_file(file, dialect) {
            Ok(rendered) => println!("{}\n", rendered),
            Err(e) => {
                failed += 1;
                print_error(e);
            }
        }
    }

    if failed > 0 {
        output::print_failure_summary(failed, files.len());
        process::exit(1);
    }
}

fn compile_file(file: &Path, dialect: &Dialect) -> Result<String, VersaError> {
    let source = ExecutionPipeline::read_file(file)?;
    ExecutionPipeline::compile_source(&source, dialect)
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn read_file_or_exit(path: &Path) -> String {
    ExecutionPipeline::read_file(path).unwrap_or_else(exit_with)
}

fn exit_with<T>(error: VersaError) -> T {
    print_error(error);
    process::exit(1);
}
