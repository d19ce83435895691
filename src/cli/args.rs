//! Defines the command-line arguments and subcommands for the Versa CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "versa",
    version,
    about = "Render Versa programs as C-like, Lua-like or Python-like source."
)]
pub struct VersaArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the token stream of a script, one token per line.
    Tokens {
        /// The path to the Versa script file to scan.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Show the Abstract Syntax Tree (AST) for a script.
    Ast {
        /// The path to the Versa script file to parse.
        #[arg(required = true)]
        file: PathBuf,
        /// Output format of the tree.
        #[arg(long, value_enum, default_value_t = AstFormat::Json)]
        format: AstFormat,
    },
    /// Render a script, or every `.versa` script under a directory.
    Compile {
        /// A script file or a directory to search for scripts.
        #[arg(required = true)]
        path: PathBuf,
        /// Name of a built-in dialect.
        #[arg(short, long, default_value = "canonical")]
        target: String,
        /// A YAML dialect file; overrides `--target`.
        #[arg(long)]
        dialect_file: Option<PathBuf>,
    },
    /// List the built-in dialects.
    Dialects,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AstFormat {
    /// Pretty JSON with a `type` tag per node
    Json,
    /// Compact s-expressions, one statement per line
    Sexpr,
}
