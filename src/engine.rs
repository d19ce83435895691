//! Host-facing facade over the pipeline.
//!
//! The library core (`syntax`, `ast`, `codegen`) is pure. This module adds
//! what a host needs around it: reading sources from disk, discovering
//! source files, serializing intermediate results and reporting errors.

use std::fs;
use std::path::{Path, PathBuf};

use miette::Report;
use walkdir::WalkDir;

use crate::ast::Node;
use crate::codegen::{self, Dialect};
use crate::diagnostics::VersaError;
use crate::syntax::{lexer, parser, Token};

/// File extension of Versa sources.
pub const SOURCE_EXTENSION: &str = "versa";

// ============================================================================
// ERROR REPORTING
// ============================================================================

/// Prints an error with miette's graphical report handler.
pub fn print_error(error: VersaError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}

// ============================================================================
// EXECUTION PIPELINE
// ============================================================================

/// Text → tokens → AST → text, plus the file handling around it.
#[derive(Debug, Default)]
pub struct ExecutionPipeline;

impl ExecutionPipeline {
    pub fn tokenize_source(source: &str) -> Result<Vec<Token>, VersaError> {
        lexer::tokenize(source)
    }

    pub fn parse_source(source: &str) -> Result<Vec<Node>, VersaError> {
        let tokens = lexer::tokenize(source)?;
        parser::parse(&tokens)
    }

    pub fn compile_source(source: &str, dialect: &Dialect) -> Result<String, VersaError> {
        let ast = Self::parse_source(source)?;
        codegen::render(&ast, dialect)
    }

    /// The AST as pretty-printed JSON.
    pub fn ast_json(source: &str) -> Result<String, VersaError> {
        let ast = Self::parse_source(source)?;
        serde_json::to_string_pretty(&ast).map_err(|source| VersaError::Serialize { source })
    }

    pub fn read_file(path: &Path) -> Result<String, VersaError> {
        fs::read_to_string(path).map_err(|source| VersaError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// A file itself, or every `.versa` file below a directory in sorted order.
    pub fn discover_source_files(root: &Path) -> Result<Vec<PathBuf>, VersaError> {
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| VersaError::Io {
                path: e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf),
                source: e.into(),
            })?;
            let is_source = entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == SOURCE_EXTENSION);
            if is_source {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}
