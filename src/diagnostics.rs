//! Unified, `miette`-based diagnostics for the Versa pipeline.
//!
//! Every failure produced by the lexer, the parser, the code generator or
//! the host layer is a [`VersaError`]. Each variant carries a stable
//! diagnostic code of the form `versa::<phase>::<what>` so hosts and tests
//! can classify errors without matching on message text.

use std::path::PathBuf;
use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Shared handle to the named source text attached to lexer diagnostics.
pub type SourceArc = Arc<NamedSource<String>>;

/// Converts a source string into a [`SourceArc`] for use in error reports.
pub fn to_error_source<S: AsRef<str>>(source: S) -> SourceArc {
    Arc::new(NamedSource::new("source", source.as_ref().to_string()))
}

/// Type-safe error classification that corresponds to [`VersaError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Unterminated strings, characters outside every token class
    Lex,
    /// Token mismatches, premature end of input, stray keywords
    Parse,
    /// Node kinds or operator forms a dialect cannot render
    Codegen,
    /// Reading sources from disk
    Io,
    /// Loading dialect files
    Config,
    /// Failures that indicate a bug rather than bad input
    Internal,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Lex => "Lex",
            ErrorType::Parse => "Parse",
            ErrorType::Codegen => "Codegen",
            ErrorType::Io => "Io",
            ErrorType::Config => "Config",
            ErrorType::Internal => "Internal",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single error type for all Versa failure modes.
#[derive(Error, Diagnostic, Debug)]
pub enum VersaError {
    // ------------------------------------------------------------------
    // Lexing
    // ------------------------------------------------------------------
    #[error("Lex error: unterminated string literal")]
    #[diagnostic(
        code(versa::lex::unterminated_string),
        help("close the string with a matching `\"`")
    )]
    UnterminatedString {
        offset: usize,
        #[source_code]
        src: SourceArc,
        #[label("string starts here")]
        span: SourceSpan,
    },

    #[error("Lex error: unexpected character '{ch}' at offset {offset}")]
    #[diagnostic(code(versa::lex::unexpected_character))]
    UnexpectedCharacter {
        ch: char,
        offset: usize,
        #[source_code]
        src: SourceArc,
        #[label("not part of any token")]
        span: SourceSpan,
    },

    // ------------------------------------------------------------------
    // Parsing
    // ------------------------------------------------------------------
    #[error("Parse error: unexpected end of input (expected {expected})")]
    #[diagnostic(code(versa::parse::unexpected_eof))]
    UnexpectedEof { expected: String },

    #[error("Parse error: expected {expected} but found {found}")]
    #[diagnostic(code(versa::parse::expected))]
    Expected { expected: String, found: String },

    #[error("Parse error: unexpected token {found}")]
    #[diagnostic(code(versa::parse::unexpected_token))]
    UnexpectedToken { found: String },

    #[error("Parse error: unexpected keyword '{keyword}'")]
    #[diagnostic(
        code(versa::parse::unexpected_keyword),
        help("`else` must follow the closing brace of an `if` on the same line")
    )]
    UnexpectedKeyword { keyword: String },

    #[error("Parse error: nesting exceeds {limit} levels")]
    #[diagnostic(
        code(versa::parse::nesting_too_deep),
        help("split the expression or block into smaller pieces")
    )]
    NestingTooDeep { limit: usize },

    // ------------------------------------------------------------------
    // Code generation
    // ------------------------------------------------------------------
    #[error("Codegen error: unknown expression kind '{kind}'")]
    #[diagnostic(code(versa::codegen::unknown_expression))]
    UnknownExpression { kind: String },

    #[error("Codegen error: compound assignment requires an identifier left-hand side")]
    #[diagnostic(
        code(versa::codegen::compound_target),
        help("assign to a plain variable, or pick a dialect with compound assignment")
    )]
    CompoundTarget { operator: String, dialect: String },

    // ------------------------------------------------------------------
    // Host layer
    // ------------------------------------------------------------------
    #[error("IO error: failed to read '{}'", .path.display())]
    #[diagnostic(code(versa::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: invalid dialect file '{}'", .path.display())]
    #[diagnostic(code(versa::config::dialect))]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Config error: unknown dialect '{name}'")]
    #[diagnostic(
        code(versa::config::unknown_dialect),
        help("run `versa dialects` to list the built-in targets")
    )]
    UnknownDialect { name: String },

    #[error("Internal error: failed to serialize output")]
    #[diagnostic(code(versa::internal::serialize))]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl VersaError {
    /// Returns the type-safe error classification for this error.
    pub fn error_type(&self) -> ErrorType {
        use VersaError::*;
        match self {
            UnterminatedString { .. } | UnexpectedCharacter { .. } => ErrorType::Lex,
            UnexpectedEof { .. }
            | Expected { .. }
            | UnexpectedToken { .. }
            | UnexpectedKeyword { .. }
            | NestingTooDeep { .. } => ErrorType::Parse,
            UnknownExpression { .. } | CompoundTarget { .. } => ErrorType::Codegen,
            Io { .. } => ErrorType::Io,
            Config { .. } | UnknownDialect { .. } => ErrorType::Config,
            Serialize { .. } => ErrorType::Internal,
        }
    }

    pub(crate) fn unterminated_string(source: &str, offset: usize) -> Self {
        VersaError::UnterminatedString {
            offset,
            src: to_error_source(source),
            span: (offset, 1).into(),
        }
    }

    pub(crate) fn unexpected_character(source: &str, ch: char, offset: usize) -> Self {
        VersaError::UnexpectedCharacter {
            ch,
            offset,
            src: to_error_source(source),
            span: (offset, ch.len_utf8()).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_errors_classify_as_lex() {
        let err = VersaError::unexpected_character("a @ b", '@', 2);
        assert_eq!(err.error_type(), ErrorType::Lex);
        assert_eq!(
            err.to_string(),
            "Lex error: unexpected character '@' at offset 2"
        );
    }

    #[test]
    fn diagnostic_codes_are_namespaced() {
        let err = VersaError::UnexpectedKeyword {
            keyword: "else".into(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("versa::parse::unexpected_keyword"));
    }
}
