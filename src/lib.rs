//! Versa: a newline-sensitive, brace-delimited expression language with one
//! front end and a retargetable back end.
//!
//! ```
//! use versa::{compile, Dialect};
//!
//! let lua = compile("a += 1", &Dialect::lua()).unwrap();
//! assert_eq!(lua, "a = a + 1");
//! ```

pub use crate::ast::{BinaryOp, Node, PostfixOp, UnaryOp};
pub use crate::codegen::{BlockStyle, Dialect, Generator};
pub use crate::diagnostics::{ErrorType, VersaError};
pub use crate::syntax::{Token, TokenKind};

pub mod ast;
pub mod cli;
pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod syntax;

/// Source text to tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, VersaError> {
    syntax::lexer::tokenize(source)
}

/// Tokens to top-level AST nodes.
pub fn parse(tokens: &[Token]) -> Result<Vec<Node>, VersaError> {
    syntax::parser::parse(tokens)
}

/// AST to source text in `dialect`.
pub fn render(ast: &[Node], dialect: &Dialect) -> Result<String, VersaError> {
    codegen::render(ast, dialect)
}

/// The whole pipeline: tokenize, parse, render.
pub fn compile(source: &str, dialect: &Dialect) -> Result<String, VersaError> {
    let tokens = tokenize(source)?;
    let ast = parse(&tokens)?;
    render(&ast, dialect)
}
