//! Front end: lexing and parsing.

pub mod lexer;
pub mod parser;
pub mod token;

pub use token::{Token, TokenKind};
