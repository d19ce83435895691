//! Shared helpers for the integration tests.
#![allow(dead_code)]

use versa::{Dialect, Node, VersaError};

/// Tokenizes and parses, panicking on failure.
pub fn parse_ok(source: &str) -> Vec<Node> {
    let tokens = versa::tokenize(source).expect("tokenize should succeed");
    versa::parse(&tokens).expect("parse should succeed")
}

/// Tokenizes then parses, returning the parse error.
pub fn parse_err(source: &str) -> VersaError {
    let tokens = versa::tokenize(source).expect("tokenize should succeed");
    versa::parse(&tokens).expect_err("parse should fail")
}

pub fn compile_ok(source: &str, dialect: &Dialect) -> String {
    versa::compile(source, dialect).expect("compile should succeed")
}

/// The s-expression form of each top-level statement.
pub fn pretty(source: &str) -> Vec<String> {
    parse_ok(source).iter().map(Node::pretty).collect()
}

pub const SAMPLE_PROGRAM: &str = r#"
var a = 1 + 2 * (1 + 2) + 4
var str = "Hello, World!"
a += 3

# This is a comment.
if (a > 3) {
  b = 3
} else {
  b = 4
}

function add(a, b) {
  return a + b
}

print(add(a, b))
"#;
