//! Target syntax descriptors.
//!
//! A [`Dialect`] is plain configuration: the generator consults it for every
//! spelling and block-layout decision, so a new target is a new value rather
//! than a new traversal. Dialects deserialize from YAML with every field
//! defaulting to the canonical dialect.

use serde::{Deserialize, Serialize};

use crate::diagnostics::VersaError;

/// Names of the dialects compiled into the crate.
pub const BUILTIN_DIALECTS: &[&str] = &["canonical", "lua", "python"];

/// How blocks open and close, and how their headers are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockStyle {
    /// `if (test) {` ... `} else {` ... `}`
    Braces,
    /// `if test then` ... `else` ... `end`, `while test do` ... `end`
    KeywordEnd,
    /// `if test:` followed by an indented body, no closing line
    Indent,
}

/// The construct a block header belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Function,
    If,
    While,
}

impl BlockStyle {
    /// The header line for `kind`, given its already rendered subject
    /// (`name(params)` for functions, the test expression otherwise).
    pub fn header(self, keyword: &str, kind: BlockKind, subject: &str) -> String {
        match (self, kind) {
            (BlockStyle::Braces, BlockKind::Function) => format!("{} {} {{", keyword, subject),
            (BlockStyle::Braces, _) => format!("{} ({}) {{", keyword, subject),
            (BlockStyle::KeywordEnd, BlockKind::Function) => format!("{} {}", keyword, subject),
            (BlockStyle::KeywordEnd, BlockKind::If) => format!("{} {} then", keyword, subject),
            (BlockStyle::KeywordEnd, BlockKind::While) => format!("{} {} do", keyword, subject),
            (BlockStyle::Indent, _) => format!("{} {}:", keyword, subject),
        }
    }

    /// The line separating a then-block from its else-block.
    pub fn else_line(self) -> &'static str {
        match self {
            BlockStyle::Braces => "} else {",
            BlockStyle::KeywordEnd => "else",
            BlockStyle::Indent => "else:",
        }
    }

    /// The line closing a block, if the style has one.
    pub fn close_line(self) -> Option<&'static str> {
        match self {
            BlockStyle::Braces => Some("}"),
            BlockStyle::KeywordEnd => Some("end"),
            BlockStyle::Indent => None,
        }
    }
}

/// Spelling and formatting rules for one target syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialect {
    pub name: String,
    pub block_style: BlockStyle,
    pub indent_unit: String,
    pub bool_true: String,
    pub bool_false: String,
    pub and_op: String,
    pub or_op: String,
    pub ne_op: String,
    /// Prefix spelling of logical negation, including any trailing space.
    pub not_op: String,
    pub comment_marker: String,
    /// `None` declares variables by bare assignment.
    pub var_keyword: Option<String>,
    pub function_keyword: String,
    /// Appended to declarations, returns and expression statements.
    pub statement_terminator: String,
    pub supports_compound_assignment: bool,
    /// Body line emitted for an empty block when the style has no closing line.
    pub empty_block: Option<String>,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::canonical()
    }
}

impl Dialect {
    /// The C-like source form the language itself is written in.
    pub fn canonical() -> Self {
        Self {
            name: "canonical".into(),
            block_style: BlockStyle::Braces,
            indent_unit: "  ".into(),
            bool_true: "true".into(),
            bool_false: "false".into(),
            and_op: "&&".into(),
            or_op: "||".into(),
            ne_op: "!=".into(),
            not_op: "!".into(),
            comment_marker: "//".into(),
            var_keyword: Some("var".into()),
            function_keyword: "function".into(),
            statement_terminator: ";".into(),
            supports_compound_assignment: true,
            empty_block: None,
        }
    }

    pub fn lua() -> Self {
        Self {
            name: "lua".into(),
            block_style: BlockStyle::KeywordEnd,
            and_op: "and".into(),
            or_op: "or".into(),
            ne_op: "~=".into(),
            not_op: "not ".into(),
            comment_marker: "--".into(),
            var_keyword: Some("local".into()),
            statement_terminator: String::new(),
            supports_compound_assignment: false,
            ..Self::canonical()
        }
    }

    pub fn python() -> Self {
        Self {
            name: "python".into(),
            block_style: BlockStyle::Indent,
            indent_unit: "    ".into(),
            bool_true: "True".into(),
            bool_false: "False".into(),
            and_op: "and".into(),
            or_op: "or".into(),
            not_op: "not ".into(),
            comment_marker: "#".into(),
            var_keyword: None,
            function_keyword: "def".into(),
            statement_terminator: String::new(),
            empty_block: Some("pass".into()),
            ..Self::canonical()
        }
    }

    /// Looks up a built-in dialect by name.
    pub fn builtin(name: &str) -> Result<Self, VersaError> {
        match name {
            "canonical" => Ok(Self::canonical()),
            "lua" => Ok(Self::lua()),
            "python" => Ok(Self::python()),
            _ => Err(VersaError::UnknownDialect {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_resolves() {
        for name in BUILTIN_DIALECTS {
            assert_eq!(Dialect::builtin(name).unwrap().name, *name);
        }
        assert!(Dialect::builtin("cobol").is_err());
    }

    #[test]
    fn headers_follow_block_style() {
        assert_eq!(BlockStyle::Braces.header("if", BlockKind::If, "a"), "if (a) {");
        assert_eq!(BlockStyle::KeywordEnd.header("while", BlockKind::While, "a"), "while a do");
        assert_eq!(BlockStyle::Indent.header("def", BlockKind::Function, "f(x)"), "def f(x):");
    }
}
