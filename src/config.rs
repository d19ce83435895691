//! Dialect configuration files.
//!
//! A dialect file is a YAML mapping of [`Dialect`] fields. Omitted fields
//! take the canonical dialect's value, so a file only lists what differs:
//!
//! ```yaml
//! name: ruby-ish
//! block_style: keyword_end
//! var_keyword: null
//! statement_terminator: ""
//! comment_marker: "#"
//! ```

use std::fs;
use std::path::Path;

use crate::codegen::Dialect;
use crate::diagnostics::VersaError;

/// Parses a dialect from YAML text. `path` is only used for error reporting.
pub fn parse_dialect(yaml: &str, path: &Path) -> Result<Dialect, VersaError> {
    serde_yaml::from_str(yaml).map_err(|source| VersaError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses a dialect file.
pub fn load_dialect(path: &Path) -> Result<Dialect, VersaError> {
    let yaml = fs::read_to_string(path).map_err(|source| VersaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dialect(&yaml, path)
}

/// Picks the dialect for a run: a dialect file wins over a built-in name.
pub fn resolve_dialect(target: &str, dialect_file: Option<&Path>) -> Result<Dialect, VersaError> {
    match dialect_file {
        Some(path) => load_dialect(path),
        None => Dialect::builtin(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::BlockStyle;

    #[test]
    fn omitted_fields_fall_back_to_canonical() {
        let dialect = parse_dialect("name: terse\nstatement_terminator: \"\"\n", Path::new("t.yaml"))
            .unwrap();
        assert_eq!(dialect.name, "terse");
        assert_eq!(dialect.statement_terminator, "");
        assert_eq!(dialect.block_style, BlockStyle::Braces);
        assert_eq!(dialect.var_keyword.as_deref(), Some("var"));
    }

    #[test]
    fn unknown_block_style_is_a_config_error() {
        let err = parse_dialect("block_style: pyramids\n", Path::new("bad.yaml")).unwrap_err();
        assert!(matches!(err, VersaError::Config { .. }));
    }
}
