// tests/config_tests.rs

use std::fs;
use std::path::Path;

use tempfile::tempdir;
use versa::config::{load_dialect, parse_dialect, resolve_dialect};
use versa::{compile, BlockStyle, Dialect, ErrorType};

const RUBYISH: &str = r##"
name: rubyish
block_style: keyword_end
var_keyword: null
statement_terminator: ""
comment_marker: "#"
"##;

#[test]
fn test_dialect_file_drives_rendering() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rubyish.yaml");
    fs::write(&path, RUBYISH).unwrap();

    let dialect = load_dialect(&path).unwrap();
    assert_eq!(dialect.name, "rubyish");
    assert_eq!(dialect.block_style, BlockStyle::KeywordEnd);
    assert_eq!(dialect.var_keyword, None);

    let rendered = compile("var x = 1\nif (x) {\n  y = 2\n}", &dialect).unwrap();
    assert_eq!(rendered, "x = 1\n\nif x then\n  y = 2\nend");
}

#[test]
fn test_dialect_file_overrides_target() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rubyish.yaml");
    fs::write(&path, RUBYISH).unwrap();

    let dialect = resolve_dialect("lua", Some(path.as_path())).unwrap();
    assert_eq!(dialect.name, "rubyish");
    assert_eq!(resolve_dialect("lua", None).unwrap(), Dialect::lua());
}

#[test]
fn test_missing_dialect_file_is_io_error() {
    let err = load_dialect(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::Io);
}

#[test]
fn test_unknown_builtin_is_config_error() {
    let err = resolve_dialect("klingon", None).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::Config);
    assert!(err.to_string().contains("unknown dialect 'klingon'"));
}

#[test]
fn test_malformed_yaml_is_config_error() {
    let err = parse_dialect("indent_unit: [1, 2", Path::new("broken.yaml")).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::Config);
}

#[test]
fn test_builtin_dialects_survive_yaml() {
    for dialect in [Dialect::canonical(), Dialect::lua(), Dialect::python()] {
        let yaml = serde_yaml::to_string(&dialect).unwrap();
        assert_eq!(parse_dialect(&yaml, Path::new("inline.yaml")).unwrap(), dialect);
    }
}
