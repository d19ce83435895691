// Regression tests for the `versa` binary.
// Requires: assert_cmd, predicates, tempfile in [dev-dependencies]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::tempdir;

fn versa() -> Command {
    Command::cargo_bin("versa").unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn cli_compiles_file_to_target() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "main.versa", "var x = 1\nx += 2\n");

    versa()
        .arg("compile")
        .arg(&file)
        .args(["--target", "lua"])
        .assert()
        .success()
        .stdout("local x = 1\n\nx = x + 2\n");
}

#[test]
fn cli_defaults_to_canonical() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "main.versa", "print(1)");

    versa()
        .arg("compile")
        .arg(&file)
        .assert()
        .success()
        .stdout("print(1);\n");
}

#[test]
fn cli_compiles_directory_and_reports_failures() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.versa", "ok = true");
    write(dir.path(), "b.versa", "bad = @");
    write(dir.path(), "notes.txt", "not a source file");

    versa()
        .arg("compile")
        .arg(dir.path())
        .args(["-t", "python"])
        .assert()
        .failure()
        .stdout(contains("a.versa").and(contains("ok = True")))
        .stdout(contains("notes.txt").not())
        .stderr(contains("unexpected character").and(contains("1 of 2 files failed")));
}

#[test]
fn cli_reports_miette_diagnostics_on_error() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "bad.versa", "function f() {\n  return 1\n");

    versa()
        .arg("compile")
        .arg(&file)
        .assert()
        .failure()
        .stderr(contains("versa::parse").or(contains("unexpected end of input")));
}

#[test]
fn cli_rejects_unknown_target() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "main.versa", "x = 1");

    versa()
        .arg("compile")
        .arg(&file)
        .args(["--target", "klingon"])
        .assert()
        .failure()
        .stderr(contains("unknown dialect"));
}

#[test]
fn cli_uses_dialect_file() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "main.versa", "var x = 1");
    let dialect = write(
        dir.path(),
        "terse.yaml",
        "name: terse\nvar_keyword: let\nstatement_terminator: \"\"\n",
    );

    versa()
        .arg("compile")
        .arg(&file)
        .arg("--dialect-file")
        .arg(&dialect)
        .assert()
        .success()
        .stdout("let x = 1\n");
}

#[test]
fn cli_dumps_ast_as_json_and_sexpr() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "main.versa", "var x = 1 + 2");

    versa()
        .arg("ast")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains(r#""type": "var""#).and(contains(r#""operator": "+""#)));

    versa()
        .arg("ast")
        .arg(&file)
        .args(["--format", "sexpr"])
        .assert()
        .success()
        .stdout(contains("(var x (+ 1 2))"));
}

#[test]
fn cli_lists_tokens() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "main.versa", "var x\n");

    versa()
        .arg("tokens")
        .arg(&file)
        .assert()
        .success()
        .stdout(
            contains("Keyword 'var'")
                .and(contains("Identifier 'x'"))
                .and(contains("Newline")),
        );
}

#[test]
fn cli_reports_deep_nesting_instead_of_crashing() {
    let dir = tempdir().unwrap();
    let source = format!("{}x", "!".repeat(20_000));
    let file = write(dir.path(), "deep.versa", &source);

    versa()
        .arg("compile")
        .arg(&file)
        .assert()
        .failure()
        .stderr(contains("nesting exceeds"));
}

#[test]
fn cli_lists_dialects() {
    versa()
        .arg("dialects")
        .assert()
        .success()
        .stdout(contains("canonical").and(contains("lua")).and(contains("python")));
}

#[test]
fn cli_reports_missing_file() {
    versa()
        .arg("tokens")
        .arg("does/not/exist.versa")
        .assert()
        .failure()
        .stderr(contains("failed to read"));
}
