//! Handles all user-facing output for the CLI.
//!
//! Pretty-printing and colorizing live here so every command presents
//! results the same way. Errors go through miette in `engine::print_error`.

use std::io::Write;
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::ast::Node;
use crate::syntax::Token;

/// Prints a bold yellow section header, e.g. the file being compiled.
pub fn print_header(path: &Path) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    let _ = writeln!(stdout, "--- {} ---", path.display());
    let _ = stdout.reset();
}

/// One token per line in its `Kind 'text'` form.
pub fn print_tokens(tokens: &[Token]) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)));
    for token in tokens {
        let _ = writeln!(stdout, "{}", token);
    }
    let _ = stdout.reset();
}

pub fn print_sexpr(ast: &[Node]) {
    if ast.is_empty() {
        println!("(empty)");
        return;
    }
    for node in ast {
        println!("{}", node.pretty());
    }
}

pub fn print_dialects(names: &[&str]) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for name in names {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
        let _ = writeln!(stdout, "  {}", name);
    }
    let _ = stdout.reset();
}

/// Prints a red failure summary for directory runs.
pub fn print_failure_summary(failed: usize, total: usize) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = writeln!(stderr, "✗ {} of {} files failed", failed, total);
    let _ = stderr.reset();
}
