//! A small stdout diagnostic writer, optionally colorized.
//!
//! Grounded on the teacher's `crossterm`-gated REPL coloring and on the
//! reference implementation's own hand-rolled `Log` class (green for
//! informational output, red for errors, all written to stdout rather than
//! stderr). Colorization never changes the bytes written modulo ANSI
//! escape sequences, so it can never change a diagnostic's meaning.

use crossterm::style::Stylize;
use std::io::Write;

/// Writes an `error: <message>` diagnostic, red when `color` is enabled.
pub fn error(out: &mut impl Write, message: &str, color: bool) {
    let key = if color { "error".red().to_string() } else { "error".to_string() };
    let _ = writeln!(out, "{key}: {message}");
}

/// Writes an informational diagnostic, green when `color` is enabled.
pub fn info(out: &mut impl Write, message: &str, color: bool) {
    let key = if color { "info".green().to_string() } else { "info".to_string() };
    let _ = writeln!(out, "{key}: {message}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncolored_output_has_no_escape_sequences() {
        let mut buf = Vec::new();
        error(&mut buf, "file not found x.plas", false);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "error: file not found x.plas\n");
        assert!(!text.contains('\u{1b}'));
    }
}
