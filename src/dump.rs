//! The advisory token dump: a human-readable listing of each line's
//! tokens, written to `<file>.tkn` when requested. Not part of the
//! execution contract — the pipeline runs identically whether or not this
//! is written.

use crate::tokenizer::TokenLine;
use std::fmt::Write as _;

/// Renders a tokenized program as `<origin_line>: KIND(lexeme) KIND(lexeme) ...`.
pub fn format_token_dump(lines: &[TokenLine]) -> String {
    let mut out = String::new();
    for line in lines {
        let _ = write!(out, "{}:", line.origin_line);
        for token in &line.tokens {
            let _ = write!(out, " {}({})", token.kind_name(), token.lexeme());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessor::preprocess;
    use crate::tokenizer::tokenize;

    #[test]
    fn formats_each_line_with_its_origin_number() {
        let lines = tokenize(&preprocess("load $0 5\n"));
        let dump = format_token_dump(&lines);
        assert_eq!(dump, "1: INSTRUCTION(load) MEMORY($0) VALUE(5)\n");
    }
}
