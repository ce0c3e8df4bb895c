//! Strips comments and blank lines, normalizes whitespace, and keeps track
//! of each surviving line's original 1-based position in the source.

/// A cleaned line paired with the 1-based physical line number it came
/// from. `origin_line` is carried through the rest of the pipeline purely
/// for diagnostics; addresses assigned by the linker are a separate,
/// dense 0-based numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedLine {
    pub text: String,
    pub origin_line: usize,
}

/// Runs the preprocessor over raw source text.
pub fn preprocess(source: &str) -> Vec<CleanedLine> {
    let mut out = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let origin_line = index + 1;
        let trimmed = raw_line.replace('\t', " ");
        let trimmed = trimmed.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut cleaned = String::with_capacity(trimmed.len());
        let mut last_was_space = false;
        for ch in trimmed.chars() {
            if ch == '#' {
                break;
            }
            if ch == ' ' {
                if !last_was_space {
                    cleaned.push(' ');
                }
                last_was_space = true;
            } else {
                cleaned.push(ch);
                last_was_space = false;
            }
        }
        let cleaned = cleaned.trim().to_string();

        if cleaned.is_empty() {
            continue;
        }

        out.push(CleanedLine {
            text: cleaned,
            origin_line,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_and_comment_lines() {
        let source = "load $0 1\n\n# a comment\nlog $0\n";
        let lines = preprocess(source);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].origin_line, 1);
        assert_eq!(lines[1].origin_line, 4);
    }

    #[test]
    fn strips_trailing_comments_and_collapses_whitespace() {
        let source = "load   $0    5   # set up the counter\n";
        let lines = preprocess(source);
        assert_eq!(lines[0].text, "load $0 5");
    }

    #[test]
    fn tabs_become_single_spaces() {
        let source = "load\t$0\t5\n";
        let lines = preprocess(source);
        assert_eq!(lines[0].text, "load $0 5");
    }

    #[test]
    fn is_idempotent_on_its_own_output() {
        let source = "load $0 5   # note\n\n#comment only\nlog $0\n";
        let once = preprocess(source);
        let joined: String = once
            .iter()
            .map(|l| l.text.clone())
            .collect::<Vec<_>>()
            .join("\n");
        let twice = preprocess(&joined);
        let once_text: Vec<&str> = once.iter().map(|l| l.text.as_str()).collect();
        let twice_text: Vec<&str> = twice.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(once_text, twice_text);
    }
}
