//! PLAS: an interpreter for a small register-oriented assembly-like
//! language.
//!
//! A program is a sequence of single-instruction lines operating on
//! sixteen registers (`$0`..`$f`), a six-flag comparison register, and a
//! single instruction pointer. The pipeline runs in five stages:
//! preprocessing, tokenizing, parsing/linking, and finally execution on the
//! [`vm::Machine`].
//!
//! ```
//! let mut out = Vec::new();
//! let code = plas::run("load $0 72\nputc $0\nexit 0\n", &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "H");
//! assert_eq!(code, 0);
//! ```

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod diagnostics;
pub mod dump;
pub mod errors;
pub mod number;
pub mod parser;
pub mod preprocessor;
pub mod registers;
pub mod source;
pub mod tokenizer;
pub mod vm;

pub use errors::{ConfigError, Error, RuntimeError, SyntaxError};
pub use parser::Program;
pub use vm::Machine;

/// Parses and links `source` into an executable [`Program`], running the
/// preprocessor, tokenizer, and parser/linker in sequence.
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    let lines = preprocessor::preprocess(source);
    let tokens = tokenizer::tokenize(&lines);
    parser::parse(tokens)
}

/// Parses, links, and runs `source` to completion, writing any `putc`/`log`
/// output to `out`. Returns the process exit code on success.
pub fn run(source: &str, out: &mut impl std::io::Write) -> Result<i32, Error> {
    let program = parse(source)?;
    let mut machine = Machine::new(&program);
    let code = machine.run(out)?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_then_run_end_to_end() {
        let mut out = Vec::new();
        let code = run("load $0 72\nputc $0\nexit 0\n", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "H");
        assert_eq!(code, 0);
    }

    #[test]
    fn syntax_errors_propagate_through_run() {
        let mut out = Vec::new();
        let err = run("go $0\n", &mut out).unwrap_err();
        assert!(matches!(err, Error::Syntax(SyntaxError::UnexpectedArgument { .. })));
        assert_eq!(err.exit_code(), 9);
    }

    #[test]
    fn runtime_errors_propagate_through_run() {
        let mut out = Vec::new();
        let err = run("load $0 1\nload $1 0\nidiv $0 $1\nexit 0\n", &mut out).unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::ZeroDivision { .. })));
        assert_eq!(err.exit_code(), 10);
    }
}
