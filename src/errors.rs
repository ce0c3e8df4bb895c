//! Structured error types for every stage of the pipeline.
//!
//! Each stage gets its own small `Display`-only enum, mirroring the
//! teacher's `ParseError`/`HistoryError`/`ExecutionError` split rather than
//! a single monolithic error type. A top-level [`Error`] composes them for
//! callers that just want to propagate whatever went wrong with `?`.

use std::fmt;

/// Errors raised while assembling a [`crate::cli::Config`] or opening the
/// source file, before any parsing begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No source file path was given on the command line.
    MissingFile,
    /// The given path does not exist or could not be read.
    FileNotFound(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingFile => {
                write!(f, "unable to start process without a file")
            }
            ConfigError::FileNotFound(path) => write!(f, "file not found {path}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised by the tokenizer for lexemes that match none of the
/// recognized token patterns. A dangling `ERROR` token is only ever a
/// symptom the parser reports with its own line context, via
/// [`SyntaxError::UnexpectedArgument`], rather than surfaced on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenError {
    pub lexeme: String,
}

/// Errors raised during parsing and linking (Parser passes 1-5).
///
/// Every variant carries the 1-based `origin_line` of the offending source
/// line, never the internal linked address, so diagnostics always point at
/// what the user actually wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Pass 1: a line's first token is not an `INSTRUCTION`.
    ExpectedInstruction { origin_line: usize, found: String },
    /// A required argument position had nothing in it.
    MissingArgument { origin_line: usize },
    /// An argument's kind was not in the permitted set for its position.
    UnexpectedArgument {
        origin_line: usize,
        expected: &'static str,
        found: String,
    },
    /// Pass 2: a label directive (`: name`) was malformed.
    InvalidLabel { origin_line: usize },
    /// Pass 2: a label name was declared more than once.
    LabelRedefined { origin_line: usize, label: String },
    /// Pass 3: a `@ name` reference named a label that was never declared.
    LabelNotFound { origin_line: usize, label: String },
    /// A directive (`:`/`@`) appeared somewhere other than where the grammar
    /// allows it.
    SyntaxNotAllowed { origin_line: usize },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::ExpectedInstruction { origin_line, found } => write!(
                f,
                "instruction is expected at line {origin_line}\ngiven is [ {found} ] not instruction"
            ),
            SyntaxError::MissingArgument { origin_line } => {
                write!(f, "expected argument not found at line {origin_line}")
            }
            SyntaxError::UnexpectedArgument {
                origin_line,
                expected,
                found,
            } => write!(
                f,
                "expected ({expected}) but found ({found}) at line {origin_line}"
            ),
            SyntaxError::InvalidLabel { origin_line } => {
                write!(f, "invalid label provided at line {origin_line}")
            }
            SyntaxError::LabelRedefined { origin_line, label } => {
                write!(f, "label cannot be redefined\nlabel [ {label} ] redefined at line {origin_line}")
            }
            SyntaxError::LabelNotFound { origin_line, label } => write!(
                f,
                "error label [ {label} ] could not be found\nlabel not found at line {origin_line}"
            ),
            SyntaxError::SyntaxNotAllowed { origin_line } => {
                write!(f, "syntax not allowed after label at line {origin_line}")
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Errors raised while the virtual machine is executing a linked program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// `idiv`/`div` with a divisor of zero.
    ZeroDivision { origin_line: usize },
    /// A linked line carried an instruction the dispatch loop has no arm
    /// for (currently only the reserved `data` instruction).
    UnsupportedInstruction { origin_line: usize, instruction: String },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::ZeroDivision { origin_line } => {
                write!(f, "zero division error\ndivision by zero at line {origin_line}")
            }
            RuntimeError::UnsupportedInstruction {
                origin_line,
                instruction,
            } => write!(
                f,
                "unsupported instruction [ {instruction} ] at line {origin_line}"
            ),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Top-level error composing every stage, for callers that drive the whole
/// pipeline and just want a single `Result` to propagate with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Config(ConfigError),
    Syntax(SyntaxError),
    Runtime(RuntimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "{e}"),
            Error::Syntax(e) => write!(f, "{e}"),
            Error::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Error::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Error::Runtime(e)
    }
}

impl Error {
    /// The process exit code this error maps to, per the exit code table.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(ConfigError::MissingFile) => 1,
            Error::Config(ConfigError::FileNotFound(_)) => 2,
            Error::Syntax(_) => 9,
            Error::Runtime(RuntimeError::ZeroDivision { .. }) => 10,
            Error::Runtime(RuntimeError::UnsupportedInstruction { .. }) => 9,
        }
    }
}
