//! Splits each preprocessed line into lexemes and classifies each lexeme
//! into one of the token kinds.

use crate::number::Number;
use crate::preprocessor::CleanedLine;
use crate::registers::RegisterId;

/// The instructions recognized by the `INSTRUCTION` token pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Putc,
    Load,
    Go,
    Exit,
    Eval,
    Ifeq,
    Ifne,
    Ifgt,
    Iflt,
    Ifge,
    Ifle,
    Add,
    Sub,
    Mul,
    Idiv,
    Div,
    Home,
    Log,
    /// Reserved: accepted by the grammar, rejected at dispatch time. See
    /// the `data` instruction open question.
    Data,
}

impl Opcode {
    fn from_lexeme(lexeme: &str) -> Option<Opcode> {
        use Opcode::*;
        Some(match lexeme {
            "putc" => Putc,
            "load" => Load,
            "go" => Go,
            "exit" => Exit,
            "eval" => Eval,
            "ifeq" => Ifeq,
            "ifne" => Ifne,
            "ifgt" => Ifgt,
            "iflt" => Iflt,
            "ifge" => Ifge,
            "ifle" => Ifle,
            "add" => Add,
            "sub" => Sub,
            "mul" => Mul,
            "idiv" => Idiv,
            "div" => Div,
            "home" => Home,
            "log" => Log,
            "data" => Data,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        use Opcode::*;
        match self {
            Putc => "putc",
            Load => "load",
            Go => "go",
            Exit => "exit",
            Eval => "eval",
            Ifeq => "ifeq",
            Ifne => "ifne",
            Ifgt => "ifgt",
            Iflt => "iflt",
            Ifge => "ifge",
            Ifle => "ifle",
            Add => "add",
            Sub => "sub",
            Mul => "mul",
            Idiv => "idiv",
            Div => "div",
            Home => "home",
            Log => "log",
            Data => "data",
        }
    }
}

/// A classified lexeme. `Address` is never produced here; it is synthesized
/// by the linker in Parser pass 5.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Instruction(Opcode),
    Memory(RegisterId),
    Value(Number),
    Label(String),
    Symbol(char),
    Address(usize),
    Error(String),
}

impl Token {
    /// A short name for the token's kind, used in diagnostic messages
    /// (e.g. "expected (MEMORY,VALUE) but found (...)").
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Instruction(_) => "INSTRUCTION",
            Token::Memory(_) => "MEMORY",
            Token::Value(_) => "VALUE",
            Token::Label(_) => "LABEL",
            Token::Symbol(_) => "SYMBOL",
            Token::Address(_) => "ADDRESS",
            Token::Error(_) => "ERROR",
        }
    }

    pub fn lexeme(&self) -> String {
        match self {
            Token::Instruction(op) => op.name().to_string(),
            Token::Memory(r) => r.to_string(),
            Token::Value(n) => n.to_string(),
            Token::Label(s) => s.clone(),
            Token::Symbol(c) => c.to_string(),
            Token::Address(a) => a.to_string(),
            Token::Error(s) => s.clone(),
        }
    }
}

/// A tokenized line, still carrying its origin for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLine {
    pub tokens: Vec<Token>,
    pub origin_line: usize,
}

/// Splits a cleaned line into raw lexemes. `[A-Za-z0-9_$.-]` characters
/// extend the current lexeme; a space flushes it; any other character
/// flushes it and is emitted as its own single-character lexeme.
fn split_lexemes(line: &str) -> Vec<String> {
    let mut lexemes = Vec::new();
    let mut buffer = String::new();

    let is_continuation = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '-' | '.');

    for ch in line.chars() {
        if is_continuation(ch) {
            buffer.push(ch);
        } else if ch == ' ' {
            if !buffer.is_empty() {
                lexemes.push(std::mem::take(&mut buffer));
            }
        } else {
            if !buffer.is_empty() {
                lexemes.push(std::mem::take(&mut buffer));
            }
            lexemes.push(ch.to_string());
        }
    }
    if !buffer.is_empty() {
        lexemes.push(buffer);
    }

    lexemes
}

/// A lexeme matches `VALUE` if it is an optional sign followed by digits
/// and an optional decimal point with more digits, with at least one digit
/// present overall.
fn looks_like_value(lexeme: &str) -> bool {
    let body = lexeme.strip_prefix('-').unwrap_or(lexeme);
    if body.is_empty() {
        return false;
    }
    let mut saw_digit = false;
    let mut saw_dot = false;
    for ch in body.chars() {
        match ch {
            '0'..='9' => saw_digit = true,
            '.' if !saw_dot => saw_dot = true,
            _ => return false,
        }
    }
    saw_digit
}

fn looks_like_label(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn classify(lexeme: &str) -> Token {
    if let Some(op) = Opcode::from_lexeme(lexeme) {
        return Token::Instruction(op);
    }
    if let Some(reg) = RegisterId::from_lexeme(lexeme) {
        return Token::Memory(reg);
    }
    if looks_like_value(lexeme) {
        return Token::Value(Number::parse(lexeme));
    }
    if looks_like_label(lexeme) {
        return Token::Label(lexeme.to_string());
    }
    let mut chars = lexeme.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if !c.is_alphanumeric() {
            return Token::Symbol(c);
        }
    }
    Token::Error(lexeme.to_string())
}

/// Tokenizes every preprocessed line.
pub fn tokenize(lines: &[CleanedLine]) -> Vec<TokenLine> {
    lines
        .iter()
        .map(|line| TokenLine {
            tokens: split_lexemes(&line.text).iter().map(|l| classify(l)).collect(),
            origin_line: line.origin_line,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> CleanedLine {
        CleanedLine {
            text: text.to_string(),
            origin_line: 1,
        }
    }

    #[test]
    fn classifies_instruction_memory_value() {
        let tokens = tokenize(&[line("load $0 -5")]);
        assert_eq!(
            tokens[0].tokens,
            vec![
                Token::Instruction(Opcode::Load),
                Token::Memory(RegisterId::from_lexeme("$0").unwrap()),
                Token::Value(Number::Int(-5)),
            ]
        );
    }

    #[test]
    fn classifies_label_definition() {
        let tokens = tokenize(&[line(": loop")]);
        assert_eq!(
            tokens[0].tokens,
            vec![Token::Symbol(':'), Token::Label("loop".to_string())]
        );
    }

    #[test]
    fn classifies_label_reference() {
        let tokens = tokenize(&[line("ifgt @ loop")]);
        assert_eq!(
            tokens[0].tokens,
            vec![
                Token::Instruction(Opcode::Ifgt),
                Token::Symbol('@'),
                Token::Label("loop".to_string()),
            ]
        );
    }

    #[test]
    fn classifies_real_values() {
        let tokens = tokenize(&[line("load $1 3.5")]);
        assert_eq!(tokens[0].tokens[2], Token::Value(Number::Real(3.5)));
    }

    #[test]
    fn a_lexeme_matching_no_pattern_is_an_error_token() {
        let tokens = tokenize(&[line("load $0 12abc")]);
        assert_eq!(tokens[0].tokens[2], Token::Error("12abc".to_string()));
    }

    #[test]
    fn lone_punctuation_is_a_symbol_token() {
        let tokens = tokenize(&[line("load $0 %")]);
        assert_eq!(tokens[0].tokens[2], Token::Symbol('%'));
    }
}
