//! The declarative argument-shape table Parser pass "shape matching" checks
//! every instruction's arguments against.
//!
//! Grounded on the original reference's `PLAS_SYNTAX.SYNTAX_S` string table
//! fed through a `SyntaxBuilder`/`SyntaxMatcher` pair into a rule tree; here
//! it's simply a `match` over [`Opcode`](crate::tokenizer::Opcode) returning
//! a slice of [`ArgSpec`] positions, which is the more idiomatic Rust
//! rendering of the same "instruction name -> allowed argument shapes" idea.

use crate::tokenizer::{Opcode, Token};

/// One permitted token kind for an argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Memory,
    Value,
    Address,
}

impl ArgKind {
    fn matches(self, token: &Token) -> bool {
        match (self, token) {
            (ArgKind::Memory, Token::Memory(_)) => true,
            (ArgKind::Value, Token::Value(_)) => true,
            (ArgKind::Address, Token::Address(_)) => true,
            _ => false,
        }
    }
}

/// One argument position: the set of kinds it accepts, plus the label used
/// in "expected (...) but found (...)" diagnostics.
pub struct ArgSpec {
    pub kinds: &'static [ArgKind],
    pub label: &'static str,
}

const MEMORY: ArgSpec = ArgSpec {
    kinds: &[ArgKind::Memory],
    label: "MEMORY",
};
const MEMORY_OR_VALUE: ArgSpec = ArgSpec {
    kinds: &[ArgKind::Memory, ArgKind::Value],
    label: "MEMORY,VALUE",
};
const ADDRESS: ArgSpec = ArgSpec {
    kinds: &[ArgKind::Address],
    label: "ADDRESS",
};

/// The allowed argument shape for an instruction. An empty slice means the
/// instruction takes no arguments (`home`).
pub fn shape_for(op: Opcode) -> &'static [ArgSpec] {
    use Opcode::*;
    match op {
        Putc => &[MEMORY],
        Load => &[MEMORY, MEMORY_OR_VALUE],
        Go => &[ADDRESS],
        Exit => &[MEMORY_OR_VALUE],
        Eval => &[MEMORY_OR_VALUE, MEMORY_OR_VALUE],
        Ifeq | Ifne | Ifgt | Iflt | Ifge | Ifle => &[ADDRESS],
        Add | Sub | Mul | Idiv | Div => &[MEMORY, MEMORY_OR_VALUE],
        Home => &[],
        Log => &[MEMORY],
        // Reserved: `data` has no grammar row (SPEC_FULL.md §4.3 Pass 4);
        // the parser skips shape validation for it entirely rather than
        // calling this function, so the slice returned here is never
        // actually consulted. Rejected later at VM dispatch time.
        Data => &[],
    }
}

pub fn matches(spec: &ArgSpec, token: &Token) -> bool {
    spec.kinds.iter().any(|k| k.matches(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::Number;
    use crate::registers::RegisterId;

    #[test]
    fn load_accepts_memory_then_memory_or_value() {
        let shape = shape_for(Opcode::Load);
        assert_eq!(shape.len(), 2);
        let reg = Token::Memory(RegisterId::from_lexeme("$0").unwrap());
        let val = Token::Value(Number::Int(3));
        assert!(matches(&shape[0], &reg));
        assert!(!matches(&shape[0], &val));
        assert!(matches(&shape[1], &val));
    }

    #[test]
    fn home_takes_no_arguments() {
        assert!(shape_for(Opcode::Home).is_empty());
    }
}
