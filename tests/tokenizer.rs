use plas::preprocessor::preprocess;
use plas::tokenizer::{tokenize, Opcode, Token};

#[test]
fn a_full_instruction_line_tokenizes_in_order() {
    let lines = tokenize(&preprocess("add $0 $1\n"));
    assert_eq!(lines[0].tokens.len(), 3);
    assert!(matches!(lines[0].tokens[0], Token::Instruction(Opcode::Add)));
    assert!(matches!(lines[0].tokens[1], Token::Memory(_)));
    assert!(matches!(lines[0].tokens[2], Token::Memory(_)));
}

#[test]
fn negative_and_real_values_stay_single_tokens() {
    let lines = tokenize(&preprocess("load $0 -3.25\n"));
    match &lines[0].tokens[2] {
        Token::Value(n) => assert_eq!(n.to_string(), "-3.25"),
        other => panic!("expected VALUE token, got {other:?}"),
    }
}
