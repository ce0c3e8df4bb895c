use plas::errors::SyntaxError;

#[test]
fn a_linked_program_never_carries_label_or_symbol_tokens() {
    let program = plas::parse(": start\nlog $0\ngo @ start\n").unwrap();
    for address in 0..program.len() {
        let line = program.get(address).unwrap();
        for arg in &line.args {
            assert!(!matches!(arg, plas::tokenizer::Token::Label(_)));
            assert!(!matches!(arg, plas::tokenizer::Token::Symbol(_)));
        }
    }
}

#[test]
fn address_tokens_stay_in_bounds() {
    let program = plas::parse("go @ end\n: end\nexit 0\n").unwrap();
    let line = program.get(0).unwrap();
    match line.args[0] {
        plas::tokenizer::Token::Address(a) => assert!(a < program.len()),
        ref other => panic!("expected ADDRESS, got {other:?}"),
    }
}

#[test]
fn reports_the_original_source_line_on_a_bad_shape() {
    let err = plas::parse("load $0 1\nload $0\n").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::MissingArgument { origin_line: 2 }
    );
}
