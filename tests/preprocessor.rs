use plas::preprocessor::preprocess;

#[test]
fn keeps_origin_line_numbers_for_surviving_lines() {
    let source = "load $0 1\n\n# comment\nlog $0\n";
    let lines = preprocess(source);
    let origins: Vec<usize> = lines.iter().map(|l| l.origin_line).collect();
    assert_eq!(origins, vec![1, 4]);
}

#[test]
fn trims_and_normalizes_whitespace() {
    let source = "   load    $0     5   \n";
    let lines = preprocess(source);
    assert_eq!(lines[0].text, "load $0 5");
}
