use crate::flatten::{flatten, ParseError, Postfix};
use crate::registry::{Operator, Registry};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn tokens(expr: &str) -> Vec<String> {
    flatten(expr, &Registry::standard()).unwrap().0
}

#[rstest]
#[case("2 3 +", &["2", "3", "+"])]
#[case("  10   5 / ", &["10", "5", "/"])]
#[case("3 4 2 * 1 5 - 2 3 / +",
       &["3", "4", "2", "*", "1", "5", "-", "2", "3", "/", "+"])]
#[case("3.141 2 3 + 1.571 sin *",
       &["3.141", "2", "3", "+", "1.571", "sin", "*"])]
#[case("1.57 cos 0.7854 tan *", &["1.57", "cos", "0.7854", "tan", "*"])]
#[case("16 ^", &["16", "^"])]
#[case("2\t3\n+", &["2", "3", "+"])]
#[case("", &[])]
fn plain_postfix_passes_through(#[case] expr: &str, #[case] expect: &[&str]) {
    assert_eq!(tokens(expr), expect);
}

#[test]
fn brackets_flatten_into_postfix() {
    assert_eq!(
        tokens("(3.141 (2 3 +) (1.571 sin) *)"),
        tokens("3.141 2 3 + 1.571 sin *")
    );
}

#[rstest]
#[case("(2 3 +)", &["2", "3", "+"])]
#[case("((1 2 +) 3 *)", &["1", "2", "+", "3", "*"])]
#[case("(1 (2 (3 4 +) *) -)", &["1", "2", "3", "4", "+", "*", "-"])]
#[case("(9 ^) (16 ^) +", &["9", "^", "16", "^", "+"])]
#[case("()", &[])]
fn nested_groups(#[case] expr: &str, #[case] expect: &[&str]) {
    assert_eq!(tokens(expr), expect);
}

#[test]
fn operator_before_close_paren_is_emitted() {
    // the '*' sits on the stack until ')' flushes it
    assert_eq!(tokens("(2 3 *)"), ["2", "3", "*"]);
    assert_eq!(tokens("(2 3 *) 4 +"), ["2", "3", "*", "4", "+"]);
}

#[test]
fn names_need_not_be_space_separated_from_brackets() {
    assert_eq!(tokens("(1.571 sin)"), ["1.571", "sin"]);
    assert_eq!(tokens("(0 cos) (0 sin) +"), ["0", "cos", "0", "sin", "+"]);
}

#[test]
fn close_paren_does_not_separate_tokens() {
    // only whitespace separates, ')' just flushes
    assert_eq!(tokens("(0 cos)(0 sin)"), ["0", "cos0", "sin"]);
}

#[test]
fn unary_symbol_glues_next_char() {
    // a char right after '^' sticks to it instead of being pushed
    assert_eq!(tokens("4 ^x"), ["4", "^x"]);
    assert_eq!(tokens("4 ^xy"), ["4", "^xy"]);
}

#[test]
fn longest_name_wins() {
    let mut reg = Registry::standard();
    reg.insert("sinh", Operator::Unary(f64::sinh));
    let rpn = flatten("(1 sinh) (1 sin) +", &reg).unwrap();
    assert_eq!(rpn.0, ["1", "sinh", "1", "sin", "+"]);
}

#[test]
fn unknown_words_pass_through() {
    assert_eq!(tokens("foo"), ["foo"]);
    assert_eq!(tokens("2 sinx"), ["2", "sinx"]);
}

#[rstest]
#[case("(1 2 +", ParseError::MissingCParen)]
#[case("((1 2 +) 3 *", ParseError::MissingCParen)]
#[case("1 2 +)", ParseError::MissingOParen)]
#[case("(1 2 +))", ParseError::MissingOParen)]
#[case(")(", ParseError::MissingOParen)]
fn unbalanced_brackets(#[case] expr: &str, #[case] err: ParseError) {
    assert_eq!(flatten(expr, &Registry::standard()), Err(err));
}

#[test]
fn postfix_display() {
    let rpn = flatten("(3.141 (2 3 +) (1.571 sin) *)", &Registry::standard()).unwrap();
    assert_eq!(rpn.to_string(), "3.141 2 3 + 1.571 sin *");
    assert_eq!(rpn.len(), 7);
    assert!(Postfix::default().is_empty());
}
