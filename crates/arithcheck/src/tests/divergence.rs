//! Inputs on which the two strategies deliberately disagree.
//!
//! The recognizer and the state machine implement the same grammar
//! independently and differ at its edges. These cases pin each known
//! difference so a change to either side shows up here.

use rstest::rstest;

use crate::{Strategy, ValidationError, Validator};

#[rstest]
#[case::bare_dot(".", Strategy::Recursive)]
#[case::dot_then_digits(".5 + 1", Strategy::Recursive)]
#[case::group_then_plus("(1)+2", Strategy::Recursive)]
#[case::trailing_plus("1+", Strategy::Linear)]
#[case::trailing_minus("1 -", Strategy::Linear)]
#[case::unary_after_operator("3 + -2", Strategy::Linear)]
#[case::double_unary("--1", Strategy::Linear)]
#[case::empty_group("()", Strategy::Linear)]
#[case::empty_input("", Strategy::Linear)]
#[case::only_spaces("   ", Strategy::Linear)]
#[case::lonely_minus("-", Strategy::Linear)]
fn only_one_strategy_accepts(#[case] input: &str, #[case] accepting: Strategy) {
    let comparison = Validator::default().compare(input);
    assert!(!comparison.agrees(), "{input:?}: {comparison:?}");
    assert_eq!(comparison.get(accepting), &Ok(()), "{input:?}");
}

#[test]
fn divergent_rejections_carry_precise_errors() {
    let validator = Validator::default();

    assert_eq!(
        validator.validate_linear("."),
        Err(ValidationError::UnexpectedCharacter {
            character: '.',
            position: 0
        })
    );
    assert_eq!(
        validator.validate_linear("(1)+2"),
        Err(ValidationError::UnexpectedCharacter {
            character: '+',
            position: 3
        })
    );
    assert_eq!(
        validator.validate_expression("1+"),
        Err(ValidationError::InvalidExpression { token_index: 2 })
    );
    assert_eq!(
        validator.validate_expression("()"),
        Err(ValidationError::InvalidExpression { token_index: 1 })
    );
}

#[test]
fn group_then_minus_is_read_as_unary_by_the_scanner() {
    // After `)` the scanner is back at a term start, where `-` is unary.
    let comparison = Validator::default().compare("(1)-2");
    assert!(comparison.both_valid());
}
