//! Snapshot tests for token streams and rejection messages.

use alloc::{format, string::String, vec::Vec};

use insta::assert_snapshot;

use crate::{Strategy, Token, Validator, tokenize};

fn render_tokens(input: &str) -> String {
    match tokenize(input) {
        Ok(tokens) => tokens
            .iter()
            .map(|t| format!("{t:?}"))
            .collect::<Vec<_>>()
            .join("\n"),
        Err(err) => format!("error: {err}"),
    }
}

fn render_verdicts(inputs: &[&str]) -> String {
    let validator = Validator::default();
    let mut lines = Vec::new();
    for strategy in Strategy::ALL {
        for input in inputs {
            lines.push(match validator.validate(strategy, input) {
                Ok(()) => format!("{strategy:<9} [VALID]   {input:?}"),
                Err(err) => format!("{strategy:<9} [INVALID] {input:?} -> {err}"),
            });
        }
    }
    lines.join("\n")
}

#[test]
fn snapshot_signed_grouped_tokens() {
    assert_snapshot!(render_tokens(" -3 + (-2.5) "), @r#"
    Minus
    Number("3")
    Plus
    LParen
    Minus
    Number("2.5")
    RParen
    "#);
}

#[test]
fn snapshot_tokenizer_failure() {
    assert_snapshot!(render_tokens("1 + 4..5"), @"error: invalid number with multiple dots at position 4");
}

#[test]
fn snapshot_driver_samples() {
    let samples = [
        "3.5 + (2 - 4.1)",
        " -3 + (-2.5) ",
        "((1.2 + 2.3) - (3 - 4.5))",
        "3 + + 2",
        "((1.1 + 2.2)",
    ];
    assert_snapshot!(render_verdicts(&samples), @r#"
    recursive [VALID]   "3.5 + (2 - 4.1)"
    recursive [VALID]   " -3 + (-2.5) "
    recursive [VALID]   "((1.2 + 2.3) - (3 - 4.5))"
    recursive [INVALID] "3 + + 2" -> invalid expression at token 2
    recursive [INVALID] "((1.1 + 2.2)" -> unbalanced parentheses: 1 left open
    linear    [VALID]   "3.5 + (2 - 4.1)"
    linear    [VALID]   " -3 + (-2.5) "
    linear    [VALID]   "((1.2 + 2.3) - (3 - 4.5))"
    linear    [INVALID] "3 + + 2" -> unexpected character '+' at position 4
    linear    [INVALID] "((1.1 + 2.2)" -> unbalanced parentheses: 1 left open
    "#);
}

#[test]
fn tokens_serialize_externally_tagged() {
    let json = serde_json::to_string(&[Token::Number("3.".into()), Token::Plus]).unwrap();
    assert_eq!(json, r#"[{"Number":"3."},"Plus"]"#);
}
