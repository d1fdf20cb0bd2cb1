//! Recursive-descent recognizer over the token stream.
//!
//! Grammar:
//!
//! ```text
//! expression := factor(unary) (("+" | "-") factor(no unary))*
//! factor(u)  := ["-" if u] (number | "(" expression ")")
//! ```
//!
//! A leading unary minus is allowed only on the first factor of an
//! expression, including the first factor inside parentheses. `-3 + 2` is
//! valid, `3 + -2` is not.
//!
//! The recognizer recurses once per open parenthesis. The depth is bounded by
//! [`ValidatorOptions::max_nesting_depth`].

use crate::{Token, ValidationError, ValidatorOptions, tokenize};

/// Validates `input` by tokenizing it and recognizing the token stream, using
/// default [`ValidatorOptions`].
///
/// # Errors
///
/// Any tokenizer error, or:
/// - [`ValidationError::InvalidExpression`] when the tokens do not match the
///   grammar,
/// - [`ValidationError::UnbalancedParentheses`] when input ends while a `)` is
///   still expected,
/// - [`ValidationError::TrailingTokens`] when a complete expression is
///   followed by more tokens,
/// - [`ValidationError::NestingTooDeep`] when parentheses nest deeper than
///   [`crate::DEFAULT_MAX_NESTING_DEPTH`].
pub fn validate_expression(input: &str) -> Result<(), ValidationError> {
    recognize(input, &ValidatorOptions::default())
}

pub(crate) fn recognize(input: &str, options: &ValidatorOptions) -> Result<(), ValidationError> {
    // The tokenizer logs its own rejections.
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(&tokens, options.max_nesting_depth);
    let result = parser.parse_expression().and_then(|()| parser.finish());
    if let Err(err) = &result {
        log::debug!("recognizer rejected {input:?}: {err}");
    }
    result
}

/// Cursor over one call's token stream.
struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token], max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Consumes the next token if `accept` matches it.
    fn eat(&mut self, accept: impl FnOnce(&Token) -> bool) -> bool {
        match self.tokens.get(self.pos) {
            Some(token) if accept(token) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn invalid(&self) -> ValidationError {
        ValidationError::InvalidExpression {
            token_index: self.pos,
        }
    }

    fn parse_expression(&mut self) -> Result<(), ValidationError> {
        self.parse_factor(true)?;
        while self.eat(Token::is_operator) {
            self.parse_factor(false)?;
        }
        Ok(())
    }

    fn parse_factor(&mut self, allow_unary: bool) -> Result<(), ValidationError> {
        if allow_unary {
            self.eat(|t| *t == Token::Minus);
        }

        if self.eat(|t| matches!(t, Token::Number(_))) {
            return Ok(());
        }
        if !self.eat(|t| *t == Token::LParen) {
            return Err(self.invalid());
        }

        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ValidationError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        log::trace!("entering group at depth {}", self.depth);

        self.parse_expression()?;
        if !self.eat(|t| *t == Token::RParen) {
            if self.pos == self.tokens.len() {
                return Err(ValidationError::UnbalancedParentheses { depth: self.depth });
            }
            return Err(self.invalid());
        }
        self.depth -= 1;
        Ok(())
    }

    fn finish(&self) -> Result<(), ValidationError> {
        if self.pos == self.tokens.len() {
            Ok(())
        } else {
            Err(ValidationError::TrailingTokens {
                token_index: self.pos,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limited(input: &str, max_nesting_depth: usize) -> Result<(), ValidationError> {
        recognize(input, &ValidatorOptions { max_nesting_depth })
    }

    #[test]
    fn unary_minus_only_leads_an_expression() {
        assert_eq!(validate_expression("-3 + 2"), Ok(()));
        assert_eq!(validate_expression("1 - (-3 + 2)"), Ok(()));
        assert_eq!(
            validate_expression("3 + -2"),
            Err(ValidationError::InvalidExpression { token_index: 2 })
        );
        assert_eq!(
            validate_expression("--1"),
            Err(ValidationError::InvalidExpression { token_index: 1 })
        );
    }

    #[test]
    fn input_ending_inside_group_is_unbalanced() {
        assert_eq!(
            validate_expression("((1.1 + 2.2)"),
            Err(ValidationError::UnbalancedParentheses { depth: 1 })
        );
        assert_eq!(
            validate_expression("(((4"),
            Err(ValidationError::UnbalancedParentheses { depth: 3 })
        );
    }

    #[test]
    fn missing_factor_reports_token_index() {
        assert_eq!(
            validate_expression("1 + (2 - 3) +"),
            Err(ValidationError::InvalidExpression { token_index: 8 })
        );
        assert_eq!(
            validate_expression(""),
            Err(ValidationError::InvalidExpression { token_index: 0 })
        );
        assert_eq!(
            validate_expression("()"),
            Err(ValidationError::InvalidExpression { token_index: 1 })
        );
        assert_eq!(
            validate_expression("(1 2)"),
            Ok(()),
            "spaces vanish, leaving the literal 12"
        );
        assert_eq!(
            validate_expression("(1 (2))"),
            Err(ValidationError::InvalidExpression { token_index: 2 })
        );
    }

    #[test]
    fn leftover_tokens_are_trailing() {
        assert_eq!(
            validate_expression("1 + 2)"),
            Err(ValidationError::TrailingTokens { token_index: 3 })
        );
        assert_eq!(
            validate_expression("(1)(2)"),
            Err(ValidationError::TrailingTokens { token_index: 3 })
        );
    }

    #[test]
    fn tokenizer_errors_pass_through() {
        assert_eq!(
            validate_expression("4..5 - 2"),
            Err(ValidationError::MultipleDecimalPoints { position: 2 })
        );
    }

    #[test]
    fn nesting_limit_is_inclusive() {
        assert_eq!(limited("((((1))))", 4), Ok(()));
        assert_eq!(
            limited("(((((1)))))", 4),
            Err(ValidationError::NestingTooDeep { limit: 4 })
        );
        assert_eq!(
            limited("(1) + (2) + ((3))", 2),
            Ok(()),
            "depth is reset when groups close"
        );
        assert_eq!(
            limited("1", 0),
            Ok(()),
            "flat input needs no recursion budget"
        );
    }
}
