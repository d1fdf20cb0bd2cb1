use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use crate::ValidationError;

/// A lexical unit of an arithmetic expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub enum Token {
    /// A numeric literal, exactly as written (minus any spaces). Never
    /// converted to a number; `"3."` and `"."` are kept verbatim.
    Number(String),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Token {
    /// Returns `true` for `+` and `-`.
    #[must_use]
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// Splits `input` into [`Token`]s.
///
/// Spaces are removed before scanning, including spaces inside a number, so
/// `"1 2.5"` yields the single literal `"12.5"`. Reported positions are byte
/// offsets into that space-free string.
///
/// A numeric literal is a greedy run of ASCII digits and at most one `.`; a
/// literal consisting of only `.` or ending in `.` is accepted here. Empty
/// input yields an empty vector.
///
/// # Errors
///
/// - [`ValidationError::MultipleDecimalPoints`] when a literal has a second
///   `.`.
/// - [`ValidationError::UnexpectedCharacter`] for any character outside
///   `0-9 . + - ( )`.
///
/// # Examples
///
/// ```rust
/// use arithcheck::{Token, tokenize};
///
/// let tokens = tokenize("-3 + (2.5)").unwrap();
/// assert_eq!(tokens[0], Token::Minus);
/// assert_eq!(tokens[1], Token::Number("3".into()));
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, ValidationError> {
    let source: String = input.chars().filter(|&c| c != ' ').collect();
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let token = match bytes[i] {
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'0'..=b'9' | b'.' => {
                let start = i;
                let mut dot_seen = false;
                while let Some(&b) = bytes.get(i) {
                    match b {
                        b'0'..=b'9' => {}
                        b'.' if dot_seen => {
                            let err = ValidationError::MultipleDecimalPoints { position: i };
                            log::debug!("tokenizer rejected {input:?}: {err}");
                            return Err(err);
                        }
                        b'.' => dot_seen = true,
                        _ => break,
                    }
                    i += 1;
                }
                tokens.push(Token::Number(source[start..i].to_string()));
                continue;
            }
            _ => {
                // Only ASCII has been consumed so far, so `i` is a char boundary.
                let character = source[i..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                let err = ValidationError::UnexpectedCharacter {
                    character,
                    position: i,
                };
                log::debug!("tokenizer rejected {input:?}: {err}");
                return Err(err);
            }
        };
        tokens.push(token);
        i += 1;
    }

    log::trace!("tokenized {input:?} into {} tokens", tokens.len());
    Ok(tokens)
}
