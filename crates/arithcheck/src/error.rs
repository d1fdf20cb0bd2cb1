use thiserror::Error;

/// Why a string was rejected.
///
/// Every variant is terminal: validation stops at the first problem it finds
/// and no partial result is produced. Positions are 0-based byte offsets. The
/// tokenizer reports offsets into the input with all spaces removed, the
/// linear validator reports offsets into the input as given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A numeric literal contains a second `.`.
    #[error("invalid number with multiple dots at position {position}")]
    MultipleDecimalPoints {
        /// Offset of the second `.`.
        position: usize,
    },
    /// The tokenizer met a character that starts no token, or the linear
    /// validator met one where a term must begin.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Offset of the offending character.
        position: usize,
    },
    /// The linear validator met a character with no transition from inside a
    /// number.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Offset of the offending character.
        position: usize,
    },
    /// A `)` with no open `(` to close.
    #[error("unmatched ')' at position {position}")]
    UnmatchedCloseParen {
        /// Offset of the `)`.
        position: usize,
    },
    /// Input ended with parentheses still open.
    #[error("unbalanced parentheses: {depth} left open")]
    UnbalancedParentheses {
        /// Number of `(` still open at end of input.
        depth: usize,
    },
    /// The token stream does not match the grammar.
    #[error("invalid expression at token {token_index}")]
    InvalidExpression {
        /// Index of the token where matching failed; equal to the token count
        /// when the input ran out.
        token_index: usize,
    },
    /// A complete expression was recognized but tokens remain.
    #[error("unexpected trailing tokens starting at token {token_index}")]
    TrailingTokens {
        /// Index of the first unconsumed token.
        token_index: usize,
    },
    /// Parentheses nest deeper than the recognizer is allowed to recurse.
    #[error("parentheses nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured maximum nesting depth.
        limit: usize,
    },
}

/// The kind of a [`ValidationError`], without its location payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
#[allow(missing_docs)]
pub enum ErrorKind {
    MultipleDecimalPoints,
    UnexpectedCharacter,
    InvalidCharacter,
    UnmatchedCloseParen,
    UnbalancedParentheses,
    InvalidExpression,
    TrailingTokens,
    NestingTooDeep,
}

impl ValidationError {
    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MultipleDecimalPoints { .. } => ErrorKind::MultipleDecimalPoints,
            Self::UnexpectedCharacter { .. } => ErrorKind::UnexpectedCharacter,
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::UnmatchedCloseParen { .. } => ErrorKind::UnmatchedCloseParen,
            Self::UnbalancedParentheses { .. } => ErrorKind::UnbalancedParentheses,
            Self::InvalidExpression { .. } => ErrorKind::InvalidExpression,
            Self::TrailingTokens { .. } => ErrorKind::TrailingTokens,
            Self::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    /// Character offset carried by the error, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match *self {
            Self::MultipleDecimalPoints { position }
            | Self::UnexpectedCharacter { position, .. }
            | Self::InvalidCharacter { position, .. }
            | Self::UnmatchedCloseParen { position } => Some(position),
            _ => None,
        }
    }
}
