use core::{fmt, str::FromStr};

use crate::{ValidationError, ValidatorOptions, linear, recognizer};

/// One of the two validation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub enum Strategy {
    /// Tokenizer plus recursive-descent recognizer.
    Recursive,
    /// Character-level state machine.
    Linear,
}

impl Strategy {
    /// Both strategies, recursive first.
    pub const ALL: [Strategy; 2] = [Strategy::Recursive, Strategy::Linear];

    /// Short lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Linear => "linear",
        }
    }

    /// Validates `input` with this strategy.
    ///
    /// # Errors
    ///
    /// See [`crate::validate_expression`] and [`crate::validate_linear`].
    pub fn validate(self, input: &str, options: &ValidatorOptions) -> Result<(), ValidationError> {
        match self {
            Strategy::Recursive => recognizer::recognize(input, options),
            Strategy::Linear => linear::validate_linear(input),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy (expected `recursive` or `linear`)")]
pub struct UnknownStrategy;

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownStrategy)
    }
}
