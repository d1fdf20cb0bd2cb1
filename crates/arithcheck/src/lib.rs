//! Syntax validation for arithmetic expressions built from decimal numbers,
//! unary minus, binary `+`/`-` and parentheses.
//!
//! Nothing is evaluated. The crate answers one question, "is this string a
//! well-formed expression?", with two independent implementations of the same
//! informal grammar:
//!
//! - [`validate_expression`] tokenizes the input ([`tokenize`]) and runs a
//!   recursive-descent recognizer over the tokens.
//! - [`validate_linear`] walks the raw string once with a three-state machine
//!   and a parenthesis counter, never materializing tokens.
//!
//! The two agree on every expression shaped like `term (op term)*` with
//! parenthesized groups, but they deliberately keep a handful of edge-case
//! disagreements (a bare `.`, trailing operators, `3 + -2`, `(1)+2`, ...).
//! [`Validator::compare`] reports those instead of hiding them.
//!
//! ```rust
//! use arithcheck::{ErrorKind, validate_expression, validate_linear};
//!
//! assert!(validate_expression("3.5 + (2 - 4.1)").is_ok());
//! assert!(validate_linear(" -3 + (-2.5) ").is_ok());
//!
//! let err = validate_linear("((1.1 + 2.2)").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnbalancedParentheses);
//! ```
//!
//! # Recursion
//!
//! The recognizer recurses once per open parenthesis. Its depth is capped by
//! [`ValidatorOptions::max_nesting_depth`] (default
//! [`DEFAULT_MAX_NESTING_DEPTH`]); deeper input fails with
//! [`ValidationError::NestingTooDeep`]. The linear validator has no such limit.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod linear;
mod options;
mod recognizer;
mod strategy;
mod token;
mod validator;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ValidationError};
pub use linear::validate_linear;
pub use options::{DEFAULT_MAX_NESTING_DEPTH, ValidatorOptions};
pub use recognizer::validate_expression;
pub use strategy::{Strategy, UnknownStrategy};
pub use token::{Token, tokenize};
pub use validator::{Comparison, Validator};
