//! Single-pass validator driven by a character-level state machine.
//!
//! No tokens are produced. Spaces are skipped as they are met, and a counter
//! tracks open parentheses, so stack usage is constant regardless of nesting.

use crate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// At the start of input, after an operator, or after a parenthesis.
    ExpectTermStart,
    /// Inside the digits before a `.`.
    InIntegerPart,
    /// After the `.` of a number.
    InFractionalPart,
}

/// Validates `input` in one left-to-right pass over its characters.
///
/// # Errors
///
/// - [`ValidationError::UnexpectedCharacter`] when anything but `-`, `(`, `)`
///   or a digit appears where a term must start.
/// - [`ValidationError::InvalidCharacter`] when a number is followed by
///   anything but a digit, `+`, `-`, `)` or (once) `.`.
/// - [`ValidationError::UnmatchedCloseParen`] for a `)` with nothing open.
/// - [`ValidationError::UnbalancedParentheses`] when input ends with
///   parentheses open.
///
/// Positions are byte offsets into `input` as given.
///
/// # Examples
///
/// ```rust
/// use arithcheck::{ValidationError, validate_linear};
///
/// assert!(validate_linear("((1.2 + 2.3) - (3 - 4.5))").is_ok());
/// assert_eq!(
///     validate_linear("1 + 2)"),
///     Err(ValidationError::UnmatchedCloseParen { position: 5 })
/// );
/// ```
pub fn validate_linear(input: &str) -> Result<(), ValidationError> {
    let result = scan(input);
    if let Err(err) = &result {
        log::debug!("linear scan rejected {input:?}: {err}");
    }
    result
}

#[allow(clippy::enum_glob_use)]
fn scan(input: &str) -> Result<(), ValidationError> {
    use ScanState::*;

    let mut state = ExpectTermStart;
    let mut depth: usize = 0;
    let mut chars = input.char_indices().peekable();

    let close = |depth: &mut usize, position: usize| {
        if *depth == 0 {
            return Err(ValidationError::UnmatchedCloseParen { position });
        }
        *depth -= 1;
        Ok(())
    };

    while let Some(&(position, ch)) = chars.peek() {
        if ch == ' ' {
            chars.next();
            continue;
        }

        let next = match state {
            ExpectTermStart => match ch {
                '-' => ExpectTermStart,
                '(' => {
                    depth += 1;
                    ExpectTermStart
                }
                ')' => {
                    close(&mut depth, position)?;
                    ExpectTermStart
                }
                // The digit is consumed by the integer state.
                '0'..='9' => {
                    log::trace!("{state:?} -> {:?} on {ch:?} at {position}", InIntegerPart);
                    state = InIntegerPart;
                    continue;
                }
                character => {
                    return Err(ValidationError::UnexpectedCharacter {
                        character,
                        position,
                    });
                }
            },
            InIntegerPart | InFractionalPart => match ch {
                '0'..='9' => state,
                '.' if state == InIntegerPart => InFractionalPart,
                '+' | '-' => ExpectTermStart,
                ')' => {
                    close(&mut depth, position)?;
                    ExpectTermStart
                }
                character => {
                    return Err(ValidationError::InvalidCharacter {
                        character,
                        position,
                    });
                }
            },
        };

        if next != state {
            log::trace!("{state:?} -> {next:?} on {ch:?} at {position}");
        }
        state = next;
        chars.next();
    }

    if depth > 0 {
        return Err(ValidationError::UnbalancedParentheses { depth });
    }
    Ok(())
}
