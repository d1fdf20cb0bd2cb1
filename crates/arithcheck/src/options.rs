/// Default value of [`ValidatorOptions::max_nesting_depth`].
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 1024;

/// Configuration shared by both validation strategies.
///
/// # Examples
///
/// ```rust
/// use arithcheck::{Validator, ValidatorOptions};
///
/// let validator = Validator::new(ValidatorOptions {
///     max_nesting_depth: 16,
/// });
/// assert!(validator.validate_expression("((1))").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Deepest parenthesis nesting the recursive recognizer accepts.
    ///
    /// The recognizer uses one level of native recursion per open
    /// parenthesis, so this bounds its stack usage. Input nesting deeper than
    /// this fails with [`crate::ValidationError::NestingTooDeep`]. The linear
    /// validator keeps only a counter and ignores this option.
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_NESTING_DEPTH`]
    pub max_nesting_depth: usize,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}
