use crate::{Strategy, ValidationError, ValidatorOptions, linear, recognizer};

/// Validation entry points bound to a set of [`ValidatorOptions`].
///
/// A `Validator` holds configuration only. Each call allocates its own
/// tokens and scan state and drops them before returning, so one instance can
/// be shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use arithcheck::{Strategy, Validator};
///
/// let validator = Validator::default();
/// assert!(validator.is_valid(Strategy::Recursive, "-3 + (-2.5)"));
///
/// let comparison = validator.compare("3 + -2");
/// assert!(!comparison.agrees());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    /// Creates a validator with the given options.
    #[must_use]
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// The options this validator was created with.
    #[must_use]
    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Tokenizes and recognizes `input`.
    ///
    /// # Errors
    ///
    /// See [`crate::validate_expression`]; the nesting limit comes from this
    /// validator's options.
    pub fn validate_expression(&self, input: &str) -> Result<(), ValidationError> {
        recognizer::recognize(input, &self.options)
    }

    /// Scans `input` with the state machine.
    ///
    /// # Errors
    ///
    /// See [`crate::validate_linear`].
    // Takes `&self` to mirror `validate_expression`; the scan has no options.
    #[allow(clippy::unused_self)]
    pub fn validate_linear(&self, input: &str) -> Result<(), ValidationError> {
        linear::validate_linear(input)
    }

    /// Validates `input` with the chosen strategy.
    ///
    /// # Errors
    ///
    /// Whatever the chosen strategy reports.
    pub fn validate(&self, strategy: Strategy, input: &str) -> Result<(), ValidationError> {
        strategy.validate(input, &self.options)
    }

    /// Returns only the validity flag.
    #[must_use]
    pub fn is_valid(&self, strategy: Strategy, input: &str) -> bool {
        self.validate(strategy, input).is_ok()
    }

    /// Runs both strategies on `input`.
    #[must_use]
    pub fn compare(&self, input: &str) -> Comparison {
        let comparison = Comparison {
            recursive: self.validate_expression(input),
            linear: self.validate_linear(input),
        };
        if !comparison.agrees() {
            log::debug!(
                "strategies disagree on {input:?}: recursive={:?} linear={:?}",
                comparison.recursive,
                comparison.linear
            );
        }
        comparison
    }
}

/// Outcome of running both strategies on the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Result of the recursive recognizer.
    pub recursive: Result<(), ValidationError>,
    /// Result of the linear scan.
    pub linear: Result<(), ValidationError>,
}

impl Comparison {
    /// Whether both strategies reached the same verdict. Error kinds may
    /// still differ when both reject.
    #[must_use]
    pub fn agrees(&self) -> bool {
        self.recursive.is_ok() == self.linear.is_ok()
    }

    /// Whether both strategies accepted the input.
    #[must_use]
    pub fn both_valid(&self) -> bool {
        self.recursive.is_ok() && self.linear.is_ok()
    }

    /// The result for one strategy.
    #[must_use]
    pub fn get(&self, strategy: Strategy) -> &Result<(), ValidationError> {
        match strategy {
            Strategy::Recursive => &self.recursive,
            Strategy::Linear => &self.linear,
        }
    }
}
