//! Declarative field validation.
//!
//! A [`Validatable`] pairs one value with the constraints it must satisfy, and
//! [`validate`] checks all of them at once. Constraints are type-gated: length
//! bounds only apply to text and numeric bounds only apply to numbers, so a
//! mismatched constraint is skipped instead of reported.
//!
//! # Example
//!
//! ```
//! use projboard::domain::validation::{validate, Validatable};
//!
//! assert!(validate(&Validatable::text("Build Bridge").required()));
//! assert!(!validate(&Validatable::text("abcd").min_length(5)));
//! assert!(validate(&Validatable::number(500.0).min(1.0).max(1000.0)));
//! ```

/// The value under test.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free text, e.g. a title or description field.
    Text(String),
    /// A number, e.g. an effort estimate.
    Number(f64),
}

impl Value {
    /// Returns the trimmed text form used by `required`.
    fn trimmed_text(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Number(number) => number.to_string(),
        }
    }
}

/// A value plus the constraints it must satisfy.
///
/// Absent constraints are vacuously satisfied. Built with the chaining methods
/// below; constructed and consumed within a single validation call.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: Value,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates a descriptor for a text value with no constraints.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::unconstrained(Value::Text(value.into()))
    }

    /// Creates a descriptor for a numeric value with no constraints.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::unconstrained(Value::Number(value))
    }

    const fn unconstrained(value: Value) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Requires the trimmed value to be non-empty.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires text to have at least `bound` characters after trimming.
    #[must_use]
    pub fn min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    /// Requires text to have at most `bound` characters after trimming.
    #[must_use]
    pub fn max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    /// Requires a number to be at least `bound`.
    #[must_use]
    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    /// Requires a number to be at most `bound`.
    #[must_use]
    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Checks every supplied constraint of `input`; returns `true` only if all hold.
///
/// NaN never satisfies `min` or `max`, which is how unparseable numeric input
/// ends up rejected.
#[must_use]
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid && !input.value.trimmed_text().is_empty();
    }

    if let Value::Text(text) = &input.value {
        let length = text.trim().chars().count();
        if let Some(bound) = input.min_length {
            is_valid = is_valid && length >= bound;
        }
        if let Some(bound) = input.max_length {
            is_valid = is_valid && length <= bound;
        }
    }

    if let Value::Number(number) = input.value {
        if let Some(bound) = input.min {
            is_valid = is_valid && number >= bound;
        }
        if let Some(bound) = input.max {
            is_valid = is_valid && number <= bound;
        }
    }

    is_valid
}
