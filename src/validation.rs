//! Form validation.
//!
//! Each form type validates its raw fields into domain values, collecting
//! every failing field into [ValidationErrors] so the form can be displayed
//! again with one message per problem.

/// A message attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The `name` attribute of the offending input.
    pub field: &'static str,
    /// A human readable description of the problem.
    pub message: String,
}

/// The field errors collected while validating a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Record an error for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// The messages recorded for `field`, in the order they were pushed.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> {
        self.0
            .iter()
            .filter(move |error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

/// Parse a price the way a strict numeric check would: an optional sign,
/// digits with at most one decimal point, and nothing else.
///
/// Exponents, surrounding whitespace, `inf` and `NaN` are rejected, as are
/// digit strings too long to fit in an `f64`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);

    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((integer_part, fraction_part)) => (integer_part, fraction_part),
        None => ("", unsigned),
    };

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if fraction_part.is_empty() || !is_digits(integer_part) || !is_digits(fraction_part) {
        return None;
    }

    raw.parse().ok().filter(|price: &f64| price.is_finite())
}

/// Trim `raw` and return it if anything is left.
pub fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
