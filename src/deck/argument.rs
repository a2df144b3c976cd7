//! typed extraction of individual fields

use std::borrow::Cow;
use std::fmt;

use super::error::{DeckError, ErrorKind};
use super::quantity::{Quantity, Unit};
use crate::reading::{RecordReader, Token};

/// The validity policy a field imposes on its converted value. Bounds
/// are inclusive except for Above, which is strict.
#[derive(Debug, Clone)]
pub enum Policy<T: 'static> {
    Any,
    OneOf(&'static [T]),
    AtLeast(T),
    Above(T),
    Between(T, T),
}

impl<T> Policy<T>
where
    T: PartialOrd + fmt::Display,
{
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Policy::Any => true,
            Policy::OneOf(allowed) => allowed
                .iter()
                .any(|candidate| candidate == value),
            Policy::AtLeast(minimum) => value >= minimum,
            Policy::Above(limit) => value > limit,
            Policy::Between(lower, upper) => value >= lower && value <= upper,
        }
    }

    /// A statement of the constraint, for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Policy::Any => "any value".to_string(),
            Policy::OneOf(allowed) => {
                let choices = allowed
                    .iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("one of {}", choices)
            }
            Policy::AtLeast(minimum) => format!("at least {}", minimum),
            Policy::Above(limit) => format!("more than {}", limit),
            Policy::Between(lower, upper) => format!("between {} and {}", lower, upper),
        }
    }
}

/// Everything the extractor needs to know about one declared field: how
/// to convert its token, which values are admissible, and what to do
/// when the record ends before the field appears. The name is used only
/// for diagnostics.
pub trait FieldSpec {
    type Value: PartialOrd + fmt::Display + fmt::Debug + 'static;

    const NAME: &'static str;

    fn convert(token: &str) -> Option<Self::Value>;

    fn policy() -> Policy<Self::Value> {
        Policy::Any
    }

    fn default_value() -> Option<Self::Value> {
        None
    }
}

/// A validated field value. Once constructed the value is known to
/// satisfy the field's policy. The raw token is kept for diagnostics;
/// it is None exactly when the declared default was used.
pub struct Argument<'i, F: FieldSpec> {
    pub value: F::Value,
    raw: Option<&'i str>,
}

impl<'i, F: FieldSpec> Argument<'i, F> {
    pub fn raw(&self) -> Option<&'i str> {
        self.raw
    }

    pub fn is_defaulted(&self) -> bool {
        self.raw
            .is_none()
    }
}

impl<'i, F: FieldSpec> fmt::Debug for Argument<'i, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argument")
            .field("value", &self.value)
            .field("raw", &self.raw)
            .finish()
    }
}

/// Recognize the ambient numeric literal syntax: decimal, optional
/// fraction, optional exponent. Legacy decks write Fortran 'd'
/// exponents; those are normalized before handing off to the standard
/// float parser.
pub fn parse_real(token: &str) -> Option<f64> {
    let re = crate::compile!(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eEdD][+-]?[0-9]+)?$");
    if !re.is_match(token) {
        return None;
    }

    let normalized: Cow<str> = if token.contains(['d', 'D']) {
        Cow::Owned(token.replace(['d', 'D'], "e"))
    } else {
        Cow::Borrowed(token)
    };
    normalized
        .parse()
        .ok()
}

pub fn parse_integer(token: &str) -> Option<i64> {
    let re = crate::compile!(r"^[+-]?[0-9]+$");
    if !re.is_match(token) {
        return None;
    }
    token
        .parse()
        .ok()
}

/// Convert a literal into a quantity of the unit fixed by the field.
pub fn parse_quantity(token: &str, unit: Unit) -> Option<Quantity> {
    parse_real(token).map(|magnitude| Quantity::new(magnitude, unit))
}

/// Extract one declared field from the current record.
///
/// Absence (the record is already at its delimiter) falls back to the
/// field's declared default. A value that is present but fails
/// conversion or validation is always fatal, default or not.
pub fn extract<'i, F: FieldSpec>(
    reader: &mut RecordReader<'i>,
) -> Result<Argument<'i, F>, DeckError<'i>> {
    if reader.at_delimiter() {
        return match F::default_value() {
            Some(value) => Ok(Argument { value, raw: None }),
            None => Err(DeckError::new(ErrorKind::MissingValue, reader.line()).for_field(F::NAME)),
        };
    }

    let token = reader
        .read_field()
        .map_err(|error| error.for_field(F::NAME))?;
    validate::<F>(token)
}

/// Extract a counted run of like fields from the current record. The
/// count is authoritative: a record that runs out early is an error,
/// never a defaulting opportunity.
pub fn extract_list<'i, F: FieldSpec>(
    reader: &mut RecordReader<'i>,
    count: usize,
) -> Result<Vec<Argument<'i, F>>, DeckError<'i>> {
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let token = reader
            .read_field()
            .map_err(|error| error.for_field(F::NAME))?;
        values.push(validate::<F>(token)?);
    }
    Ok(values)
}

fn validate<'i, F: FieldSpec>(token: Token<'i>) -> Result<Argument<'i, F>, DeckError<'i>> {
    let value = match F::convert(token.text) {
        Some(value) => value,
        None => {
            return Err(
                DeckError::new(ErrorKind::MalformedValue { token: token.text }, token.line)
                    .for_field(F::NAME),
            )
        }
    };

    let policy = F::policy();
    if !policy.admits(&value) {
        return Err(DeckError::new(
            ErrorKind::InvalidValue {
                token: token.text,
                constraint: policy.describe(),
            },
            token.line,
        )
        .for_field(F::NAME));
    }

    Ok(Argument {
        value,
        raw: Some(token.text),
    })
}
