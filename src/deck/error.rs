//! failure modes of deck extraction

use std::fmt;

/// What went wrong while extracting a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind<'i> {
    /// A required field had no token left in its record and declares no
    /// default to fall back on.
    MissingValue,
    /// A token was present but could not be converted to the field's
    /// underlying representation.
    MalformedValue { token: &'i str },
    /// The converted value failed the field's validity policy. The
    /// constraint names what would have been acceptable.
    InvalidValue {
        token: &'i str,
        constraint: String,
    },
    /// A record ended (delimiter, line break, or end of input) where
    /// further fields were required.
    UnexpectedEndOfRecord,
}

/// An extraction failure. The kind never changes once constructed;
/// positional and identity context is added as the failure propagates
/// outward through cards and sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckError<'i> {
    pub kind: ErrorKind<'i>,
    pub line: usize,
    pub field: Option<&'static str>,
    pub card: Option<&'static str>,
}

impl<'i> DeckError<'i> {
    pub fn new(kind: ErrorKind<'i>, line: usize) -> DeckError<'i> {
        DeckError {
            kind,
            line,
            field: None,
            card: None,
        }
    }

    /// Attach the name of the field being read, unless one is already
    /// recorded.
    pub fn for_field(mut self, name: &'static str) -> DeckError<'i> {
        self.field
            .get_or_insert(name);
        self
    }

    /// Attach the name of the enclosing card, unless one is already
    /// recorded.
    pub fn in_card(mut self, name: &'static str) -> DeckError<'i> {
        self.card
            .get_or_insert(name);
        self
    }

    pub fn message(&self) -> String {
        match &self.kind {
            ErrorKind::MissingValue => {
                "required field is missing and has no default".to_string()
            }
            ErrorKind::MalformedValue { token } => {
                format!("value '{}' is not a recognizable literal", token)
            }
            ErrorKind::InvalidValue { token, constraint } => {
                format!("value '{}' not allowed; expected {}", token, constraint)
            }
            ErrorKind::UnexpectedEndOfRecord => {
                "record ended before all required fields were read".to_string()
            }
        }
    }
}

impl<'i> fmt::Display for DeckError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)?;
        if let Some(card) = self.card {
            write!(f, ", {} card", card)?;
        }
        if let Some(field) = self.field {
            write!(f, ", field {}", field)?;
        }
        write!(f, ": {}", self.message())
    }
}

impl<'i> std::error::Error for DeckError<'i> {}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn context_is_attached_once() {
        let error = DeckError::new(ErrorKind::MissingValue, 4)
            .for_field("restart")
            .in_card("material")
            .in_card("outer");

        assert_eq!(error.field, Some("restart"));
        assert_eq!(error.card, Some("material"));
        assert_eq!(error.kind, ErrorKind::MissingValue);
    }

    #[test]
    fn rendering_includes_all_context() {
        let error = DeckError::new(
            ErrorKind::InvalidValue {
                token: "3",
                constraint: "one of 1, 2".to_string(),
            },
            2,
        )
        .for_field("mode")
        .in_card("material");

        let text = error.to_string();
        assert_eq!(
            text,
            "line 2, material card, field mode: value '3' not allowed; expected one of 1, 2"
        );
    }
}
