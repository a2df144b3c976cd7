//! record-oriented access over the token stream

use super::tokens::{Token, TokenSource};
use crate::deck::{DeckError, ErrorKind};

/// Reads one record's worth of fields at a time. A record is one line
/// of the deck; a slash closes the record early and the remainder of
/// that line is commentary. No extraction may cross a record boundary:
/// a card must consume its record, or explicitly discard what is left
/// of it, before the next record can begin.
#[derive(Debug)]
pub struct RecordReader<'i> {
    tokens: TokenSource<'i>,
    record: Option<usize>,
}

impl<'i> RecordReader<'i> {
    pub fn new(content: &'i str) -> RecordReader<'i> {
        RecordReader {
            tokens: TokenSource::new(content),
            record: None,
        }
    }

    /// The line of the record currently being read, for diagnostics.
    /// Lookahead performed while deciding whether a record has ended
    /// does not move this.
    pub fn line(&self) -> usize {
        match self.record {
            Some(line) => line,
            None => self
                .tokens
                .line(),
        }
    }

    /// True when the current record has no further fields: the next
    /// token is the delimiter, sits on a later line, or the input is
    /// exhausted. Consumes nothing.
    pub fn at_delimiter(&mut self) -> bool {
        let record = &mut self.record;
        match self
            .tokens
            .peek()
        {
            None => true,
            Some(token) => {
                let line = *record.get_or_insert(token.line);
                token.is_delimiter() || token.line > line
            }
        }
    }

    /// The next field of the current record.
    pub fn read_field(&mut self) -> Result<Token<'i>, DeckError<'i>> {
        if self.at_delimiter() {
            return Err(DeckError::new(
                ErrorKind::UnexpectedEndOfRecord,
                self.line(),
            ));
        }
        match self
            .tokens
            .next()
        {
            Some(token) => {
                self.record = Some(token.line);
                Ok(token)
            }
            None => Err(DeckError::new(
                ErrorKind::UnexpectedEndOfRecord,
                self.line(),
            )),
        }
    }

    /// Drop whatever is left of the current record, the delimiter and
    /// any trailing commentary included. Calling this again without an
    /// intervening read consumes nothing further.
    pub fn discard_remainder(&mut self) {
        let line = match self
            .record
            .take()
        {
            Some(line) => line,
            None => return,
        };

        while let Some(token) = self
            .tokens
            .peek()
        {
            if token.line > line {
                break;
            }
            self.tokens
                .next();
        }
    }
}
