//! assembling fields into cards

use tracing::debug;

use super::error::DeckError;
use crate::reading::RecordReader;

/// One logical card: a fixed group of fields read from a single record
/// in declared order, with no backtracking. Implementations supply
/// fields(); read() adds the validation boundary around it, naming the
/// card in any failure, and clears the rest of the record on success so
/// that unread trailing tokens never leak into the next card.
pub trait Card<'i>: Sized {
    const NAME: &'static str;

    fn fields(reader: &mut RecordReader<'i>) -> Result<Self, DeckError<'i>>;

    fn read(reader: &mut RecordReader<'i>) -> Result<Self, DeckError<'i>> {
        match Self::fields(reader) {
            Ok(card) => {
                reader.discard_remainder();
                Ok(card)
            }
            Err(error) => {
                debug!("trouble while validating {} card", Self::NAME);
                Err(error.in_card(Self::NAME))
            }
        }
    }
}
