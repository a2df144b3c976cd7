//! conditionally-present runs of cards

use super::card::Card;
use super::error::DeckError;
use crate::reading::RecordReader;

/// A group of cards whose presence and length are decided at parse time
/// by a value read earlier in the deck. Absent is observably different
/// from a list that happens to be empty; callers depend on being able
/// to tell "not there" from "there, with nothing in it".
#[derive(Debug, PartialEq)]
pub enum CardSequence<C> {
    Absent,
    Single(C),
    List(Vec<C>),
}

impl<C> CardSequence<C> {
    /// A discriminant of one or fewer means the group is not present at
    /// all; otherwise exactly count cards follow, kept in input order.
    /// Any sub-card failure aborts the whole sequence.
    pub fn counted<'i>(
        reader: &mut RecordReader<'i>,
        count: i64,
    ) -> Result<CardSequence<C>, DeckError<'i>>
    where
        C: Card<'i>,
    {
        if count <= 1 {
            return Ok(CardSequence::Absent);
        }

        let mut cards = Vec::with_capacity(count as usize);
        for _ in 0..count {
            cards.push(C::read(reader)?);
        }
        Ok(CardSequence::List(cards))
    }

    /// Present, as a single card, exactly when the discriminant matches
    /// the target value.
    pub fn when_equal<'i>(
        reader: &mut RecordReader<'i>,
        value: i64,
        target: i64,
    ) -> Result<CardSequence<C>, DeckError<'i>>
    where
        C: Card<'i>,
    {
        if value == target {
            Ok(CardSequence::Single(C::read(reader)?))
        } else {
            Ok(CardSequence::Absent)
        }
    }

    /// Read cards until one satisfies the sentinel predicate. The
    /// sentinel card is consumed but not kept. Nothing ahead of the
    /// sentinel means the group was absent.
    pub fn until_sentinel<'i, P>(
        reader: &mut RecordReader<'i>,
        is_sentinel: P,
    ) -> Result<CardSequence<C>, DeckError<'i>>
    where
        C: Card<'i>,
        P: Fn(&C) -> bool,
    {
        let mut cards = Vec::new();
        loop {
            let card = C::read(reader)?;
            if is_sentinel(&card) {
                break;
            }
            cards.push(card);
        }

        if cards.is_empty() {
            Ok(CardSequence::Absent)
        } else {
            Ok(CardSequence::List(cards))
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CardSequence::Absent)
    }

    pub fn len(&self) -> usize {
        match self {
            CardSequence::Absent => 0,
            CardSequence::Single(_) => 1,
            CardSequence::List(cards) => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<&C> {
        self.iter()
            .next()
    }

    pub fn last(&self) -> Option<&C> {
        self.iter()
            .last()
    }

    pub fn get(&self, index: usize) -> Option<&C> {
        self.iter()
            .nth(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        match self {
            CardSequence::Absent => [].iter(),
            CardSequence::Single(card) => std::slice::from_ref(card).iter(),
            CardSequence::List(cards) => cards.iter(),
        }
    }
}
