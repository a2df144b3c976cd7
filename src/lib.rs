//! Machinery for reading fixed-format, card-oriented scientific input
//! decks: a tokenizing record reader, typed field extraction with
//! validity policies and defaults, and assembly into cards and
//! conditionally-present card sequences.

pub mod broaden;
pub mod deck;
pub mod problem;
pub mod reading;
mod regex;
