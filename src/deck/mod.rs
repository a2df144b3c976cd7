// Core machinery for validated deck extraction

mod argument;
mod card;
mod error;
mod quantity;
mod sequence;

// Re-export all public symbols
pub use argument::*;
pub use card::*;
pub use error::*;
pub use quantity::*;
pub use sequence::*;
