//! Card types and deck building.
//!
//! - `Card`: one cell of the board (identity, position, status)
//! - `Symbol`: the opaque identity two cards share
//! - `DeckBuilder`: grid dimensions to a shuffled deck of pairs

pub mod card;
pub mod deck;
pub mod symbols;

pub use card::{Card, CardStatus, Symbol};
pub use deck::{build_deck, identity_counts, DeckBuilder};
pub use symbols::{default_symbol_pool, ANIMALS};
