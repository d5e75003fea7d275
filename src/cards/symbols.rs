//! Built-in symbol pool.

use super::card::Symbol;

/// The ten animals used when no pool is configured.
pub const ANIMALS: [&str; 10] = [
    "cat", "dog", "elephant", "fox", "lion", "monkey", "panda", "rabbit", "tiger", "zebra",
];

/// The default symbol pool, in cycling order.
#[must_use]
pub fn default_symbol_pool() -> Vec<Symbol> {
    ANIMALS.iter().copied().map(Symbol::from).collect()
}
