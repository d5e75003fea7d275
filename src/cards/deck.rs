//! Deck building: grid dimensions to a shuffled sequence of paired cards.
//!
//! Identities are taken from the symbol pool in order, wrapping around when
//! the board needs more pairs than the pool holds. A 10x10 board with the
//! ten default animals therefore uses each animal for five pairs. That is
//! intended: any two cards with the same identity match.

use rustc_hash::FxHashMap;

use super::card::{Card, Symbol};
use crate::core::{GameRng, GridSize, MatchError, Result};

/// Builds shuffled decks for a fixed grid and symbol pool.
#[derive(Clone, Debug)]
pub struct DeckBuilder<'a> {
    grid: GridSize,
    pool: &'a [Symbol],
}

impl<'a> DeckBuilder<'a> {
    /// Create a builder. Fails with `EmptySymbolPool` if there is nothing
    /// to draw identities from.
    pub fn new(grid: GridSize, pool: &'a [Symbol]) -> Result<Self> {
        if pool.is_empty() {
            return Err(MatchError::EmptySymbolPool);
        }
        Ok(Self { grid, pool })
    }

    /// The grid this builder produces decks for.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// One identity per pair, cycling through the pool in order.
    #[must_use]
    pub fn pair_identities(&self) -> Vec<Symbol> {
        self.pool
            .iter()
            .cycle()
            .take(self.grid.pair_count())
            .cloned()
            .collect()
    }

    /// Build a face-down deck with a uniformly random arrangement.
    pub fn build(&self, rng: &mut GameRng) -> Vec<Card> {
        let pairs = self.pair_identities();
        let mut identities = Vec::with_capacity(self.grid.card_count());
        identities.extend(pairs.iter().cloned());
        identities.extend(pairs);

        rng.shuffle(&mut identities);

        identities
            .into_iter()
            .enumerate()
            .map(|(position, identity)| Card::new(identity, position))
            .collect()
    }
}

/// Validate raw dimensions and build a shuffled deck.
///
/// ```
/// use memory_match::cards::{build_deck, default_symbol_pool};
/// use memory_match::core::GameRng;
///
/// let pool = default_symbol_pool();
/// let deck = build_deck(4, 4, &pool, &mut GameRng::new(1)).unwrap();
/// assert_eq!(deck.len(), 16);
///
/// assert!(build_deck(3, 3, &pool, &mut GameRng::new(1)).is_err());
/// ```
pub fn build_deck(rows: usize, cols: usize, pool: &[Symbol], rng: &mut GameRng) -> Result<Vec<Card>> {
    let grid = GridSize::new(rows, cols)?;
    Ok(DeckBuilder::new(grid, pool)?.build(rng))
}

/// Count how many cards carry each identity.
#[must_use]
pub fn identity_counts(cards: &[Card]) -> FxHashMap<&Symbol, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(&card.identity).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{default_symbol_pool, CardStatus};

    fn pool(names: &[&str]) -> Vec<Symbol> {
        names.iter().copied().map(Symbol::from).collect()
    }

    #[test]
    fn test_pair_identities_cycle_in_order() {
        let symbols = pool(&["a", "b", "c"]);
        let grid = GridSize::new(2, 5).unwrap();
        let builder = DeckBuilder::new(grid, &symbols).unwrap();

        let names: Vec<_> = builder
            .pair_identities()
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "a", "b"]);
    }

    #[test]
    fn test_build_positions_and_status() {
        let symbols = default_symbol_pool();
        let grid = GridSize::new(4, 4).unwrap();
        let deck = DeckBuilder::new(grid, &symbols).unwrap().build(&mut GameRng::new(42));

        assert_eq!(deck.len(), 16);
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.position, i);
            assert_eq!(card.status, CardStatus::FaceDown);
        }
    }

    #[test]
    fn test_each_identity_twice_when_pool_covers_pairs() {
        let symbols = default_symbol_pool();
        let deck = build_deck(4, 5, &symbols, &mut GameRng::new(7)).unwrap();

        let counts = identity_counts(&deck);
        assert_eq!(counts.len(), 10);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_wrapped_pool_reuses_identities() {
        let symbols = pool(&["x"]);
        let deck = build_deck(2, 2, &symbols, &mut GameRng::new(7)).unwrap();

        let counts = identity_counts(&deck);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&Symbol::from("x")], 4);
    }

    #[test]
    fn test_invalid_grid() {
        let symbols = default_symbol_pool();
        let err = build_deck(3, 5, &symbols, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, MatchError::InvalidGridSize { rows: 3, cols: 5 });
    }

    #[test]
    fn test_empty_pool() {
        let grid = GridSize::new(2, 2).unwrap();
        assert_eq!(
            DeckBuilder::new(grid, &[]).unwrap_err(),
            MatchError::EmptySymbolPool
        );
    }

    #[test]
    fn test_same_seed_same_deck() {
        let symbols = default_symbol_pool();
        let a = build_deck(6, 6, &symbols, &mut GameRng::new(99)).unwrap();
        let b = build_deck(6, 6, &symbols, &mut GameRng::new(99)).unwrap();
        assert_eq!(a, b);
    }
}
