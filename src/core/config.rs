//! Game configuration types.
//!
//! Adapters configure the engine by providing:
//! - `GridSize`: validated board dimensions
//! - `MatchConfig`: mismatch delay, RNG seed, and symbol pool
//!
//! Grid dimensions are the only player-facing setting; the rest has
//! sensible defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{MatchError, Result};
use crate::cards::{default_symbol_pool, Symbol};

/// Smallest allowed row or column count.
pub const MIN_DIMENSION: usize = 2;

/// Largest allowed row or column count.
pub const MAX_DIMENSION: usize = 10;

/// Delay before mismatched cards turn back face down.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Validated grid dimensions.
///
/// Both dimensions are in `[MIN_DIMENSION, MAX_DIMENSION]` and the card
/// count is even, so every card has a partner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridSize")]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct RawGridSize {
    rows: usize,
    cols: usize,
}

impl TryFrom<RawGridSize> for GridSize {
    type Error = MatchError;

    fn try_from(raw: RawGridSize) -> Result<Self> {
        GridSize::new(raw.rows, raw.cols)
    }
}

impl GridSize {
    /// Validate and create grid dimensions.
    ///
    /// ```
    /// use memory_match::core::GridSize;
    ///
    /// assert!(GridSize::new(4, 4).is_ok());
    /// assert!(GridSize::new(3, 3).is_err()); // odd card count
    /// assert!(GridSize::new(1, 4).is_err()); // too small
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let in_bounds = |d: usize| (MIN_DIMENSION..=MAX_DIMENSION).contains(&d);
        if !in_bounds(rows) || !in_bounds(cols) || (rows * cols) % 2 != 0 {
            return Err(MatchError::InvalidGridSize { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cards on the board.
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.rows * self.cols
    }

    /// Number of pairs on the board.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.card_count() / 2
    }

    /// Row-major position of a (row, col) cell, if it is on the board.
    #[must_use]
    pub fn position(self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// (row, col) cell of a row-major position, if it is on the board.
    #[must_use]
    pub fn cell(self, position: usize) -> Option<(usize, usize)> {
        (position < self.card_count()).then_some((position / self.cols, position % self.cols))
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Engine configuration.
///
/// `seed: None` draws a fresh seed from entropy when the controller is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// How long mismatched cards stay face up before the reset fires.
    pub mismatch_delay: Duration,

    /// Seed for deck shuffling. Same seed produces the same sequence of decks.
    pub seed: Option<u64>,

    /// Identities cycled through when building a deck.
    pub symbol_pool: Vec<Symbol>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            seed: None,
            symbol_pool: default_symbol_pool(),
        }
    }
}

impl MatchConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the symbol pool.
    #[must_use]
    pub fn with_symbol_pool<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.symbol_pool = symbols.into_iter().map(Into::into).collect();
        self
    }
}
