//! Match rules.
//!
//! Pure decision logic: whether two revealed cards form a pair, and who won
//! once the board is cleared. The round controller calls into these and
//! applies the resulting transitions to the game state.

pub mod engine;

pub use engine::{evaluate, game_result, GameResult, MatchOutcome};
