//! Match evaluation and win detection.
//!
//! Both functions are pure: they inspect cards and scores but never mutate
//! them. The round controller applies the resulting transitions.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Player, PlayerMap};

/// Result of comparing two revealed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Same identity: the pair is claimed.
    Match,
    /// Different identities: the cards turn back and the turn passes.
    Mismatch,
}

impl MatchOutcome {
    #[must_use]
    pub fn is_match(self) -> bool {
        self == MatchOutcome::Match
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player holds more pairs.
    Winner(Player),
    /// Both players hold the same number of pairs.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{} wins", player),
            GameResult::Tie => f.write_str("tie"),
        }
    }
}

/// Compare two revealed cards.
///
/// ```
/// use memory_match::cards::{Card, Symbol};
/// use memory_match::rules::{evaluate, MatchOutcome};
///
/// let a = Card::new(Symbol::from("lion"), 0);
/// let b = Card::new(Symbol::from("lion"), 5);
/// let c = Card::new(Symbol::from("zebra"), 6);
///
/// assert_eq!(evaluate(&a, &b), MatchOutcome::Match);
/// assert_eq!(evaluate(&a, &c), MatchOutcome::Mismatch);
/// ```
#[must_use]
pub fn evaluate(a: &Card, b: &Card) -> MatchOutcome {
    if a.identity == b.identity {
        MatchOutcome::Match
    } else {
        MatchOutcome::Mismatch
    }
}

/// Decide the outcome from final scores: higher score wins, equal is a tie.
#[must_use]
pub fn game_result(scores: &PlayerMap<u32>) -> GameResult {
    let one = scores[Player::One];
    let two = scores[Player::Two];
    match one.cmp(&two) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
        std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
        std::cmp::Ordering::Equal => GameResult::Tie,
    }
}
