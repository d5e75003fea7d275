//! Move history.
//!
//! Every completed two-card attempt is recorded with who made it, which
//! positions were turned, and how it resolved. Adapters can use the history
//! for replays or a move log.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::rules::MatchOutcome;

/// A completed two-card attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number (equal to the move count after this attempt).
    pub number: u32,

    /// The player who turned the cards.
    pub player: Player,

    /// Positions in the order they were flipped.
    pub positions: [usize; 2],

    /// How the attempt resolved.
    pub outcome: MatchOutcome,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(number: u32, player: Player, positions: [usize; 2], outcome: MatchOutcome) -> Self {
        Self {
            number,
            player,
            positions,
            outcome,
        }
    }
}
