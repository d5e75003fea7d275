//! Error types for configuration and flip requests.

use thiserror::Error;

/// Why a flip request was turned away.
///
/// Rejections never change game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipRejection {
    /// No game has been configured yet.
    NotStarted,
    /// The position is outside the grid.
    OutOfRange,
    /// The card is already face up and awaiting resolution.
    AlreadyRevealed,
    /// The card belongs to a pair that has been matched.
    AlreadyMatched,
    /// Two cards are face up and the mismatch reset has not fired yet.
    Resolving,
    /// Every pair has been matched.
    Finished,
}

impl std::fmt::Display for FlipRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            FlipRejection::NotStarted => "no game in progress",
            FlipRejection::OutOfRange => "position outside the grid",
            FlipRejection::AlreadyRevealed => "card already revealed",
            FlipRejection::AlreadyMatched => "card already matched",
            FlipRejection::Resolving => "waiting for mismatched cards to turn back",
            FlipRejection::Finished => "game is finished",
        };
        f.write_str(text)
    }
}

/// Errors produced by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Grid dimensions are outside [2, 10] or produce an odd card count.
    #[error("invalid grid size {rows}x{cols}: each dimension must be 2-10 and the card count even")]
    InvalidGridSize { rows: usize, cols: usize },

    /// A flip was requested that the current state does not allow.
    #[error("illegal flip at position {position}: {reason}")]
    IllegalFlip {
        position: usize,
        reason: FlipRejection,
    },

    /// The deck builder was handed no symbols to draw identities from.
    #[error("symbol pool is empty")]
    EmptySymbolPool,
}

impl MatchError {
    /// The rejection reason when this is an illegal flip.
    #[must_use]
    pub fn rejection(&self) -> Option<FlipRejection> {
        match self {
            MatchError::IllegalFlip { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatchError::InvalidGridSize { rows: 3, cols: 3 };
        assert!(err.to_string().contains("3x3"));

        let err = MatchError::IllegalFlip {
            position: 4,
            reason: FlipRejection::AlreadyMatched,
        };
        assert_eq!(
            err.to_string(),
            "illegal flip at position 4: card already matched"
        );
    }

    #[test]
    fn test_rejection_accessor() {
        let err = MatchError::IllegalFlip {
            position: 0,
            reason: FlipRejection::Resolving,
        };
        assert_eq!(err.rejection(), Some(FlipRejection::Resolving));
        assert_eq!(MatchError::EmptySymbolPool.rejection(), None);
    }
}
