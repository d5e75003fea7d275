//! Cards on the board.
//!
//! A `Card` is one cell of the grid: the identity it shares with its
//! partner, its row-major position, and whether it is face down, face up,
//! or already matched.

use serde::{Deserialize, Serialize};

/// Opaque matching key shared by the two cards of a pair.
///
/// The engine only compares symbols for equality. Adapters decide what a
/// symbol looks like (an image file name, an emoji, a letter).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from anything string-like.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The symbol's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visibility of a card.
///
/// Transitions are FaceDown → Revealed → Matched, or Revealed → FaceDown
/// when a mismatch is reset. Matched is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    #[default]
    FaceDown,
    Revealed,
    Matched,
}

impl CardStatus {
    /// Whether moving from `self` to `next` is a legal transition.
    #[must_use]
    pub fn can_become(self, next: CardStatus) -> bool {
        matches!(
            (self, next),
            (CardStatus::FaceDown, CardStatus::Revealed)
                | (CardStatus::Revealed, CardStatus::Matched)
                | (CardStatus::Revealed, CardStatus::FaceDown)
        )
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Matching key.
    pub identity: Symbol,

    /// Index in the grid's row-major ordering.
    pub position: usize,

    /// Current visibility.
    pub status: CardStatus,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(identity: Symbol, position: usize) -> Self {
        Self {
            identity,
            position,
            status: CardStatus::FaceDown,
        }
    }

    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.status == CardStatus::FaceDown
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.status == CardStatus::Revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.status == CardStatus::Matched
    }
}
