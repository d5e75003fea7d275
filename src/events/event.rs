//! Outbound notifications.
//!
//! The controller queues a `GameEvent` for every observable change. Render
//! adapters drain the queue after each call and update only what changed,
//! instead of diffing whole snapshots.

use serde::{Deserialize, Serialize};

use crate::cards::CardStatus;
use crate::core::{Player, PlayerMap};
use crate::rules::GameResult;

/// Something an adapter may want to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new board was dealt.
    GameStarted { rows: usize, cols: usize },

    /// A card changed visibility.
    CardStatusChanged { position: usize, status: CardStatus },

    /// A player's pair count changed.
    ScoreChanged { player: Player, score: u32 },

    /// The turn passed (or was set at game start).
    TurnChanged { player: Player },

    /// The number of completed attempts changed.
    MoveCountChanged { moves: u32 },

    /// Every pair is matched.
    GameFinished {
        result: GameResult,
        scores: PlayerMap<u32>,
    },

    /// The game clock reached a new whole second. One `advance` step that
    /// crosses several seconds reports only the latest.
    TimerTick { elapsed_secs: u32 },
}

impl GameEvent {
    /// Whether this event ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameFinished { .. })
    }
}

/// FIFO buffer of pending events.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    pending: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Events in emission order, without removing them.
    #[must_use]
    pub fn peek(&self) -> &[GameEvent] {
        &self.pending
    }

    /// Remove and return every pending event in emission order.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }
}
