//! # memory-match
//!
//! Game-state engine for a two-player memory matching game.
//!
//! Cards lie face down on a grid of 2-10 rows by 2-10 columns. Players take
//! turns revealing two cards; a matching pair scores a point and the same
//! player goes again, a mismatch turns both cards back after a short delay
//! and passes the turn. When every pair is claimed, the higher score wins.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `RoundController` owns the `GameState`. Everything
//!    else reads snapshots.
//!
//! 2. **No wall clock**: time is injected through `RoundController::advance`,
//!    so the deferred mismatch reset and the game clock are deterministic
//!    and cancellable.
//!
//! 3. **Adapters are thin**: input layers call `request_flip`; render layers
//!    drain `GameEvent`s.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{MatchConfig, Phase, Player, RoundController};
//!
//! let mut game = RoundController::new(MatchConfig::default().with_seed(42));
//! game.configure_game(2, 2).unwrap();
//!
//! // Find two cards that differ and flip them.
//! let cards = game.state().unwrap().cards().to_vec();
//! let other = cards.iter().position(|c| c.identity != cards[0].identity).unwrap();
//! game.request_flip(0).unwrap();
//! game.request_flip(other).unwrap();
//! assert_eq!(game.phase(), Some(Phase::Resolving));
//!
//! // After the delay the cards turn back and the turn passes.
//! game.advance(Duration::from_secs(1));
//! assert_eq!(game.state().unwrap().current_player(), Player::Two);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, game state, configuration, RNG, errors
//! - `cards`: cards, symbols, deck building
//! - `rules`: match evaluation and win detection
//! - `round`: round controller and deferred task scheduler
//! - `timer`: elapsed game time
//! - `events`: notifications for render adapters

pub mod cards;
pub mod core;
pub mod events;
pub mod round;
pub mod rules;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    FlipRejection, GameRng, GameState, GridSize, MatchConfig, MatchError,
    MoveRecord, Phase, Player, PlayerMap, Result,
};

pub use crate::cards::{build_deck, default_symbol_pool, Card, CardStatus, DeckBuilder, Symbol};

pub use crate::rules::{evaluate, game_result, GameResult, MatchOutcome};

pub use crate::round::{FlipOutcome, RoundController, Scheduler, TaskHandle};

pub use crate::timer::{format_clock, GameTimer};

pub use crate::events::{EventQueue, GameEvent};
