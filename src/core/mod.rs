//! Core engine types: players, state, configuration, RNG, errors.
//!
//! This module contains the building blocks the round controller drives.
//! Adapters read from these types but never mutate them directly.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::MoveRecord;
pub use config::{GridSize, MatchConfig, DEFAULT_MISMATCH_DELAY, MAX_DIMENSION, MIN_DIMENSION};
pub use error::{FlipRejection, MatchError, Result};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, Phase};
