//! Round sequencing: flip requests, deferred mismatch resets, restarts.
//!
//! - `RoundController`: owns the `GameState` and is the only thing that
//!   mutates it
//! - `Scheduler`: cancellable deferred tasks on a virtual clock

pub mod controller;
pub mod schedule;

pub use controller::{FlipOutcome, RoundController};
pub use schedule::{Scheduler, TaskHandle};
