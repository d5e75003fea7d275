//! Round controller: the single entry point that mutates a game.
//!
//! ## Flow
//!
//! 1. `configure_game` / `reset` deal a new board and start the clock.
//! 2. `request_flip` turns a card. The second card of an attempt is
//!    evaluated immediately:
//!    - a match claims the pair, and the same player keeps the turn
//!    - a mismatch leaves both cards up and schedules a deferred reset
//! 3. `advance` moves time forward, ticking the clock and firing the
//!    deferred reset, which hides the cards and passes the turn.
//!
//! While a mismatch is waiting to be reset the phase is `Resolving` and
//! every flip is rejected, so at most one deferred reset is ever pending.
//! Every change queues a `GameEvent` for render adapters.

use std::time::Duration;

use log::{debug, info, trace};

use super::schedule::{Scheduler, TaskHandle};
use crate::cards::{CardStatus, DeckBuilder};
use crate::core::{
    FlipRejection, GameRng, GameState, GridSize, MatchConfig, MatchError, MoveRecord, Phase,
    Player, Result,
};
use crate::events::{EventQueue, GameEvent};
use crate::rules::{evaluate, game_result, GameResult, MatchOutcome};
use crate::timer::{format_clock, GameTimer};

/// What a legal flip did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of an attempt is face up.
    FirstRevealed { position: usize },

    /// The two cards matched; `player` keeps the turn.
    Matched {
        positions: [usize; 2],
        player: Player,
        score: u32,
    },

    /// The two cards differ and will turn back after `reset_in`.
    Mismatched {
        positions: [usize; 2],
        reset_in: Duration,
    },

    /// The final pair was matched.
    Finished {
        positions: [usize; 2],
        result: GameResult,
    },
}

/// Work deferred on the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoundTask {
    /// Hide a mismatched pair and pass the turn.
    MismatchReset {
        generation: u64,
        positions: [usize; 2],
    },
}

/// Owns the game state and serializes every change to it.
#[derive(Debug)]
pub struct RoundController {
    config: MatchConfig,
    rng: GameRng,
    state: Option<GameState>,
    /// Incremented on every reset; deferred tasks from older games are ignored.
    generation: u64,
    scheduler: Scheduler<RoundTask>,
    pending_reset: Option<TaskHandle>,
    timer: GameTimer,
    events: EventQueue,
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl RoundController {
    /// Create a controller with no game in progress.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!("deck seed {}", rng.seed());
        Self {
            config,
            rng,
            state: None,
            generation: 0,
            scheduler: Scheduler::new(),
            pending_reset: None,
            timer: GameTimer::new(),
            events: EventQueue::new(),
        }
    }

    // === Inbound operations ===

    /// Validate the grid and start the first game on it.
    ///
    /// On `InvalidGridSize` nothing changes: a controller that had no game
    /// still has none.
    pub fn configure_game(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.reset(rows, cols)
    }

    /// Deal a new board, replacing any game in progress.
    ///
    /// Cancels a pending mismatch reset, restarts the clock from zero, and
    /// sets scores to 0-0, moves to 0, and the turn to player 1.
    pub fn reset(&mut self, rows: usize, cols: usize) -> Result<()> {
        let grid = GridSize::new(rows, cols)?;
        let deck = DeckBuilder::new(grid, &self.config.symbol_pool)?.build(&mut self.rng);

        self.cancel_pending_reset();
        self.generation += 1;
        self.timer.reset();

        let state = GameState::new(grid, deck);
        let player = state.current_player();
        self.state = Some(state);
        self.timer.start();

        info!("dealt {} board (game {})", grid, self.generation);
        self.events.push(GameEvent::GameStarted { rows, cols });
        self.events.push(GameEvent::TurnChanged { player });
        for player in Player::all() {
            self.events.push(GameEvent::ScoreChanged { player, score: 0 });
        }
        self.events.push(GameEvent::MoveCountChanged { moves: 0 });
        Ok(())
    }

    /// Deal a new board with the current dimensions.
    ///
    /// Does nothing when no game has been configured.
    pub fn restart(&mut self) -> Result<()> {
        match self.state.as_ref().map(GameState::grid) {
            Some(grid) => self.reset(grid.rows(), grid.cols()),
            None => {
                debug!("restart ignored: no game configured");
                Ok(())
            }
        }
    }

    /// Turn the card at `position` face up.
    ///
    /// Illegal requests return `MatchError::IllegalFlip` and leave the game
    /// untouched; callers may ignore them.
    pub fn request_flip(&mut self, position: usize) -> Result<FlipOutcome> {
        let Some(state) = self.state.as_mut() else {
            return Err(rejected(position, FlipRejection::NotStarted));
        };

        if !state.phase().accepts_flips() {
            let reason = match state.phase() {
                Phase::Finished => FlipRejection::Finished,
                _ => FlipRejection::Resolving,
            };
            return Err(rejected(position, reason));
        }
        match state.card(position).map(|card| card.status) {
            None => return Err(rejected(position, FlipRejection::OutOfRange)),
            Some(CardStatus::Matched) => {
                return Err(rejected(position, FlipRejection::AlreadyMatched))
            }
            Some(CardStatus::Revealed) => {
                return Err(rejected(position, FlipRejection::AlreadyRevealed))
            }
            Some(CardStatus::FaceDown) => {}
        }

        state.set_status(position, CardStatus::Revealed);
        state.push_revealed(position);
        self.events.push(GameEvent::CardStatusChanged {
            position,
            status: CardStatus::Revealed,
        });

        if state.phase() == Phase::AwaitingFirstFlip {
            state.set_phase(Phase::AwaitingSecondFlip);
            debug!("{} revealed {}", state.current_player(), position);
            return Ok(FlipOutcome::FirstRevealed { position });
        }

        let positions = [state.revealed()[0], position];
        let player = state.current_player();
        state.set_phase(Phase::Resolving);
        let moves = state.increment_moves();
        self.events.push(GameEvent::MoveCountChanged { moves });

        let cards = state.cards();
        let outcome = evaluate(&cards[positions[0]], &cards[positions[1]]);
        state.record_move(MoveRecord::new(moves, player, positions, outcome));
        debug!("{} turned {:?}: {:?}", player, positions, outcome);

        match outcome {
            MatchOutcome::Match => {
                for p in positions {
                    state.set_status(p, CardStatus::Matched);
                    self.events.push(GameEvent::CardStatusChanged {
                        position: p,
                        status: CardStatus::Matched,
                    });
                }
                state.take_revealed();
                let score = state.award_pair();
                self.events.push(GameEvent::ScoreChanged { player, score });

                if state.all_matched() {
                    state.set_phase(Phase::Finished);
                    self.timer.stop();
                    let scores = state.scores().clone();
                    let result = game_result(&scores);
                    info!(
                        "game {} finished after {} moves: {} ({}-{})",
                        self.generation,
                        moves,
                        result,
                        scores[Player::One],
                        scores[Player::Two]
                    );
                    self.events.push(GameEvent::GameFinished { result, scores });
                    return Ok(FlipOutcome::Finished { positions, result });
                }

                state.set_phase(Phase::AwaitingFirstFlip);
                Ok(FlipOutcome::Matched {
                    positions,
                    player,
                    score,
                })
            }
            MatchOutcome::Mismatch => {
                let reset_in = self.config.mismatch_delay;
                self.schedule_mismatch_reset(positions);
                Ok(FlipOutcome::Mismatched {
                    positions,
                    reset_in,
                })
            }
        }
    }

    /// Let `elapsed` pass: tick the clock and fire due deferred resets,
    /// in chronological order.
    ///
    /// Time is stepped from one due task to the next, so the cost does not
    /// grow with `elapsed`. Each step queues at most one `TimerTick`.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.scheduler.now().saturating_add(elapsed);
        while let Some(at) = self.scheduler.next_due().filter(|at| *at <= target) {
            self.step_to(at);
        }
        self.step_to(target);
    }

    /// Fire a pending mismatch reset now instead of waiting for its delay.
    ///
    /// Returns whether a reset was pending.
    pub fn resolve_pending(&mut self) -> bool {
        let Some(handle) = self.pending_reset.take() else {
            return false;
        };
        match self.scheduler.cancel(handle) {
            Some(task) => {
                self.run_task(task);
                true
            }
            None => false,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The current game, or `None` before the first `configure_game`.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.state.as_ref().map(GameState::phase)
    }

    /// Number of games dealt so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset.is_some()
    }

    /// Time left before the pending mismatch reset fires.
    #[must_use]
    pub fn pending_reset_in(&self) -> Option<Duration> {
        let due = self.scheduler.due_at(self.pending_reset?)?;
        Some(due.saturating_sub(self.scheduler.now()))
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.timer.elapsed_secs()
    }

    /// Elapsed time as `mm:ss`.
    #[must_use]
    pub fn clock(&self) -> String {
        format_clock(self.timer.elapsed_secs())
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Events not yet drained, oldest first.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.peek()
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Internals ===

    fn schedule_mismatch_reset(&mut self, positions: [usize; 2]) {
        self.cancel_pending_reset();
        let task = RoundTask::MismatchReset {
            generation: self.generation,
            positions,
        };
        let handle = self.scheduler.schedule(self.config.mismatch_delay, task);
        self.pending_reset = Some(handle);
        debug!(
            "mismatch at {:?}; reset scheduled in {:?}",
            positions, self.config.mismatch_delay
        );
    }

    fn cancel_pending_reset(&mut self) {
        if let Some(handle) = self.pending_reset.take() {
            if self.scheduler.cancel(handle).is_some() {
                debug!("cancelled pending mismatch reset");
            }
        }
    }

    fn step_to(&mut self, at: Duration) {
        let delta = at.saturating_sub(self.scheduler.now());
        if let Some(elapsed_secs) = self.timer.advance(delta) {
            self.events.push(GameEvent::TimerTick { elapsed_secs });
        }
        for (handle, task) in self.scheduler.advance_to(at) {
            if self.pending_reset == Some(handle) {
                self.pending_reset = None;
            }
            self.run_task(task);
        }
    }

    fn run_task(&mut self, task: RoundTask) {
        match task {
            RoundTask::MismatchReset {
                generation,
                positions,
            } => {
                if generation != self.generation {
                    debug!("discarding mismatch reset from game {}", generation);
                    return;
                }
                let Some(state) = self.state.as_mut() else {
                    return;
                };
                for position in positions {
                    if state.set_status(position, CardStatus::FaceDown) {
                        self.events.push(GameEvent::CardStatusChanged {
                            position,
                            status: CardStatus::FaceDown,
                        });
                    }
                }
                state.take_revealed();
                let player = state.switch_player();
                state.set_phase(Phase::AwaitingFirstFlip);
                self.events.push(GameEvent::TurnChanged { player });
                debug!("mismatch reset; turn passes to {}", player);
            }
        }
    }
}

fn rejected(position: usize, reason: FlipRejection) -> MatchError {
    trace!("rejected flip at {}: {}", position, reason);
    MatchError::IllegalFlip { position, reason }
}
