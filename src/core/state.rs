//! Game state: the authoritative model of one game.
//!
//! ## GameState
//!
//! - Board (cards with identity, position, status)
//! - Face-up selection awaiting resolution (at most two positions)
//! - Current player, scores, move count
//! - Phase of the flip/resolve cycle
//! - Move history
//!
//! Readers get everything through accessors. Mutation is `pub(crate)` and
//! only the round controller drives it, so a `GameState` handed to an
//! adapter is a read-only snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::MoveRecord;
use super::config::GridSize;
use super::player::{Player, PlayerMap};
use crate::cards::{Card, CardStatus};

/// Stage of the per-pair flip/resolve cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No card is face up; the current player may turn any hidden card.
    #[default]
    AwaitingFirstFlip,
    /// One card is face up; the current player turns a second.
    AwaitingSecondFlip,
    /// Two mismatched cards are face up until the deferred reset fires.
    Resolving,
    /// Every pair is matched. Terminal until the game is reset.
    Finished,
}

impl Phase {
    /// Whether a flip request can be considered at all in this phase.
    #[must_use]
    pub fn accepts_flips(self) -> bool {
        matches!(self, Phase::AwaitingFirstFlip | Phase::AwaitingSecondFlip)
    }
}

/// Complete state of one game.
///
/// Uses an `im` vector for history so snapshots stay cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    grid: GridSize,
    cards: Vec<Card>,
    revealed: SmallVec<[usize; 2]>,
    current_player: Player,
    scores: PlayerMap<u32>,
    move_count: u32,
    phase: Phase,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a fresh state over a freshly built deck.
    ///
    /// ## Defaults
    ///
    /// - `current_player`: Player 1
    /// - `scores`: 0 - 0
    /// - `move_count`: 0
    /// - `phase`: `AwaitingFirstFlip`
    #[must_use]
    pub fn new(grid: GridSize, cards: Vec<Card>) -> Self {
        debug_assert_eq!(cards.len(), grid.card_count());
        Self {
            grid,
            cards,
            revealed: SmallVec::new(),
            current_player: Player::One,
            scores: PlayerMap::with_value(0),
            move_count: 0,
            phase: Phase::AwaitingFirstFlip,
            history: Vector::new(),
        }
    }

    // === Board ===

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// All cards in row-major order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card at a position, if it is on the board.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Positions currently face up and unresolved, in flip order.
    #[must_use]
    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// Number of pairs still on the board.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        (self.cards.len() - self.matched_count()) / 2
    }

    /// Whether every card has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    // === Turn and score ===

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// Pairs matched by a player.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Completed two-card attempts.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Completed attempts, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Mutation (round controller only) ===

    /// Move a card to a new status.
    ///
    /// Returns false and leaves the card untouched when the position is off
    /// the board or the transition is not allowed.
    pub(crate) fn set_status(&mut self, position: usize, status: CardStatus) -> bool {
        match self.cards.get_mut(position) {
            Some(card) if card.status.can_become(status) => {
                card.status = status;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn push_revealed(&mut self, position: usize) {
        debug_assert!(self.revealed.len() < 2);
        self.revealed.push(position);
    }

    /// Clear the face-up selection, returning what it held.
    pub(crate) fn take_revealed(&mut self) -> SmallVec<[usize; 2]> {
        std::mem::take(&mut self.revealed)
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Pass the turn to the other player and return the new current player.
    pub(crate) fn switch_player(&mut self) -> Player {
        self.current_player = self.current_player.other();
        self.current_player
    }

    /// Credit the current player with a pair and return their new score.
    pub(crate) fn award_pair(&mut self) -> u32 {
        let score = &mut self.scores[self.current_player];
        *score += 1;
        *score
    }

    /// Count a completed attempt and return the new move count.
    pub(crate) fn increment_moves(&mut self) -> u32 {
        self.move_count += 1;
        self.move_count
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;
    use crate::rules::MatchOutcome;

    fn small_state() -> GameState {
        let grid = GridSize::new(2, 2).unwrap();
        let cards = ["a", "b", "a", "b"]
            .iter()
            .enumerate()
            .map(|(i, s)| Card::new(Symbol::from(*s), i))
            .collect();
        GameState::new(grid, cards)
    }

    #[test]
    fn test_new_state_defaults() {
        let state = small_state();

        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.score(Player::One), 0);
        assert_eq!(state.score(Player::Two), 0);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.phase(), Phase::AwaitingFirstFlip);
        assert!(state.revealed().is_empty());
        assert!(state.history().is_empty());
        assert_eq!(state.remaining_pairs(), 2);
        assert!(!state.all_matched());
    }

    #[test]
    fn test_set_status_enforces_transitions() {
        let mut state = small_state();

        assert!(!state.set_status(0, CardStatus::Matched));
        assert!(state.set_status(0, CardStatus::Revealed));
        assert!(!state.set_status(0, CardStatus::Revealed));
        assert!(state.set_status(0, CardStatus::Matched));
        assert!(!state.set_status(0, CardStatus::FaceDown));
        assert!(!state.set_status(17, CardStatus::Revealed));

        assert_eq!(state.matched_count(), 1);
    }

    #[test]
    fn test_revealed_selection() {
        let mut state = small_state();
        state.push_revealed(1);
        state.push_revealed(3);
        assert_eq!(state.revealed(), &[1, 3]);

        let taken = state.take_revealed();
        assert_eq!(taken.as_slice(), &[1, 3]);
        assert!(state.revealed().is_empty());
    }

    #[test]
    fn test_turn_score_moves() {
        let mut state = small_state();

        assert_eq!(state.award_pair(), 1);
        assert_eq!(state.score(Player::One), 1);

        assert_eq!(state.switch_player(), Player::Two);
        assert_eq!(state.award_pair(), 1);
        assert_eq!(state.score(Player::Two), 1);

        assert_eq!(state.increment_moves(), 1);
        assert_eq!(state.increment_moves(), 2);
    }

    #[test]
    fn test_history_and_snapshot_clone() {
        let mut state = small_state();
        state.record_move(MoveRecord::new(1, Player::One, [0, 2], MatchOutcome::Match));

        let snapshot = state.clone();
        state.record_move(MoveRecord::new(2, Player::One, [1, 3], MatchOutcome::Match));

        assert_eq!(snapshot.history().len(), 1);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = small_state();
        state.set_status(2, CardStatus::Revealed);
        state.push_revealed(2);
        state.set_phase(Phase::AwaitingSecondFlip);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_phase_accepts_flips() {
        assert!(Phase::AwaitingFirstFlip.accepts_flips());
        assert!(Phase::AwaitingSecondFlip.accepts_flips());
        assert!(!Phase::Resolving.accepts_flips());
        assert!(!Phase::Finished.accepts_flips());
    }
}
