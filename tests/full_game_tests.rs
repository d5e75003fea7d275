//! Full game tests.
//!
//! These tests play complete games to the end:
//! - Clearing a board in the minimum number of moves
//! - Winner and tie detection
//! - Clock behavior once the game is finished
//! - Scripted two-player games with perfect and imperfect memory

use std::collections::HashMap;
use std::time::Duration;

use memory_match::cards::Symbol;
use memory_match::core::{FlipRejection, MatchConfig, Phase, Player};
use memory_match::events::GameEvent;
use memory_match::round::{FlipOutcome, RoundController};
use memory_match::rules::GameResult;

fn controller_with_pool(seed: u64, pool: &[&str]) -> RoundController {
    let config = MatchConfig::default()
        .with_seed(seed)
        .with_symbol_pool(pool.iter().copied());
    RoundController::new(config)
}

/// Positions grouped by identity, pairs in board order.
fn pairs_by_identity(rc: &RoundController) -> HashMap<Symbol, Vec<usize>> {
    let mut groups: HashMap<Symbol, Vec<usize>> = HashMap::new();
    for card in rc.state().unwrap().cards() {
        groups.entry(card.identity.clone()).or_default().push(card.position);
    }
    groups
}

#[test]
fn test_two_by_two_single_symbol_winner() {
    let mut rc = controller_with_pool(1, &["paw"]);
    rc.configure_game(2, 2).unwrap();

    rc.request_flip(0).unwrap();
    assert!(matches!(rc.request_flip(1), Ok(FlipOutcome::Matched { score: 1, .. })));
    rc.request_flip(2).unwrap();
    let outcome = rc.request_flip(3).unwrap();

    assert_eq!(
        outcome,
        FlipOutcome::Finished {
            positions: [2, 3],
            result: GameResult::Winner(Player::One)
        }
    );
    let state = rc.state().unwrap();
    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(state.score(Player::One), 2);
    assert_eq!(state.score(Player::Two), 0);
    assert_eq!(state.move_count(), 2);

    let events = rc.drain_events();
    let finished: Vec<_> = events.iter().filter(|e| e.is_terminal()).collect();
    assert_eq!(finished.len(), 1);
    match finished[0] {
        GameEvent::GameFinished { result, scores } => {
            assert_eq!(*result, GameResult::Winner(Player::One));
            assert_eq!(scores[Player::One], 2);
            assert_eq!(scores[Player::Two], 0);
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_second_player_can_win_after_mismatch() {
    let mut rc = controller_with_pool(2, &["a", "b"]);
    rc.configure_game(2, 2).unwrap();
    let groups = pairs_by_identity(&rc);
    let a = &groups[&Symbol::from("a")];
    let b = &groups[&Symbol::from("b")];

    rc.request_flip(a[0]).unwrap();
    rc.request_flip(b[0]).unwrap();
    rc.advance(Duration::from_secs(1));

    rc.request_flip(a[0]).unwrap();
    rc.request_flip(a[1]).unwrap();
    rc.request_flip(b[0]).unwrap();
    let outcome = rc.request_flip(b[1]).unwrap();

    assert!(matches!(
        outcome,
        FlipOutcome::Finished { result: GameResult::Winner(Player::Two), .. }
    ));
    assert_eq!(rc.state().unwrap().move_count(), 3);
}

#[test]
fn test_split_scores_tie() {
    let mut rc = controller_with_pool(3, &["a", "b", "c", "d"]);
    rc.configure_game(2, 4).unwrap();
    let groups = pairs_by_identity(&rc);
    let pair = |name: &str| groups[&Symbol::from(name)].clone();

    // Player 1 takes a and b, then misses.
    for name in ["a", "b"] {
        let p = pair(name);
        rc.request_flip(p[0]).unwrap();
        rc.request_flip(p[1]).unwrap();
    }
    rc.request_flip(pair("c")[0]).unwrap();
    rc.request_flip(pair("d")[0]).unwrap();
    rc.advance(Duration::from_secs(1));

    // Player 2 takes c and d.
    rc.request_flip(pair("c")[0]).unwrap();
    rc.request_flip(pair("c")[1]).unwrap();
    rc.request_flip(pair("d")[0]).unwrap();
    let outcome = rc.request_flip(pair("d")[1]).unwrap();

    assert!(matches!(
        outcome,
        FlipOutcome::Finished { result: GameResult::Tie, .. }
    ));
    let state = rc.state().unwrap();
    assert_eq!(state.score(Player::One), 2);
    assert_eq!(state.score(Player::Two), 2);
}

#[test]
fn test_finished_game_rejects_flips_and_stops_clock() {
    let mut rc = controller_with_pool(4, &["paw"]);
    rc.configure_game(2, 2).unwrap();
    rc.advance(Duration::from_millis(3500));
    for position in 0..4 {
        rc.request_flip(position).unwrap();
    }
    assert_eq!(rc.phase(), Some(Phase::Finished));
    assert!(!rc.is_timer_running());
    rc.drain_events();

    rc.advance(Duration::from_secs(10));
    assert_eq!(rc.elapsed_secs(), 3);
    assert_eq!(rc.clock(), "00:03");
    assert!(rc.drain_events().is_empty());

    let err = rc.request_flip(0).unwrap_err();
    assert_eq!(err.rejection(), Some(FlipRejection::Finished));

    // Restart leaves the finished state.
    rc.restart().unwrap();
    assert_eq!(rc.phase(), Some(Phase::AwaitingFirstFlip));
    assert_eq!(rc.elapsed_secs(), 0);
}

#[test]
fn test_perfect_memory_clears_board_in_pair_count_moves() {
    let mut rc = RoundController::new(MatchConfig::default().with_seed(5));
    rc.configure_game(4, 5).unwrap();
    let groups = pairs_by_identity(&rc);

    let mut last = None;
    for positions in groups.values() {
        rc.request_flip(positions[0]).unwrap();
        last = Some(rc.request_flip(positions[1]).unwrap());
    }

    assert!(matches!(
        last,
        Some(FlipOutcome::Finished { result: GameResult::Winner(Player::One), .. })
    ));
    let state = rc.state().unwrap();
    assert_eq!(state.move_count(), 10);
    assert_eq!(state.score(Player::One), 10);
}

/// Players scan left to right and remember what they have seen.
#[test]
fn test_scripted_game_reaches_the_end() {
    let mut rc = RoundController::new(MatchConfig::default().with_seed(6));
    rc.configure_game(6, 6).unwrap();
    let card_count = 36;

    let mut seen: HashMap<Symbol, Vec<usize>> = HashMap::new();
    let mut guard = 0;

    while rc.phase() != Some(Phase::Finished) {
        guard += 1;
        assert!(guard < 500, "game did not finish");

        let state = rc.state().unwrap().clone();
        let hidden: Vec<usize> = (0..card_count)
            .filter(|&p| state.card(p).unwrap().is_face_down())
            .collect();

        // A known pair that is still face down, or the first unknown card.
        let known = seen.values().find_map(|ps| {
            let down: Vec<_> = ps.iter().copied().filter(|p| hidden.contains(p)).collect();
            (down.len() >= 2).then(|| (down[0], down[1]))
        });
        let (first, second) = match known {
            Some(pair) => pair,
            None => {
                let unseen: Vec<_> = hidden
                    .iter()
                    .copied()
                    .filter(|p| !seen.values().any(|ps| ps.contains(p)))
                    .collect();
                let first = unseen.first().copied().unwrap_or(hidden[0]);
                let identity = &state.card(first).unwrap().identity;
                let partner = seen
                    .get(identity)
                    .and_then(|ps| ps.iter().copied().find(|p| hidden.contains(p) && *p != first));
                let second = partner
                    .or_else(|| unseen.get(1).copied())
                    .unwrap_or_else(|| *hidden.iter().find(|&&p| p != first).unwrap());
                (first, second)
            }
        };

        for p in [first, second] {
            let identity = state.card(p).unwrap().identity.clone();
            let entry = seen.entry(identity).or_default();
            if !entry.contains(&p) {
                entry.push(p);
            }
        }

        rc.request_flip(first).unwrap();
        if let FlipOutcome::Mismatched { reset_in, .. } = rc.request_flip(second).unwrap() {
            rc.advance(reset_in);
        }
    }

    let state = rc.state().unwrap();
    assert!(state.all_matched());
    assert_eq!(state.score(Player::One) + state.score(Player::Two), 18);
    assert_eq!(state.history().len(), state.move_count() as usize);
}
