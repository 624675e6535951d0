//! Rule scenarios played through the public API.
//!
//! Boards are written in index order: Player One's pits 0-5, store 6,
//! Player Two's pits 7-12, store 13.

use kalah::core::{Board, Game, GameId, GameStatus, Pit, Player};
use kalah::error::KalahError;
use kalah::rules::{apply_move, legal_moves, play, validate};

fn game(pits: [u32; 14], next: Player) -> Game {
    Game::with_board(GameId::new("scenario"), Board::from_pits(pits), next, 0)
}

// =============================================================================
// Opening
// =============================================================================

/// Pit 1 on a fresh board ends in Player One's store: same player again.
#[test]
fn test_opening_pit_one_extra_turn() {
    let start = Game::new(GameId::new("scenario"), 0);
    let out = play(&start, 1, 0).unwrap();

    assert_eq!(out.game.board.pits(), &[0, 7, 7, 7, 7, 7, 1, 6, 6, 6, 6, 6, 6, 0]);
    assert_eq!(out.game.next_player, Player::One);
    assert_eq!(out.game.status, GameStatus::Running);
}

/// Follow-up from pit 6 crosses into Player Two's row: turn passes.
#[test]
fn test_second_move_pit_six_passes_turn() {
    let start = Game::new(GameId::new("scenario"), 0);
    let first = play(&start, 1, 0).unwrap().game;
    let second = play(&first, 6, 0).unwrap();

    assert_eq!(second.game.board.pits(), &[0, 7, 7, 7, 7, 0, 2, 7, 7, 7, 7, 7, 7, 0]);
    assert_eq!(second.game.next_player, Player::Two);
}

/// Player Two's opening from pit 8 mirrors Player One's from pit 1.
#[test]
fn test_player_two_mirror_opening() {
    let start = game([6, 6, 6, 6, 6, 6, 0, 6, 6, 6, 6, 6, 6, 0], Player::Two);
    let out = play(&start, 8, 0).unwrap();

    assert_eq!(out.game.board.pits(), &[6, 6, 6, 6, 6, 6, 0, 0, 7, 7, 7, 7, 7, 1]);
    assert_eq!(out.landing, Pit::new(13).unwrap());
    assert_eq!(out.game.next_player, Player::Two);
}

// =============================================================================
// Sowing
// =============================================================================

/// Thirteen stones from pit index 0 go round once, skipping index 13.
#[test]
fn test_thirteen_stones_skip_opponent_store() {
    let start = game([13, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 2, 2, 0], Player::One);
    let out = apply_move(&start, Pit::new(0).unwrap(), 0);

    let sown: Vec<usize> = out.sown.iter().map(|p| p.index()).collect();
    assert_eq!(sown, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 0]);
    assert_eq!(out.landing.index(), 0);
    assert_eq!(out.game.board.store_stones(Player::Two), 0);
}

/// Player Two never sows into Player One's store.
#[test]
fn test_player_two_skips_player_one_store() {
    let start = game([1, 1, 1, 1, 1, 1, 5, 0, 0, 0, 0, 0, 20, 3], Player::Two);
    let out = apply_move(&start, Pit::new(12).unwrap(), 0);

    assert_eq!(out.game.board.store_stones(Player::One), 5);
    assert!(out.sown.iter().all(|p| p.index() != 6));
    assert_eq!(out.game.board.total_stones(), start.board.total_stones());
}

// =============================================================================
// Capture
// =============================================================================

/// Last stone in an empty own pit takes the opposite pit.
#[test]
fn test_player_one_capture() {
    let start = game([0, 0, 0, 0, 0, 10, 25, 0, 0, 0, 0, 0, 1, 23], Player::One);
    let out = play(&start, 6, 0).unwrap();

    assert_eq!(out.game.board.pits(), &[1, 1, 0, 0, 0, 0, 28, 1, 1, 1, 0, 1, 2, 23]);
    assert_eq!(out.captured, 2);
    assert_eq!(out.game.next_player, Player::Two);
}

#[test]
fn test_player_two_capture() {
    let start = game([0, 0, 0, 0, 0, 10, 25, 0, 0, 0, 0, 0, 10, 23], Player::Two);
    let out = play(&start, 13, 0).unwrap();

    assert_eq!(out.game.board.pits(), &[1, 1, 1, 0, 1, 11, 25, 1, 1, 0, 0, 0, 0, 26]);
    assert_eq!(out.captured, 2);
    assert_eq!(out.game.next_player, Player::One);
}

/// A landing pit that already held stones is left alone.
#[test]
fn test_no_capture_when_pit_was_occupied() {
    let start = game([0, 0, 1, 4, 0, 0, 0, 3, 3, 3, 3, 3, 3, 0], Player::One);
    let out = play(&start, 3, 0).unwrap();

    assert_eq!(out.landing.index(), 3);
    assert_eq!(out.captured, 0);
    assert_eq!(out.game.board.pits(), &[0, 0, 0, 5, 0, 0, 0, 3, 3, 3, 3, 3, 3, 0]);
}

// =============================================================================
// End of game
// =============================================================================

/// Player One empties their row by sowing into their own store.
#[test]
fn test_player_one_game_over() {
    let start = game([0, 0, 0, 0, 0, 1, 25, 0, 0, 0, 0, 0, 1, 23], Player::One);
    let out = play(&start, 6, 0).unwrap();

    assert!(out.is_game_over());
    assert_eq!(out.game.board.pits(), &[0, 0, 0, 0, 0, 0, 26, 0, 0, 0, 0, 0, 0, 24]);
    assert!(out.game.result().unwrap().is_winner(Player::One));
}

/// Player Two empties their row; Player One's leftovers go to Player One.
#[test]
fn test_player_two_game_over() {
    let start = game([1, 6, 0, 6, 4, 6, 25, 0, 0, 0, 0, 0, 1, 23], Player::Two);
    let out = play(&start, 13, 0).unwrap();

    assert!(out.is_game_over());
    assert_eq!(out.game.board.pits(), &[0, 0, 0, 0, 0, 0, 48, 0, 0, 0, 0, 0, 0, 24]);
}

/// Once finished, every pit is rejected with `GameOver`.
#[test]
fn test_finished_game_rejects_moves() {
    let start = game([0, 0, 0, 0, 0, 1, 25, 0, 0, 0, 0, 0, 1, 23], Player::One);
    let done = play(&start, 6, 0).unwrap().game;

    assert!(legal_moves(&done).is_empty());
    for index in 0..14 {
        assert_eq!(validate(&done, index), Err(KalahError::GameOver));
    }
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_validation_errors() {
    let start = Game::new(GameId::new("scenario"), 0);

    assert_eq!(play(&start, 7, 0), Err(KalahError::InvalidMovement));
    assert_eq!(play(&start, 9, 0), Err(KalahError::InvalidMovement));
    assert_eq!(play(&start, 14, 0), Err(KalahError::InvalidMovement));
    assert_eq!(play(&start, 0, 0), Err(KalahError::InvalidMovement));

    let after = play(&start, 1, 0).unwrap().game;
    assert_eq!(play(&after, 1, 0), Err(KalahError::EmptyPit));
}
