//! Pre-flight checks for a move.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. game finished → `GameOver`
//! 2. index not one of the mover's sowing pits → `InvalidMovement`
//! 3. pit empty → `EmptyPit`
//!
//! Validation never touches the game.

use log::warn;

use crate::core::{Game, Pit};
use crate::error::{KalahError, Result};

/// Validate a move by 0-based board index.
///
/// On success returns the checked `Pit`, which is the only way into
/// `apply_move` from untrusted input.
pub fn validate(game: &Game, pit_index: usize) -> Result<Pit> {
    if game.is_over() {
        warn!("The provided game is already over. GameId: {}.", game.id);
        return Err(KalahError::GameOver);
    }

    let player = game.next_player;
    let pit = match Pit::new(pit_index) {
        Some(pit) if game.board.is_owned_pit(player, pit.index()) => pit,
        _ => {
            warn!(
                "The selected pit does not belong to {}. GameId: {} and PitIndex: {}.",
                player, game.id, pit_index
            );
            return Err(KalahError::InvalidMovement);
        }
    };

    if game.board.stones(pit) == 0 {
        warn!(
            "There is no stone in the selected pit. GameId: {} and PitIndex: {}.",
            game.id, pit_index
        );
        return Err(KalahError::EmptyPit);
    }

    Ok(pit)
}
