//! Move execution.
//!
//! `apply_move` is a pure state transition: it takes the current game by
//! reference and returns the successor in a `MoveOutcome`. The input game is
//! never touched, so a caller that stores the result only after success gets
//! all-or-nothing moves for free.
//!
//! ## Turn sequence
//!
//! 1. Pick up every stone in the chosen pit.
//! 2. Sow one stone per position in cyclic order `0..14`, skipping the
//!    opponent's store.
//! 3. Capture if the last stone landed in an empty pit of the mover's row.
//! 4. If either row is now empty the game ends and each player's remaining
//!    stones go to their own store.
//! 5. Otherwise the turn passes, unless the last stone landed in the mover's
//!    own store.

use log::debug;
use smallvec::SmallVec;

use crate::core::{Board, Game, Pit, Player};
use crate::error::Result;

use super::validator::validate;

/// Everything that happened during one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The game after the move.
    pub game: Game,

    /// Player who moved.
    pub mover: Player,

    /// Pit the stones were picked up from.
    pub origin: Pit,

    /// Positions that received a stone, in sowing order.
    pub sown: SmallVec<[Pit; 16]>,

    /// Position of the last sown stone.
    pub landing: Pit,

    /// Stones moved into the mover's store by the capture rule
    /// (opposite pit plus the landing stone). Zero if no capture.
    pub captured: u32,

    /// The mover plays again.
    pub extra_turn: bool,
}

impl MoveOutcome {
    /// Did this move end the game?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game.is_over()
    }
}

/// Execute one move for the player whose turn it is.
///
/// `pit` must already have passed `validate`: a non-empty sowing pit of
/// `game.next_player` on a running game. `now` is the current time in
/// milliseconds and is only used when the move ends the game.
#[must_use]
pub fn apply_move(game: &Game, pit: Pit, now: u64) -> MoveOutcome {
    let mover = game.next_player;
    debug_assert!(game.is_running(), "move applied to a finished game");
    debug_assert!(
        game.board.is_owned_pit(mover, pit.index()) && game.board.stones(pit) > 0,
        "move applied to an unvalidated pit"
    );

    let mut next = game.clone();
    let (sown, landing) = sow(&mut next.board, mover, pit);
    let captured = capture(&mut next.board, mover, landing);

    if captured > 0 {
        debug!(
            "{} captured {} stones at {}. GameId: {}.",
            mover, captured, landing, game.id
        );
    }

    let finished = Player::ALL.iter().any(|&p| next.board.row_is_empty(p));
    let extra_turn = !finished && landing == mover.store();

    if finished {
        for player in Player::ALL {
            next.board.sweep_row(player);
        }
        next.finish(now);
        debug!(
            "Game finished. GameId: {}, stores: {} / {}.",
            game.id,
            next.board.store_stones(Player::One),
            next.board.store_stones(Player::Two)
        );
    } else if extra_turn {
        debug!("{} landed in own store and moves again. GameId: {}.", mover, game.id);
    } else {
        next.next_player = mover.opponent();
    }

    MoveOutcome {
        game: next,
        mover,
        origin: pit,
        sown,
        landing,
        captured,
        extra_turn,
    }
}

/// Validate a 1-based pit number against `game`, then apply it.
///
/// This is the entry point for untrusted input: numbers outside `1..=14`
/// are rejected as `InvalidMovement` along with every other validation
/// failure, and `game` is left as it was on error.
pub fn play(game: &Game, pit_number: usize, now: u64) -> Result<MoveOutcome> {
    // 0 wraps to an off-board index, which validation rejects.
    let pit = validate(game, pit_number.wrapping_sub(1))?;
    Ok(apply_move(game, pit, now))
}

/// Pits the player to move may choose. Empty once the game is over.
#[must_use]
pub fn legal_moves(game: &Game) -> Vec<Pit> {
    if game.is_over() {
        return Vec::new();
    }
    game.next_player
        .pits()
        .filter(|&pit| game.board.stones(pit) > 0)
        .collect()
}

/// Empty `origin` and sow its stones forward, skipping the opponent's store.
///
/// Returns the positions sown into and the landing position.
fn sow(board: &mut Board, mover: Player, origin: Pit) -> (SmallVec<[Pit; 16]>, Pit) {
    let skipped = mover.opponent().store();
    let mut remaining = board.take(origin);
    let mut sown = SmallVec::new();
    let mut current = origin;

    while remaining > 0 {
        current = current.next();
        if current == skipped {
            continue;
        }
        board[current] += 1;
        sown.push(current);
        remaining -= 1;
    }

    (sown, current)
}

/// Apply the capture rule at `landing`. Returns stones captured.
fn capture(board: &mut Board, mover: Player, landing: Pit) -> u32 {
    if !board.is_owned_pit(mover, landing.index()) || board.stones(landing) != 1 {
        return 0;
    }
    let Some(opposite) = board.opposite_pit(landing) else {
        return 0;
    };

    let captured = board.take(landing) + board.take(opposite);
    board[mover.store()] += captured;
    captured
}
