//! Game record: board, status, turn owner and timing.
//!
//! ## Lifecycle
//!
//! A game starts `Running` with a fresh board and Player One to move. Each
//! accepted move produces a new `Game` value (see `rules::apply_move`); the
//! transition to `Finished` happens once and is never undone.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Player;

/// Opaque, globally unique game identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Whether a game still accepts moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    Running,
    Finished,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The player with more stones in their store.
    Winner(Player),
    /// Both stores hold the same count.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// A single Kalah game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Identifier assigned at creation.
    pub id: GameId,

    pub board: Board,

    pub status: GameStatus,

    /// Player who makes the next move.
    pub next_player: Player,

    /// Creation time, milliseconds since the Unix epoch.
    pub started_time: u64,

    /// Milliseconds from creation to the final move. Set once finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl Game {
    /// Create a running game on a fresh board with Player One to move.
    #[must_use]
    pub fn new(id: GameId, started_time: u64) -> Self {
        Self::with_board(id, Board::new(), Player::One, started_time)
    }

    /// Create a running game from an arbitrary position.
    #[must_use]
    pub fn with_board(id: GameId, board: Board, next_player: Player, started_time: u64) -> Self {
        Self {
            id,
            board,
            status: GameStatus::Running,
            next_player,
            started_time,
            duration: None,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Whose turn it is.
    #[must_use]
    pub fn is_turn_of(&self, player: Player) -> bool {
        self.next_player == player
    }

    /// Mark the game finished at `now`, recording the duration.
    ///
    /// A finished game stays finished; calling this again changes nothing.
    pub fn finish(&mut self, now: u64) {
        if self.is_over() {
            return;
        }
        self.status = GameStatus::Finished;
        self.duration = Some(now.saturating_sub(self.started_time));
    }

    /// Final result, or `None` while the game is running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }

        let one = self.board.store_stones(Player::One);
        let two = self.board.store_stones(Player::Two);
        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }
}
