//! The two Kalah players and the half of the board each one owns.
//!
//! ## Layout
//!
//! ```text
//!        12  11  10   9   8   7
//!   13                           6
//!         0   1   2   3   4   5
//! ```
//!
//! Player One sows from pits `0..6` into store `6`, Player Two from
//! pits `7..13` into store `13`.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::pit::Pit;

/// Number of sowing pits per player.
pub const PITS_PER_PLAYER: usize = 6;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "PLAYER_ONE")]
    One,
    #[serde(rename = "PLAYER_TWO")]
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Board indices of this player's six sowing pits.
    #[must_use]
    pub const fn pit_range(self) -> Range<usize> {
        match self {
            Player::One => 0..6,
            Player::Two => 7..13,
        }
    }

    /// Board index of this player's store.
    #[must_use]
    pub const fn store_index(self) -> usize {
        match self {
            Player::One => 6,
            Player::Two => 13,
        }
    }

    /// This player's store.
    #[must_use]
    pub fn store(self) -> Pit {
        Pit::store_of(self)
    }

    /// Iterate over this player's sowing pits, left to right from the
    /// player's side.
    pub fn pits(self) -> impl Iterator<Item = Pit> {
        self.pit_range().filter_map(Pit::new)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player One"),
            Player::Two => write!(f, "Player Two"),
        }
    }
}
