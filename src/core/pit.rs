//! Range-checked pit positions.
//!
//! A `Pit` is always a valid board index (`0..14`). Callers outside the
//! crate speak in 1-based pit numbers; `Pit::from_number` is the single
//! place where that numbering is translated.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Total number of board positions (12 sowing pits + 2 stores).
pub const BOARD_SIZE: usize = 14;

/// A board position: a sowing pit or a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pit(u8);

impl Pit {
    /// Create a pit from a 0-based board index.
    ///
    /// Returns `None` if `index` is off the board.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < BOARD_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Create a pit from a 1-based pit number as used by callers.
    ///
    /// ```
    /// use kalah::core::Pit;
    ///
    /// assert_eq!(Pit::from_number(1).map(Pit::index), Some(0));
    /// assert_eq!(Pit::from_number(14).map(Pit::index), Some(13));
    /// assert!(Pit::from_number(0).is_none());
    /// assert!(Pit::from_number(15).is_none());
    /// ```
    #[must_use]
    pub const fn from_number(number: usize) -> Option<Self> {
        match number.checked_sub(1) {
            Some(index) => Self::new(index),
            None => None,
        }
    }

    /// The store of `player`.
    #[must_use]
    pub const fn store_of(player: Player) -> Self {
        Self(player.store_index() as u8)
    }

    /// 0-based board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based pit number.
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 as usize + 1
    }

    /// The next position in sowing order, wrapping from 13 to 0.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % BOARD_SIZE as u8)
    }

    /// The player whose half of the board this position is on.
    #[must_use]
    pub const fn owner(self) -> Player {
        if self.0 <= 6 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Is this position one of the two stores?
    #[must_use]
    pub const fn is_store(self) -> bool {
        self.0 as usize == Player::One.store_index() || self.0 as usize == Player::Two.store_index()
    }

    /// The pit directly across the board (`12 - index`).
    ///
    /// Stores have no opposite pit.
    #[must_use]
    pub const fn opposite(self) -> Option<Self> {
        if self.is_store() {
            None
        } else {
            Some(Self(12 - self.0))
        }
    }

    /// Iterate over all 14 positions in board order.
    pub fn all() -> impl Iterator<Item = Pit> {
        (0..BOARD_SIZE as u8).map(Pit)
    }
}

impl TryFrom<u8> for Pit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Pit::new(value as usize).ok_or_else(|| format!("pit index {} is off the board", value))
    }
}

impl From<Pit> for u8 {
    fn from(pit: Pit) -> Self {
        pit.0
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pit({})", self.number())
    }
}
