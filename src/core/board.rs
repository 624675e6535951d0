//! The Kalah board: fourteen stone counts in fixed positions.
//!
//! ## Layout
//!
//! - `0..6`: Player One's sowing pits, `6`: Player One's store
//! - `7..13`: Player Two's sowing pits, `13`: Player Two's store
//!
//! The board is a `Copy` value. Mutation goes through `Index<Pit>` /
//! `set_stones`, so every access is range-checked by construction of `Pit`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use super::pit::{Pit, BOARD_SIZE};
use super::player::Player;

/// Stones placed in every sowing pit at the start of a game.
pub const INITIAL_STONES_PER_PIT: u32 = 6;

/// Stone counts for all 14 positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits: [u32; BOARD_SIZE],
}

impl Board {
    /// A fresh board: six stones in every sowing pit, empty stores.
    #[must_use]
    pub fn new() -> Self {
        let mut pits = [INITIAL_STONES_PER_PIT; BOARD_SIZE];
        for player in Player::ALL {
            pits[player.store_index()] = 0;
        }
        Self { pits }
    }

    /// Build a board from raw counts in index order.
    ///
    /// ```
    /// use kalah::core::Board;
    ///
    /// let board = Board::from_pits([0, 0, 0, 0, 0, 1, 25, 0, 0, 0, 0, 0, 1, 23]);
    /// assert_eq!(board.total_stones(), 50);
    /// ```
    #[must_use]
    pub const fn from_pits(pits: [u32; BOARD_SIZE]) -> Self {
        Self { pits }
    }

    /// Raw counts in index order.
    #[must_use]
    pub const fn pits(&self) -> &[u32; BOARD_SIZE] {
        &self.pits
    }

    /// Stones at `pit`.
    #[must_use]
    pub fn stones(&self, pit: Pit) -> u32 {
        self.pits[pit.index()]
    }

    /// Overwrite the stone count at `pit`.
    pub fn set_stones(&mut self, pit: Pit, stones: u32) {
        self.pits[pit.index()] = stones;
    }

    /// Empty `pit`, returning what it held.
    pub fn take(&mut self, pit: Pit) -> u32 {
        std::mem::take(&mut self.pits[pit.index()])
    }

    /// Stone count by raw index, `None` off the board.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.pits.get(index).copied()
    }

    // === Classification ===

    /// Is `index` one of `player`'s six sowing pits?
    #[must_use]
    pub fn is_owned_pit(&self, player: Player, index: usize) -> bool {
        player.pit_range().contains(&index)
    }

    /// Is `index` exactly `player`'s store?
    #[must_use]
    pub fn is_store(&self, player: Player, index: usize) -> bool {
        player.store_index() == index
    }

    /// The pit across the board from a sowing pit.
    ///
    /// Stores have no opposite; `None` is returned for them.
    #[must_use]
    pub fn opposite_pit(&self, pit: Pit) -> Option<Pit> {
        pit.opposite()
    }

    /// Are all six of `player`'s sowing pits empty? Stores are not counted.
    #[must_use]
    pub fn row_is_empty(&self, player: Player) -> bool {
        self.pits[player.pit_range()].iter().all(|&stones| stones == 0)
    }

    // === Aggregates ===

    /// Stones in `player`'s six sowing pits.
    #[must_use]
    pub fn row_stones(&self, player: Player) -> u32 {
        self.pits[player.pit_range()].iter().sum()
    }

    /// Stones in `player`'s store.
    #[must_use]
    pub fn store_stones(&self, player: Player) -> u32 {
        self.pits[player.store_index()]
    }

    /// Stones on the whole board.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Move every stone left in `player`'s row into that player's store.
    ///
    /// Returns the number of stones moved.
    pub fn sweep_row(&mut self, player: Player) -> u32 {
        let swept: u32 = self.pits[player.pit_range()].iter_mut().map(std::mem::take).sum();
        self.pits[player.store_index()] += swept;
        swept
    }

    /// Stone counts keyed by 1-based pit number.
    #[must_use]
    pub fn pit_status(&self) -> BTreeMap<usize, u32> {
        Pit::all().map(|pit| (pit.number(), self.stones(pit))).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Pit> for Board {
    type Output = u32;

    fn index(&self, pit: Pit) -> &Self::Output {
        &self.pits[pit.index()]
    }
}

impl IndexMut<Pit> for Board {
    fn index_mut(&mut self, pit: Pit) -> &mut Self::Output {
        &mut self.pits[pit.index()]
    }
}

impl std::fmt::Display for Board {
    /// Two-row picture from Player One's side, Player Two's row reversed on top.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let top: Vec<String> = Player::Two
            .pit_range()
            .rev()
            .map(|i| format!("{:>3}", self.pits[i]))
            .collect();
        let bottom: Vec<String> = Player::One
            .pit_range()
            .map(|i| format!("{:>3}", self.pits[i]))
            .collect();

        writeln!(f, "     {}", top.join(" "))?;
        writeln!(
            f,
            "{:>3} {} {:>3}",
            self.store_stones(Player::Two),
            " ".repeat(top.join(" ").len()),
            self.store_stones(Player::One)
        )?;
        write!(f, "     {}", bottom.join(" "))
    }
}
