//! Core value types: players, pits, board, game record, and the clock /
//! identifier / configuration collaborators the service is built from.
//!
//! Nothing in this module knows the rules of a move; that lives in `rules`.

pub mod player;
pub mod pit;
pub mod board;
pub mod game;
pub mod clock;
pub mod ids;
pub mod config;

pub use player::{Player, PITS_PER_PLAYER};
pub use pit::{Pit, BOARD_SIZE};
pub use board::{Board, INITIAL_STONES_PER_PIT};
pub use game::{Game, GameId, GameResult, GameStatus};
pub use clock::{Clock, ManualClock, SystemClock};
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use config::{ConfigError, ServiceConfig};
