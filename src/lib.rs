//! # kalah
//!
//! Rules engine and game service for Kalah, the six-pit, six-stone Mancala.
//!
//! ## Design Principles
//!
//! 1. **Moves are state transitions**: `rules::apply_move` takes a game by
//!    reference and returns the next one. Nothing is mutated in place, so a
//!    rejected or abandoned move never leaves a half-sown board behind.
//!
//! 2. **Validated input only**: board positions are `Pit` values that cannot
//!    be off the board; 1-based pit numbers from callers are translated in
//!    exactly one place.
//!
//! 3. **Collaborators behind traits**: storage (`GameStore`), identifiers
//!    (`IdGenerator`) and time (`Clock`) are injected into `GameService`.
//!
//! ## Modules
//!
//! - `core`: players, pits, board, game record, clock, ids, configuration
//! - `rules`: move validation and execution
//! - `service`: create / read / delete / move over a game store
//! - `error`: caller-visible error taxonomy
//!
//! ## Example
//!
//! ```
//! use kalah::core::{Game, GameId, Player};
//! use kalah::rules;
//!
//! let game = Game::new(GameId::new("demo"), 0);
//! let outcome = rules::play(&game, 1, 0).unwrap();
//!
//! // Six stones from pit 1 end in Player One's store: extra turn.
//! assert_eq!(outcome.game.board.pits(), &[0, 7, 7, 7, 7, 7, 1, 6, 6, 6, 6, 6, 6, 0]);
//! assert_eq!(outcome.game.next_player, Player::One);
//! ```

pub mod core;
pub mod rules;
pub mod service;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Player, Pit, Board, Game, GameId, GameStatus, GameResult,
    Clock, SystemClock, ManualClock,
    IdGenerator, RandomIds, SequentialIds,
    ServiceConfig, ConfigError,
};

pub use crate::rules::{apply_move, legal_moves, play, validate, MoveOutcome};

pub use crate::service::{GameService, GameStore, GameView, MemoryGameStore};

pub use crate::error::{ErrorBody, KalahError};
