//! Kalah move rules.
//!
//! - `validator`: rejects moves before anything changes
//! - `engine`: sowing, capture, end-of-game sweep and turn passing
//!
//! Untrusted input goes through `play`, which chains the two. Callers that
//! already hold a validated `Pit` can call `apply_move` directly.

pub mod validator;
pub mod engine;

pub use validator::validate;
pub use engine::{apply_move, legal_moves, play, MoveOutcome};
