//! In-process game service.
//!
//! What an HTTP layer would call: create, read, delete and move, with
//! persistence behind `GameStore` and ids / time behind the `core`
//! collaborator traits.

pub mod store;
pub mod view;
pub mod game_service;

pub use store::{GameStore, MemoryGameStore};
pub use view::GameView;
pub use game_service::GameService;
