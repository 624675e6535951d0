//! Game persistence.

use rustc_hash::FxHashMap;
use std::sync::{PoisonError, RwLock};

use crate::core::{Game, GameId};
use crate::error::{KalahError, Result};

/// Storage for games keyed by identifier.
///
/// Implementations only need to be consistent per call; serializing moves on
/// the same game is the service's job.
pub trait GameStore: Send + Sync {
    /// Look up a game. `Ok(None)` if no game has that id.
    fn find(&self, id: &GameId) -> Result<Option<Game>>;

    /// Insert or replace a game.
    fn save(&self, game: &Game) -> Result<()>;

    /// Remove a game. Returns whether it existed.
    fn delete(&self, id: &GameId) -> Result<bool>;
}

/// In-memory storage for tests and single-process use.
#[derive(Debug, Default)]
pub struct MemoryGameStore {
    games: RwLock<FxHashMap<GameId, Game>>,
}

impl MemoryGameStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    pub fn len(&self) -> usize {
        self.games.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: PoisonError<T>) -> KalahError {
    KalahError::Storage("game store lock poisoned".to_string())
}

impl GameStore for MemoryGameStore {
    fn find(&self, id: &GameId) -> Result<Option<Game>> {
        let games = self.games.read().map_err(poisoned)?;
        Ok(games.get(id).cloned())
    }

    fn save(&self, game: &Game) -> Result<()> {
        let mut games = self.games.write().map_err(poisoned)?;
        games.insert(game.id.clone(), game.clone());
        Ok(())
    }

    fn delete(&self, id: &GameId) -> Result<bool> {
        let mut games = self.games.write().map_err(poisoned)?;
        Ok(games.remove(id).is_some())
    }
}
