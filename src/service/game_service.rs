//! Create / read / delete / move operations over stored games.

use log::{debug, error, info};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::{Clock, Game, GameId, IdGenerator, ServiceConfig};
use crate::error::{KalahError, Result};
use crate::rules;

use super::store::GameStore;
use super::view::GameView;

/// The game API minus transport.
///
/// Moves on the same game id are serialized through a per-id lock, so the
/// read-validate-apply-save sequence never interleaves with another move on
/// that game. A move that fails validation saves nothing.
pub struct GameService<S, I, C> {
    config: ServiceConfig,
    store: S,
    ids: I,
    clock: C,
    move_locks: Mutex<FxHashMap<GameId, Arc<Mutex<()>>>>,
}

impl<S, I, C> GameService<S, I, C>
where
    S: GameStore,
    I: IdGenerator,
    C: Clock,
{
    pub fn new(config: ServiceConfig, store: S, ids: I, clock: C) -> Self {
        Self {
            config,
            store,
            ids,
            clock,
            move_locks: Mutex::new(FxHashMap::default()),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start a new game and store it.
    pub fn create_game(&self) -> Result<GameView> {
        info!("Creating a new game.");

        let game = Game::new(self.ids.next_id(), self.clock.now_millis());

        debug!("Saving the new game. GameId: {}.", game.id);
        self.store.save(&game)?;

        debug!("Game successfully created. GameId: {}.", game.id);
        Ok(GameView::summary(&game, &self.config))
    }

    /// Current board of a game.
    pub fn find_game(&self, id: &GameId) -> Result<GameView> {
        info!("Searching for the game. GameId: {}.", id);

        let game = self.retrieve(id)?;

        debug!("Game successfully found. GameId: {}.", id);
        Ok(GameView::with_status(&game, &self.config))
    }

    /// Full game record.
    pub fn game(&self, id: &GameId) -> Result<Game> {
        self.retrieve(id)
    }

    /// Delete a game, running or finished.
    pub fn delete_game(&self, id: &GameId) -> Result<()> {
        info!("Deleting a game. GameId: {}.", id);

        let lock = self.game_lock(id)?;
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let game = self.retrieve_locked(id, &lock)?;
        if game.is_running() {
            info!("Deleting a game that is still running. GameId: {}.", id);
        }

        if !self.store.delete(id)? {
            error!("The game disappeared before deletion. GameId: {}.", id);
            return Err(KalahError::GameNotFound(id.clone()));
        }
        self.release_lock(id, &lock)?;

        debug!("Game successfully deleted. GameId: {} and status: {:?}.", id, game.status);
        Ok(())
    }

    /// Sow from the 1-based `pit_number` for the player whose turn it is.
    pub fn make_move(&self, id: &GameId, pit_number: usize) -> Result<GameView> {
        info!("Making a movement in the game. GameId: {} and PitId: {}.", id, pit_number);

        let lock = self.game_lock(id)?;
        // The guarded data is `()`, so a poisoned lock carries no broken state.
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let game = self.retrieve_locked(id, &lock)?;
        let outcome = rules::play(&game, pit_number, self.clock.now_millis())?;

        debug!(
            "Saving the movement. GameId: {}, landing: {}, next: {}.",
            id, outcome.landing, outcome.game.next_player
        );
        self.store.save(&outcome.game)?;

        if let Some(result) = outcome.game.result() {
            info!("The game is over. GameId: {} and result: {:?}.", id, result);
        }
        Ok(GameView::with_status(&outcome.game, &self.config))
    }

    fn retrieve(&self, id: &GameId) -> Result<Game> {
        self.store.find(id)?.ok_or_else(|| {
            error!("The game was not found. GameId: {}.", id);
            KalahError::GameNotFound(id.clone())
        })
    }

    /// `retrieve` while holding the game's move lock. A missing game also
    /// drops its lock entry so unknown ids do not accumulate; any other
    /// failure keeps it, since the game still exists.
    fn retrieve_locked(&self, id: &GameId, lock: &Arc<Mutex<()>>) -> Result<Game> {
        self.retrieve(id).or_else(|err| -> Result<Game> {
            if matches!(err, KalahError::GameNotFound(_)) {
                self.release_lock(id, lock)?;
            }
            Err(err)
        })
    }

    /// Remove the table entry for `id` if no other caller holds or waits on
    /// `lock`. Callers waiting on it would otherwise race whoever creates the
    /// next entry.
    fn release_lock(&self, id: &GameId, lock: &Arc<Mutex<()>>) -> Result<()> {
        let mut table = self.lock_table()?;
        // One reference in the table, one held by the caller.
        let sole_holder = Arc::strong_count(lock) == 2
            && table.get(id).map_or(false, |entry| Arc::ptr_eq(entry, lock));
        if sole_holder {
            table.remove(id);
        }
        Ok(())
    }

    fn lock_table(&self) -> Result<MutexGuard<'_, FxHashMap<GameId, Arc<Mutex<()>>>>> {
        self.move_locks
            .lock()
            .map_err(|_| KalahError::Storage("move lock table poisoned".to_string()))
    }

    /// The move lock for `id`, created on first use.
    fn game_lock(&self, id: &GameId) -> Result<Arc<Mutex<()>>> {
        Ok(Arc::clone(self.lock_table()?.entry(id.clone()).or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ManualClock, SequentialIds};
    use crate::service::MemoryGameStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type TestService = GameService<MemoryGameStore, SequentialIds, ManualClock>;

    fn service() -> TestService {
        service_with(MemoryGameStore::new())
    }

    fn service_with<S: GameStore>(store: S) -> GameService<S, SequentialIds, ManualClock> {
        GameService::new(
            ServiceConfig::new(),
            store,
            SequentialIds::new("game"),
            ManualClock::new(1_000),
        )
    }

    fn tracked_locks<S: GameStore>(service: &GameService<S, SequentialIds, ManualClock>) -> usize {
        service.move_locks.lock().unwrap().len()
    }

    /// Memory store whose next `failures` lookups report a storage error.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryGameStore,
        failures: AtomicUsize,
    }

    impl FlakyStore {
        fn fail_finds(&self, count: usize) {
            self.failures.store(count, Ordering::SeqCst);
        }
    }

    impl GameStore for FlakyStore {
        fn find(&self, id: &GameId) -> Result<Option<Game>> {
            let failing = self
                .failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if failing {
                return Err(KalahError::Storage("transient".to_string()));
            }
            self.inner.find(id)
        }

        fn save(&self, game: &Game) -> Result<()> {
            self.inner.save(game)
        }

        fn delete(&self, id: &GameId) -> Result<bool> {
            self.inner.delete(id)
        }
    }

    #[test]
    fn test_unknown_ids_leave_no_locks() {
        let service = service();
        let missing = GameId::new("missing");

        assert!(service.make_move(&missing, 1).is_err());
        assert!(service.delete_game(&missing).is_err());
        assert_eq!(tracked_locks(&service), 0);
    }

    #[test]
    fn test_delete_drops_lock() {
        let service = service();
        let id = GameId::new(service.create_game().unwrap().id);

        service.make_move(&id, 1).unwrap();
        assert_eq!(tracked_locks(&service), 1);

        service.delete_game(&id).unwrap();
        assert_eq!(tracked_locks(&service), 0);
    }

    #[test]
    fn test_storage_error_keeps_lock() {
        let service = service_with(FlakyStore::default());
        let id = GameId::new(service.create_game().unwrap().id);

        service.store().fail_finds(1);
        assert_eq!(
            service.make_move(&id, 3),
            Err(KalahError::Storage("transient".to_string()))
        );
        assert_eq!(tracked_locks(&service), 1);

        service.make_move(&id, 3).unwrap();
        assert_eq!(tracked_locks(&service), 1);
    }

    #[test]
    fn test_storage_error_with_waiter_keeps_same_lock() {
        let service = service_with(FlakyStore::default());
        let id = GameId::new(service.create_game().unwrap().id);

        // A second caller already queued on the game's lock.
        let waiting = service.game_lock(&id).unwrap();
        service.store().fail_finds(1);
        assert!(service.make_move(&id, 3).is_err());

        let next = service.game_lock(&id).unwrap();
        assert!(Arc::ptr_eq(&waiting, &next));
    }

    #[test]
    fn test_missing_game_with_waiter_keeps_same_lock() {
        let service = service();
        let id = GameId::new(service.create_game().unwrap().id);
        service.store().delete(&id).unwrap();

        let waiting = service.game_lock(&id).unwrap();
        assert_eq!(
            service.make_move(&id, 1),
            Err(KalahError::GameNotFound(id.clone()))
        );
        assert!(Arc::ptr_eq(&waiting, &service.game_lock(&id).unwrap()));

        // The last caller out removes the entry.
        drop(waiting);
        assert!(service.make_move(&id, 1).is_err());
        assert_eq!(tracked_locks(&service), 0);
    }

    #[test]
    fn test_rejected_move_keeps_stored_game() {
        let service = service();
        let id = GameId::new(service.create_game().unwrap().id);
        let before = service.game(&id).unwrap();

        assert_eq!(service.make_move(&id, 8), Err(KalahError::InvalidMovement));
        assert_eq!(service.game(&id).unwrap(), before);
    }

    #[test]
    fn test_duration_uses_clock() {
        let service = service();
        let id = GameId::new(service.create_game().unwrap().id);

        let mut game = service.game(&id).unwrap();
        game.board = crate::core::Board::from_pits([0, 0, 0, 0, 0, 1, 25, 0, 0, 0, 0, 0, 1, 23]);
        service.store().save(&game).unwrap();

        service.clock.advance(2_500);
        service.make_move(&id, 6).unwrap();

        let finished = service.game(&id).unwrap();
        assert!(finished.is_over());
        assert_eq!(finished.started_time, 1_000);
        assert_eq!(finished.duration, Some(2_500));
    }
}
