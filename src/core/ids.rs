//! Game identifier generation.
//!
//! ## Key Features
//!
//! - **Unique**: `RandomIds` emits RFC 4122 version-4 UUID strings
//! - **Deterministic when seeded**: same seed produces the same id sequence,
//!   which keeps tests and replays reproducible
//! - **Thread-safe**: generators are shared by the service across callers
//!
//! ```
//! use kalah::core::{IdGenerator, RandomIds};
//!
//! let a = RandomIds::seeded(42);
//! let b = RandomIds::seeded(42);
//! assert_eq!(a.next_id(), b.next_id());
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::game::GameId;

/// Produces a fresh identifier for every created game.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> GameId;
}

/// UUID v4 identifiers drawn from a ChaCha8 stream.
#[derive(Debug)]
pub struct RandomIds {
    inner: Mutex<ChaCha8Rng>,
}

impl RandomIds {
    /// Seed from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ChaCha8Rng::from_entropy()),
        }
    }

    /// Deterministic stream for the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&self) -> GameId {
        let mut bytes = [0u8; 16];
        {
            // A poisoned lock only means another thread panicked mid-fill;
            // the generator state is still usable.
            let mut rng = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            rng.fill_bytes(&mut bytes);
        }
        let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
        GameId::new(uuid.to_string())
    }
}

/// `prefix-1`, `prefix-2`, ... Readable ids for tests and the CLI.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> GameId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        GameId::new(format!("{}-{}", self.prefix, n))
    }
}
