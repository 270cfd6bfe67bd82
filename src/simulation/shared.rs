//! Thread-safe handle for hosts that drive the engine from more than one
//! thread
//!
//! The whole settlement is a single critical section: a tick reads several
//! fields and writes them back, so every operation goes through one lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::simulation::settlement::{Settlement, SettlementSnapshot};

#[derive(Debug, Clone, Default)]
pub struct SharedSettlement {
    inner: Arc<Mutex<Settlement>>,
}

impl SharedSettlement {
    pub fn new(settlement: Settlement) -> Self {
        Self {
            inner: Arc::new(Mutex::new(settlement)),
        }
    }

    /// Run `f` with exclusive access to the engine
    pub fn with<R>(&self, f: impl FnOnce(&mut Settlement) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn snapshot(&self) -> SettlementSnapshot {
        self.lock().snapshot()
    }

    // Poisoned locks are recovered; the engine never holds a broken invariant
    // between operations.
    fn lock(&self) -> MutexGuard<'_, Settlement> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
