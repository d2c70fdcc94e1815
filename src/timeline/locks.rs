//! Per-identity mutual exclusion.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::identity::Identity;

/// A lazily populated map of one mutex per identity.
///
/// Entries live only while some caller holds a handle; [`release`]
/// drops an entry once its last handle is returned.
///
/// [`release`]: IdentityLocks::release
#[derive(Debug, Default)]
pub struct IdentityLocks {
    locks: Mutex<HashMap<Identity, Arc<Mutex<()>>>>,
}

impl IdentityLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the mutex for `identity`, creating it on first use.
    pub fn handle(&self, identity: &Identity) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(identity.clone()).or_default())
    }

    /// Return a handle from [`handle`](Self::handle), dropping the map
    /// entry if no other caller holds one.
    pub fn release(&self, identity: &Identity, handle: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        drop(handle);
        if locks
            .get(identity)
            .is_some_and(|entry| Arc::strong_count(entry) == 1)
        {
            locks.remove(identity);
        }
    }

    /// Number of identities currently tracked.
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lock a handle, ignoring poisoning: the guarded section holds no data.
pub fn acquire(handle: &Mutex<()>) -> MutexGuard<'_, ()> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}
