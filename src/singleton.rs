//! Process-wide single instance with an explicit lifecycle.
//!
//! [`InstanceSlot`] replaces a class that hijacks its own construction: the
//! slot is declared as a `static`, filled by `init` or `get_or_init`, read
//! with `get`, and emptied again with `reset` (tests, reconfiguration).
//! Callers that can, should prefer passing the instance down explicitly.
//!
//! Run with: cargo run --bin singleton

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::error::SingletonError;

pub struct InstanceSlot<T> {
    value: RwLock<Option<Arc<T>>>,
}

impl<T> InstanceSlot<T> {
    pub const fn new() -> Self {
        Self {
            value: RwLock::new(None),
        }
    }

    /// Installs `value`; fails if the slot already holds one.
    pub fn init(&self, value: T) -> Result<Arc<T>, SingletonError> {
        let mut guard = self.value.write().unwrap_or_else(PoisonError::into_inner);
        if guard.is_some() {
            return Err(SingletonError::AlreadyInitialized);
        }
        let instance = Arc::new(value);
        *guard = Some(Arc::clone(&instance));
        debug!("instance slot initialized");
        Ok(instance)
    }

    /// Returns the current instance, creating it with `init` if the slot is
    /// empty. Later calls never run `init` and get the first instance back.
    pub fn get_or_init<F>(&self, init: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        if let Some(instance) = self.get() {
            return instance;
        }

        // Re-check under the write lock; another thread may have won.
        let mut guard = self.value.write().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(instance) => Arc::clone(instance),
            None => {
                let instance = Arc::new(init());
                *guard = Some(Arc::clone(&instance));
                debug!("instance slot initialized lazily");
                instance
            }
        }
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }

    pub fn is_initialized(&self) -> bool {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Empties the slot and hands back the previous instance, if any.
    ///
    /// Holders of the old `Arc` keep a valid value; only new lookups see the
    /// empty slot.
    pub fn reset(&self) -> Option<Arc<T>> {
        let previous = self
            .value
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            debug!("instance slot reset");
        }
        previous
    }
}

impl<T> Default for InstanceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
