use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock};

use wson_connect::BuildError;

use crate::{Wson, WsonOptions};

// -----------------------------------------------------------------------------
// SharedWson

/// A [`Wson`] that can be replaced while other threads use it.
///
/// Readers take a snapshot with [`load`](Self::load) and keep using it for
/// as long as they like. A reload builds the new engine first and swaps it
/// in only on success, so readers never observe a half-built engine.
///
/// # Examples
///
/// ```
/// use wson::{SharedWson, Wson, WsonOptions};
///
/// let shared = SharedWson::new(Wson::new(WsonOptions::new()).unwrap());
/// let before = shared.load();
///
/// shared.reload(WsonOptions::new().extend(false)).unwrap();
/// assert_eq!(before.registry().len(), 2);
/// assert!(shared.load().registry().is_empty());
/// ```
#[derive(Clone)]
pub struct SharedWson {
    /// The current engine.
    pub internal: Arc<RwLock<Arc<Wson>>>,
}

impl SharedWson {
    #[inline]
    pub fn new(wson: Wson) -> Self {
        Self {
            internal: Arc::new(RwLock::new(Arc::new(wson))),
        }
    }

    /// A snapshot of the current engine.
    pub fn load(&self) -> Arc<Wson> {
        let guard = self.internal.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replaces the engine, returning the previous one.
    pub fn store(&self, wson: Wson) -> Arc<Wson> {
        let mut guard = self
            .internal
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        core::mem::replace(&mut *guard, Arc::new(wson))
    }

    /// Builds an engine from `options` and swaps it in.
    ///
    /// On failure the current engine stays in place.
    pub fn reload(&self, options: WsonOptions) -> Result<Arc<Wson>, BuildError> {
        let wson = Wson::new(options)?;
        log::debug!(
            "swapping in a wson engine with {} connectors",
            wson.registry().len()
        );
        Ok(self.store(wson))
    }
}

impl From<Wson> for SharedWson {
    #[inline]
    fn from(wson: Wson) -> Self {
        Self::new(wson)
    }
}

impl core::fmt::Debug for SharedWson {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("SharedWson").field(&self.load()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
