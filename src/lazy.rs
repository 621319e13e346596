// src/lazy.rs
//! Load-once snapshots.
//!
//! A [`Snapshot`] is either empty or holds one fully parsed value. The mutex is
//! held across the load, so concurrent first reads wait for the one in-flight
//! fetch instead of issuing their own. A failed load leaves the slot as it was.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::TableGrid;
use crate::error::Result;
use crate::fetch::TableFetcher;

pub struct Snapshot<T> {
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self { slot: Mutex::new(None) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Snapshot").field(&*self.lock()).finish()
    }
}

impl<T> Snapshot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.lock().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().is_some()
    }

    /// Cached value, or run `load` and cache its result.
    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Result<T>,
    {
        let mut slot = self.lock();
        if let Some(cached) = slot.as_ref() {
            return Ok(Arc::clone(cached));
        }
        let fresh = Arc::new(load()?);
        *slot = Some(Arc::clone(&fresh));
        Ok(fresh)
    }

    /// Always run `load`; on success the new value replaces the old one whole.
    pub fn reload<F>(&self, load: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Result<T>,
    {
        let mut slot = self.lock();
        let fresh = Arc::new(load()?);
        *slot = Some(Arc::clone(&fresh));
        Ok(fresh)
    }

    // A panic inside a parser must not brick the handle; the slot is only ever
    // written after a complete load, so the inner value is still consistent.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A remote page: its URL plus the snapshot parsed from it.
#[derive(Debug)]
pub struct LazyPage<T> {
    url: String,
    snapshot: Snapshot<T>,
}

impl<T> LazyPage<T> {
    pub fn new(url: String) -> Self {
        Self { url, snapshot: Snapshot::new() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_loaded()
    }

    pub fn ensure_loaded<P>(&self, fetcher: &dyn TableFetcher, parse: P) -> Result<Arc<T>>
    where
        P: FnOnce(&[TableGrid]) -> Result<T>,
    {
        self.snapshot.get_or_load(|| load(&self.url, fetcher, parse))
    }

    pub fn refresh<P>(&self, fetcher: &dyn TableFetcher, parse: P) -> Result<Arc<T>>
    where
        P: FnOnce(&[TableGrid]) -> Result<T>,
    {
        self.snapshot.reload(|| load(&self.url, fetcher, parse))
    }
}

fn load<T, P>(url: &str, fetcher: &dyn TableFetcher, parse: P) -> Result<T>
where
    P: FnOnce(&[TableGrid]) -> Result<T>,
{
    logd!(url, "loading page");
    let tables = fetcher.fetch_tables(url).inspect_err(|e| loge!("{e}"))?;
    parse(&tables).inspect_err(|e| loge!(url, "{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YowebError;
    use std::cell::Cell;

    #[test]
    fn get_or_load_runs_loader_once() {
        let snap = Snapshot::new();
        let calls = Cell::new(0);
        for _ in 0..5 {
            let v = snap.get_or_load(|| { calls.set(calls.get() + 1); Ok(7) }).unwrap();
            assert_eq!(*v, 7);
        }
        assert_eq!(calls.get(), 1);
        assert!(snap.is_loaded());
    }

    #[test]
    fn reload_replaces_and_failure_keeps_old_value() {
        let snap = Snapshot::new();
        snap.get_or_load(|| Ok(s!("first"))).unwrap();
        snap.reload(|| Ok(s!("second"))).unwrap();
        assert_eq!(snap.get().as_deref().map(String::as_str), Some("second"));

        let err = snap.reload(|| Err(YowebError::parse("test", "boom"))).unwrap_err();
        assert!(err.is_parse());
        assert_eq!(snap.get().as_deref().map(String::as_str), Some("second"));
    }

    #[test]
    fn failed_first_load_stays_empty() {
        let snap: Snapshot<u8> = Snapshot::new();
        assert!(snap.get_or_load(|| Err(YowebError::Config(s!("x")))).is_err());
        assert!(!snap.is_loaded());
        assert_eq!(*snap.get_or_load(|| Ok(1)).unwrap(), 1);
    }
}
