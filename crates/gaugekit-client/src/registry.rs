//! Gauge function registry: metric key -> callback evaluated at flush time.
//!
//! Guarded by its own mutex, never held together with the store's. The
//! registry does not call the functions; `snapshot` hands out clones so the
//! caller invokes them with no lock held.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Deferred gauge computation. Must be quick and non-blocking.
pub type GaugeFn = Arc<dyn Fn() -> i64 + Send + Sync>;

#[derive(Default)]
pub struct GaugeFuncRegistry {
    funcs: Mutex<HashMap<String, GaugeFn>>,
}

impl fmt::Debug for GaugeFuncRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<String> = self.lock().keys().cloned().collect();
        keys.sort();
        f.debug_struct("GaugeFuncRegistry").field("keys", &keys).finish()
    }
}

impl GaugeFuncRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, GaugeFn>> {
        self.funcs.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register `f` under `key`, replacing any previous function.
    pub fn register<F>(&self, key: &str, f: F)
    where
        F: Fn() -> i64 + Send + Sync + 'static,
    {
        self.register_arc(key, Arc::new(f));
    }

    pub fn register_arc(&self, key: &str, f: GaugeFn) {
        let replaced = self.lock().insert(key.to_string(), f).is_some();
        tracing::debug!(key, replaced, "gauge function registered");
    }

    /// Drop the function under `key`, if any.
    pub fn unregister(&self, key: &str) {
        if self.lock().remove(key).is_some() {
            tracing::debug!(key, "gauge function unregistered");
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    /// Clone out every key/function pair. Invoke them after this returns.
    pub fn snapshot(&self) -> Vec<(String, GaugeFn)> {
        self.lock()
            .iter()
            .map(|(k, f)| (k.clone(), Arc::clone(f)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
