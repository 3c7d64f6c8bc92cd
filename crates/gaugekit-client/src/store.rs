//! Gauge store: metric key -> current value.
//!
//! One mutex guards the whole map. Every operation, `add` included, runs as a
//! single critical section, so concurrent adds on one key never lose updates.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use gaugekit_core::{Combine, GaugeError, GaugeValue, Result};

#[derive(Debug, Default)]
pub struct GaugeStore {
    gauges: Mutex<HashMap<String, GaugeValue>>,
}

impl GaugeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, GaugeValue>> {
        // A panic while holding the lock cannot leave a half-written entry.
        self.gauges.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Store `value` under `key`, replacing any prior value and kind.
    pub fn set(&self, key: &str, value: impl Into<GaugeValue>) {
        self.lock().insert(key.to_string(), value.into());
    }

    /// Add `value` to the gauge under `key`.
    ///
    /// Absent key: same as [`set`](Self::set). Present key: the kinds must
    /// match, otherwise `KindMismatch` is returned and the stored value is
    /// kept. An incoming non-numeric value is dropped silently.
    pub fn add(&self, key: &str, value: impl Into<GaugeValue>) -> Result<()> {
        let value = value.into();
        let mut gauges = self.lock();

        let Some(current) = gauges.get_mut(key) else {
            gauges.insert(key.to_string(), value);
            return Ok(());
        };

        match current.checked_combine(&value) {
            Combine::Sum(sum) => {
                *current = sum;
                Ok(())
            }
            Combine::Ignored => {
                tracing::trace!(key, kind = %value.kind(), "unsupported gauge kind ignored on add");
                Ok(())
            }
            Combine::Mismatch => Err(GaugeError::KindMismatch {
                key: key.to_string(),
                stored: current.kind(),
                incoming: value.kind(),
            }),
        }
    }

    /// Remove `key`. Missing keys are ignored.
    pub fn remove(&self, key: &str) {
        self.lock().remove(key);
    }

    /// Current value for `key`; diagnostic use only.
    pub fn get(&self, key: &str) -> Result<GaugeValue> {
        self.lock()
            .get(key)
            .cloned()
            .ok_or_else(|| GaugeError::NotFound(key.to_string()))
    }

    /// Copy of every key/value pair, taken under one lock acquisition.
    pub fn snapshot(&self) -> Vec<(String, GaugeValue)> {
        self.lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
