//! Flush path: turn the current gauges into a submission payload.
//!
//! Payload shape (one entry per metric key):
//! `{"cpu.idle": {"_type": "i", "_value": 42}}`
//!
//! The store and the registry are snapshotted one after the other, never
//! under both locks. Gauge functions run after the registry lock is released.
//! A function result is valid for the current flush only; it is not written
//! back into the store.

use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;

use gaugekit_core::{classify, GaugeError, GaugeValue, Result, WireType};

use crate::metrics::GaugeMetrics;

/// One serialized gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    #[serde(rename = "_type")]
    pub wire_type: WireType,
    #[serde(rename = "_value")]
    pub value: GaugeValue,
}

impl Sample {
    pub fn new(value: GaugeValue) -> Self {
        Self {
            wire_type: classify(&value),
            value,
        }
    }
}

pub type Payload = BTreeMap<String, Sample>;

/// Result of one collection pass.
#[derive(Debug, Clone, Default)]
pub struct FlushReport {
    pub payload: Payload,
    /// Entries taken from the store.
    pub gauges: usize,
    /// Gauge functions that returned a value.
    pub functions: usize,
    /// Gauge functions that panicked and were skipped.
    pub failed_functions: Vec<String>,
}

impl FlushReport {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.payload)
            .map_err(|e| GaugeError::Internal(format!("payload encode failed: {e}")))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.payload)
            .map_err(|e| GaugeError::Internal(format!("payload encode failed: {e}")))
    }
}

#[derive(Debug, Clone)]
pub struct Flusher {
    isolate_panics: bool,
}

impl Default for Flusher {
    fn default() -> Self {
        Self {
            isolate_panics: true,
        }
    }
}

impl Flusher {
    pub fn new(isolate_panics: bool) -> Self {
        Self { isolate_panics }
    }

    /// Snapshot gauges, evaluate gauge functions, and build the payload.
    ///
    /// A key present in both namespaces reports the function result.
    pub fn collect(&self, metrics: &GaugeMetrics) -> FlushReport {
        let mut report = FlushReport::default();

        for (key, value) in metrics.store().snapshot() {
            report.payload.insert(key, Sample::new(value));
            report.gauges += 1;
        }

        for (key, f) in metrics.registry().snapshot() {
            let v = if self.isolate_panics {
                match catch_unwind(AssertUnwindSafe(|| f())) {
                    Ok(v) => v,
                    Err(_) => {
                        tracing::warn!(metric = %key, "gauge function panicked, skipped");
                        report.failed_functions.push(key);
                        continue;
                    }
                }
            } else {
                f()
            };
            report.payload.insert(key, Sample::new(GaugeValue::I64(v)));
            report.functions += 1;
        }

        report.failed_functions.sort();
        tracing::debug!(
            gauges = report.gauges,
            functions = report.functions,
            failed = report.failed_functions.len(),
            "gauges collected"
        );
        report
    }
}
