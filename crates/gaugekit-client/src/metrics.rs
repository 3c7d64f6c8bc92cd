//! Gauge entry points owned by one metrics client instance.
//!
//! `GaugeMetrics` pairs a [`GaugeStore`] with a [`GaugeFuncRegistry`]. The two
//! are independent namespaces: a key may live in both and neither side
//! touches the other. `*_with_tags` variants only compose the key first.

use std::sync::Arc;

use gaugekit_core::{metric_name_with_stream_tags, GaugeValue, Result, Tag};

use crate::registry::GaugeFuncRegistry;
use crate::store::GaugeStore;

#[derive(Clone, Debug, Default)]
pub struct GaugeMetrics {
    gauges: Arc<GaugeStore>,
    gauge_funcs: Arc<GaugeFuncRegistry>,
}

impl GaugeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &GaugeStore {
        &self.gauges
    }

    pub fn registry(&self) -> &GaugeFuncRegistry {
        &self.gauge_funcs
    }

    /// Alias for [`set_gauge`](Self::set_gauge).
    pub fn gauge(&self, metric: &str, val: impl Into<GaugeValue>) {
        self.set_gauge(metric, val);
    }

    /// Alias for [`set_gauge_with_tags`](Self::set_gauge_with_tags).
    pub fn gauge_with_tags(&self, metric: &str, tags: &[Tag], val: impl Into<GaugeValue>) {
        self.set_gauge_with_tags(metric, tags, val);
    }

    pub fn set_gauge(&self, metric: &str, val: impl Into<GaugeValue>) {
        self.gauges.set(metric, val);
    }

    pub fn set_gauge_with_tags(&self, metric: &str, tags: &[Tag], val: impl Into<GaugeValue>) {
        self.set_gauge(&metric_name_with_stream_tags(metric, tags), val);
    }

    /// Add to an existing gauge; see [`GaugeStore::add`] for the kind rules.
    pub fn add_gauge(&self, metric: &str, val: impl Into<GaugeValue>) -> Result<()> {
        self.gauges.add(metric, val).inspect_err(|e| {
            tracing::warn!(metric, error = %e, "gauge add rejected");
        })
    }

    pub fn add_gauge_with_tags(
        &self,
        metric: &str,
        tags: &[Tag],
        val: impl Into<GaugeValue>,
    ) -> Result<()> {
        self.add_gauge(&metric_name_with_stream_tags(metric, tags), val)
    }

    pub fn remove_gauge(&self, metric: &str) {
        self.gauges.remove(metric);
    }

    pub fn remove_gauge_with_tags(&self, metric: &str, tags: &[Tag]) {
        self.remove_gauge(&metric_name_with_stream_tags(metric, tags));
    }

    /// Current stored value. Meant for tests with automatic flushing off.
    pub fn get_gauge(&self, metric: &str) -> Result<GaugeValue> {
        self.gauges.get(metric)
    }

    /// Register a function evaluated at every flush interval.
    pub fn set_gauge_func<F>(&self, metric: &str, f: F)
    where
        F: Fn() -> i64 + Send + Sync + 'static,
    {
        self.gauge_funcs.register(metric, f);
    }

    pub fn set_gauge_func_with_tags<F>(&self, metric: &str, tags: &[Tag], f: F)
    where
        F: Fn() -> i64 + Send + Sync + 'static,
    {
        self.set_gauge_func(&metric_name_with_stream_tags(metric, tags), f);
    }

    pub fn remove_gauge_func(&self, metric: &str) {
        self.gauge_funcs.unregister(metric);
    }

    pub fn remove_gauge_func_with_tags(&self, metric: &str, tags: &[Tag]) {
        self.remove_gauge_func(&metric_name_with_stream_tags(metric, tags));
    }
}
