//! gaugekit client library entry.
//!
//! Wires the gauge store, the gauge function registry and the flush path
//! behind one `GaugeMetrics` handle. Consumed by the agent binary
//! (`main.rs`) and by integration tests.

pub mod config;
pub mod flush;
pub mod metrics;
pub mod registry;
pub mod store;

pub use flush::{FlushReport, Flusher, Payload, Sample};
pub use metrics::GaugeMetrics;
pub use registry::{GaugeFn, GaugeFuncRegistry};
pub use store::GaugeStore;
