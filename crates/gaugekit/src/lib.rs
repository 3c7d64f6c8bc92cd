//! Top-level facade crate for gaugekit.
//!
//! Re-exports the core types and the client library so users can depend on a single crate.

pub mod core {
    pub use gaugekit_core::*;
}

pub mod client {
    pub use gaugekit_client::*;
}

pub use gaugekit_client::{Flusher, GaugeMetrics};
pub use gaugekit_core::{classify, GaugeError, GaugeValue, Tag, WireType};
