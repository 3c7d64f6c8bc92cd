//! gaugekit core: gauge value model, wire type classification, metric key
//! composition, and the shared error type.
//!
//! This crate carries no runtime or synchronization dependencies; the store,
//! function registry and flush path live in `gaugekit-client`.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. Invalid input is
//! surfaced as `GaugeError`/`Result`, never as a process abort.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod classify;
pub mod error;
pub mod tags;
pub mod value;

pub use classify::{classify, WireType};
pub use error::{ErrorCode, GaugeError, Result};
pub use tags::{metric_name_with_stream_tags, StreamTags, Tag};
pub use value::{Combine, GaugeValue, NumericKind};
