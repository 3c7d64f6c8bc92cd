//! Wire type classification for gauge values.
//!
//! The monitoring agent reads a single-character type next to every value.
//! The table below is a compatibility contract: `isize` is reported as the
//! default `n` while `usize` is reported as `I`. Keep it that way.

use serde::{Serialize, Serializer};

use crate::value::GaugeValue;

/// Wire type tag embedded in the submission payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    /// `i`: signed 32-bit (and narrower).
    Int32,
    /// `I`: unsigned 32-bit (and narrower, plus `usize`).
    Uint32,
    /// `l`: signed 64-bit.
    Int64,
    /// `L`: unsigned 64-bit.
    Uint64,
    /// `n`: default numeric.
    Double,
}

impl WireType {
    pub fn as_char(self) -> char {
        match self {
            WireType::Int32 => 'i',
            WireType::Uint32 => 'I',
            WireType::Int64 => 'l',
            WireType::Uint64 => 'L',
            WireType::Double => 'n',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WireType::Int32 => "i",
            WireType::Uint32 => "I",
            WireType::Int64 => "l",
            WireType::Uint64 => "L",
            WireType::Double => "n",
        }
    }
}

impl Serialize for WireType {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

/// Map a value to its wire type tag. Total; unknown kinds fall back to `n`.
pub fn classify(v: &GaugeValue) -> WireType {
    match v {
        GaugeValue::I8(_) | GaugeValue::I16(_) | GaugeValue::I32(_) => WireType::Int32,
        GaugeValue::I64(_) => WireType::Int64,
        GaugeValue::U8(_) | GaugeValue::U16(_) | GaugeValue::U32(_) | GaugeValue::Usize(_) => {
            WireType::Uint32
        }
        GaugeValue::U64(_) => WireType::Uint64,
        GaugeValue::Isize(_) | GaugeValue::F32(_) | GaugeValue::F64(_) | GaugeValue::Other(_) => {
            WireType::Double
        }
    }
}
