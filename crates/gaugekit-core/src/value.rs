//! Gauge value model.
//!
//! A gauge holds one scalar of a fixed runtime kind. The eleven numeric kinds
//! combine with themselves under `add`; `Other` holds anything else a caller
//! wants reported verbatim and never combines.

use std::fmt;

use serde::{Serialize, Serializer};

/// Runtime kind of a [`GaugeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Other,
}

impl NumericKind {
    /// Whether values of this kind can be summed by `add`.
    pub fn is_supported(self) -> bool {
        !matches!(self, NumericKind::Other)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::Isize => "isize",
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::Usize => "usize",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
            NumericKind::Other => "other",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of a gauge.
#[derive(Debug, Clone, PartialEq)]
pub enum GaugeValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    /// Non-numeric payload. Stored as-is, reported as a string.
    Other(String),
}

/// Outcome of combining a stored value with an incoming one.
#[derive(Debug, Clone, PartialEq)]
pub enum Combine {
    /// Same supported kind; the wrapped (or IEEE) sum.
    Sum(GaugeValue),
    /// Incoming kind cannot be combined; drop it.
    Ignored,
    /// Kinds differ; the stored value must stay untouched.
    Mismatch,
}

impl GaugeValue {
    pub fn kind(&self) -> NumericKind {
        match self {
            GaugeValue::I8(_) => NumericKind::I8,
            GaugeValue::I16(_) => NumericKind::I16,
            GaugeValue::I32(_) => NumericKind::I32,
            GaugeValue::I64(_) => NumericKind::I64,
            GaugeValue::Isize(_) => NumericKind::Isize,
            GaugeValue::U8(_) => NumericKind::U8,
            GaugeValue::U16(_) => NumericKind::U16,
            GaugeValue::U32(_) => NumericKind::U32,
            GaugeValue::U64(_) => NumericKind::U64,
            GaugeValue::Usize(_) => NumericKind::Usize,
            GaugeValue::F32(_) => NumericKind::F32,
            GaugeValue::F64(_) => NumericKind::F64,
            GaugeValue::Other(_) => NumericKind::Other,
        }
    }

    /// Sum `self` and `incoming` if both share a supported kind.
    ///
    /// Integer sums wrap at the kind's native width.
    pub fn checked_combine(&self, incoming: &GaugeValue) -> Combine {
        use GaugeValue::*;

        if !incoming.kind().is_supported() {
            return Combine::Ignored;
        }
        let sum = match (self, incoming) {
            (I8(a), I8(b)) => I8(a.wrapping_add(*b)),
            (I16(a), I16(b)) => I16(a.wrapping_add(*b)),
            (I32(a), I32(b)) => I32(a.wrapping_add(*b)),
            (I64(a), I64(b)) => I64(a.wrapping_add(*b)),
            (Isize(a), Isize(b)) => Isize(a.wrapping_add(*b)),
            (U8(a), U8(b)) => U8(a.wrapping_add(*b)),
            (U16(a), U16(b)) => U16(a.wrapping_add(*b)),
            (U32(a), U32(b)) => U32(a.wrapping_add(*b)),
            (U64(a), U64(b)) => U64(a.wrapping_add(*b)),
            (Usize(a), Usize(b)) => Usize(a.wrapping_add(*b)),
            (F32(a), F32(b)) => F32(a + b),
            (F64(a), F64(b)) => F64(a + b),
            _ => return Combine::Mismatch,
        };
        Combine::Sum(sum)
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for GaugeValue {
                fn from(v: $ty) -> Self {
                    GaugeValue::$variant(v)
                }
            }
        )+
    };
}

impl_from_primitive! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => Other,
}

impl From<&str> for GaugeValue {
    fn from(v: &str) -> Self {
        GaugeValue::Other(v.to_string())
    }
}

impl fmt::Display for GaugeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaugeValue::I8(v) => write!(f, "{v}"),
            GaugeValue::I16(v) => write!(f, "{v}"),
            GaugeValue::I32(v) => write!(f, "{v}"),
            GaugeValue::I64(v) => write!(f, "{v}"),
            GaugeValue::Isize(v) => write!(f, "{v}"),
            GaugeValue::U8(v) => write!(f, "{v}"),
            GaugeValue::U16(v) => write!(f, "{v}"),
            GaugeValue::U32(v) => write!(f, "{v}"),
            GaugeValue::U64(v) => write!(f, "{v}"),
            GaugeValue::Usize(v) => write!(f, "{v}"),
            GaugeValue::F32(v) => write!(f, "{v}"),
            GaugeValue::F64(v) => write!(f, "{v}"),
            GaugeValue::Other(v) => f.write_str(v),
        }
    }
}

impl Serialize for GaugeValue {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            GaugeValue::I8(v) => s.serialize_i8(*v),
            GaugeValue::I16(v) => s.serialize_i16(*v),
            GaugeValue::I32(v) => s.serialize_i32(*v),
            GaugeValue::I64(v) => s.serialize_i64(*v),
            GaugeValue::Isize(v) => s.serialize_i64(*v as i64),
            GaugeValue::U8(v) => s.serialize_u8(*v),
            GaugeValue::U16(v) => s.serialize_u16(*v),
            GaugeValue::U32(v) => s.serialize_u32(*v),
            GaugeValue::U64(v) => s.serialize_u64(*v),
            GaugeValue::Usize(v) => s.serialize_u64(*v as u64),
            // JSON has no NaN/inf
            GaugeValue::F32(v) if !v.is_finite() => s.serialize_none(),
            GaugeValue::F64(v) if !v.is_finite() => s.serialize_none(),
            GaugeValue::F32(v) => s.serialize_f32(*v),
            GaugeValue::F64(v) => s.serialize_f64(*v),
            GaugeValue::Other(v) => s.serialize_str(v),
        }
    }
}
