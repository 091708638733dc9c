use std::fmt;
use ordered_float::OrderedFloat;

use crate::base::BaseType;

/// A numeric bound tagged with its width and signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(OrderedFloat<f32>),
    Float64(OrderedFloat<f64>),
}

impl Number {
    pub fn base_type(self) -> BaseType {
        match self {
            Number::Int8(_) => BaseType::Int8,
            Number::Int16(_) => BaseType::Int16,
            Number::Int32(_) => BaseType::Int32,
            Number::Int64(_) => BaseType::Int64,
            Number::Float32(_) => BaseType::Float32,
            Number::Float64(_) => BaseType::Float64,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int8(x) => x as f64,
            Number::Int16(x) => x as f64,
            Number::Int32(x) => x as f64,
            Number::Int64(x) => x as f64,
            Number::Float32(x) => x.0 as f64,
            Number::Float64(x) => x.0,
        }
    }
}

impl From<i8> for Number {
    fn from(x: i8) -> Self {
        Number::Int8(x)
    }
}

impl From<i16> for Number {
    fn from(x: i16) -> Self {
        Number::Int16(x)
    }
}

impl From<i32> for Number {
    fn from(x: i32) -> Self {
        Number::Int32(x)
    }
}

impl From<i64> for Number {
    fn from(x: i64) -> Self {
        Number::Int64(x)
    }
}

impl From<f32> for Number {
    fn from(x: f32) -> Self {
        Number::Float32(OrderedFloat(x))
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float64(OrderedFloat(x))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int8(x) => write!(f, "{x}"),
            Number::Int16(x) => write!(f, "{x}"),
            Number::Int32(x) => write!(f, "{x}"),
            Number::Int64(x) => write!(f, "{x}"),
            Number::Float32(x) => write!(f, "{}", x.0),
            Number::Float64(x) => write!(f, "{}", x.0),
        }
    }
}
