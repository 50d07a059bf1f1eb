// Sample value domain model
use serde::{Serialize, Serializer};
use std::ops::Add;

/// A single chart sample. `NoData` marks "no sample at this timestamp" and is
/// kept distinct from numeric zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    NoData,
}

impl Value {
    /// Parse a raw sample. Anything that is not entirely a finite number
    /// becomes `NoData`; a numeric prefix such as `12abc` is not accepted.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) => Self::from_f64(n),
            Err(_) => Value::NoData,
        }
    }

    pub fn from_f64(n: f64) -> Self {
        if n.is_finite() {
            Value::Number(n)
        } else {
            Value::NoData
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::NoData => None,
        }
    }
}

/// Stacking arithmetic: a missing sample counts as zero against a number, but
/// two missing samples stay missing so gaps survive in every layer.
impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a + b),
            (Value::Number(a), Value::NoData) | (Value::NoData, Value::Number(a)) => {
                Value::Number(a)
            }
            (Value::NoData, Value::NoData) => Value::NoData,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::NoData => serializer.serialize_none(),
        }
    }
}
