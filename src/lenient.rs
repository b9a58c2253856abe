//! Permissive numeric slots.
//!
//! Integer and real slots accept a JSON number or a numeric string on decode
//! and are always encoded as JSON numbers. Reals given for an integer slot
//! are truncated. A NaN or infinite real has no JSON form and fails to encode.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

fn to_i64<E: serde::de::Error>(value: &Value) -> Result<i64, E> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| E::custom(format!("integer out of range: {}", n))),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .or_else(|_| s.parse::<f64>().map(|f| f as i64))
                .map_err(|_| E::custom(format!("invalid type: expected integer, got \"{}\"", s)))
        }
        other => Err(E::custom(format!(
            "invalid type: expected integer, got {}",
            other
        ))),
    }
}

fn to_f64<E: serde::de::Error>(value: &Value) -> Result<f64, E> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| E::custom(format!("real out of range: {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("invalid type: expected real, got \"{}\"", s))),
        other => Err(E::custom(format!("invalid type: expected real, got {}", other))),
    }
}

/// `Option<i64>` slots.
pub mod int_opt {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_i64(*v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            v => to_i64(&v).map(Some),
        }
    }
}

/// `Option<f64>` slots.
pub mod real_opt {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) if v.is_finite() => serializer.serialize_f64(*v),
            Some(_) => Err(serde::ser::Error::custom("non-finite real cannot be encoded as JSON")),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            v => to_f64(&v).map(Some),
        }
    }
}
