//! Lenient deserializers for backend numbers and flags.
//!
//! The backend is loosely typed: integers sometimes arrive as floats or
//! numeric strings and flags as either `0/1` or booleans.

#[cfg(test)]
#[path = "serde_util_test.rs"]
mod serde_util_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float < i64::MAX as f64
            {
                return Some(float as i64);
            }
            None
        }
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_i64(&value).ok_or_else(|| D::Error::custom("expected integer-compatible value"))
}

pub(crate) fn opt_i64_lenient<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null => Ok(None),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        other => value_to_i64(other)
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected integer-compatible value or null")),
    }
}

pub(crate) fn flag_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Bool(flag) => Ok(*flag),
        other => value_to_i64(other)
            .map(|n| n != 0)
            .ok_or_else(|| D::Error::custom("expected boolean or 0/1")),
    }
}

/// Flags go back out as `1`/`0` so form values match the select options.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn flag_as_int<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*flag))
}
