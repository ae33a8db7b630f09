//! serde helpers implementing the proto3 JSON mapping for the message types.

use serde::de::DeserializeOwned;
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

/// Numeric fields. proto3 JSON writes 64-bit integers as strings and accepts
/// numeric strings for every scalar, so both forms decode. An empty string
/// (a normalized `null`) yields the default value.
pub(crate) fn de_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + FromStr + Default,
    T::Err: Display,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    match v {
        None => Ok(T::default()),
        Some(Value::Number(n)) => T::deserialize(Value::Number(n)).map_err(de::Error::custom),
        Some(Value::String(s)) => {
            if s.trim().is_empty() {
                Ok(T::default())
            } else {
                s.trim().parse::<T>().map_err(|e| {
                    de::Error::custom(format!("could not parse number from string {s:?}: {e}"))
                })
            }
        }
        Some(other) => Err(de::Error::custom(format!(
            "expected number or string, got: {other}"
        ))),
    }
}

/// Optional sub-message. A normalized `null` arrives as `""` and means "not set".
pub(crate) fn de_opt_message<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    match v {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(other) => T::deserialize(other).map(Some).map_err(de::Error::custom),
    }
}

/// Enum field stored as `i32`. Accepts the full constant name or the numeric value;
/// anything else (including the upstream bare labels) is rejected.
pub(crate) fn de_enum<'de, D, E, F>(deserializer: D, from_str_name: F) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
    E: Into<i32>,
    F: Fn(&str) -> Option<E>,
{
    let v = Value::deserialize(deserializer)?;
    match v {
        Value::String(s) => from_str_name(&s)
            .map(Into::into)
            .ok_or_else(|| de::Error::custom(format!("unknown enum value: {s:?}"))),
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| de::Error::custom(format!("enum number out of range: {n}"))),
        other => Err(de::Error::custom(format!(
            "expected enum name or number, got: {other}"
        ))),
    }
}
