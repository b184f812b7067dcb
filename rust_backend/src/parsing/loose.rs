//! Tolerant scalar deserializers for REST payloads.
//!
//! Backends are not consistent about numeric fields: the same `section` may
//! arrive as `2`, `2.0` or `"2"`. These helpers accept all three and reject
//! anything that is not an integral number.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Numeric value as it may appear on the wire
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl LooseNumber {
    fn into_i64<E: Error>(self) -> Result<Option<i64>, E> {
        match self {
            LooseNumber::Int(i) => Ok(Some(i)),
            LooseNumber::Float(f) => float_to_i64(f).map(Some),
            LooseNumber::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                match trimmed.parse::<i64>() {
                    Ok(i) => Ok(Some(i)),
                    Err(_) => trimmed
                        .parse::<f64>()
                        .map_err(|_| E::custom(format!("invalid integer '{}'", s)))
                        .and_then(float_to_i64)
                        .map(Some),
                }
            }
            LooseNumber::Null => Ok(None),
        }
    }
}

fn float_to_i64<E: Error>(f: f64) -> Result<i64, E> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Ok(f as i64)
    } else {
        Err(E::custom(format!("expected an integral number, found {}", f)))
    }
}

/// Integer that must be present; accepts numbers and numeric strings.
pub fn loose_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    LooseNumber::deserialize(deserializer)?
        .into_i64()?
        .ok_or_else(|| D::Error::custom("expected an integer, found null"))
}

/// Integer where `null` or an empty string means 0.
pub fn loose_i64_or_default<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(LooseNumber::deserialize(deserializer)?
        .into_i64()?
        .unwrap_or_default())
}

/// Non-negative count (minutes) where `null` means 0.
pub fn loose_u32_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = LooseNumber::deserialize(deserializer)?
        .into_i64()?
        .unwrap_or_default();
    u32::try_from(value)
        .map_err(|_| D::Error::custom(format!("expected a non-negative count, found {}", value)))
}

/// Float where `null` means 0.0; numeric strings are accepted.
pub fn loose_f64_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match LooseNumber::deserialize(deserializer)? {
        LooseNumber::Int(i) => Ok(i as f64),
        LooseNumber::Float(f) => Ok(f),
        LooseNumber::Text(s) if s.trim().is_empty() => Ok(0.0),
        LooseNumber::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid number '{}'", s))),
        LooseNumber::Null => Ok(0.0),
    }
}

/// Treat an explicit `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
