//! Custom serde helpers for Paystack wire formats.
//!
//! Paystack is not consistent about scalar types in pagination metadata:
//! `perPage` arrives as `50` on one endpoint and `"50"` on another, and cursor
//! tokens are sometimes strings and sometimes bare numbers.

use serde::{Deserialize, Deserializer};

/// Deserializes an optional `u64` from a JSON number or a numeric string.
///
/// `null`, a missing field and the empty string all map to `None`.
pub mod opt_u64_lenient {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Int(n)) => Ok(Some(n)),
            Some(Raw::Float(f)) if f >= 0.0 && f.fract() == 0.0 => Ok(Some(f as u64)),
            Some(Raw::Float(f)) => Err(serde::de::Error::custom(format!(
                "expected a non-negative integer, got {}",
                f
            ))),
            Some(Raw::Str(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<u64>().map(Some).map_err(|_| {
                    serde::de::Error::custom(format!("Invalid numeric string: {}", s))
                })
            }
        }
    }
}

/// Deserializes an optional opaque token that may be a string or a number.
pub mod opt_string_lenient {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => None,
            Some(Raw::Str(s)) if s.is_empty() => None,
            Some(Raw::Str(s)) => Some(s),
            Some(Raw::Num(n)) => Some(n.to_string()),
        })
    }
}
