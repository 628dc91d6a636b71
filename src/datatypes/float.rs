use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;
use thiserror::Error;

use crate::metrics;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScalarError {
    #[error("{token:?} is not a finite number")]
    NotANumber {
        token: String,
        #[source]
        source: Option<ParseFloatError>,
    },
    #[error("malformed data: {token:?} does not hold a number")]
    Malformed { token: String },
}

/// Floating point value the API sends either bare (`42.5`) or quoted (`"42.5"`).
/// Always encoded back out as a bare number.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Float64(pub f64);

impl Float64 {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Decodes a raw JSON token: a bare numeral first, then a quoted one.
    pub fn from_json_token(token: &str) -> Result<Self, ScalarError> {
        let token = token.trim();
        // NaN and the infinities parse but have no JSON literal
        let bare_err = match token.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(Self(v)),
            Ok(_) => None,
            Err(e) => Some(e),
        };

        let interior = match token.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
            Some(inner) => inner,
            None => {
                metrics::inc_malformed_scalars();
                return Err(ScalarError::NotANumber {
                    token: token.to_string(),
                    source: bare_err,
                });
            }
        };

        match interior.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Self(v)),
            _ => {
                metrics::inc_malformed_scalars();
                Err(ScalarError::Malformed {
                    token: token.to_string(),
                })
            }
        }
    }
}

impl From<f64> for Float64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Float64> for f64 {
    fn from(value: Float64) -> Self {
        value.0
    }
}

impl FromStr for Float64 {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_token(s)
    }
}

impl fmt::Display for Float64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Float64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

struct Float64Visitor;

impl Visitor<'_> for Float64Visitor {
    type Value = Float64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a string containing a number")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Float64(value))
    }

    // serde_json hands integral numbers to the integer visitors
    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Float64(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Float64(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        match value.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Float64(v)),
            _ => {
                metrics::inc_malformed_scalars();
                Err(E::custom(ScalarError::Malformed {
                    token: format!("\"{}\"", value),
                }))
            }
        }
    }
}

impl<'de> Deserialize<'de> for Float64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(Float64Visitor)
    }
}
