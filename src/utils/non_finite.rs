//! Serde helpers for `f64` values that may be infinite or NaN.
//!
//! JSON has no literal for them and `serde_json` writes `null`. These helpers
//! write `"inf"`, `"-inf"` or `"NaN"` instead and accept the same strings
//! (any case, `infinity` too) when reading. Finite values stay plain numbers.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

pub const INF: &str = "inf";
pub const NEG_INF: &str = "-inf";
pub const NAN: &str = "NaN";

struct Ieee(f64);

impl Serialize for Ieee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.is_finite() {
            serializer.serialize_f64(value)
        } else if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if value > 0.0 {
            serializer.serialize_str(INF)
        } else {
            serializer.serialize_str(NEG_INF)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Ieee {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(Ieee(value)),
            Repr::Text(text) => parse_non_finite(&text).map(Ieee).ok_or_else(|| {
                de::Error::custom(format!(
                    "expected a number, \"{}\", \"{}\" or \"{}\", got \"{}\"",
                    INF, NEG_INF, NAN, text
                ))
            }),
        }
    }
}

fn parse_non_finite(text: &str) -> Option<f64> {
    match text.trim().to_ascii_lowercase().as_str() {
        "inf" | "+inf" | "infinity" | "+infinity" => Some(f64::INFINITY),
        "-inf" | "-infinity" => Some(f64::NEG_INFINITY),
        "nan" => Some(f64::NAN),
        _ => None,
    }
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    Ieee(*value).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ieee::deserialize(deserializer).map(|v| v.0)
}

/// Same encoding, for a list of values.
pub mod seq {
    use super::Ieee;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|v| Ieee(*v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let values = Vec::<Ieee>::deserialize(deserializer)?;
        Ok(values.into_iter().map(|v| v.0).collect())
    }
}
