//! Deserializers for counters and averages that the API may send as numbers,
//! numeric strings (SQL aggregates), or `null`.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Loose {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(value) => Ok(value as f64),
            Self::Float(value) => Ok(value),
            Self::Text(text) if text.trim().is_empty() => Ok(0.0),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("expected a number, got `{text}`"))),
        }
    }

    fn into_i64<E: de::Error>(self) -> Result<i64, E> {
        match self {
            Self::Int(value) => Ok(value),
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(value) => Ok(value.round() as i64),
            Self::Text(text) if text.trim().is_empty() => Ok(0),
            Self::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("expected an integer, got `{text}`"))),
        }
    }
}

/// Average-style value; `null` reads as zero.
pub(crate) fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Loose>::deserialize(deserializer)?.map_or(Ok(0.0), Loose::into_f64)
}

/// Counter; `null` reads as zero.
pub(crate) fn i64_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Loose>::deserialize(deserializer)?.map_or(Ok(0), Loose::into_i64)
}

/// Optional counter; `null` stays absent.
pub(crate) fn optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Loose>::deserialize(deserializer)?
        .map(Loose::into_i64)
        .transpose()
}
