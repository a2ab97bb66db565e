use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};

/// Provider timestamp in epoch milliseconds.
///
/// The webhook sender is inconsistent about the JSON type of this
/// field, so both a number and a string of digits are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampMs {
    Number(i64),
    Text(String),
}

impl TimestampMs {
    fn as_millis(&self) -> ConvertResult<i64> {
        match self {
            TimestampMs::Number(millis) => Ok(*millis),
            TimestampMs::Text(raw) => {
                raw.trim()
                    .parse()
                    .map_err(|_| ConvertError::InvalidTimestamp { value: raw.clone() })
            }
        }
    }
}

/// Normalize a provider millisecond timestamp into a canonical UTC instant.
///
/// The timestamp is required by every handler that emits one, so an
/// absent value is a [`ConvertError::MissingField`] naming the event type.
pub fn utc_from_millis(
    raw: Option<&TimestampMs>,
    event_type: &'static str,
) -> ConvertResult<DateTime<Utc>> {
    let raw = raw.ok_or(ConvertError::MissingField {
        field: "TimestampMs",
        event_type,
    })?;
    let millis = raw.as_millis()?;

    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| ConvertError::InvalidTimestamp {
            value: millis.to_string(),
        })
}
