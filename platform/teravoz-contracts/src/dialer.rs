use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event types related to outbound-dialer attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialerEventType {
    /// The dialer placed a call.
    #[serde(rename = "dialer.attempt")]
    Attempt,
    /// The call was answered and is ready to be bridged to an agent.
    #[serde(rename = "dialer.success")]
    Success,
    /// The call was not answered by a human.
    #[serde(rename = "dialer.failure")]
    Failure,
    /// The dialer task reached its TTL before completing.
    #[serde(rename = "dialer.expired")]
    Expired,
    /// The dialer task exhausted its configured retries.
    #[serde(rename = "dialer.exceeded")]
    Exceeded,
}

impl DialerEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialerEventType::Attempt => "dialer.attempt",
            DialerEventType::Success => "dialer.success",
            DialerEventType::Failure => "dialer.failure",
            DialerEventType::Expired => "dialer.expired",
            DialerEventType::Exceeded => "dialer.exceeded",
        }
    }
}

impl std::fmt::Display for DialerEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized Answering-Machine-Detection result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmdStatus {
    Human,
    Machine,
    Notsure,
}

impl AmdStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmdStatus::Human => "human",
            AmdStatus::Machine => "machine",
            AmdStatus::Notsure => "notsure",
        }
    }
}

impl std::fmt::Display for AmdStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Teravoz `dialer.*` event.
///
/// Dialer callbacks are custom provider events triggered by the dialer
/// subsystem itself, so there is no originating event SID to carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialerEvent {
    #[serde(rename = "type")]
    pub event_type: DialerEventType,

    /// The dialed number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,

    /// AMD classification on `dialer.success`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amd_status: Option<AmdStatus>,

    /// Failure reason on `dialer.failure`, derived from the AMD result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<AmdStatus>,

    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
}

impl DialerEvent {
    /// Create a dialer event with the required fields; optionals start empty.
    pub fn new(event_type: DialerEventType, timestamp: DateTime<Utc>) -> Self {
        Self {
            event_type,
            number: None,
            code: None,
            call_id: None,
            amd_status: None,
            reason: None,
            timestamp,
            sid: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_wire_strings() {
        let types = vec![
            (DialerEventType::Attempt, "dialer.attempt"),
            (DialerEventType::Success, "dialer.success"),
            (DialerEventType::Failure, "dialer.failure"),
            (DialerEventType::Expired, "dialer.expired"),
            (DialerEventType::Exceeded, "dialer.exceeded"),
        ];

        for (event_type, expected) in types {
            assert_eq!(event_type.as_str(), expected);
            let serialized = serde_json::to_string(&event_type).unwrap();
            assert_eq!(serialized, format!("\"{}\"", expected));
        }
    }

    #[test]
    fn test_amd_status_is_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&AmdStatus::Human).unwrap(),
            "\"human\""
        );
        assert_eq!(
            serde_json::to_string(&AmdStatus::Machine).unwrap(),
            "\"machine\""
        );
        assert_eq!(
            serde_json::to_string(&AmdStatus::Notsure).unwrap(),
            "\"notsure\""
        );
    }
}
