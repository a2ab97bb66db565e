use serde::{Deserialize, Serialize};

use crate::time::TimestampMs;

/// Custom dialer callback types.
///
/// These are not native provider events: the dialer subsystem posts
/// them to its own callback endpoint, which is why they carry no
/// provider event SID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomDialerEventType {
    #[serde(rename = "custom.dialer.attempt")]
    Attempt,
    #[serde(rename = "custom.dialer.success")]
    Success,
    #[serde(rename = "custom.dialer.failure")]
    Failure,
    #[serde(rename = "custom.dialer.expired")]
    Expired,
    #[serde(rename = "custom.dialer.exceeded")]
    Exceeded,
}

impl CustomDialerEventType {
    /// Resolve a raw type tag; `None` for tags outside the vocabulary.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "custom.dialer.attempt" => Some(CustomDialerEventType::Attempt),
            "custom.dialer.success" => Some(CustomDialerEventType::Success),
            "custom.dialer.failure" => Some(CustomDialerEventType::Failure),
            "custom.dialer.expired" => Some(CustomDialerEventType::Expired),
            "custom.dialer.exceeded" => Some(CustomDialerEventType::Exceeded),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomDialerEventType::Attempt => "custom.dialer.attempt",
            CustomDialerEventType::Success => "custom.dialer.success",
            CustomDialerEventType::Failure => "custom.dialer.failure",
            CustomDialerEventType::Expired => "custom.dialer.expired",
            CustomDialerEventType::Exceeded => "custom.dialer.exceeded",
        }
    }
}

/// A callback posted by the outbound-dialer subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomDialerEvent {
    #[serde(rename = "EventType", default)]
    pub event_type: String,

    /// The dialed number.
    #[serde(rename = "To", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(rename = "CallSid", skip_serializing_if = "Option::is_none")]
    pub call_sid: Option<String>,

    /// Raw provider AMD classification (e.g. `machine_start`).
    #[serde(rename = "AmdStatus", skip_serializing_if = "Option::is_none")]
    pub amd_status: Option<String>,

    /// JSON-encoded string; see [`crate::contracts::TaskAttributes`].
    #[serde(rename = "TaskAttributes", skip_serializing_if = "Option::is_none")]
    pub task_attributes: Option<String>,

    #[serde(rename = "TimestampMs", skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<TimestampMs>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_dialer_callback() {
        let json = r#"{
            "EventType": "custom.dialer.success",
            "To": "+5511933333333",
            "CallSid": "CA999",
            "AmdStatus": "human",
            "TimestampMs": 1700000000000
        }"#;

        let event: CustomDialerEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, "custom.dialer.success");
        assert_eq!(event.to.as_deref(), Some("+5511933333333"));
        assert_eq!(event.amd_status.as_deref(), Some("human"));
    }

    #[test]
    fn test_from_tag_matches_as_str() {
        let all = [
            CustomDialerEventType::Attempt,
            CustomDialerEventType::Success,
            CustomDialerEventType::Failure,
            CustomDialerEventType::Expired,
            CustomDialerEventType::Exceeded,
        ];

        for event_type in all {
            assert_eq!(
                CustomDialerEventType::from_tag(event_type.as_str()),
                Some(event_type)
            );
        }
        assert_eq!(CustomDialerEventType::from_tag("custom.dialer.retry"), None);
    }
}
