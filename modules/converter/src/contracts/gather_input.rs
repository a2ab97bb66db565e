use serde::{Deserialize, Serialize};

use crate::time::TimestampMs;

/// User-input gatherer callback types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserInputType {
    /// The caller graded the call on the post-call NPS gatherer.
    #[serde(rename = "custom.nps-provided")]
    NpsProvided,
}

impl UserInputType {
    /// Resolve a raw type tag; `None` for tags outside the vocabulary.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "custom.nps-provided" => Some(UserInputType::NpsProvided),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserInputType::NpsProvided => "custom.nps-provided",
        }
    }
}

/// A callback posted when the caller keys digits into an input gatherer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInputEvent {
    #[serde(rename = "InputType", default)]
    pub input_type: String,

    #[serde(rename = "CallSid", skip_serializing_if = "Option::is_none")]
    pub call_sid: Option<String>,

    /// The digits the caller keyed in.
    #[serde(rename = "Digits", skip_serializing_if = "Option::is_none")]
    pub digits: Option<String>,

    #[serde(rename = "TimestampMs", skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<TimestampMs>,
}
