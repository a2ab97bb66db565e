use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event types related to the lifecycle of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallEventType {
    /// A new inbound call entered the platform.
    #[serde(rename = "call.new")]
    New,
    /// The call is waiting in a queue for an agent.
    #[serde(rename = "call.waiting")]
    Waiting,
    /// An agent is connected and the call is in progress.
    #[serde(rename = "call.ongoing")]
    Ongoing,
    /// The call ended and the agent entered wrap-up.
    #[serde(rename = "call.finished")]
    Finished,
    /// The caller hung up while still waiting in the queue.
    #[serde(rename = "call.queue-abandon")]
    QueueAbandon,
    /// The caller provided data through an input gatherer (e.g. NPS).
    #[serde(rename = "call.data-provided")]
    DataProvided,
}

impl CallEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallEventType::New => "call.new",
            CallEventType::Waiting => "call.waiting",
            CallEventType::Ongoing => "call.ongoing",
            CallEventType::Finished => "call.finished",
            CallEventType::QueueAbandon => "call.queue-abandon",
            CallEventType::DataProvided => "call.data-provided",
        }
    }
}

impl std::fmt::Display for CallEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Teravoz `call.*` event.
///
/// `call_id` is the provider call SID carried in the task attributes and
/// is the key consumers use to correlate the whole call lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallEvent {
    #[serde(rename = "type")]
    pub event_type: CallEventType,

    pub call_id: String,

    /// "inbound" or "outbound", as reported by the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,

    /// The platform number the caller dialed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub our_number: Option<String>,

    /// The caller's number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub their_number: Option<String>,

    /// Queue the call is waiting in (only on `call.waiting`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// NPS grade digits; duplicated in `data` for consumers that read
    /// the generic field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nps: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
}

impl CallEvent {
    /// Create a call event with the required fields; optionals start empty.
    pub fn new(event_type: CallEventType, call_id: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            event_type,
            call_id,
            direction: None,
            our_number: None,
            their_number: None,
            queue: None,
            code: None,
            nps: None,
            data: None,
            timestamp,
            sid: None,
        }
    }
}
