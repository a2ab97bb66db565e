use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event types related to agent ("actor") state and call participation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentEventType {
    /// A call is being offered to the agent.
    #[serde(rename = "actor.ringing")]
    Ringing,
    /// The agent accepted the offer and joined the call.
    #[serde(rename = "actor.entered")]
    Entered,
    /// The agent left the call (wrap-up started).
    #[serde(rename = "actor.left")]
    Left,
    /// The agent declined the offer or let it ring out.
    #[serde(rename = "actor.noanswer")]
    NoAnswer,
    #[serde(rename = "actor.logged-in")]
    LoggedIn,
    #[serde(rename = "actor.logged-out")]
    LoggedOut,
    #[serde(rename = "actor.paused")]
    Paused,
    #[serde(rename = "actor.unpaused")]
    Unpaused,
}

impl AgentEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentEventType::Ringing => "actor.ringing",
            AgentEventType::Entered => "actor.entered",
            AgentEventType::Left => "actor.left",
            AgentEventType::NoAnswer => "actor.noanswer",
            AgentEventType::LoggedIn => "actor.logged-in",
            AgentEventType::LoggedOut => "actor.logged-out",
            AgentEventType::Paused => "actor.paused",
            AgentEventType::Unpaused => "actor.unpaused",
        }
    }
}

impl std::fmt::Display for AgentEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Teravoz `actor.*` event.
///
/// `number` is the agent's contact address, which usually is not a phone
/// number but a client URI like `client:agentname`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentEvent {
    #[serde(rename = "type")]
    pub event_type: AgentEventType,

    /// Worker display name; empty when the provider omits it.
    pub actor: String,

    pub number: String,

    /// Queue this event refers to. Activity events are fanned out once
    /// per queue the worker belongs to, varying only in this field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Seconds the offer rang before being rejected; 0 when unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ringtime: Option<i64>,

    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
}

impl AgentEvent {
    /// Create an agent event with the required fields; optionals start empty.
    pub fn new(
        event_type: AgentEventType,
        actor: String,
        number: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            event_type,
            actor,
            number,
            queue: None,
            call_id: None,
            code: None,
            ringtime: None,
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
            (AgentEventType::Ringing, "actor.ringing"),
            (AgentEventType::Entered, "actor.entered"),
            (AgentEventType::Left, "actor.left"),
            (AgentEventType::NoAnswer, "actor.noanswer"),
            (AgentEventType::LoggedIn, "actor.logged-in"),
            (AgentEventType::LoggedOut, "actor.logged-out"),
            (AgentEventType::Paused, "actor.paused"),
            (AgentEventType::Unpaused, "actor.unpaused"),
        ];

        for (event_type, expected) in types {
            assert_eq!(event_type.as_str(), expected);
            let serialized = serde_json::to_string(&event_type).unwrap();
            assert_eq!(serialized, format!("\"{}\"", expected));
        }
    }

    #[test]
    fn test_ringtime_serializes_as_number() {
        let mut event = AgentEvent::new(
            AgentEventType::NoAnswer,
            "alice".to_string(),
            "client:alice".to_string(),
            chrono::Utc::now(),
        );
        event.ringtime = Some(12);

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["ringtime"], serde_json::json!(12));
    }
}
