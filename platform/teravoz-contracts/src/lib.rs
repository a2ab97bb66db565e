//! # Teravoz Event Contracts
//!
//! Canonical outbound event vocabulary for the conversion engine.
//!
//! Every event the engine emits is one of three families:
//!
//! - [`CallEvent`] — lifecycle of a call (`call.*`)
//! - [`AgentEvent`] — agent ("actor") state and participation (`actor.*`)
//! - [`DialerEvent`] — outbound-dialer attempt outcomes (`dialer.*`)
//!
//! These types match the JSON shape the downstream consumer expects
//! EXACTLY: dotted `type` strings, RFC 3339 UTC timestamps, and absent
//! optional fields omitted from the payload (never serialized as null).

mod agent;
mod call;
mod dialer;

pub use agent::{AgentEvent, AgentEventType};
pub use call::{CallEvent, CallEventType};
pub use dialer::{AmdStatus, DialerEvent, DialerEventType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Any event the conversion engine can emit.
///
/// Serializes transparently as the inner event; the `type` field of the
/// inner struct is what discriminates the families on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeravozEvent {
    Call(CallEvent),
    Agent(AgentEvent),
    Dialer(DialerEvent),
}

impl TeravozEvent {
    /// The dotted wire identifier of this event (e.g. `"call.new"`).
    pub fn event_type(&self) -> &'static str {
        match self {
            TeravozEvent::Call(event) => event.event_type.as_str(),
            TeravozEvent::Agent(event) => event.event_type.as_str(),
            TeravozEvent::Dialer(event) => event.event_type.as_str(),
        }
    }

    /// When the provider reported the originating event happened.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            TeravozEvent::Call(event) => event.timestamp,
            TeravozEvent::Agent(event) => event.timestamp,
            TeravozEvent::Dialer(event) => event.timestamp,
        }
    }

    /// Provider-assigned identifier of the originating event, when present.
    pub fn sid(&self) -> Option<&str> {
        match self {
            TeravozEvent::Call(event) => event.sid.as_deref(),
            TeravozEvent::Agent(event) => event.sid.as_deref(),
            TeravozEvent::Dialer(event) => event.sid.as_deref(),
        }
    }
}

impl From<CallEvent> for TeravozEvent {
    fn from(event: CallEvent) -> Self {
        TeravozEvent::Call(event)
    }
}

impl From<AgentEvent> for TeravozEvent {
    fn from(event: AgentEvent) -> Self {
        TeravozEvent::Agent(event)
    }
}

impl From<DialerEvent> for TeravozEvent {
    fn from(event: DialerEvent) -> Self {
        TeravozEvent::Dialer(event)
    }
}
