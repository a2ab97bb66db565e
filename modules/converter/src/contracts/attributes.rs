use serde::Deserialize;

use crate::error::{ConvertError, ConvertResult};

/// Task-scoped domain fields, carried as a JSON-encoded string in the
/// `TaskAttributes` webhook field.
///
/// Which fields must be present depends on the handler: `call_sid` is
/// required wherever a call event is derived, while dialer events only
/// ever read `code`. Unknown keys are tolerated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskAttributes {
    pub call_sid: Option<String>,
    pub direction: Option<String>,
    /// The platform number the caller dialed.
    pub called: Option<String>,
    /// The caller's number.
    pub from: Option<String>,
    pub code: Option<String>,
    /// Set on dialer-scheduled tasks; read by upstream filtering
    /// collaborators, not by any handler here.
    pub call_id: Option<String>,
    /// Marks heartbeat probe tasks; read by upstream filtering
    /// collaborators, not by any handler here.
    #[serde(default)]
    pub heartbeat: bool,
}

impl TaskAttributes {
    /// Parse the nested payload, failing when it is absent or malformed.
    pub fn parse(raw: Option<&str>, event_type: &'static str) -> ConvertResult<Self> {
        let raw = raw.ok_or(ConvertError::MissingField {
            field: "TaskAttributes",
            event_type,
        })?;

        serde_json::from_str(raw).map_err(|source| ConvertError::MalformedAttributes {
            field: "TaskAttributes",
            event_type,
            source,
        })
    }

    /// Parse the nested payload when present. Dialer callbacks may omit
    /// it entirely, in which case no fields can be derived from it.
    pub fn parse_optional(
        raw: Option<&str>,
        event_type: &'static str,
    ) -> ConvertResult<Option<Self>> {
        raw.map(|raw| {
            serde_json::from_str(raw).map_err(|source| ConvertError::MalformedAttributes {
                field: "TaskAttributes",
                event_type,
                source,
            })
        })
        .transpose()
    }

    /// The call SID, required by every handler that derives a call event.
    pub fn require_call_sid(&self, event_type: &'static str) -> ConvertResult<String> {
        self.call_sid
            .clone()
            .ok_or(ConvertError::MissingField {
                field: "TaskAttributes.call_sid",
                event_type,
            })
    }
}

/// Worker-scoped domain fields, carried as a JSON-encoded string in the
/// `WorkerAttributes` webhook field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkerAttributes {
    /// Contact address of the worker, usually a client URI such as
    /// `client:agentname` rather than a phone number.
    pub contact_uri: Option<String>,
    /// Queues the worker belongs to; activity events fan out once per
    /// entry.
    #[serde(default)]
    pub queues: Vec<String>,
    /// Marks synthetic workers (e.g. the dialer's); read by upstream
    /// filtering collaborators, not by any handler here.
    #[serde(default)]
    pub bot: bool,
}

impl WorkerAttributes {
    /// Parse the nested payload, failing when it is absent or malformed.
    pub fn parse(raw: Option<&str>, event_type: &'static str) -> ConvertResult<Self> {
        let raw = raw.ok_or(ConvertError::MissingField {
            field: "WorkerAttributes",
            event_type,
        })?;

        serde_json::from_str(raw).map_err(|source| ConvertError::MalformedAttributes {
            field: "WorkerAttributes",
            event_type,
            source,
        })
    }

    /// The worker contact URI, required by every handler that derives an
    /// agent event.
    pub fn require_contact_uri(&self, event_type: &'static str) -> ConvertResult<String> {
        self.contact_uri
            .clone()
            .ok_or(ConvertError::MissingField {
                field: "WorkerAttributes.contact_uri",
                event_type,
            })
    }
}
