use teravoz_contracts::{AgentEvent, AgentEventType, TeravozEvent};

use crate::contracts::{TaskRouterEvent, TaskRouterEventType, WorkerAttributes};
use crate::dispatch::ensure_event_type;
use crate::error::{ConvertError, ConvertResult};
use crate::time::utc_from_millis;

/// The worker activity states the transition table is defined over.
///
/// Activity names are operator-configurable on the provider side, so
/// matching is case-insensitive and anything outside this set is
/// treated as unrecognized rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerActivity {
    Available,
    Break,
    Unavailable,
    Offline,
}

impl WorkerActivity {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "available" => Some(WorkerActivity::Available),
            "break" => Some(WorkerActivity::Break),
            "unavailable" => Some(WorkerActivity::Unavailable),
            "offline" => Some(WorkerActivity::Offline),
            _ => None,
        }
    }
}

/// Decide which agent event (if any) a worker activity change produces.
///
/// The no-op check on the raw names runs first and short-circuits every
/// other rule, so a repeated state never emits, whatever the state is.
/// Entering `unavailable` or `offline` only logs the agent out when
/// they were actually ready (`available` or `break`); moving between
/// the two not-ready states is not a loggable transition.
pub fn activity_transition(previous: Option<&str>, next: &str) -> Option<AgentEventType> {
    if previous.is_some_and(|name| name.eq_ignore_ascii_case(next)) {
        return None;
    }

    let previous = previous.and_then(WorkerActivity::from_name);

    match WorkerActivity::from_name(next)? {
        WorkerActivity::Available => {
            if previous == Some(WorkerActivity::Break) {
                Some(AgentEventType::Unpaused)
            } else {
                Some(AgentEventType::LoggedIn)
            }
        }
        WorkerActivity::Unavailable | WorkerActivity::Offline => match previous {
            Some(WorkerActivity::Available) | Some(WorkerActivity::Break) => {
                Some(AgentEventType::LoggedOut)
            }
            _ => None,
        },
        WorkerActivity::Break => Some(AgentEventType::Paused),
    }
}

/// Replicate an agent event once per queue, varying only `queue`.
pub fn fan_out_by_queue(template: &AgentEvent, queues: &[String]) -> Vec<TeravozEvent> {
    queues
        .iter()
        .map(|queue| {
            let mut event = template.clone();
            event.queue = Some(queue.clone());
            event.into()
        })
        .collect()
}

/// `worker.activity.update` → `actor.{logged-in,logged-out,paused,unpaused}`,
/// fanned out once per queue the worker belongs to.
///
/// A worker with no queue membership emits nothing, whatever the
/// transition; that is deliberate suppression, logged as a warning.
pub fn activity_update(event: &TaskRouterEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = TaskRouterEventType::WorkerActivityUpdate.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let worker = WorkerAttributes::parse(event.worker_attributes.as_deref(), event_type)?;

    let activity_name =
        event
            .worker_activity_name
            .as_deref()
            .ok_or(ConvertError::MissingField {
                field: "WorkerActivityName",
                event_type,
            })?;

    let Some(emitted) = activity_transition(
        event.worker_previous_activity_name.as_deref(),
        activity_name,
    ) else {
        return Ok(Vec::new());
    };

    let contact_uri = worker.require_contact_uri(event_type)?;

    if worker.queues.is_empty() {
        tracing::warn!(
            worker = %contact_uri,
            "worker doesn't belong to any queue, suppressing activity events"
        );
        return Ok(Vec::new());
    }

    let mut template = AgentEvent::new(
        emitted,
        event.worker_name.clone().unwrap_or_default(),
        contact_uri,
        utc_from_millis(event.timestamp_ms.as_ref(), event_type)?,
    );
    template.sid = event.sid.clone();

    Ok(fan_out_by_queue(&template, &worker.queues))
}
