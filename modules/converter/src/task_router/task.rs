use teravoz_contracts::{AgentEvent, AgentEventType, CallEvent, CallEventType, TeravozEvent};

use crate::contracts::{TaskAttributes, TaskRouterEvent, TaskRouterEventType, WorkerAttributes};
use crate::dispatch::ensure_event_type;
use crate::error::ConvertResult;
use crate::time::utc_from_millis;

/// `task.created` → `call.new`.
///
/// A task is created the moment an inbound call enters the workspace,
/// so this marks the start of the call's lifecycle for the consumer.
pub fn created(event: &TaskRouterEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = TaskRouterEventType::TaskCreated.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let attributes = TaskAttributes::parse(event.task_attributes.as_deref(), event_type)?;
    let timestamp = utc_from_millis(event.timestamp_ms.as_ref(), event_type)?;

    let mut call = CallEvent::new(
        CallEventType::New,
        attributes.require_call_sid(event_type)?,
        timestamp,
    );
    call.direction = attributes.direction;
    call.our_number = attributes.called;
    call.their_number = attributes.from;
    call.sid = event.sid.clone();

    Ok(vec![call.into()])
}

/// `task.canceled` → `call.queue-abandon`.
///
/// The caller hung up before any agent took the task.
pub fn canceled(event: &TaskRouterEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = TaskRouterEventType::TaskCanceled.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let attributes = TaskAttributes::parse(event.task_attributes.as_deref(), event_type)?;
    let timestamp = utc_from_millis(event.timestamp_ms.as_ref(), event_type)?;

    let mut call = CallEvent::new(
        CallEventType::QueueAbandon,
        attributes.require_call_sid(event_type)?,
        timestamp,
    );
    call.sid = event.sid.clone();

    Ok(vec![call.into()])
}

/// `task.wrapup` → `call.finished`, `actor.left`.
///
/// The call ended; the consumer gets the call closing event followed by
/// the agent leaving it. Both carry the same timestamp.
pub fn wrapup(event: &TaskRouterEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = TaskRouterEventType::TaskWrapup.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let attributes = TaskAttributes::parse(event.task_attributes.as_deref(), event_type)?;
    let worker = WorkerAttributes::parse(event.worker_attributes.as_deref(), event_type)?;
    let timestamp = utc_from_millis(event.timestamp_ms.as_ref(), event_type)?;
    let call_id = attributes.require_call_sid(event_type)?;

    let mut call = CallEvent::new(CallEventType::Finished, call_id.clone(), timestamp);
    call.direction = attributes.direction;
    call.our_number = attributes.called;
    call.their_number = attributes.from;
    call.sid = event.sid.clone();

    let mut agent = AgentEvent::new(
        AgentEventType::Left,
        event.worker_name.clone().unwrap_or_default(),
        worker.require_contact_uri(event_type)?,
        timestamp,
    );
    agent.call_id = Some(call_id);
    agent.queue = event.task_queue_sid.clone();
    agent.sid = event.sid.clone();

    Ok(vec![call.into(), agent.into()])
}
