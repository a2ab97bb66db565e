use teravoz_contracts::{AgentEvent, AgentEventType, CallEvent, CallEventType, TeravozEvent};

use crate::contracts::{TaskAttributes, TaskRouterEvent, TaskRouterEventType, WorkerAttributes};
use crate::dispatch::ensure_event_type;
use crate::error::ConvertResult;
use crate::time::utc_from_millis;

/// `reservation.created` → `actor.ringing`.
///
/// A reservation offers the task to one worker: from the consumer's
/// point of view the call starts ringing on that agent's client.
pub fn created(event: &TaskRouterEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = TaskRouterEventType::ReservationCreated.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let attributes = TaskAttributes::parse(event.task_attributes.as_deref(), event_type)?;
    let worker = WorkerAttributes::parse(event.worker_attributes.as_deref(), event_type)?;
    let timestamp = utc_from_millis(event.timestamp_ms.as_ref(), event_type)?;

    let mut agent = AgentEvent::new(
        AgentEventType::Ringing,
        event.worker_name.clone().unwrap_or_default(),
        worker.require_contact_uri(event_type)?,
        timestamp,
    );
    agent.call_id = Some(attributes.require_call_sid(event_type)?);
    agent.queue = event.task_queue_sid.clone();
    agent.sid = event.sid.clone();

    Ok(vec![agent.into()])
}

/// `reservation.accepted` → `actor.entered`, `call.ongoing`.
///
/// The agent took the call. The agent-state event precedes the
/// call-state event; the consumer relies on that order.
pub fn accepted(event: &TaskRouterEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = TaskRouterEventType::ReservationAccepted.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let attributes = TaskAttributes::parse(event.task_attributes.as_deref(), event_type)?;
    let worker = WorkerAttributes::parse(event.worker_attributes.as_deref(), event_type)?;
    let timestamp = utc_from_millis(event.timestamp_ms.as_ref(), event_type)?;
    let call_id = attributes.require_call_sid(event_type)?;

    let mut agent = AgentEvent::new(
        AgentEventType::Entered,
        event.worker_name.clone().unwrap_or_default(),
        worker.require_contact_uri(event_type)?,
        timestamp,
    );
    agent.call_id = Some(call_id.clone());
    agent.queue = event.task_queue_sid.clone();
    agent.sid = event.sid.clone();

    let mut call = CallEvent::new(CallEventType::Ongoing, call_id, timestamp);
    call.direction = attributes.direction;
    call.our_number = attributes.called;
    call.their_number = attributes.from;
    call.sid = event.sid.clone();

    Ok(vec![agent.into(), call.into()])
}

/// `reservation.rejected` → `actor.noanswer`.
///
/// Covers both an explicit decline and letting the offer ring out.
/// `ringtime` comes from `TaskAge` and falls back to 0 when the field
/// is absent or not numeric.
pub fn rejected(event: &TaskRouterEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = TaskRouterEventType::ReservationRejected.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let attributes = TaskAttributes::parse(event.task_attributes.as_deref(), event_type)?;
    let worker = WorkerAttributes::parse(event.worker_attributes.as_deref(), event_type)?;
    let timestamp = utc_from_millis(event.timestamp_ms.as_ref(), event_type)?;

    let ringtime = event
        .task_age
        .as_deref()
        .and_then(|age| age.trim().parse().ok())
        .unwrap_or(0);

    let mut agent = AgentEvent::new(
        AgentEventType::NoAnswer,
        event.worker_name.clone().unwrap_or_default(),
        worker.require_contact_uri(event_type)?,
        timestamp,
    );
    agent.call_id = Some(attributes.require_call_sid(event_type)?);
    agent.queue = event.task_queue_sid.clone();
    agent.ringtime = Some(ringtime);
    agent.sid = event.sid.clone();

    Ok(vec![agent.into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::time::TimestampMs;

    fn base_event(event_type: &str) -> TaskRouterEvent {
        TaskRouterEvent {
            sid: Some("EV321".to_string()),
            event_type: event_type.to_string(),
            timestamp_ms: Some(TimestampMs::Number(1_700_000_000_000)),
            task_attributes: Some(
                r#"{
                    "call_sid": "CA123",
                    "direction": "inbound",
                    "called": "5511911111111",
                    "from": "5511922222222"
                }"#
                .to_string(),
            ),
            worker_attributes: Some(r#"{"contact_uri": "client:test"}"#.to_string()),
            worker_name: Some("test".to_string()),
            task_queue_sid: Some("TQ123".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_created_emits_actor_ringing() {
        let events = created(&base_event("reservation.created")).unwrap();
        assert_eq!(events.len(), 1);

        let TeravozEvent::Agent(agent) = &events[0] else {
            panic!("expected an agent event");
        };
        assert_eq!(agent.event_type, AgentEventType::Ringing);
        assert_eq!(agent.actor, "test");
        assert_eq!(agent.number, "client:test");
        assert_eq!(agent.queue.as_deref(), Some("TQ123"));
        assert_eq!(agent.call_id.as_deref(), Some("CA123"));
    }

    #[test]
    fn test_accepted_emits_actor_entered_then_call_ongoing() {
        let events = accepted(&base_event("reservation.accepted")).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), "actor.entered");
        assert_eq!(events[1].event_type(), "call.ongoing");

        let TeravozEvent::Agent(agent) = &events[0] else {
            panic!("expected an agent event");
        };
        assert_eq!(agent.number, "client:test");

        let TeravozEvent::Call(call) = &events[1] else {
            panic!("expected a call event");
        };
        assert_eq!(call.call_id, "CA123");
        assert_eq!(call.direction.as_deref(), Some("inbound"));
        assert_eq!(call.timestamp, agent.timestamp);
    }

    #[test]
    fn test_accepted_requires_worker_attributes() {
        let mut event = base_event("reservation.accepted");
        event.worker_attributes = None;
        assert!(matches!(
            accepted(&event).unwrap_err(),
            ConvertError::MissingField {
                field: "WorkerAttributes",
                ..
            }
        ));
    }

    #[test]
    fn test_rejected_parses_ringtime_from_task_age() {
        let mut event = base_event("reservation.rejected");
        event.task_age = Some("12".to_string());

        let events = rejected(&event).unwrap();
        let TeravozEvent::Agent(agent) = &events[0] else {
            panic!("expected an agent event");
        };
        assert_eq!(agent.event_type, AgentEventType::NoAnswer);
        assert_eq!(agent.ringtime, Some(12));
    }

    #[test]
    fn test_rejected_defaults_ringtime_to_zero() {
        let absent = rejected(&base_event("reservation.rejected")).unwrap();
        let TeravozEvent::Agent(agent) = &absent[0] else {
            panic!("expected an agent event");
        };
        assert_eq!(agent.ringtime, Some(0));

        let mut event = base_event("reservation.rejected");
        event.task_age = Some("not-a-number".to_string());
        let invalid = rejected(&event).unwrap();
        let TeravozEvent::Agent(agent) = &invalid[0] else {
            panic!("expected an agent event");
        };
        assert_eq!(agent.ringtime, Some(0));
    }

    #[test]
    fn test_handlers_reject_mismatched_event_types() {
        let event = base_event("reservation.accepted");
        assert!(created(&event).is_err());
        assert!(rejected(&event).is_err());
        assert!(accepted(&event).is_ok());
    }
}
