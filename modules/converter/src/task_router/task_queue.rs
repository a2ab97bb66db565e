use teravoz_contracts::{CallEvent, CallEventType, TeravozEvent};

use crate::contracts::{TaskAttributes, TaskRouterEvent, TaskRouterEventType};
use crate::dispatch::ensure_event_type;
use crate::error::ConvertResult;
use crate::time::utc_from_millis;

/// `task-queue.entered` → `call.waiting`.
///
/// The call was routed into a queue and is waiting for an agent; the
/// emitted event carries which queue in `queue`.
pub fn entered(event: &TaskRouterEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = TaskRouterEventType::TaskQueueEntered.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let attributes = TaskAttributes::parse(event.task_attributes.as_deref(), event_type)?;
    let timestamp = utc_from_millis(event.timestamp_ms.as_ref(), event_type)?;

    let mut call = CallEvent::new(
        CallEventType::Waiting,
        attributes.require_call_sid(event_type)?,
        timestamp,
    );
    call.direction = attributes.direction;
    call.our_number = attributes.called;
    call.their_number = attributes.from;
    call.queue = event.task_queue_sid.clone();
    call.sid = event.sid.clone();

    Ok(vec![call.into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::time::TimestampMs;

    fn base_event() -> TaskRouterEvent {
        TaskRouterEvent {
            sid: Some("EV77".to_string()),
            event_type: "task-queue.entered".to_string(),
            timestamp_ms: Some(TimestampMs::Text("1700000000000".to_string())),
            task_attributes: Some(
                r#"{"call_sid":"CA55","direction":"inbound","called":"100","from":"200"}"#
                    .to_string(),
            ),
            task_queue_sid: Some("TQ55".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_entered_emits_call_waiting_with_queue() {
        let events = entered(&base_event()).unwrap();
        assert_eq!(events.len(), 1);

        let TeravozEvent::Call(call) = &events[0] else {
            panic!("expected a call event");
        };
        assert_eq!(call.event_type, CallEventType::Waiting);
        assert_eq!(call.call_id, "CA55");
        assert_eq!(call.queue.as_deref(), Some("TQ55"));
        assert_eq!(call.our_number.as_deref(), Some("100"));
        assert_eq!(call.their_number.as_deref(), Some("200"));
    }

    #[test]
    fn test_entered_rejects_other_event_types() {
        let mut event = base_event();
        event.event_type = "task-queue.moved".to_string();
        assert!(matches!(
            entered(&event).unwrap_err(),
            ConvertError::EventTypeMismatch { .. }
        ));
    }

    #[test]
    fn test_entered_requires_task_attributes() {
        let mut event = base_event();
        event.task_attributes = None;
        assert!(matches!(
            entered(&event).unwrap_err(),
            ConvertError::MissingField {
                field: "TaskAttributes",
                ..
            }
        ));
    }
}
