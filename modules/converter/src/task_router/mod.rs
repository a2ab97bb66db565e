//! TaskRouter event family: registry and per-domain handlers.
//!
//! The registry resolves raw webhook type tags through the closed
//! [`TaskRouterEventType`] vocabulary, so every provider type is either
//! wired to a handler or explicitly left without a conversion.

pub mod reservation;
pub mod task;
pub mod task_queue;
pub mod worker;

use teravoz_contracts::TeravozEvent;

use crate::contracts::{TaskRouterEvent, TaskRouterEventType};
use crate::dispatch::{convert, Handler};
use crate::error::ConvertResult;

/// Resolve a TaskRouter type tag to its handler.
pub fn registry(event_type: &str) -> Option<Handler<TaskRouterEvent>> {
    match TaskRouterEventType::from_tag(event_type)? {
        TaskRouterEventType::TaskCreated => Some(task::created),
        TaskRouterEventType::TaskCanceled => Some(task::canceled),
        TaskRouterEventType::TaskWrapup => Some(task::wrapup),
        TaskRouterEventType::TaskQueueEntered => Some(task_queue::entered),
        TaskRouterEventType::ReservationCreated => Some(reservation::created),
        TaskRouterEventType::ReservationAccepted => Some(reservation::accepted),
        TaskRouterEventType::ReservationRejected => Some(reservation::rejected),
        TaskRouterEventType::WorkerActivityUpdate => Some(worker::activity_update),
        // Provider types with no Teravoz counterpart.
        TaskRouterEventType::TaskUpdated
        | TaskRouterEventType::TaskCompleted
        | TaskRouterEventType::TaskDeleted
        | TaskRouterEventType::TaskSystemDeleted
        | TaskRouterEventType::ReservationTimeout
        | TaskRouterEventType::ReservationCanceled
        | TaskRouterEventType::ReservationRescinded
        | TaskRouterEventType::ReservationCompleted
        | TaskRouterEventType::TaskQueueCreated
        | TaskRouterEventType::TaskQueueDeleted
        | TaskRouterEventType::TaskQueueTimeout
        | TaskRouterEventType::TaskQueueMoved
        | TaskRouterEventType::WorkflowTargetMatched
        | TaskRouterEventType::WorkflowEntered
        | TaskRouterEventType::WorkflowTimeout
        | TaskRouterEventType::WorkflowSkipped
        | TaskRouterEventType::WorkerCreated
        | TaskRouterEventType::WorkerAttributesUpdate
        | TaskRouterEventType::WorkerCapacityUpdate
        | TaskRouterEventType::WorkerChannelAvailabilityUpdate
        | TaskRouterEventType::WorkerDeleted => None,
    }
}

/// Convert one TaskRouter webhook event into zero or more Teravoz events.
pub fn convert_event(event: &TaskRouterEvent) -> ConvertResult<Vec<TeravozEvent>> {
    convert(registry, &event.event_type, event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_provider_types_convert_to_nothing() {
        for tag in [
            "task.completed",
            "reservation.timeout",
            "workflow.entered",
            "worker.capacity.update",
        ] {
            let event = TaskRouterEvent {
                event_type: tag.to_string(),
                ..Default::default()
            };
            assert!(convert_event(&event).unwrap().is_empty(), "tag: {tag}");
        }
    }

    #[test]
    fn test_unknown_tag_converts_to_nothing() {
        let event = TaskRouterEvent {
            event_type: "task.invented".to_string(),
            ..Default::default()
        };
        assert!(convert_event(&event).unwrap().is_empty());
    }

    #[test]
    fn test_absent_tag_converts_to_nothing() {
        let event = TaskRouterEvent::default();
        assert!(convert_event(&event).unwrap().is_empty());
    }
}
