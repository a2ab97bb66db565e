use serde::{Deserialize, Serialize};

use crate::time::TimestampMs;

/// The full TaskRouter event-type vocabulary.
///
/// The registry matches over this closed enumeration so that leaving a
/// provider type without a decision is a compile-time error; types with
/// no conversion are mapped to `None` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskRouterEventType {
    /* Task events */
    #[serde(rename = "task.created")]
    TaskCreated,
    #[serde(rename = "task.updated")]
    TaskUpdated,
    #[serde(rename = "task.canceled")]
    TaskCanceled,
    #[serde(rename = "task.wrapup")]
    TaskWrapup,
    #[serde(rename = "task.completed")]
    TaskCompleted,
    #[serde(rename = "task.deleted")]
    TaskDeleted,
    #[serde(rename = "task.system-deleted")]
    TaskSystemDeleted,
    /* Reservation events */
    #[serde(rename = "reservation.created")]
    ReservationCreated,
    #[serde(rename = "reservation.accepted")]
    ReservationAccepted,
    #[serde(rename = "reservation.rejected")]
    ReservationRejected,
    #[serde(rename = "reservation.timeout")]
    ReservationTimeout,
    #[serde(rename = "reservation.canceled")]
    ReservationCanceled,
    #[serde(rename = "reservation.rescinded")]
    ReservationRescinded,
    #[serde(rename = "reservation.completed")]
    ReservationCompleted,
    /* Task-queue events */
    #[serde(rename = "task-queue.created")]
    TaskQueueCreated,
    #[serde(rename = "task-queue.deleted")]
    TaskQueueDeleted,
    #[serde(rename = "task-queue.entered")]
    TaskQueueEntered,
    #[serde(rename = "task-queue.timeout")]
    TaskQueueTimeout,
    #[serde(rename = "task-queue.moved")]
    TaskQueueMoved,
    /* Workflow events */
    #[serde(rename = "workflow.target-matched")]
    WorkflowTargetMatched,
    #[serde(rename = "workflow.entered")]
    WorkflowEntered,
    #[serde(rename = "workflow.timeout")]
    WorkflowTimeout,
    #[serde(rename = "workflow.skipped")]
    WorkflowSkipped,
    /* Worker events */
    #[serde(rename = "worker.created")]
    WorkerCreated,
    #[serde(rename = "worker.activity.update")]
    WorkerActivityUpdate,
    #[serde(rename = "worker.attributes.update")]
    WorkerAttributesUpdate,
    #[serde(rename = "worker.capacity.update")]
    WorkerCapacityUpdate,
    #[serde(rename = "worker.channel.availability.update")]
    WorkerChannelAvailabilityUpdate,
    #[serde(rename = "worker.deleted")]
    WorkerDeleted,
}

impl TaskRouterEventType {
    /// Resolve a raw webhook type tag; `None` for tags outside the
    /// known vocabulary.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let event_type = match tag {
            "task.created" => TaskRouterEventType::TaskCreated,
            "task.updated" => TaskRouterEventType::TaskUpdated,
            "task.canceled" => TaskRouterEventType::TaskCanceled,
            "task.wrapup" => TaskRouterEventType::TaskWrapup,
            "task.completed" => TaskRouterEventType::TaskCompleted,
            "task.deleted" => TaskRouterEventType::TaskDeleted,
            "task.system-deleted" => TaskRouterEventType::TaskSystemDeleted,
            "reservation.created" => TaskRouterEventType::ReservationCreated,
            "reservation.accepted" => TaskRouterEventType::ReservationAccepted,
            "reservation.rejected" => TaskRouterEventType::ReservationRejected,
            "reservation.timeout" => TaskRouterEventType::ReservationTimeout,
            "reservation.canceled" => TaskRouterEventType::ReservationCanceled,
            "reservation.rescinded" => TaskRouterEventType::ReservationRescinded,
            "reservation.completed" => TaskRouterEventType::ReservationCompleted,
            "task-queue.created" => TaskRouterEventType::TaskQueueCreated,
            "task-queue.deleted" => TaskRouterEventType::TaskQueueDeleted,
            "task-queue.entered" => TaskRouterEventType::TaskQueueEntered,
            "task-queue.timeout" => TaskRouterEventType::TaskQueueTimeout,
            "task-queue.moved" => TaskRouterEventType::TaskQueueMoved,
            "workflow.target-matched" => TaskRouterEventType::WorkflowTargetMatched,
            "workflow.entered" => TaskRouterEventType::WorkflowEntered,
            "workflow.timeout" => TaskRouterEventType::WorkflowTimeout,
            "workflow.skipped" => TaskRouterEventType::WorkflowSkipped,
            "worker.created" => TaskRouterEventType::WorkerCreated,
            "worker.activity.update" => TaskRouterEventType::WorkerActivityUpdate,
            "worker.attributes.update" => TaskRouterEventType::WorkerAttributesUpdate,
            "worker.capacity.update" => TaskRouterEventType::WorkerCapacityUpdate,
            "worker.channel.availability.update" => {
                TaskRouterEventType::WorkerChannelAvailabilityUpdate
            }
            "worker.deleted" => TaskRouterEventType::WorkerDeleted,
            _ => return None,
        };
        Some(event_type)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskRouterEventType::TaskCreated => "task.created",
            TaskRouterEventType::TaskUpdated => "task.updated",
            TaskRouterEventType::TaskCanceled => "task.canceled",
            TaskRouterEventType::TaskWrapup => "task.wrapup",
            TaskRouterEventType::TaskCompleted => "task.completed",
            TaskRouterEventType::TaskDeleted => "task.deleted",
            TaskRouterEventType::TaskSystemDeleted => "task.system-deleted",
            TaskRouterEventType::ReservationCreated => "reservation.created",
            TaskRouterEventType::ReservationAccepted => "reservation.accepted",
            TaskRouterEventType::ReservationRejected => "reservation.rejected",
            TaskRouterEventType::ReservationTimeout => "reservation.timeout",
            TaskRouterEventType::ReservationCanceled => "reservation.canceled",
            TaskRouterEventType::ReservationRescinded => "reservation.rescinded",
            TaskRouterEventType::ReservationCompleted => "reservation.completed",
            TaskRouterEventType::TaskQueueCreated => "task-queue.created",
            TaskRouterEventType::TaskQueueDeleted => "task-queue.deleted",
            TaskRouterEventType::TaskQueueEntered => "task-queue.entered",
            TaskRouterEventType::TaskQueueTimeout => "task-queue.timeout",
            TaskRouterEventType::TaskQueueMoved => "task-queue.moved",
            TaskRouterEventType::WorkflowTargetMatched => "workflow.target-matched",
            TaskRouterEventType::WorkflowEntered => "workflow.entered",
            TaskRouterEventType::WorkflowTimeout => "workflow.timeout",
            TaskRouterEventType::WorkflowSkipped => "workflow.skipped",
            TaskRouterEventType::WorkerCreated => "worker.created",
            TaskRouterEventType::WorkerActivityUpdate => "worker.activity.update",
            TaskRouterEventType::WorkerAttributesUpdate => "worker.attributes.update",
            TaskRouterEventType::WorkerCapacityUpdate => "worker.capacity.update",
            TaskRouterEventType::WorkerChannelAvailabilityUpdate => {
                "worker.channel.availability.update"
            }
            TaskRouterEventType::WorkerDeleted => "worker.deleted",
        }
    }
}

/// A TaskRouter webhook callback.
///
/// Field names match the webhook form keys exactly; everything beyond
/// the type tag is optional because each event type populates a
/// different subset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRouterEvent {
    /// Provider-assigned SID of this event, carried through to output.
    #[serde(rename = "Sid", skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    #[serde(rename = "EventType", default)]
    pub event_type: String,

    #[serde(rename = "AccountSid", skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    #[serde(rename = "WorkspaceSid", skip_serializing_if = "Option::is_none")]
    pub workspace_sid: Option<String>,

    #[serde(rename = "ResourceType", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    #[serde(rename = "ResourceSid", skip_serializing_if = "Option::is_none")]
    pub resource_sid: Option<String>,

    #[serde(rename = "TimestampMs", skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<TimestampMs>,

    /* Task fields */
    #[serde(rename = "TaskSid", skip_serializing_if = "Option::is_none")]
    pub task_sid: Option<String>,

    /// JSON-encoded string; see [`crate::contracts::TaskAttributes`].
    #[serde(rename = "TaskAttributes", skip_serializing_if = "Option::is_none")]
    pub task_attributes: Option<String>,

    /// Seconds since the task was created, as a decimal string.
    #[serde(rename = "TaskAge", skip_serializing_if = "Option::is_none")]
    pub task_age: Option<String>,

    /* Task-queue fields */
    #[serde(rename = "TaskQueueSid", skip_serializing_if = "Option::is_none")]
    pub task_queue_sid: Option<String>,

    #[serde(rename = "TaskQueueName", skip_serializing_if = "Option::is_none")]
    pub task_queue_name: Option<String>,

    /* Worker fields */
    #[serde(rename = "WorkerSid", skip_serializing_if = "Option::is_none")]
    pub worker_sid: Option<String>,

    #[serde(rename = "WorkerName", skip_serializing_if = "Option::is_none")]
    pub worker_name: Option<String>,

    /// JSON-encoded string; see [`crate::contracts::WorkerAttributes`].
    #[serde(rename = "WorkerAttributes", skip_serializing_if = "Option::is_none")]
    pub worker_attributes: Option<String>,

    #[serde(rename = "WorkerActivityName", skip_serializing_if = "Option::is_none")]
    pub worker_activity_name: Option<String>,

    #[serde(
        rename = "WorkerPreviousActivityName",
        skip_serializing_if = "Option::is_none"
    )]
    pub worker_previous_activity_name: Option<String>,
}
