//! Dialer event family: AMD normalization, registry, and handlers.

use teravoz_contracts::{AmdStatus, DialerEvent, DialerEventType, TeravozEvent};

use crate::contracts::{CustomDialerEvent, CustomDialerEventType, TaskAttributes};
use crate::dispatch::{convert, ensure_event_type, Handler};
use crate::error::ConvertResult;
use crate::time::utc_from_millis;

/// Map the provider's raw AMD classification onto the normalized
/// vocabulary. The machine sub-states all collapse into `machine`;
/// anything outside the table (or an absent status) maps to nothing.
pub fn amd_status_from_provider(raw: &str) -> Option<AmdStatus> {
    match raw {
        "human" => Some(AmdStatus::Human),
        "fax" => Some(AmdStatus::Machine),
        "machine_start" => Some(AmdStatus::Machine),
        "machine_end_beep" => Some(AmdStatus::Machine),
        "machine_end_other" => Some(AmdStatus::Machine),
        "machine_end_silence" => Some(AmdStatus::Machine),
        "unknown" => Some(AmdStatus::Notsure),
        _ => None,
    }
}

/// Resolve a dialer callback type tag to its handler.
pub fn registry(event_type: &str) -> Option<Handler<CustomDialerEvent>> {
    match CustomDialerEventType::from_tag(event_type)? {
        CustomDialerEventType::Attempt => Some(attempt),
        CustomDialerEventType::Success => Some(success),
        CustomDialerEventType::Failure => Some(failure),
        CustomDialerEventType::Expired => Some(expired),
        CustomDialerEventType::Exceeded => Some(exceeded),
    }
}

/// Convert one dialer callback into zero or more Teravoz events.
pub fn convert_event(event: &CustomDialerEvent) -> ConvertResult<Vec<TeravozEvent>> {
    convert(registry, &event.event_type, event)
}

/// Read `code` from the optional nested task attributes.
fn dialed_code(
    event: &CustomDialerEvent,
    event_type: &'static str,
) -> ConvertResult<Option<String>> {
    let attributes = TaskAttributes::parse_optional(event.task_attributes.as_deref(), event_type)?;
    Ok(attributes.and_then(|attributes| attributes.code))
}

/// `custom.dialer.attempt` → `dialer.attempt`.
///
/// Posted right after the dialer places a call.
pub fn attempt(event: &CustomDialerEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = CustomDialerEventType::Attempt.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let mut dialer = DialerEvent::new(
        DialerEventType::Attempt,
        utc_from_millis(event.timestamp_ms.as_ref(), event_type)?,
    );
    dialer.number = event.to.clone();
    dialer.code = dialed_code(event, event_type)?;

    Ok(vec![dialer.into()])
}

/// `custom.dialer.success` → `dialer.success`.
///
/// The dialed call was answered and is ready to be bridged to an agent;
/// carries the AMD classification so the consumer can still tell humans
/// from machines.
pub fn success(event: &CustomDialerEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = CustomDialerEventType::Success.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let mut dialer = DialerEvent::new(
        DialerEventType::Success,
        utc_from_millis(event.timestamp_ms.as_ref(), event_type)?,
    );
    dialer.number = event.to.clone();
    dialer.code = dialed_code(event, event_type)?;
    dialer.call_id = event.call_sid.clone();
    dialer.amd_status = event.amd_status.as_deref().and_then(amd_status_from_provider);

    Ok(vec![dialer.into()])
}

/// `custom.dialer.failure` → `dialer.failure`.
///
/// The dialed call did not reach a human; the AMD classification
/// becomes the failure `reason`.
pub fn failure(event: &CustomDialerEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = CustomDialerEventType::Failure.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let mut dialer = DialerEvent::new(
        DialerEventType::Failure,
        utc_from_millis(event.timestamp_ms.as_ref(), event_type)?,
    );
    dialer.number = event.to.clone();
    dialer.call_id = event.call_sid.clone();
    dialer.reason = event.amd_status.as_deref().and_then(amd_status_from_provider);

    Ok(vec![dialer.into()])
}

/// `custom.dialer.expired` → `dialer.expired`.
///
/// The dialer task reached its TTL before completing.
pub fn expired(event: &CustomDialerEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = CustomDialerEventType::Expired.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let mut dialer = DialerEvent::new(
        DialerEventType::Expired,
        utc_from_millis(event.timestamp_ms.as_ref(), event_type)?,
    );
    dialer.code = dialed_code(event, event_type)?;

    Ok(vec![dialer.into()])
}

/// `custom.dialer.exceeded` → `dialer.exceeded`.
///
/// The dialer task ran out of configured retries.
pub fn exceeded(event: &CustomDialerEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = CustomDialerEventType::Exceeded.as_str();
    ensure_event_type(event_type, &event.event_type)?;

    let mut dialer = DialerEvent::new(
        DialerEventType::Exceeded,
        utc_from_millis(event.timestamp_ms.as_ref(), event_type)?,
    );
    dialer.code = dialed_code(event, event_type)?;

    Ok(vec![dialer.into()])
}
