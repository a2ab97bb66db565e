//! User-input event family: registry and handlers.

use teravoz_contracts::{CallEvent, CallEventType, TeravozEvent};

use crate::contracts::{UserInputEvent, UserInputType};
use crate::dispatch::{convert, ensure_event_type, Handler};
use crate::error::{ConvertError, ConvertResult};
use crate::time::utc_from_millis;

/// Resolve a user-input type tag to its handler.
pub fn registry(input_type: &str) -> Option<Handler<UserInputEvent>> {
    match UserInputType::from_tag(input_type)? {
        UserInputType::NpsProvided => Some(nps_provided),
    }
}

/// Convert one user-input callback into zero or more Teravoz events.
pub fn convert_event(event: &UserInputEvent) -> ConvertResult<Vec<TeravozEvent>> {
    convert(registry, &event.input_type, event)
}

/// `custom.nps-provided` → `call.data-provided`.
///
/// The digits land in both `nps` and `data`: `data` is the generic
/// gathered-input field, and `nps` is kept for consumers that already
/// read the grade from that key.
pub fn nps_provided(event: &UserInputEvent) -> ConvertResult<Vec<TeravozEvent>> {
    let event_type = UserInputType::NpsProvided.as_str();
    ensure_event_type(event_type, &event.input_type)?;

    let call_id = event.call_sid.clone().ok_or(ConvertError::MissingField {
        field: "CallSid",
        event_type,
    })?;

    let mut call = CallEvent::new(
        CallEventType::DataProvided,
        call_id,
        utc_from_millis(event.timestamp_ms.as_ref(), event_type)?,
    );
    call.nps = event.digits.clone();
    call.data = event.digits.clone();

    Ok(vec![call.into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimestampMs;

    fn base_event() -> UserInputEvent {
        UserInputEvent {
            input_type: "custom.nps-provided".to_string(),
            call_sid: Some("CA123".to_string()),
            digits: Some("9".to_string()),
            timestamp_ms: Some(TimestampMs::Text("1700000000000".to_string())),
        }
    }

    #[test]
    fn test_nps_emits_call_data_provided() {
        let events = nps_provided(&base_event()).unwrap();
        assert_eq!(events.len(), 1);

        let TeravozEvent::Call(call) = &events[0] else {
            panic!("expected a call event");
        };
        assert_eq!(call.event_type, CallEventType::DataProvided);
        assert_eq!(call.call_id, "CA123");
        assert_eq!(call.nps.as_deref(), Some("9"));
        assert_eq!(call.data.as_deref(), Some("9"));
    }

    #[test]
    fn test_nps_requires_call_sid() {
        let mut event = base_event();
        event.call_sid = None;
        assert!(matches!(
            nps_provided(&event).unwrap_err(),
            ConvertError::MissingField {
                field: "CallSid",
                ..
            }
        ));
    }

    #[test]
    fn test_nps_rejects_other_input_types() {
        let mut event = base_event();
        event.input_type = "custom.cpf-provided".to_string();
        assert!(matches!(
            nps_provided(&event).unwrap_err(),
            ConvertError::EventTypeMismatch { .. }
        ));
    }

    #[test]
    fn test_convert_event_routes_by_tag() {
        let events = convert_event(&base_event()).unwrap();
        assert_eq!(events[0].event_type(), "call.data-provided");

        let mut unknown = base_event();
        unknown.input_type = "custom.cpf-provided".to_string();
        assert!(convert_event(&unknown).unwrap().is_empty());
    }
}
