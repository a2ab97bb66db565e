use teravoz_contracts::TeravozEvent;

use crate::error::ConvertResult;

/// A per-domain handler: reshapes one inbound provider event into zero
/// or more Teravoz events, in the order the consumer expects them.
pub type Handler<E> = fn(&E) -> ConvertResult<Vec<TeravozEvent>>;

/// A per-family registry: resolves an event-type tag to its handler,
/// or `None` when the tag has no conversion.
pub type Registry<E> = fn(&str) -> Option<Handler<E>>;

/// Route an inbound event to the handler registered for its type tag.
///
/// An unknown (or absent, passed as empty) type tag is not an error:
/// the event simply converts to no Teravoz events. This function has no
/// side effects; it neither logs nor mutates its inputs.
pub fn convert<E>(
    registry: Registry<E>,
    event_type: &str,
    event: &E,
) -> ConvertResult<Vec<TeravozEvent>> {
    match registry(event_type) {
        Some(handler) => handler(event),
        None => Ok(Vec::new()),
    }
}

/// Guard used by every handler so it stays safe to call outside the
/// dispatcher (the dispatcher itself only routes matching tags).
pub(crate) fn ensure_event_type(expected: &'static str, actual: &str) -> ConvertResult<()> {
    if actual != expected {
        return Err(crate::error::ConvertError::EventTypeMismatch {
            expected,
            actual: actual.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use chrono::TimeZone;
    use teravoz_contracts::{CallEvent, CallEventType};

    struct Raw;

    fn ok_handler(_event: &Raw) -> ConvertResult<Vec<TeravozEvent>> {
        let event = CallEvent::new(
            CallEventType::New,
            "CA1".to_string(),
            chrono::Utc.timestamp_millis_opt(0).unwrap(),
        );
        Ok(vec![event.into()])
    }

    fn failing_handler(_event: &Raw) -> ConvertResult<Vec<TeravozEvent>> {
        Err(ConvertError::MissingField {
            field: "TaskAttributes",
            event_type: "task.created",
        })
    }

    fn registry(event_type: &str) -> Option<Handler<Raw>> {
        match event_type {
            "known.event" => Some(ok_handler),
            "broken.event" => Some(failing_handler),
            _ => None,
        }
    }

    #[test]
    fn test_dispatches_to_registered_handler() {
        let events = convert(registry, "known.event", &Raw).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "call.new");
    }

    #[test]
    fn test_unknown_type_yields_empty_list() {
        let events = convert(registry, "nobody.home", &Raw).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_absent_type_yields_empty_list() {
        let events = convert(registry, "", &Raw).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_handler_errors_propagate() {
        let err = convert(registry, "broken.event", &Raw).unwrap_err();
        assert!(matches!(err, ConvertError::MissingField { .. }));
    }
}
