use thiserror::Error;

/// Errors raised while converting a provider event.
///
/// Every variant is fatal to the conversion it occurred in; the caller
/// decides how to respond to the webhook sender. Soft cases (unknown
/// type tag, unrecognized activity name, empty queue membership) are
/// not errors and convert to an empty event list instead.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("only events of type '{expected}' can be handled by this handler, got '{actual}'")]
    EventTypeMismatch {
        expected: &'static str,
        actual: String,
    },

    #[error("missing {field} in '{event_type}' event")]
    MissingField {
        field: &'static str,
        event_type: &'static str,
    },

    #[error("malformed {field} in '{event_type}' event: {source}")]
    MalformedAttributes {
        field: &'static str,
        event_type: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid timestamp '{value}'")]
    InvalidTimestamp { value: String },
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
