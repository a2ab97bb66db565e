//! # Event Converter
//!
//! Translates webhook callbacks from the task-routing platform (and its
//! companion outbound dialer) into the normalized Teravoz event
//! vocabulary defined in [`teravoz_contracts`].
//!
//! ## Design
//!
//! The engine is a pure, synchronous transformation: one inbound
//! provider event in, an ordered list of zero or more domain events
//! out. There is no I/O, no shared state, and no suspension point, so
//! callers may run conversions concurrently without coordination.
//!
//! Each event family (TaskRouter, dialer, user input) exposes a
//! `convert_event` entry point built on the same pieces:
//!
//! - a registry resolving the raw type tag through a closed type
//!   enumeration to a handler,
//! - the shared [`dispatch::convert`] routing function, which turns
//!   unknown tags into an empty result instead of an error,
//! - handlers that parse the nested JSON attribute payloads once, at
//!   the boundary, into typed sub-schemas.
//!
//! Fatal conditions (wrong type tag for a directly-invoked handler,
//! missing or malformed required payloads) surface as [`ConvertError`];
//! the caller owns the webhook response policy.
//!
//! ## Example
//!
//! ```
//! use event_converter::contracts::TaskRouterEvent;
//!
//! # fn main() -> Result<(), event_converter::ConvertError> {
//! let event: TaskRouterEvent = serde_json::from_str(
//!     r#"{
//!         "EventType": "task.created",
//!         "TimestampMs": "1700000000000",
//!         "TaskAttributes": "{\"call_sid\":\"CA123\",\"direction\":\"inbound\"}"
//!     }"#,
//! )
//! .expect("webhook JSON");
//!
//! let events = event_converter::task_router::convert_event(&event)?;
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].event_type(), "call.new");
//! # Ok(())
//! # }
//! ```

pub mod contracts;
pub mod dialer;
pub mod dispatch;
pub mod error;
pub mod gather_input;
pub mod task_router;
pub mod time;

pub use dispatch::{convert, Handler, Registry};
pub use error::{ConvertError, ConvertResult};
pub use time::TimestampMs;
