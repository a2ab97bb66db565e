//! Inbound provider contracts.
//!
//! These types match the webhook JSON the provider sends EXACTLY
//! (PascalCase keys, case-sensitive). The nested `TaskAttributes` and
//! `WorkerAttributes` fields arrive as JSON-encoded strings and are
//! parsed once at the handler boundary into the typed sub-schemas in
//! [`attributes`].

pub mod attributes;
pub mod dialer;
pub mod gather_input;
pub mod task_router;

pub use attributes::{TaskAttributes, WorkerAttributes};
pub use dialer::{CustomDialerEvent, CustomDialerEventType};
pub use gather_input::{UserInputEvent, UserInputType};
pub use task_router::{TaskRouterEvent, TaskRouterEventType};
