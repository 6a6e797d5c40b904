//! Storage-event notification channel.
//!
//! Ingestion publishes an object-created notification after writing the
//! handoff object; the analysis worker consumes notifications from the
//! stream. This is the delivery channel for bucket notifications, not a
//! work queue: no retries, no dead-lettering, ack on every terminal
//! outcome.

pub mod channel;
pub mod error;
pub mod event;

pub use channel::{EventChannel, EventsConfig, Notifier};
pub use error::{EventsError, EventsResult};
pub use event::ObjectCreatedEvent;
