//! Observer pattern: system power events
//!
//! A publisher keeps, for every subscriber, the one event type it cares
//! about. Publishing an event delivers it to exactly the subscribers
//! registered for that type.
//!
//! - [`subscriber`]: subscribers as trait objects, identified by their `Arc`
//! - [`listener`]: subscribers as shared closures, identified by a handle
//!   returned from `subscribe`

#![warn(missing_docs)]

pub mod event;
pub mod listener;
pub mod subscriber;

pub use event::{EventData, SystemEventType};
pub use listener::{Listener, ListenerId, ListenerRegistry, LoggerService, MailerService};
pub use subscriber::{EmailSubscriber, LogSubscriber, Subscriber, SystemEventsManager};
