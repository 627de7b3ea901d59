//! Subscribers as shared closures
//!
//! Closures have no identity of their own, so the registry hands out a
//! [`ListenerId`] on subscription and unsubscribes by that handle.
//!
//! ```
//! use patterns_observer::{ListenerRegistry, MailerService, SystemEventType};
//! use std::sync::Arc;
//!
//! let mailer = Arc::new(MailerService::new());
//! let mut registry = ListenerRegistry::new();
//! let id = registry.subscribe(MailerService::listener(&mailer), SystemEventType::SystemOn);
//!
//! assert_eq!(registry.notify(SystemEventType::SystemOn, "booted"), 1);
//! assert_eq!(mailer.sent().len(), 1);
//! assert!(registry.unsubscribe(id));
//! ```

use crate::event::{EventData, SystemEventType};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Callback invoked with each delivered event
pub type Listener = Arc<dyn Fn(&EventData) + Send + Sync>;

/// Handle identifying one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Publisher keeping closures keyed by subscription handle
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: BTreeMap<ListenerId, (Listener, SystemEventType)>,
    next_id: u64,
}

impl ListenerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `event_type` and return its handle
    pub fn subscribe(&mut self, listener: Listener, event_type: SystemEventType) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.insert(id, (listener, event_type));
        debug!(%id, event = %event_type, "Listener subscribed");
        id
    }

    /// Remove a subscription. Returns false when the handle is unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Invoke every listener registered for `event_type`, in subscription
    /// order, and return how many were invoked.
    pub fn notify(&self, event_type: SystemEventType, message: &str) -> usize {
        let data = EventData::new(message, event_type);
        let mut delivered = 0;
        for (listener, _) in self
            .listeners
            .values()
            .filter(|(_, registered)| *registered == event_type)
        {
            listener(&data);
            delivered += 1;
        }
        delivered
    }

    /// Number of subscriptions
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// No subscriptions
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Service whose `log_event` fits the [`Listener`] signature
#[derive(Debug, Default)]
pub struct LoggerService {
    logged: AtomicUsize,
}

impl LoggerService {
    /// Create a new logger service
    pub fn new() -> Self {
        Self::default()
    }

    /// Log one event
    pub fn log_event(&self, data: &EventData) {
        self.logged.fetch_add(1, Ordering::Relaxed);
        info!(event = %data.event_type, description = %data.message, "Logging the event");
    }

    /// Events logged so far
    pub fn logged(&self) -> usize {
        self.logged.load(Ordering::Relaxed)
    }

    /// Wrap `log_event` of a shared service as a listener
    pub fn listener(service: &Arc<Self>) -> Listener {
        let service = Arc::clone(service);
        Arc::new(move |data: &EventData| service.log_event(data))
    }
}

/// Service whose `send_email` fits the [`Listener`] signature
#[derive(Debug, Default)]
pub struct MailerService {
    sent: Mutex<Vec<EventData>>,
}

impl MailerService {
    /// Create a mailer with nothing sent
    pub fn new() -> Self {
        Self::default()
    }

    /// Send a notification mail for one event
    pub fn send_email(&self, data: &EventData) {
        info!(event = %data.event_type, description = %data.message, "Sending email");
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(data.clone());
        }
    }

    /// Events mailed so far, oldest first
    pub fn sent(&self) -> Vec<EventData> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    /// Wrap `send_email` of a shared service as a listener
    pub fn listener(service: &Arc<Self>) -> Listener {
        let service = Arc::clone(service);
        Arc::new(move |data: &EventData| service.send_email(data))
    }
}
