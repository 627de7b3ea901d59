//! Subscribers as trait objects

use crate::event::{EventData, SystemEventType};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Receives events from a [`SystemEventsManager`]
pub trait Subscriber: Send + Sync {
    /// Handle one delivered event
    fn update(&self, data: &EventData);
}

/// Writes every delivered event to the log
#[derive(Debug, Default)]
pub struct LogSubscriber;

impl LogSubscriber {
    /// Create a new log subscriber
    pub fn new() -> Self {
        Self
    }
}

impl Subscriber for LogSubscriber {
    fn update(&self, data: &EventData) {
        info!(event = %data.event_type, message = %data.message, "Logging the event");
    }
}

/// Composes a notification mail for every delivered event
#[derive(Debug, Default)]
pub struct EmailSubscriber {
    outbox: Mutex<Vec<String>>,
}

impl EmailSubscriber {
    /// Create a subscriber with an empty outbox
    pub fn new() -> Self {
        Self::default()
    }

    /// Mails composed so far, oldest first
    pub fn outbox(&self) -> Vec<String> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }
}

impl Subscriber for EmailSubscriber {
    fn update(&self, data: &EventData) {
        let mail = format!(
            "Sending email to inform the event {} with message {}",
            data.event_type, data.message
        );
        debug!(event = %data.event_type, "Composed notification mail");
        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(mail);
        }
    }
}

fn same_subscriber(a: &Arc<dyn Subscriber>, b: &Arc<dyn Subscriber>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

/// Publisher of system power events
///
/// Each subscriber is registered for exactly one event type. Subscribing
/// the same `Arc` again replaces its event type rather than adding a second
/// registration.
#[derive(Default)]
pub struct SystemEventsManager {
    subscribers: Vec<(Arc<dyn Subscriber>, SystemEventType)>,
}

impl SystemEventsManager {
    /// Create a publisher without subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `subscriber` for `event_type`
    pub fn subscribe(&mut self, subscriber: Arc<dyn Subscriber>, event_type: SystemEventType) -> &mut Self {
        match self
            .subscribers
            .iter_mut()
            .find(|(existing, _)| same_subscriber(existing, &subscriber))
        {
            Some((_, registered)) => *registered = event_type,
            None => self.subscribers.push((subscriber, event_type)),
        }
        self
    }

    /// Remove `subscriber`; unknown subscribers are ignored
    pub fn unsubscribe(&mut self, subscriber: &Arc<dyn Subscriber>) -> &mut Self {
        self.subscribers
            .retain(|(existing, _)| !same_subscriber(existing, subscriber));
        self
    }

    /// Deliver an event to every subscriber registered for its type.
    ///
    /// Returns the number of subscribers notified.
    pub fn notify(&self, event_type: SystemEventType, message: &str) -> usize {
        let data = EventData::new(message, event_type);
        let mut delivered = 0;
        for (subscriber, _) in self
            .subscribers
            .iter()
            .filter(|(_, registered)| *registered == event_type)
        {
            subscriber.update(&data);
            delivered += 1;
        }
        debug!(event = %event_type, delivered, "Event published");
        delivered
    }

    /// Event type `subscriber` is registered for, if any
    pub fn event_type_of(&self, subscriber: &Arc<dyn Subscriber>) -> Option<SystemEventType> {
        self.subscribers
            .iter()
            .find(|(existing, _)| same_subscriber(existing, subscriber))
            .map(|(_, event_type)| *event_type)
    }

    /// Number of registered subscribers
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// No subscribers registered
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
