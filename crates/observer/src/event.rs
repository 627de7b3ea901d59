//! Power events published by the system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of power event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemEventType {
    /// System powered on
    SystemOn,
    /// System powered off
    SystemOff,
    /// System suspended
    SystemSuspend,
}

impl fmt::Display for SystemEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SystemEventType::SystemOn => "SYSTEM_ON",
            SystemEventType::SystemOff => "SYSTEM_OFF",
            SystemEventType::SystemSuspend => "SYSTEM_SUSPEND",
        };
        f.write_str(name)
    }
}

/// Payload delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    /// Human readable description
    pub message: String,
    /// Kind of event
    pub event_type: SystemEventType,
}

impl EventData {
    /// Create a new payload
    pub fn new(message: impl Into<String>, event_type: SystemEventType) -> Self {
        Self {
            message: message.into(),
            event_type,
        }
    }
}
