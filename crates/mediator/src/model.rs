//! Flight and runway components managed by the control tower

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a runway, assigned in registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RunwayId(pub u32);

impl fmt::Display for RunwayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "runway-{}", self.0)
    }
}

/// Identity of a flight, assigned in registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FlightId(pub u32);

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flight-{}", self.0)
    }
}

/// Occupancy of a runway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunwayState {
    /// Available for the next landing
    Free,
    /// Serving a landing
    Occupied {
        /// Flight currently on the runway
        flight: FlightId,
    },
}

impl RunwayState {
    /// Check if the runway can accept a landing
    pub fn is_free(&self) -> bool {
        matches!(self, RunwayState::Free)
    }
}

/// Landing status of a flight within one episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatus {
    /// Registered, no request issued yet
    Pending,
    /// Cleared to land, simulated landing in progress
    Landing {
        /// Runway assigned to the flight
        runway: RunwayId,
    },
    /// Landing completed
    Landed {
        /// Runway the flight landed on
        runway: RunwayId,
    },
    /// No runway was free when the flight asked
    Denied,
}

impl FlightStatus {
    /// True only once the landing has completed
    pub fn has_landed(&self) -> bool {
        matches!(self, FlightStatus::Landed { .. })
    }

    /// Check if the flight may issue a landing request
    pub fn can_request(&self) -> bool {
        matches!(self, FlightStatus::Pending | FlightStatus::Denied)
    }
}

/// A runway registered with the tower
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runway {
    /// Runway identity
    pub id: RunwayId,
    /// Human-readable designator, e.g. "09L"
    pub designator: String,
    /// Current occupancy
    pub state: RunwayState,
}

impl Runway {
    /// Create a free runway
    pub fn new(id: RunwayId, designator: impl Into<String>) -> Self {
        Self {
            id,
            designator: designator.into(),
            state: RunwayState::Free,
        }
    }
}

/// A flight registered with the tower
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Flight identity
    pub id: FlightId,
    /// Callsign, e.g. "AC101"
    pub callsign: String,
    /// Current landing status
    pub status: FlightStatus,
}

impl Flight {
    /// Create a pending flight
    pub fn new(id: FlightId, callsign: impl Into<String>) -> Self {
        Self {
            id,
            callsign: callsign.into(),
            status: FlightStatus::Pending,
        }
    }

    /// Check if the flight has landed
    pub fn has_landed(&self) -> bool {
        self.status.has_landed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_landed_counts_as_landed() {
        let runway = RunwayId(1);
        assert!(!FlightStatus::Pending.has_landed());
        assert!(!FlightStatus::Landing { runway }.has_landed());
        assert!(!FlightStatus::Denied.has_landed());
        assert!(FlightStatus::Landed { runway }.has_landed());
    }

    #[test]
    fn test_request_allowed_states() {
        let runway = RunwayId(1);
        assert!(FlightStatus::Pending.can_request());
        assert!(FlightStatus::Denied.can_request());
        assert!(!FlightStatus::Landing { runway }.can_request());
        assert!(!FlightStatus::Landed { runway }.can_request());
    }

    #[test]
    fn test_new_components_start_idle() {
        let runway = Runway::new(RunwayId(1), "09L");
        let flight = Flight::new(FlightId(7), "AC107");

        assert!(runway.state.is_free());
        assert_eq!(flight.status, FlightStatus::Pending);
        assert!(!flight.has_landed());
        assert_eq!(flight.id.to_string(), "flight-7");
    }
}
