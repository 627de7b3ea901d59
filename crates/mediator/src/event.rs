//! Messages exchanged between the tower and its components

use crate::model::{FlightId, RunwayId};
use serde::{Deserialize, Serialize};

/// Event delivered to the control tower's single entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerEvent {
    /// A flight asks for a runway
    LandingRequested {
        /// Requesting flight
        flight: FlightId,
    },
    /// A runway finished its simulated landing
    RunwayCleared {
        /// Runway that became free
        runway: RunwayId,
    },
}

/// Decision returned by the control tower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerReply {
    /// Flight was assigned a runway, which is now occupied
    Cleared {
        /// Requesting flight
        flight: FlightId,
        /// Assigned runway
        runway: RunwayId,
    },
    /// No runway was free
    Denied {
        /// Requesting flight
        flight: FlightId,
    },
    /// A landing completed and was tallied
    Landed {
        /// Flight that landed
        flight: FlightId,
        /// Runway that is free again
        runway: RunwayId,
        /// Completed landings on this runway, including this one
        total_landings: u32,
    },
}

/// Final result of one landing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingOutcome {
    /// Flight landed on the runway
    Landed {
        /// Runway used
        runway: RunwayId,
    },
    /// Flight was turned away
    Denied,
}

impl LandingOutcome {
    /// Check if the flight landed
    pub fn has_landed(&self) -> bool {
        matches!(self, LandingOutcome::Landed { .. })
    }
}
