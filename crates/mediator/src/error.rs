//! Error types for the airstrip mediator.
//!
//! Only recoverable conditions live here. A runway-cleared event that does
//! not match an occupied runway is a broken contract and panics instead.

use crate::model::{FlightId, RunwayId};
use patterns_core::CoreError;
use thiserror::Error;

/// Request rejected by the tower state machine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TowerError {
    /// Flight was never registered with the tower
    #[error("Unknown flight: {0}")]
    UnknownFlight(FlightId),

    /// Flight already completed its landing
    #[error("Flight {0} has already landed")]
    AlreadyLanded(FlightId),

    /// Flight is currently landing
    #[error("Flight {flight} is already landing on {runway}")]
    LandingInProgress {
        /// Requesting flight
        flight: FlightId,
        /// Runway it occupies
        runway: RunwayId,
    },
}

/// Errors surfaced to coordinator handle users
#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// The tower rejected the request
    #[error("Request rejected: {0}")]
    Rejected(#[from] TowerError),

    /// The coordinator task has stopped
    #[error("Control tower is no longer running")]
    TowerUnavailable,

    /// Episode configuration is unusable
    #[error("Configuration error: {0}")]
    Config(#[from] CoreError),
}

/// Result type for coordinator operations
pub type CoordinatorResult<T> = Result<T, CoordinatorError>;
