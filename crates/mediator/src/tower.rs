//! Airstrip control tower state machine
//!
//! The tower is the mediator between flights and runways: flights never
//! touch runway state and runways never touch flight state. Every change
//! goes through [`AirstripControlTower::notify`], which takes a tagged
//! [`TowerEvent`] and returns the tower's decision.
//!
//! The tower itself is synchronous and owns no timers. The asynchronous
//! [`crate::coordinator`] wraps one tower, serializes requests into it and
//! feeds back `RunwayCleared` once a simulated landing has elapsed.

use crate::error::TowerError;
use crate::event::{TowerEvent, TowerReply};
use crate::model::{Flight, FlightId, FlightStatus, Runway, RunwayId, RunwayState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Point-in-time copy of the tower registries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerSnapshot {
    /// Runways in scan order
    pub runways: Vec<Runway>,
    /// Flights in registration order
    pub flights: Vec<Flight>,
    /// Completed landings per runway; runways without landings are absent
    pub successful_landings: BTreeMap<RunwayId, u32>,
}

impl TowerSnapshot {
    /// Look up a flight by identity
    pub fn flight(&self, flight: FlightId) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == flight)
    }

    /// Look up a runway by identity
    pub fn runway(&self, runway: RunwayId) -> Option<&Runway> {
        self.runways.iter().find(|r| r.id == runway)
    }

    /// Check if a flight has landed; unknown flights have not
    pub fn has_landed(&self, flight: FlightId) -> bool {
        self.flight(flight).map(Flight::has_landed).unwrap_or(false)
    }

    /// Number of flights that completed a landing
    pub fn landed_count(&self) -> usize {
        self.flights.iter().filter(|f| f.has_landed()).count()
    }

    /// Sum of all runway landing counters
    pub fn total_landings(&self) -> u32 {
        self.successful_landings.values().sum()
    }

    /// Landing counters keyed by runway designator
    pub fn landings_by_designator(&self) -> BTreeMap<String, u32> {
        self.successful_landings
            .iter()
            .filter_map(|(id, count)| {
                self.runway(*id)
                    .map(|runway| (runway.designator.clone(), *count))
            })
            .collect()
    }
}

/// Mediator that arbitrates runways between flights
#[derive(Debug, Clone, Default)]
pub struct AirstripControlTower {
    /// Runways in registration (and scan) order
    runways: Vec<Runway>,
    /// Registered flights
    flights: BTreeMap<FlightId, Flight>,
    /// Completed landings per runway
    successful_landings: BTreeMap<RunwayId, u32>,
}

impl AirstripControlTower {
    /// Create an empty tower
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a runway; runways are scanned in registration order
    pub fn add_runway(&mut self, designator: impl Into<String>) -> RunwayId {
        let id = RunwayId(self.runways.len() as u32 + 1);
        let runway = Runway::new(id, designator);
        debug!(runway = %id, designator = %runway.designator, "Runway registered");
        self.runways.push(runway);
        id
    }

    /// Register a flight in the `Pending` state
    pub fn add_flight(&mut self, callsign: impl Into<String>) -> FlightId {
        let id = FlightId(self.flights.len() as u32 + 1);
        let flight = Flight::new(id, callsign);
        debug!(flight = %id, callsign = %flight.callsign, "Flight registered");
        self.flights.insert(id, flight);
        id
    }

    /// Single entry point for every component event.
    ///
    /// `LandingRequested` assigns the first free runway in scan order, or
    /// denies the flight when none is free. `RunwayCleared` frees the runway,
    /// tallies the landing and marks the occupying flight as landed.
    ///
    /// # Panics
    ///
    /// `RunwayCleared` for an unregistered runway, or for a runway that is
    /// not occupied, breaks the tower's contract and panics.
    pub fn notify(&mut self, event: TowerEvent) -> Result<TowerReply, TowerError> {
        match event {
            TowerEvent::LandingRequested { flight } => self.react_on_flight(flight),
            TowerEvent::RunwayCleared { runway } => Ok(self.react_on_runway(runway)),
        }
    }

    fn react_on_flight(&mut self, flight_id: FlightId) -> Result<TowerReply, TowerError> {
        let flight = self
            .flights
            .get_mut(&flight_id)
            .ok_or(TowerError::UnknownFlight(flight_id))?;

        if !flight.status.can_request() {
            return Err(match flight.status {
                FlightStatus::Landing { runway } => TowerError::LandingInProgress {
                    flight: flight_id,
                    runway,
                },
                _ => TowerError::AlreadyLanded(flight_id),
            });
        }

        match self.runways.iter_mut().find(|r| r.state.is_free()) {
            Some(runway) => {
                runway.state = RunwayState::Occupied { flight: flight_id };
                flight.status = FlightStatus::Landing { runway: runway.id };
                info!(
                    flight = %flight_id,
                    callsign = %flight.callsign,
                    runway = %runway.designator,
                    "Cleared to land"
                );
                Ok(TowerReply::Cleared {
                    flight: flight_id,
                    runway: runway.id,
                })
            }
            None => {
                flight.status = FlightStatus::Denied;
                info!(flight = %flight_id, callsign = %flight.callsign, "No free runway, landing denied");
                Ok(TowerReply::Denied { flight: flight_id })
            }
        }
    }

    fn react_on_runway(&mut self, runway_id: RunwayId) -> TowerReply {
        let Some(runway) = self.runways.iter_mut().find(|r| r.id == runway_id) else {
            panic!("RunwayCleared received for unregistered {}", runway_id);
        };
        let RunwayState::Occupied { flight: flight_id } = runway.state else {
            panic!("RunwayCleared received for {} which is not occupied", runway_id);
        };

        let Some(flight) = self.flights.get_mut(&flight_id) else {
            panic!("{} is occupied by unregistered {}", runway_id, flight_id);
        };
        if flight.status != (FlightStatus::Landing { runway: runway_id }) {
            panic!(
                "{} occupies {} but its status is {:?}",
                flight_id, runway_id, flight.status
            );
        }

        runway.state = RunwayState::Free;
        flight.status = FlightStatus::Landed { runway: runway_id };

        let counter = self.successful_landings.entry(runway_id).or_insert(0);
        *counter += 1;

        info!(
            flight = %flight_id,
            callsign = %flight.callsign,
            runway = %runway.designator,
            total_landings = *counter,
            "Landing completed"
        );

        TowerReply::Landed {
            flight: flight_id,
            runway: runway_id,
            total_landings: *counter,
        }
    }

    /// Get a flight's status
    pub fn flight_status(&self, flight: FlightId) -> Option<FlightStatus> {
        self.flights.get(&flight).map(|f| f.status)
    }

    /// Get a runway's occupancy
    pub fn runway_state(&self, runway: RunwayId) -> Option<RunwayState> {
        self.runways.iter().find(|r| r.id == runway).map(|r| r.state)
    }

    /// Completed landings per runway
    pub fn successful_landings(&self) -> &BTreeMap<RunwayId, u32> {
        &self.successful_landings
    }

    /// Registered runway identities in scan order
    pub fn runway_ids(&self) -> Vec<RunwayId> {
        self.runways.iter().map(|r| r.id).collect()
    }

    /// Registered flight identities in registration order
    pub fn flight_ids(&self) -> Vec<FlightId> {
        self.flights.keys().copied().collect()
    }

    /// Number of runways currently serving a landing
    pub fn occupied_runways(&self) -> usize {
        self.runways.iter().filter(|r| !r.state.is_free()).count()
    }

    /// Copy the registries
    pub fn snapshot(&self) -> TowerSnapshot {
        TowerSnapshot {
            runways: self.runways.clone(),
            flights: self.flights.values().cloned().collect(),
            successful_landings: self.successful_landings.clone(),
        }
    }
}
